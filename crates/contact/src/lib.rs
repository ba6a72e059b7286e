//! Contact-form submission workflow.
//!
//! Owns the field state, the configuration readiness gate and the
//! submission lifecycle behind the contact page. Nothing here renders or
//! persists anything; the only side effect is one awaited call into the
//! [`folio_relay::Relay`] client, and every outcome degrades to a
//! [`SubmissionStatus`] message.

mod form;
mod status;
mod submission;

pub use form::ContactForm;
pub use status::{
    REQUIRED_FIELDS_MESSAGE, SENT_MESSAGE, SubmissionStatus, not_configured_message,
    send_failed_message,
};
pub use submission::{ContactSubmission, Field};
