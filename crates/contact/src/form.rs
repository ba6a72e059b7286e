use std::sync::Arc;

use folio_relay::{Relay, RelayConfig};
use tracing::{error, warn};
use validator::Validate;

use crate::{
    ContactSubmission, Field, REQUIRED_FIELDS_MESSAGE, SENT_MESSAGE, SubmissionStatus,
    not_configured_message, send_failed_message,
};

/// State machine behind the contact page: field state, the configuration
/// readiness gate and the submission lifecycle.
///
/// Each instance owns its submission and status exclusively. One send is
/// in flight at most; the rendered submit control stays disabled while
/// `sending` is set.
pub struct ContactForm {
    relay: Arc<dyn Relay>,
    config: RelayConfig,
    contact_address: String,
    submission: ContactSubmission,
    status: SubmissionStatus,
    ready: bool,
    sending: bool,
}

impl ContactForm {
    pub fn new(
        relay: Arc<dyn Relay>,
        config: RelayConfig,
        contact_address: impl Into<String>,
    ) -> Self {
        Self {
            relay,
            config,
            contact_address: contact_address.into(),
            submission: ContactSubmission::default(),
            status: SubmissionStatus::Idle,
            ready: false,
            sending: false,
        }
    }

    /// Derive the readiness gate from the relay credentials and run the
    /// client's one-time initialization. Called once when the form mounts,
    /// before any user interaction.
    pub fn initialize_service(&mut self) {
        if self.config.is_complete() {
            self.ready = true;
            self.relay.init(&self.config.public_key);
        } else {
            self.ready = false;
            warn!("contact relay credentials missing, form disabled");
            self.status = SubmissionStatus::Error(not_configured_message(&self.contact_address));
        }
    }

    /// Replace exactly one field of the current submission. No validation
    /// happens here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.submission.set(field, value);
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Run one validation-and-send pass. Every outcome lands in
    /// [`ContactForm::status`]; nothing is propagated to the caller.
    ///
    /// Preconditions are checked in strict order and short-circuit without
    /// touching the relay: readiness gate, required fields, then a
    /// re-check that the credential triple is still complete.
    pub async fn submit(&mut self) {
        if !self.ready {
            self.status = SubmissionStatus::Error(not_configured_message(&self.contact_address));
            return;
        }

        if self.submission.validate().is_err() {
            self.status = SubmissionStatus::Error(REQUIRED_FIELDS_MESSAGE.to_string());
            return;
        }

        if !self.config.is_complete() {
            self.status = SubmissionStatus::Error(not_configured_message(&self.contact_address));
            return;
        }

        self.sending = true;
        self.status = SubmissionStatus::Idle;

        let result = self
            .relay
            .send_form(
                &self.config.service_id,
                &self.config.template_id,
                &self.submission.as_send_form(),
                &self.config.public_key,
            )
            .await;

        match result {
            Ok(resp) if resp.is_success() => {
                self.status = SubmissionStatus::Success(SENT_MESSAGE.to_string());
                self.submission.reset();
            }
            Ok(resp) => {
                error!(status = resp.status, "contact relay rejected the message");
                self.status = SubmissionStatus::Error(send_failed_message(&self.contact_address));
            }
            Err(err) => {
                error!(error = %err, "contact relay call failed");
                self.status = SubmissionStatus::Error(send_failed_message(&self.contact_address));
            }
        }

        self.sending = false;
    }
}
