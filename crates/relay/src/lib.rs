//! Client for the hosted email-relay service behind the contact form.
//!
//! The relay is an external HTTP API: the site never talks SMTP itself, it
//! hands the submitted fields to the service identified by the
//! [`RelayConfig`] tokens and surfaces the upstream status code to the
//! caller. The [`Relay`] trait is the seam the contact workflow depends on,
//! so tests can substitute a deterministic stand-in.

mod client;
mod config;

pub use client::EmailJs;
pub use config::RelayConfig;

use async_trait::async_trait;
use serde::Serialize;

/// The only upstream status treated as a successful delivery.
pub const SUCCESS_STATUS: u16 = 200;

/// The four form fields carried by one send call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Outcome of a send call that reached the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendResponse {
    pub status: u16,
}

impl SendResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Server(String),
}

/// Capability contract of the external send client.
#[async_trait]
pub trait Relay: Send + Sync {
    /// One-time client initialization with the account public key.
    fn init(&self, public_key: &str);

    /// Relay one form submission. A non-success upstream status is NOT an
    /// error; it comes back in [`SendResponse::status`] for the caller to
    /// judge. `Err` means the call never produced a status at all.
    async fn send_form(
        &self,
        service_id: &str,
        template_id: &str,
        form: &SendForm,
        public_key: &str,
    ) -> Result<SendResponse, RelayError>;
}
