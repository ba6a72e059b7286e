use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::json;
use tracing::debug;

use crate::{Relay, RelayError, SendForm, SendResponse};

const DEFAULT_API_BASE: &str = "https://api.emailjs.com";

/// HTTP client for the EmailJS REST API.
pub struct EmailJs {
    http: HttpClient,
    api_base: String,
    public_key: OnceLock<String>,
}

impl EmailJs {
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            public_key: OnceLock::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1.0/email/send", self.api_base)
    }
}

impl Default for EmailJs {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Relay for EmailJs {
    fn init(&self, public_key: &str) {
        if self.public_key.set(public_key.to_owned()).is_ok() {
            debug!(api_base = %self.api_base, "email relay client initialized");
        }
    }

    async fn send_form(
        &self,
        service_id: &str,
        template_id: &str,
        form: &SendForm,
        public_key: &str,
    ) -> Result<SendResponse, RelayError> {
        let body = json!({
            "service_id": service_id,
            "template_id": template_id,
            "user_id": public_key,
            "template_params": form,
        });

        let resp = self.http.post(self.endpoint()).json(&body).send().await?;

        Ok(SendResponse {
            status: resp.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_default_base() {
        let client = EmailJs::new();
        assert_eq!(client.endpoint(), "https://api.emailjs.com/api/v1.0/email/send");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = EmailJs::with_api_base("http://localhost:8080/");
        assert_eq!(client.endpoint(), "http://localhost:8080/api/v1.0/email/send");
    }

    #[test]
    fn test_init_keeps_first_key() {
        let client = EmailJs::new();
        client.init("pk_first");
        client.init("pk_second");
        assert_eq!(client.public_key.get().map(String::as_str), Some("pk_first"));
    }
}
