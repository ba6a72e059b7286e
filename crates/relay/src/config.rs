use serde::Deserialize;

/// Credentials for the email-relay account: a service identifier, a
/// template identifier and a public key. All three are opaque tokens
/// consumed only by the send client.
///
/// Every token defaults to empty so a deployment without relay
/// credentials still loads; the contact form derives its readiness gate
/// from [`RelayConfig::is_complete`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct RelayConfig {
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
}

impl RelayConfig {
    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}
