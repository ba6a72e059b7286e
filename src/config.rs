use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_relay::RelayConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Address shown on the contact page and named by the fallback
    /// messages when the relay is unavailable.
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_address: default_contact_address(),
        }
    }
}

fn default_contact_address() -> String {
    "contact@folio.localhost".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (FOLIO__RELAY__SERVICE_ID, etc.)
        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the relay service's conventional variable names
        if let Ok(service_id) = env::var("EMAILJS_SERVICE_ID") {
            builder = builder.set_override("relay.service_id", service_id)?;
        }
        if let Ok(template_id) = env::var("EMAILJS_TEMPLATE_ID") {
            builder = builder.set_override("relay.template_id", template_id)?;
        }
        if let Ok(public_key) = env::var("EMAILJS_PUBLIC_KEY") {
            builder = builder.set_override("relay.public_key", public_key)?;
        }
        if let Ok(contact_address) = env::var("CONTACT_ADDRESS") {
            builder = builder.set_override("site.contact_address", contact_address)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// An incomplete relay section is deliberately not rejected here: the
    /// contact form handles that at runtime by rendering disabled.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.site.contact_address.is_empty() {
            return Err("Site contact_address must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            site: SiteConfig::default(),
            relay: RelayConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_contact_address() {
        let mut config = valid_config();
        config.site.contact_address.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_incomplete_relay() {
        let config = valid_config();
        assert!(!config.relay.is_complete());
        assert!(config.validate().is_ok());
    }
}
