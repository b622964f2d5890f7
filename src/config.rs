use serde::Deserialize;
use std::fs;

/// Backend endpoints and transport options, injected into the app at
/// startup. Compiled-in defaults match the hosted deployment; a TOML file
/// can override individual fields per environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub validate_endpoint: String,
    pub send_endpoint: String,
    /// The validation backend is session-based and expects cookies; the
    /// send backend is anonymous.
    pub credentialed_validation: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            validate_endpoint: "http://localhost:5000/validate-emails".to_string(),
            send_endpoint: "https://bulk-email-sender-backend.vercel.app/send-emails".to_string(),
            credentialed_validation: true,
        }
    }
}

impl BackendConfig {
    /// Reads the config file named by `BULKMAILER_CONFIG` (default
    /// `bulkmailer.toml`). A missing file silently falls back to defaults;
    /// a malformed one is logged and ignored.
    pub fn load() -> Self {
        let path =
            std::env::var("BULKMAILER_CONFIG").unwrap_or_else(|_| "bulkmailer.toml".to_string());
        match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => {
                    log::info!("Loaded backend config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed config {}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_deployed_backends() {
        let config = BackendConfig::default();
        assert_eq!(config.validate_endpoint, "http://localhost:5000/validate-emails");
        assert_eq!(
            config.send_endpoint,
            "https://bulk-email-sender-backend.vercel.app/send-emails"
        );
        assert!(config.credentialed_validation);
    }

    #[test]
    fn toml_overrides_only_named_fields() {
        let config: BackendConfig =
            toml::from_str("validate_endpoint = \"http://staging:5000/validate-emails\"").unwrap();
        assert_eq!(config.validate_endpoint, "http://staging:5000/validate-emails");
        assert_eq!(
            config.send_endpoint,
            "https://bulk-email-sender-backend.vercel.app/send-emails"
        );
    }
}
