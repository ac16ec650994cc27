use serde::Deserialize;

use strato_core::error::{Result, StratoError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Application code, part of every endpoint URL.
    pub app_code: String,

    /// Unique application identifier issued by the backend.
    pub app_uniq: String,

    /// Hash of the application password. Lower-cased before use.
    pub app_secret: String,

    /// Caller-supplied unique device identifier.
    pub device_id: String,

    #[serde(default = "default_api_host")]
    pub api_host: String,

    #[serde(default = "default_use_tls")]
    pub use_tls: bool,

    #[serde(default = "default_log_category")]
    pub default_log_category: String,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("app_code", &self.app_code),
            ("app_uniq", &self.app_uniq),
            ("app_secret", &self.app_secret),
            ("device_id", &self.device_id),
            ("api_host", &self.api_host),
        ] {
            if value.is_empty() {
                return Err(StratoError::BadRequest(format!(
                    "{name} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Scheme + host, without trailing slash.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{scheme}://{}", self.api_host)
    }
}

fn default_api_host() -> String {
    "api.strato.dev".into()
}
fn default_use_tls() -> bool {
    true
}
fn default_log_category() -> String {
    "DEFAULT".into()
}
