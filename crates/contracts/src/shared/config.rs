use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub check_timeout_ms: u32,
    pub submit_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormConfig {
    pub max_attachment_bytes: u64,
    /// How long the "form has errors" banner stays up
    pub error_banner_ms: u32,
    /// Pause before redirecting to the tracking screen when a record exists
    pub redirect_delay_ms: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://sehr-wdd.punjab.gov.pk"
check_timeout_ms = 10000
submit_timeout_ms = 30000

[form]
max_attachment_bytes = 2097152
error_banner_ms = 3000
redirect_delay_ms = 1500
"#;

impl ClientConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("invalid client config")
    }

    /// Parse an override if one was served, otherwise the embedded default.
    ///
    /// A broken override is logged and ignored.
    pub fn load(override_toml: Option<&str>) -> anyhow::Result<Self> {
        if let Some(contents) = override_toml {
            match Self::from_toml_str(contents) {
                Ok(config) => {
                    log::info!("Loaded client config override");
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring client config override: {:#}", e),
            }
        }
        log::info!("Using default embedded configuration");
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// `base_url` joined with an absolute API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://sehr-wdd.punjab.gov.pk".to_string(),
                check_timeout_ms: 10_000,
                submit_timeout_ms: 30_000,
            },
            form: FormConfig {
                max_attachment_bytes: super::attachment::DEFAULT_MAX_ATTACHMENT_BYTES,
                error_banner_ms: 3_000,
                redirect_delay_ms: 1_500,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ClientConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.form.max_attachment_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn test_override_wins() {
        let custom = r#"
[api]
base_url = "http://localhost:8000/"
check_timeout_ms = 500
submit_timeout_ms = 1000

[form]
max_attachment_bytes = 1024
error_banner_ms = 100
redirect_delay_ms = 0
"#;
        let config = ClientConfig::load(Some(custom)).unwrap();
        assert_eq!(config.api.check_timeout_ms, 500);
        assert_eq!(
            config.api_url("/api/check-registration/1"),
            "http://localhost:8000/api/check-registration/1"
        );
    }

    #[test]
    fn test_broken_override_falls_back() {
        let config = ClientConfig::load(Some("not = [toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
