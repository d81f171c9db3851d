//! Client configuration loading
//!
//! The embedded default is compiled into `contracts`; a deployment can serve
//! `config.toml` next to the app to point at another backend.

use contracts::shared::config::ClientConfig;
use gloo_net::http::Request;

pub const CONFIG_OVERRIDE_PATH: &str = "/config.toml";

/// Never fails: falls back to the embedded default
pub async fn load_client_config() -> ClientConfig {
    let override_toml = fetch_override().await;
    match ClientConfig::load(override_toml.as_deref()) {
        Ok(config) => {
            log::info!("API base url: {}", config.api.base_url);
            config
        }
        Err(e) => {
            log::error!("Embedded client config is invalid: {:#}", e);
            ClientConfig::default()
        }
    }
}

async fn fetch_override() -> Option<String> {
    let response = match Request::get(CONFIG_OVERRIDE_PATH).send().await {
        Ok(response) => response,
        Err(e) => {
            log::debug!("No client config override: {}", e);
            return None;
        }
    };
    if !response.ok() {
        log::debug!("No client config override (status {})", response.status());
        return None;
    }
    response.text().await.ok()
}
