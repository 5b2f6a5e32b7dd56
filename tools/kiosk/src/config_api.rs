use reqwest::Client;

use carenet_domain::config::AppConfig;

use crate::error::{FetchCause, KioskError};

/// Client for the portal's config endpoint.
pub struct ConfigApi {
    client: Client,
    base_url: String,
}

impl ConfigApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch the map configuration. Any non-2xx status is a failure — the
    /// config endpoint never produces other statuses deliberately, so one
    /// means the backend is absent or broken.
    pub async fn fetch(&self) -> Result<AppConfig, KioskError> {
        let url = format!("{}/api/config", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| KioskError::ConfigFetch(FetchCause::Transport(e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(KioskError::ConfigFetch(FetchCause::Status(status.as_u16())));
        }

        resp.json::<AppConfig>()
            .await
            .map_err(|e| KioskError::ConfigFetch(FetchCause::Transport(e)))
    }
}
