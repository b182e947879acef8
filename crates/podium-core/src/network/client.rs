use std::time::Duration;

use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::debug;

use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin reqwest wrapper issuing cache-bypassing GETs.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let user_agent = format!(
            "Podium/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// GET an endpoint with caches bypassed, so every poll observes current
    /// server state. Non-success statuses fail before the body is read.
    pub async fn get_no_cache(&self, endpoint: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "fetching");

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    #[cfg(test)]
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}
