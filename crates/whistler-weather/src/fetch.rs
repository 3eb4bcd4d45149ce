//! Page retrieval over HTTP.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::{FetchError, WeatherResult};

/// The snow and weather report page.
pub const WHISTLER_WEATHER_URL: &str =
    "https://www.whistlerblackcomb.com/the-mountain/mountain-conditions/snow-and-weather-report.aspx";

/// Desktop browser identity; the upstream site treats default client identities differently.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/58.0.3029.110 Safari/537.3";

/// Anything that can hand back the raw page text for a URL.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> WeatherResult<String>;
}

/// Fetches pages with a fresh reqwest client per call.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound each request by `timeout` instead of the transport default.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    fn client(&self, url: &str) -> Result<reqwest::Client, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(BROWSER_USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(|e| transport(url, e))
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> WeatherResult<String> {
        tracing::info!("Fetching weather page: {url}");

        let client = self.client(url)?;
        let response = client.get(url).send().await.map_err(|e| {
            tracing::warn!("Request error for {url}: {e}");
            transport(url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("HTTP error for {url}: {status}");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(|e| transport(url, e))?;
        tracing::info!("Fetched {} bytes from {url} ({status})", body.len());
        Ok(body)
    }
}

fn transport(url: &str, e: reqwest::Error) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    }
}
