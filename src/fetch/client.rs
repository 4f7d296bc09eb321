use async_trait::async_trait;
use log::debug;
use reqwest::redirect::Policy;

use std::time::Duration;

use crate::core::constants::http;
use crate::core::error::{LinkCollectError, Result};
use crate::core::types::PageResponse;
use crate::fetch::PageFetcher;

/// Request settings handed to the fetcher instead of living in globals.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub proxy: Option<String>,
    pub skip_ssl_verification: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: http::DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECONDS),
            proxy: None,
            skip_ssl_verification: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::limited(http::MAX_REDIRECTS))
            .user_agent(config.user_agent.as_str());

        // SSL verification
        if config.skip_ssl_verification {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        // Proxy configuration
        if let Some(ref proxy_url) = config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|err| {
                LinkCollectError::Config(format!("Invalid proxy URL '{proxy_url}': {err}"))
            })?;
            client_builder = client_builder.proxy(proxy);
        }

        Ok(Self {
            client: client_builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PageResponse> {
        let transport_failure = |err: reqwest::Error| LinkCollectError::FetchFailure {
            url: url.to_string(),
            status: None,
            reason: err.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        debug!("GET {url} -> {status} ({final_url})");

        let body = response.text().await.map_err(transport_failure)?;

        Ok(PageResponse::new(final_url, status, body))
    }
}
