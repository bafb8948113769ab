use crate::errors::FetchError;
use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode, Url};
use std::sync::Arc;
use std::time::Duration;

/// Anything that can turn a URL into a raw document body.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: PageSource + ?Sized> PageSource for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

/// HTTP page fetcher with built-in politeness delay
pub struct PageFetcher {
    client: Client,
    rate_limiter: RateLimiter,
}

impl PageFetcher {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn parse_url(url: &str) -> Result<Url, FetchError> {
        Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn send_get_request(&self, url: Url) -> Result<reqwest::Response, FetchError> {
        Ok(self.client.get(url).send().await?)
    }

    fn check_response_status(response: &reqwest::Response) -> Result<(), FetchError> {
        match response.status() {
            StatusCode::OK => Ok(()),
            other => Err(FetchError::Status(other)),
        }
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = Self::parse_url(url)?;
        self.rate_limiter.wait().await;
        debug!("GET {}", url);

        let response = self.send_get_request(url).await?;
        Self::check_response_status(&response)?;

        Ok(response.text().await?)
    }
}
