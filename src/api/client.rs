use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_retry::{strategy::ExponentialBackoff, Retry};

use super::types::{CardPage, ChallengeDetail, ChallengeList, ChallengeResponse, ChallengeSummary, ChallengeUid};
use crate::config::Config;

/// Thin JSON client for the card API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    retries: usize,
}

impl ApiClient {
    pub fn new(base: &str, timeout: Duration, retries: usize) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("blight-kit/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
            retries,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = crate::config::request_timeout(config)?;
        Self::new(config.api_base(), timeout, config.retries())
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    /// Failed requests are retried with exponential backoff.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base, path);
        let retry_strategy = ExponentialBackoff::from_millis(100)
            .max_delay(Duration::from_secs(5))
            .take(self.retries);

        Retry::spawn(retry_strategy, || async {
            tracing::debug!(%url, "GET");
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(|e| anyhow!("Request to {} failed: {}", url, e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(anyhow!("{} returned HTTP {}", url, status));
            }

            response
                .json::<T>()
                .await
                .map_err(|e| anyhow!("Invalid JSON from {}: {}", url, e))
        })
        .await
    }

    pub async fn card_page<T: DeserializeOwned>(&self, banner: u32, expansion: u32) -> Result<CardPage<T>> {
        self.get_json(&format!(
            "/api/cards?search=&rarity=&category=&type=&banner={}&exp={}",
            banner, expansion
        ))
        .await
    }

    pub async fn talent_page<T: DeserializeOwned>(&self, tier: u32) -> Result<CardPage<T>> {
        self.get_json(&format!(
            "/api/cards?search=&rarity={}&category={}&type=&banner=&exp=",
            tier,
            crate::catalog::types::TALENT_CATEGORY
        ))
        .await
    }

    pub async fn all_challenges(&self) -> Result<Vec<ChallengeSummary>> {
        let list: ChallengeList = self.get_json("/api/allchallenges").await?;
        Ok(list.challenges)
    }

    pub async fn challenge(&self, uid: &ChallengeUid) -> Result<ChallengeDetail> {
        let response: ChallengeResponse = self.get_json(&format!("/api/challenge/{}", uid)).await?;
        Ok(response.challenge)
    }
}
