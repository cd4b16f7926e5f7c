use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::UpstreamError;
use crate::models::{StoryDetail, StoryId};

/// Where story data comes from. The pipeline only ever talks to this
/// trait, so tests can drive it with a fake source.
#[async_trait]
pub trait StorySource: Send + Sync {
    async fn best_story_ids(&self) -> Result<Vec<StoryId>, UpstreamError>;
    async fn story_detail(&self, id: StoryId) -> Result<StoryDetail, UpstreamError>;
}

/// Client for the Hacker News Firebase API.
pub struct HackerNewsClient {
    client: Client,
    base_url: String,
}

impl HackerNewsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hn_best_stories/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        // Deserialize from the raw body rather than response.json() so a
        // bad payload surfaces as Malformed, not a transport error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl StorySource for HackerNewsClient {
    async fn best_story_ids(&self) -> Result<Vec<StoryId>, UpstreamError> {
        let url = format!("{}/beststories.json", self.base_url);
        debug!("fetching best story ids from {}", url);
        self.get_json(&url).await
    }

    async fn story_detail(&self, id: StoryId) -> Result<StoryDetail, UpstreamError> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        debug!("fetching story {}", id);
        self.get_json(&url).await
    }
}
