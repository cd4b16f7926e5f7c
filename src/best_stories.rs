use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::cache::MemoryCache;
use crate::error::UpstreamError;
use crate::hn_client::StorySource;
use crate::models::{StoryId, StorySummary};

pub const STORY_IDS_KEY: &str = "storyIDs";
pub const BEST_STORIES_KEY: &str = "bestStories";

/// The cache-aside pipeline: resolve the ranked ID list, then aggregate
/// per-story details into summaries, caching both stages under a sliding
/// window so repeat requests stay off the upstream API.
pub struct BestStories<S> {
    source: S,
    cache: Arc<MemoryCache>,
    cache_ttl: Duration,
}

impl<S: StorySource> BestStories<S> {
    pub fn new(source: S, cache: Arc<MemoryCache>, cache_ttl: Duration) -> Self {
        Self {
            source,
            cache,
            cache_ttl,
        }
    }

    /// Resolves the ranked best-story ID list, from cache or upstream.
    /// A failed upstream fetch surfaces immediately; there is no retry and
    /// no partial list.
    pub async fn best_story_ids(&self) -> Result<Vec<StoryId>, UpstreamError> {
        if let Some(ids) = self.cache.get::<Vec<StoryId>>(STORY_IDS_KEY) {
            debug!("story id cache hit ({} ids)", ids.len());
            return Ok(ids);
        }

        let ids = self.source.best_story_ids().await?;
        info!("fetched {} best story ids", ids.len());
        self.cache.set(STORY_IDS_KEY, &ids, self.cache_ttl);
        Ok(ids)
    }

    /// Fetches details for each ID in order. Fail-fast: the first failed
    /// fetch abandons the whole batch, discarding earlier summaries.
    async fn aggregate(&self, ids: &[StoryId]) -> Result<Vec<StorySummary>, UpstreamError> {
        let mut summaries = Vec::with_capacity(ids.len());
        for &id in ids {
            let detail = self.source.story_detail(id).await?;
            summaries.push(StorySummary::from(detail));
        }
        Ok(summaries)
    }

    /// The full pipeline behind `GET /api/BestStories`. Returns summaries
    /// in upstream ranking order. An abandoned aggregation yields an empty
    /// list; only an ID resolution failure is an error.
    pub async fn best_stories(&self) -> Result<Vec<StorySummary>, UpstreamError> {
        let ids = self.best_story_ids().await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(summaries) = self.cache.get::<Vec<StorySummary>>(BEST_STORIES_KEY) {
            debug!("best stories cache hit ({} stories)", summaries.len());
            return Ok(summaries);
        }

        match self.aggregate(&ids).await {
            Ok(summaries) => {
                self.cache.set(BEST_STORIES_KEY, &summaries, self.cache_ttl);
                Ok(summaries)
            }
            Err(e) => {
                // All-or-nothing: one failed detail fetch drops the batch.
                // Nothing is cached, so the next request starts over.
                warn!("aggregation abandoned: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
