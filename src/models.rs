use serde::{Deserialize, Serialize};

pub type StoryId = u64;

/// Upstream story record. The item endpoint returns more fields than this
/// (score, time, kids, ...); serde drops whatever we do not declare.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryDetail {
    #[serde(default)]
    pub id: StoryId,
    pub by: String,
    pub title: String,
}

/// The projection exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySummary {
    pub title: String,
    pub author: String,
}

impl From<StoryDetail> for StorySummary {
    fn from(detail: StoryDetail) -> Self {
        Self {
            title: detail.title,
            author: detail.by,
        }
    }
}
