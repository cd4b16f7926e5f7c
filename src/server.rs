use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use log::error;
use serde_json::{json, Value};

use crate::best_stories::BestStories;
use crate::hn_client::StorySource;
use crate::models::StorySummary;

pub fn router<S: StorySource + 'static>(service: Arc<BestStories<S>>) -> Router {
    Router::new()
        .route("/api/BestStories", get(best_stories::<S>))
        .route("/health", get(health))
        .with_state(service)
}

async fn best_stories<S: StorySource + 'static>(
    State(service): State<Arc<BestStories<S>>>,
) -> Json<Vec<StorySummary>> {
    match service.best_stories().await {
        Ok(summaries) => Json(summaries),
        Err(e) => {
            // Upstream trouble becomes an empty list so the response shape
            // stays a JSON array for every caller.
            error!("best stories request failed: {}", e);
            Json(Vec::new())
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
