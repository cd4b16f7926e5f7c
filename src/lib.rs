pub mod best_stories;
pub mod cache;
pub mod config;
pub mod error;
pub mod hn_client;
pub mod models;
pub mod server;

pub use best_stories::BestStories;
pub use cache::MemoryCache;
pub use error::UpstreamError;
pub use hn_client::{HackerNewsClient, StorySource};
