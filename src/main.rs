use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use log::info;

use hn_best_stories::config::Config;
use hn_best_stories::server;
use hn_best_stories::{BestStories, HackerNewsClient, MemoryCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    info!(
        "best stories service starting on {} (upstream {}, cache ttl {}s)",
        config.listen_addr, config.hn_base_url, config.cache_ttl_secs
    );

    let client = HackerNewsClient::new(
        &config.hn_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("failed to build upstream client")?;

    let cache = Arc::new(MemoryCache::new());
    let service = Arc::new(BestStories::new(
        client,
        cache,
        Duration::from_secs(config.cache_ttl_secs),
    ));

    let app = server::router(service);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    axum::serve(listener, app).await?;
    Ok(())
}
