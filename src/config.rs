use std::env;

pub const DEFAULT_HN_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Runtime configuration, read from the environment once at startup.
/// Every knob has a default so the service runs with no configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub hn_base_url: String,
    pub cache_ttl_secs: u64,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            hn_base_url: env::var("HN_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_HN_BASE_URL.to_string()),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "240".to_string())
                .parse()
                .unwrap_or(240),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }
}
