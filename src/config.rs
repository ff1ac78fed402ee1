// src/config.rs

use dotenvy::dotenv;
use std::env;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the content API. A missing value is reported as a
    /// configuration error on first use, never a crash.
    pub api_url: Option<Url>,
    pub posts_page_size: u32,
    pub comments_page_size: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_url = env::var("API_URL").ok().and_then(|raw| match Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Ignoring invalid API_URL {:?}: {}", raw, e);
                None
            }
        });

        let posts_page_size = env::var("POSTS_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(12);

        let comments_page_size = env::var("COMMENTS_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            posts_page_size,
            comments_page_size,
            rust_log,
        }
    }
}
