use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::{LecternError, Result};
use crate::domain::Post;
use crate::fetcher::FeedSource;

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    feed_url: String,
}

impl HttpFetcher {
    pub fn new(feed_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent("lectern/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            feed_url: feed_url.into(),
        }
    }

    /// Download an HTML page as text.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        Ok(response.text().await?)
    }

    /// Download a resource as raw bytes (cover images).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl FeedSource for HttpFetcher {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let response = self.client.get(&self.feed_url).send().await?;
        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        let posts: Vec<Post> = serde_json::from_slice(&body)
            .map_err(|e| LecternError::Decode(format!("malformed feed JSON: {}", e)))?;

        Ok(posts)
    }
}
