pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Post;

pub use http_fetcher::HttpFetcher;

/// Source of post records. The production implementation performs a
/// single GET against the configured feed URL; tests substitute a
/// canned feed.
#[async_trait]
pub trait FeedSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}
