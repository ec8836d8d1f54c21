pub mod sqlite;

use clap::ValueEnum;
use serde::Deserialize;

use crate::app::Result;
use crate::domain::Post;

pub use sqlite::SqliteStore;

/// What to do when an incoming post's id already exists in the table.
///
/// `Reject` matches a plain `INSERT`: the first duplicate fails the
/// whole batch. `Skip` keeps the stored row, `Upsert` replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    Skip,
    Upsert,
}

pub trait Store {
    fn clear_posts(&self) -> Result<()>;
    fn insert_posts(&self, posts: &[Post], policy: DuplicatePolicy) -> Result<usize>;
    fn get_all_posts(&self) -> Result<Vec<Post>>;
    fn count_posts(&self) -> Result<i64>;
}
