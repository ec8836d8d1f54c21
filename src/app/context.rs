use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{LecternError, Result};
use crate::config::Config;
use crate::fetcher::{FeedSource, HttpFetcher};
use crate::store::sqlite::SqliteStore;

pub struct AppContext {
    pub store: Arc<SqliteStore>,
    pub feed: Arc<dyn FeedSource + Send + Sync>,
    pub web: HttpFetcher,
    pub config: Config,
}

impl AppContext {
    pub fn new(db_path: Option<PathBuf>, config: Config) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        let web = HttpFetcher::new(config.feed.url.clone());
        let feed: Arc<dyn FeedSource + Send + Sync> = Arc::new(web.clone());

        Ok(Self {
            store,
            feed,
            web,
            config,
        })
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        let web = HttpFetcher::new(config.feed.url.clone());
        let feed: Arc<dyn FeedSource + Send + Sync> = Arc::new(web.clone());

        Ok(Self {
            store,
            feed,
            web,
            config,
        })
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| LecternError::Config("Could not find data directory".into()))?;
        let lectern_dir = data_dir.join("lectern");
        std::fs::create_dir_all(&lectern_dir)?;
        Ok(lectern_dir.join("lectern.db"))
    }
}
