use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, ErrorCode};
use rusqlite_migration::{Migrations, M};

use crate::app::{LecternError, Result};
use crate::domain::Post;
use crate::store::{DuplicatePolicy, Store};

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|_| LecternError::Database(rusqlite::Error::InvalidQuery))?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            LecternError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }

    fn insert_sql(policy: DuplicatePolicy) -> &'static str {
        match policy {
            DuplicatePolicy::Reject => {
                "INSERT INTO posts (id, user_id, title, body) VALUES (?1, ?2, ?3, ?4)"
            }
            DuplicatePolicy::Skip => {
                "INSERT OR IGNORE INTO posts (id, user_id, title, body) VALUES (?1, ?2, ?3, ?4)"
            }
            DuplicatePolicy::Upsert => {
                "INSERT OR REPLACE INTO posts (id, user_id, title, body) VALUES (?1, ?2, ?3, ?4)"
            }
        }
    }
}

impl Store for SqliteStore {
    fn clear_posts(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM posts", [])?;
        Ok(())
    }

    fn insert_posts(&self, posts: &[Post], policy: DuplicatePolicy) -> Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let sql = Self::insert_sql(policy);
        let mut count = 0;

        for post in posts {
            let inserted = tx
                .execute(sql, params![post.id, post.user_id, post.title, post.body])
                .map_err(|e| match e {
                    rusqlite::Error::SqliteFailure(f, _)
                        if f.code == ErrorCode::ConstraintViolation =>
                    {
                        LecternError::Constraint(format!("post id {} already stored", post.id))
                    }
                    other => LecternError::Database(other),
                })?;
            count += inserted;
        }

        tx.commit()?;
        Ok(count)
    }

    fn get_all_posts(&self) -> Result<Vec<Post>> {
        let conn = self.lock()?;

        let mut stmt =
            conn.prepare("SELECT id, user_id, title, body FROM posts ORDER BY id")?;

        let posts = stmt
            .query_map([], |row| {
                Ok(Post {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    title: row.get(2)?,
                    body: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(posts)
    }

    fn count_posts(&self) -> Result<i64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?;
        Ok(count)
    }
}
