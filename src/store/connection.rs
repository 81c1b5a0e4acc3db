//! Connection pooling and scoped store sessions.
//!
//! Every request acquires its own connection through [`Store::session`],
//! runs inside a single transaction and hands the connection back to the
//! pool whether the work committed or rolled back.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use tracing::debug;

use super::errors::StoreResult;

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY NOT NULL,
    type TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    category INTEGER NOT NULL REFERENCES categories (id),
    difficulty INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS questions_category_idx ON questions (category);
";

/// Applied to every connection the pool hands out.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str, max_size: u32) -> StoreResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;
    Ok(pool)
}

/// Create both tables if they do not exist yet.
pub fn ensure_schema(conn: &mut SqliteConnection) -> StoreResult<()> {
    conn.batch_execute(SCHEMA)?;
    Ok(())
}

/// Handle to the store shared by all request handlers.
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the pool for `database_url` and make sure the schema exists.
    pub fn open(database_url: &str, max_size: u32) -> StoreResult<Self> {
        let pool = create_pool(database_url, max_size)?;
        {
            let mut conn = pool.get()?;
            ensure_schema(&mut conn)?;
        }
        debug!(database_url, "store opened");
        Ok(Self { pool })
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Run `work` against one pooled connection inside one transaction.
    ///
    /// The transaction commits when `work` returns `Ok` and rolls back
    /// otherwise. The connection returns to the pool on every path.
    pub async fn session<F, T>(&self, work: F) -> StoreResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut pooled = pool.get()?;
            let conn: &mut SqliteConnection = &mut pooled;
            conn.transaction(work)
        })
        .await?
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.pool.state();
        f.debug_struct("Store")
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish()
    }
}
