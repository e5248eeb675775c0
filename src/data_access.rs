use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::driver_sqlite;
use crate::error::AppError;
use crate::models::enums::{CellValue, Param};

/// Statement-level access to the bank database.
///
/// Callers hand over fully formed statements and positional parameters; the
/// implementation knows nothing about the schema.
pub trait Database {
    /// Run one write statement and commit it. Returns rows affected.
    fn execute(&self, sql: &str, params: &[Param]) -> Result<u64, AppError>;

    /// Run the same statement once per parameter set inside one transaction.
    /// Either every statement commits or none does.
    fn execute_batch(&self, sql: &str, batch: &[Vec<Param>]) -> Result<u64, AppError>;

    /// Run a read-only query and return every row.
    fn fetch(&self, sql: &str) -> Result<Vec<Vec<CellValue>>, AppError>;
}

/// Pooled SQLite access driven from the UI thread.
///
/// Every call blocks until the statement finishes. Connections are checked
/// out of the pool for the duration of one call and returned on drop, so a
/// failing statement never leaks its connection.
#[derive(Clone)]
pub struct DataAccess {
    pool: SqlitePool,
    runtime: Arc<tokio::runtime::Runtime>,
}

impl DataAccess {
    pub fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let in_memory = database_url.contains(":memory:");
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database lives and dies with its single connection.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .acquire_timeout(Duration::from_secs(10))
        };

        let pool = runtime.block_on(pool_options.connect_with(options))?;
        info!("Connected to {}", database_url);
        Ok(Self {
            pool,
            runtime: Arc::new(runtime),
        })
    }
}

impl Database for DataAccess {
    fn execute(&self, sql: &str, params: &[Param]) -> Result<u64, AppError> {
        debug!("execute: {} {:?}", sql, params);
        self.runtime.block_on(async {
            let mut conn = self.pool.acquire().await?;
            let query = driver_sqlite::bind_params(sqlx::query(sql), params);
            let result = query.execute(&mut *conn).await?;
            Ok::<u64, AppError>(result.rows_affected())
        })
    }

    fn execute_batch(&self, sql: &str, batch: &[Vec<Param>]) -> Result<u64, AppError> {
        debug!("execute_batch: {} ({} parameter sets)", sql, batch.len());
        self.runtime.block_on(async {
            let mut tx = self.pool.begin().await?;
            let mut affected = 0;
            for params in batch {
                let query = driver_sqlite::bind_params(sqlx::query(sql), params);
                // Dropping `tx` on the error path rolls the batch back.
                affected += query.execute(&mut *tx).await?.rows_affected();
            }
            tx.commit().await?;
            Ok::<u64, AppError>(affected)
        })
    }

    fn fetch(&self, sql: &str) -> Result<Vec<Vec<CellValue>>, AppError> {
        debug!("fetch: {}", sql);
        self.runtime.block_on(async {
            let mut conn = self.pool.acquire().await?;
            let rows = sqlx::query(sql).fetch_all(&mut *conn).await?;
            Ok::<_, AppError>(driver_sqlite::convert_sqlite_rows(&rows))
        })
    }
}
