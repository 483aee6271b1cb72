use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

use crate::app_config::DatabaseConfig;
use crate::seed;
use crate::snapshot::{SnapshotCache, SnapshotStatus};
use crate::StoreResult;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Sqlite>,
}

impl DbClient {
    pub async fn new(path: &Path, max_connections: u32) -> Result<Self, sqlx::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Single-connection in-memory database. The data lives as long as the
    /// pool keeps its one connection, so idle reaping is disabled.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await?;
        info!("Migrations completed successfully.");
        Ok(())
    }

    /// Creates missing tables and loads the fixtures into an empty store.
    /// Seeded flights start on `base_date`.
    pub async fn bootstrap(&self, base_date: NaiveDate) -> StoreResult<()> {
        self.migrate().await?;
        seed::seed_if_empty(&self.pool, base_date).await?;
        Ok(())
    }
}

/// The store handle shared by all repositories.
///
/// Holds the pool for the current local copy. When a snapshot cache is
/// attached, `refresh` pulls a newer copy and swaps the pool over to it.
pub struct Database {
    client: RwLock<DbClient>,
    snapshot: Option<SnapshotCache>,
    max_connections: u32,
}

impl Database {
    pub fn new(client: DbClient) -> Self {
        Self {
            client: RwLock::new(client),
            snapshot: None,
            max_connections: 1,
        }
    }

    pub async fn open(
        config: &DatabaseConfig,
        snapshot: Option<SnapshotCache>,
        seed_base_date: NaiveDate,
    ) -> StoreResult<Self> {
        let client = match &snapshot {
            Some(cache) => {
                let status = cache.ensure_fresh().await?;
                info!("Opening snapshot {} ({:?})", cache.local_path().display(), status);
                let client = DbClient::new(cache.local_path(), config.max_connections).await?;
                client.migrate().await?;
                client
            }
            None => {
                info!("Opening local database {}", config.path);
                let client = DbClient::new(Path::new(&config.path), config.max_connections).await?;
                client.bootstrap(seed_base_date).await?;
                client
            }
        };

        Ok(Self {
            client: RwLock::new(client),
            snapshot,
            max_connections: config.max_connections,
        })
    }

    /// In-memory store with schema and fixtures, for tests and demos.
    pub async fn in_memory(seed_base_date: NaiveDate) -> StoreResult<Self> {
        let client = DbClient::in_memory().await?;
        client.bootstrap(seed_base_date).await?;
        Ok(Self::new(client))
    }

    pub async fn pool(&self) -> SqlitePool {
        self.client.read().await.pool.clone()
    }

    /// Makes sure the local copy is within its freshness window, reopening
    /// the pool when a new copy was downloaded. Returns `None` when the
    /// store is not snapshot backed.
    pub async fn refresh(&self) -> StoreResult<Option<SnapshotStatus>> {
        let Some(cache) = &self.snapshot else {
            return Ok(None);
        };

        let status = cache.ensure_fresh().await?;
        if status == SnapshotStatus::Refreshed {
            let client = DbClient::new(cache.local_path(), self.max_connections).await?;
            client.migrate().await?;
            // Readers still holding the old pool finish on it; its
            // connections close once the last clone is dropped.
            *self.client.write().await = client;
            info!("Switched to refreshed snapshot {}", cache.local_path().display());
        }

        Ok(Some(status))
    }
}
