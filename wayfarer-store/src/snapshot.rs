use chrono::{DateTime, Duration, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use wayfarer_core::clock::Clock;

use crate::blob::BlobStore;
use crate::StoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotStatus {
    /// The local copy is inside the freshness window.
    Fresh,
    /// A new copy was downloaded.
    Refreshed,
    /// The download failed and an older local copy is being served.
    Stale,
}

#[derive(Debug, Default)]
struct CacheState {
    fetched_at: Option<DateTime<Utc>>,
    invalidated: bool,
}

/// Local working copy of the remote database snapshot.
///
/// The copy is re-downloaded once it is older than `max_age` according to
/// the injected clock, or after `invalidate` was called. Refreshes are
/// serialized; concurrent callers wait and then see the fresh copy.
pub struct SnapshotCache {
    store: Arc<dyn BlobStore>,
    key: String,
    local_path: PathBuf,
    max_age: Duration,
    clock: Arc<dyn Clock>,
    state: Mutex<CacheState>,
}

impl SnapshotCache {
    pub fn new(
        store: Arc<dyn BlobStore>,
        key: impl Into<String>,
        local_path: impl Into<PathBuf>,
        max_age: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            key: key.into(),
            local_path: local_path.into(),
            max_age,
            clock,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Forces the next `ensure_fresh` to download, whatever the copy's age.
    pub async fn invalidate(&self) {
        self.state.lock().await.invalidated = true;
    }

    pub async fn ensure_fresh(&self) -> StoreResult<SnapshotStatus> {
        let mut state = self.state.lock().await;
        let now = self.clock.now();
        let local_exists = tokio::fs::try_exists(&self.local_path).await?;

        if local_exists && !state.invalidated {
            let fetched_at = match state.fetched_at {
                Some(at) => Some(at),
                None => self.local_modified().await,
            };
            if let Some(at) = fetched_at {
                if now - at < self.max_age {
                    state.fetched_at = Some(at);
                    return Ok(SnapshotStatus::Fresh);
                }
            }
        }

        match self.store.fetch(&self.key).await {
            Ok(bytes) => {
                self.replace_local_copy(&bytes).await?;
                state.fetched_at = Some(now);
                state.invalidated = false;
                info!(
                    "Database downloaded from {} to {}",
                    self.store.describe(&self.key),
                    self.local_path.display()
                );
                Ok(SnapshotStatus::Refreshed)
            }
            Err(e) if local_exists => {
                warn!("Snapshot refresh failed, serving stale copy: {}", e);
                Ok(SnapshotStatus::Stale)
            }
            Err(e) => Err(e),
        }
    }

    async fn local_modified(&self) -> Option<DateTime<Utc>> {
        let metadata = tokio::fs::metadata(&self.local_path).await.ok()?;
        metadata.modified().ok().map(DateTime::<Utc>::from)
    }

    // Written beside the target and renamed so open connections keep reading
    // the previous file.
    async fn replace_local_copy(&self, bytes: &[u8]) -> StoreResult<()> {
        if let Some(parent) = self.local_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let mut staging = self.local_path.clone().into_os_string();
        staging.push(".download");
        let staging = PathBuf::from(staging);

        tokio::fs::write(&staging, bytes).await?;
        tokio::fs::rename(&staging, &self.local_path).await?;
        Ok(())
    }
}
