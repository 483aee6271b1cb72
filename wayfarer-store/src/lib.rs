pub mod app_config;
pub mod blob;
pub mod car_rental_repo;
pub mod database;
pub mod flight_repo;
pub mod hotel_repo;
pub mod planner_repo;
pub mod records;
pub mod seed;
pub mod snapshot;

pub use blob::{BlobStore, FsBlobStore};
#[cfg(feature = "s3")]
pub use blob::S3BlobStore;
pub use car_rental_repo::SqliteCarRentalRepository;
pub use database::{Database, DbClient};
pub use flight_repo::SqliteFlightRepository;
pub use hotel_repo::SqliteHotelRepository;
pub use planner_repo::SqlitePlannerRepository;
pub use snapshot::{SnapshotCache, SnapshotStatus};

use wayfarer_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Statement execution failed: {0}")]
    Execution(#[from] sqlx::Error),
    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Record decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Blob store error: {0}")]
    Blob(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::ServiceError(err.to_string())
    }
}
