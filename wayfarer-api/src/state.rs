use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use wayfarer_booking::{CarRentalService, FlightService, HotelService, TravelPlannerService};
use wayfarer_core::clock::{Clock, SystemClock};
use wayfarer_store::app_config::{BookingRules, Config, SnapshotConfig};
use wayfarer_store::{
    BlobStore, Database, FsBlobStore, SnapshotCache, SqliteCarRentalRepository,
    SqliteFlightRepository, SqliteHotelRepository, SqlitePlannerRepository,
};

use crate::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub flights: Arc<FlightService>,
    pub hotels: Arc<HotelService>,
    pub cars: Arc<CarRentalService>,
    pub planner: Arc<TravelPlannerService>,
    pub clock: Arc<dyn Clock>,
    pub rules: BookingRules,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(db: Arc<Database>, clock: Arc<dyn Clock>, rules: BookingRules) -> Result<Self, prometheus::Error> {
        let flights = FlightService::new(Arc::new(SqliteFlightRepository::new(db.clone())), clock.clone());
        let hotels = HotelService::new(Arc::new(SqliteHotelRepository::new(db.clone())), clock.clone());
        let cars = CarRentalService::new(Arc::new(SqliteCarRentalRepository::new(db.clone())), clock.clone());
        let planner = TravelPlannerService::new(Arc::new(SqlitePlannerRepository::new(db.clone())), clock.clone());

        Ok(Self {
            db,
            flights: Arc::new(flights),
            hotels: Arc::new(hotels),
            cars: Arc::new(cars),
            planner: Arc::new(planner),
            clock,
            rules,
            metrics: Arc::new(Metrics::new()?),
        })
    }

    /// Opens the configured store, snapshot backed when enabled.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let snapshot = if config.snapshot.enabled {
            let store = blob_store(&config.snapshot).await?;
            info!("Snapshot source {}", store.describe(&config.snapshot.key));
            Some(SnapshotCache::new(
                store,
                config.snapshot.key.clone(),
                PathBuf::from(&config.snapshot.working_copy),
                chrono::Duration::seconds(config.snapshot.max_age_seconds),
                clock.clone(),
            ))
        } else {
            None
        };

        let db = Database::open(&config.database, snapshot, clock.today()).await?;
        Ok(Self::new(Arc::new(db), clock, config.booking.clone())?)
    }
}

async fn blob_store(config: &SnapshotConfig) -> anyhow::Result<Arc<dyn BlobStore>> {
    if let Some(dir) = &config.local_dir {
        return Ok(Arc::new(FsBlobStore::new(dir)));
    }
    s3_store(config).await
}

#[cfg(feature = "s3")]
async fn s3_store(config: &SnapshotConfig) -> anyhow::Result<Arc<dyn BlobStore>> {
    let store = wayfarer_store::S3BlobStore::new(
        config.bucket.clone(),
        config.region.as_deref(),
        config.endpoint.as_deref(),
    )
    .await;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "s3"))]
async fn s3_store(config: &SnapshotConfig) -> anyhow::Result<Arc<dyn BlobStore>> {
    anyhow::bail!(
        "snapshot bucket {} configured but S3 support is not compiled in; set snapshot.local_dir",
        config.bucket
    )
}
