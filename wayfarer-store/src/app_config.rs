use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub snapshot: SnapshotConfig,
    pub booking: BookingRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Local SQLite file used when no snapshot source is configured.
    pub path: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 { 5 }

#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotConfig {
    #[serde(default)]
    pub enabled: bool,
    pub bucket: String,
    pub key: String,
    #[serde(default = "default_max_age_seconds")]
    pub max_age_seconds: i64,
    /// S3 compatible endpoint override (e.g. a local MinIO).
    pub endpoint: Option<String>,
    pub region: Option<String>,
    /// Directory served as the blob source instead of S3.
    pub local_dir: Option<String>,
    /// Where the downloaded copy is kept.
    #[serde(default = "default_working_copy")]
    pub working_copy: String,
}

fn default_max_age_seconds() -> i64 { 3600 }
fn default_working_copy() -> String { "/tmp/travel_booking.db".into() }

#[derive(Debug, Deserialize, Clone)]
pub struct BookingRules {
    #[serde(default = "default_max_passengers")]
    pub max_passengers: u32,
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
    #[serde(default = "default_max_itinerary_days")]
    pub max_itinerary_days: u32,
    #[serde(default = "default_user_id")]
    pub default_user_id: i64,
}

fn default_max_passengers() -> u32 { 9 }
fn default_max_guests() -> u32 { 10 }
fn default_max_itinerary_days() -> u32 { 30 }
fn default_user_id() -> i64 { 1 }

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            max_passengers: default_max_passengers(),
            max_guests: default_max_guests(),
            max_itinerary_days: default_max_itinerary_days(),
            default_user_id: default_user_id(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Developer machine overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `WAYFARER__SNAPSHOT__ENABLED=true`
            .add_source(config::Environment::with_prefix("WAYFARER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
