// src/config/db.rs
// DOCUMENTATION: Place store bootstrap
// PURPOSE: Build the PostgreSQL pool from Config and hand back a ready PgPlaceStore

use crate::config::Config;
use crate::db::PgPlaceStore;
use crate::errors::PlacesError;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Pool limits derived from Config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl PoolSettings {
    pub fn from_config(config: &Config) -> Self {
        // Waiting for a connection happens inside the per-call storage
        // deadline, so a longer acquire wait could never complete
        let acquire_timeout = Duration::from_secs(config.db_connection_timeout)
            .min(config.storage_timeout());

        PoolSettings {
            max_connections: config.db_max_connections.max(1),
            acquire_timeout,
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }

    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }
}

/// Connect to PostgreSQL and make sure the places collection exists
/// DOCUMENTATION: Called once during startup in main.rs. The returned store
/// owns the only pool shared between concurrent requests
pub async fn connect_place_store(config: &Config) -> Result<PgPlaceStore, PlacesError> {
    let settings = PoolSettings::from_config(config);
    log::info!("Initializing database pool: {:?}", settings);

    let pool = settings
        .options()
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            log::error!("Failed to connect to database: {}", e);
            PlacesError::DatabaseError(e.to_string())
        })?;

    let store = PgPlaceStore::new(pool);
    store.ensure_collection().await?;

    log::info!("Places collection ready");
    Ok(store)
}
