// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, storage, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::{Config, StorageBackend};
use db::{InMemoryPlaceStore, PlaceStore};
use dotenv::dotenv;
use services::PlaceService;
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting places service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize the place collection
    let store: Arc<dyn PlaceStore> = match config.storage_backend {
        StorageBackend::Postgres => match config::connect_place_store(&config).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                log::error!("Failed to prepare places collection: {}", e);
                std::process::exit(1);
            }
        },
        StorageBackend::Memory => Arc::new(InMemoryPlaceStore::new()),
    };

    // 5. One service instance shared by every worker
    let service = web::Data::new(PlaceService::new(store, config.storage_timeout()));
    log::info!("Storage call timeout: {:?}", config.storage_timeout());

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            // Middleware
            .wrap(Logger::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::places_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
