// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, the camp locator, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{CampLocator, GoogleMapsClient};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting camp-locator service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Build the Google client and the locator that owns lookup status
    let client = GoogleMapsClient::from_config(&config).map_err(|e| {
        log::error!("Failed to build HTTP client: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    if let Some(timeout) = config.request_timeout() {
        log::info!("Provider request timeout: {:?}", timeout);
    }
    let locator = web::Data::new(CampLocator::new(client));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(locator.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config::<GoogleMapsClient>)
            .configure(handlers::camps_config::<GoogleMapsClient>)
    })
    .bind(&server_addr)?
    .run()
    .await
}
