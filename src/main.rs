// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::GoogleMapsClient;
use std::io;

/// CORS policy for the single allowed browser origin
fn build_cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, e));
    }

    log::info!("Starting ucare-finder...");
    log::info!("Environment: {}", config.environment);
    log::info!("Allowed origin: {}", config.allowed_origin);

    // 4. Shared Google Maps client (one connection pool for all requests)
    let google_client = web::Data::new(GoogleMapsClient::with_base_url(
        config.api_key.clone(),
        &config.google_maps_base_url,
    ));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let allowed_origin = config.allowed_origin.clone();

    log::info!("Server is running on http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(google_client.clone())
            // Middleware
            .wrap(build_cors(&allowed_origin))
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::facilities_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
