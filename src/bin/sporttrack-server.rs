// ABOUTME: Server binary: loads configuration, opens the database, and serves the REST API
// ABOUTME: Provisions the JWT signing secret from the database on first start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! # Sport Tracker Server Binary
//!
//! Starts the multi-user fitness tracking API with authentication and
//! SQLite persistence.

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use clap::Parser;
use sporttrack_server::{
    auth::AuthManager,
    config::environment::ServerConfig,
    database::Database,
    logging,
    server::{HttpServer, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "sporttrack-server")]
#[command(about = "Sport Tracker Pro - Multi-user fitness tracking API")]
struct Args {
    /// Override the HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url =
            sporttrack_server::config::environment::DatabaseUrl::parse(&database_url);
    }

    logging::init_from_env()?;

    info!("Starting Sport Tracker Pro API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized successfully");

    // Server-first bootstrap: the signing secret lives in the database and
    // is generated on first start
    let jwt_secret = database.get_or_create_system_secret("jwt_secret").await?;
    let secret_bytes = BASE64
        .decode(&jwt_secret)
        .unwrap_or_else(|_| jwt_secret.clone().into_bytes());

    let auth_manager = AuthManager::new(secret_bytes, i64::from(config.auth.jwt_expiry_hours));
    info!("Authentication manager initialized");

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(config),
    ));

    display_available_endpoints(http_port);
    info!("Ready to serve fitness data!");

    HttpServer::new(resources).run(http_port).await
}

fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

    info!("=== Available API Endpoints ===");
    info!("Authentication:");
    info!("   Register:         POST http://{host}:{port}/api/auth/register");
    info!("   Login:            POST http://{host}:{port}/api/auth/login");
    info!("Activity Logging:");
    info!("   Cardio:           GET/POST http://{host}:{port}/api/cardio");
    info!("   Strength:         GET/POST http://{host}:{port}/api/strength");
    info!("   Weight:           GET/POST http://{host}:{port}/api/weight");
    info!("   Exercises:        GET/POST http://{host}:{port}/api/exercises");
    info!("Statistics:");
    info!("   Dashboard:        GET  http://{host}:{port}/api/stats/dashboard");
    info!("   Daily Series:     GET  http://{host}:{port}/api/stats/series");
    info!("   Progression:      GET  http://{host}:{port}/api/stats/progression");
    info!("Administration:");
    info!("   Users:            GET  http://{host}:{port}/api/admin/users");
    info!("   Global Stats:     GET  http://{host}:{port}/api/admin/stats");
    info!("   Calorie Settings: GET/PUT http://{host}:{port}/api/admin/settings/calories");
    info!("Monitoring:");
    info!("   Health Check:     GET  http://{host}:{port}/health");
    info!("=== End of Endpoint List ===");
}
