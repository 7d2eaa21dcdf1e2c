// ABOUTME: Shared server resources and axum router assembly
// ABOUTME: One Arc of resources flows into every route domain via axum state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Server resources and router assembly.
//!
//! [`ServerResources`] is the single dependency bundle handed to every
//! route domain: the database, the token validator, and the runtime
//! calorie settings. [`HttpServer`] merges the domain routers and serves.

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::middleware::{cors_layer, AuthMiddleware};
use crate::routes::{
    AdminRoutes, AuthRoutes, CardioRoutes, ExerciseRoutes, HealthRoutes, ProfileRoutes,
    StatsRoutes, StrengthRoutes, WeightRoutes,
};
use anyhow::{Context, Result};
use axum::Router;
use sporttrack_stats::CalorieSettings;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Dependency bundle shared by all route handlers
pub struct ServerResources {
    /// Database connection manager
    pub database: Arc<Database>,
    /// JWT issuance and validation
    pub auth_manager: AuthManager,
    /// Bearer-token request authentication
    pub auth_middleware: AuthMiddleware,
    /// Runtime-tunable calorie constants. Held in memory only: admin
    /// changes reset on restart.
    pub calorie_settings: RwLock<CalorieSettings>,
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle the shared resources
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        let auth_middleware = AuthMiddleware::new(auth_manager.clone());
        Self {
            database: Arc::new(database),
            auth_manager,
            auth_middleware,
            calorie_settings: RwLock::new(CalorieSettings::default()),
            config,
        }
    }

    /// Snapshot of the current calorie settings
    pub async fn calorie_settings(&self) -> CalorieSettings {
        *self.calorie_settings.read().await
    }
}

/// The HTTP server
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(AuthRoutes::routes(self.resources.clone()))
            .merge(ProfileRoutes::routes(self.resources.clone()))
            .merge(ExerciseRoutes::routes(self.resources.clone()))
            .merge(CardioRoutes::routes(self.resources.clone()))
            .merge(StrengthRoutes::routes(self.resources.clone()))
            .merge(WeightRoutes::routes(self.resources.clone()))
            .merge(StatsRoutes::routes(self.resources.clone()))
            .merge(AdminRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer())
    }

    /// Bind and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if binding or serving fails
    pub async fn run(self, port: u16) -> Result<()> {
        let addr = format!("0.0.0.0:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        tracing::info!("listening on {addr}");
        axum::serve(listener, self.router())
            .await
            .context("Server error")?;

        Ok(())
    }
}
