// ABOUTME: Health check route handlers for service monitoring and the service card
// ABOUTME: Provides system health, readiness, and the root endpoint listing available routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Health check routes for service monitoring.

use axum::{routing::get, Json, Router};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ready",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn index_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "Sport Tracker Pro API",
                "version": env!("CARGO_PKG_VERSION"),
                "endpoints": {
                    "auth": "/api/auth",
                    "cardio": "/api/cardio",
                    "strength": "/api/strength",
                    "weight": "/api/weight",
                    "exercises": "/api/exercises",
                    "stats": "/api/stats",
                    "admin": "/api/admin (requires admin role)",
                    "profile": "/api/profile (requires auth)"
                }
            }))
        }

        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
    }
}
