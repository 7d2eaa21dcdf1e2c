// ABOUTME: Body-weight entry route handlers: list, log, delete
// ABOUTME: Logging an entry also refreshes the user's current weight for calorie math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use sporttrack_core::date::Date;
use sporttrack_core::errors::AppError;
use sporttrack_core::models::WeightEntry;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Weight logging request
#[derive(Debug, Deserialize)]
pub struct CreateWeightRequest {
    /// Day of the measurement (ISO-8601 date)
    pub date: String,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage, if measured
    pub body_fat_pct: Option<f64>,
    /// Muscle mass in kilograms, if measured
    pub muscle_mass_kg: Option<f64>,
}

/// Weight entry routes implementation
pub struct WeightRoutes;

impl WeightRoutes {
    /// Create all weight routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/weight", get(Self::handle_list))
            .route("/api/weight", post(Self::handle_create))
            .route("/api/weight/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<WeightEntry>>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        let entries = resources
            .database
            .list_weight(auth.user_id)
            .await
            .map_err(|e| AppError::database(format!("Weight listing failed: {e}")))?;

        Ok(Json(entries))
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateWeightRequest>,
    ) -> Result<Json<WeightEntry>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        let date =
            Date::parse(&request.date).map_err(|_| AppError::invalid_input("Invalid date"))?;
        if request.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be positive"));
        }

        let entry = WeightEntry {
            id: Uuid::new_v4(),
            user_id: auth.user_id,
            date,
            weight_kg: request.weight_kg,
            body_fat_pct: request.body_fat_pct,
            muscle_mass_kg: request.muscle_mass_kg,
        };

        resources
            .database
            .insert_weight(&entry)
            .await
            .map_err(|e| AppError::database(format!("Weight entry creation failed: {e}")))?;

        info!(user_id = %auth.user_id, date = %date, "weight entry logged");
        Ok(Json(entry))
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Json<JsonValue>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        let deleted = resources
            .database
            .delete_weight(id, auth.user_id)
            .await
            .map_err(|e| AppError::database(format!("Weight entry deletion failed: {e}")))?;

        if !deleted {
            return Err(AppError::not_found("Weight entry"));
        }
        Ok(Json(json!({ "success": true })))
    }
}
