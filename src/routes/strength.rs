// ABOUTME: Strength activity route handlers: list, log, delete
// ABOUTME: Calories are credited per set from the runtime settings at logging time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use crate::routes::cardio::RangeQuery;
use crate::server::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use sporttrack_core::date::Date;
use sporttrack_core::errors::AppError;
use sporttrack_core::models::{ExerciseType, StrengthActivity};
use sporttrack_stats::strength_calories;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Strength logging request
#[derive(Debug, Deserialize)]
pub struct CreateStrengthRequest {
    /// Day of the session (ISO-8601 date)
    pub date: String,
    /// Exercise name; created in the catalog when unknown
    pub exercise_name: String,
    /// Number of sets
    pub sets: i64,
    /// Repetitions per set
    pub reps: i64,
    /// Resistance in kilograms; omitted or zero for bodyweight work
    pub load_kg: Option<f64>,
}

/// Strength activity routes implementation
pub struct StrengthRoutes;

impl StrengthRoutes {
    /// Create all strength routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/strength", get(Self::handle_list))
            .route("/api/strength", post(Self::handle_create))
            .route("/api/strength/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<RangeQuery>,
    ) -> Result<Json<Vec<StrengthActivity>>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;
        let range = query.parse()?;

        let activities = resources
            .database
            .list_strength(auth.user_id, range.as_ref())
            .await
            .map_err(|e| AppError::database(format!("Activity listing failed: {e}")))?;

        Ok(Json(activities))
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateStrengthRequest>,
    ) -> Result<Json<StrengthActivity>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        let date =
            Date::parse(&request.date).map_err(|_| AppError::invalid_input("Invalid date"))?;
        if request.sets <= 0 || request.reps <= 0 {
            return Err(AppError::invalid_input("Sets and reps must be positive"));
        }
        let load_kg = request.load_kg.unwrap_or(0.0);
        if load_kg < 0.0 {
            return Err(AppError::invalid_input("Load must not be negative"));
        }
        if request.exercise_name.trim().is_empty() {
            return Err(AppError::invalid_input("Exercise name is required"));
        }

        let exercise = resources
            .database
            .find_or_create_exercise(
                auth.user_id,
                request.exercise_name.trim(),
                ExerciseType::Strength,
            )
            .await
            .map_err(|e| AppError::database(format!("Exercise resolution failed: {e}")))?;

        let settings = resources.calorie_settings().await;
        let calories = strength_calories(&settings, request.sets);

        let activity = StrengthActivity {
            id: Uuid::new_v4(),
            user_id: auth.user_id,
            exercise_id: exercise.id,
            exercise_name: exercise.name,
            date,
            sets: request.sets,
            reps: request.reps,
            load_kg,
            calories,
        };

        resources
            .database
            .insert_strength(&activity)
            .await
            .map_err(|e| AppError::database(format!("Activity creation failed: {e}")))?;

        info!(user_id = %auth.user_id, date = %date, calories, "strength activity logged");
        Ok(Json(activity))
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Json<JsonValue>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        let deleted = resources
            .database
            .delete_strength(id, auth.user_id)
            .await
            .map_err(|e| AppError::database(format!("Activity deletion failed: {e}")))?;

        if !deleted {
            return Err(AppError::not_found("Activity"));
        }
        Ok(Json(json!({ "success": true })))
    }
}
