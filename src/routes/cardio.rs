// ABOUTME: Cardio activity route handlers: list, log, delete
// ABOUTME: Calories are computed at logging time from the runtime MET settings and the user's weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use crate::server::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use sporttrack_core::date::{Date, DateRange};
use sporttrack_core::errors::AppError;
use sporttrack_core::models::{CardioActivity, ExerciseType, Intensity};
use sporttrack_stats::cardio_calories;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Optional inclusive date-range filter for listings
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    /// Range start (ISO-8601 date)
    pub start: Option<String>,
    /// Range end (ISO-8601 date)
    pub end: Option<String>,
}

impl RangeQuery {
    /// Parse the filter; both bounds must be present for it to apply
    pub(crate) fn parse(&self) -> Result<Option<DateRange>, AppError> {
        match (self.start.as_deref(), self.end.as_deref()) {
            (Some(start), Some(end)) => {
                let start = Date::parse(start)
                    .map_err(|_| AppError::invalid_input("Invalid start date"))?;
                let end =
                    Date::parse(end).map_err(|_| AppError::invalid_input("Invalid end date"))?;
                Ok(Some(DateRange::new(start, end)))
            }
            _ => Ok(None),
        }
    }
}

/// Cardio logging request
#[derive(Debug, Deserialize)]
pub struct CreateCardioRequest {
    /// Day of the session (ISO-8601 date)
    pub date: String,
    /// Exercise name; created in the catalog when unknown
    pub exercise_name: String,
    /// Session duration in minutes
    pub minutes: i64,
    /// Perceived intensity (`low`/`medium`/`high`; legacy French labels accepted)
    pub intensity: String,
}

/// Cardio activity routes implementation
pub struct CardioRoutes;

impl CardioRoutes {
    /// Create all cardio routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/cardio", get(Self::handle_list))
            .route("/api/cardio", post(Self::handle_create))
            .route("/api/cardio/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<RangeQuery>,
    ) -> Result<Json<Vec<CardioActivity>>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;
        let range = query.parse()?;

        let activities = resources
            .database
            .list_cardio(auth.user_id, range.as_ref())
            .await
            .map_err(|e| AppError::database(format!("Activity listing failed: {e}")))?;

        Ok(Json(activities))
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateCardioRequest>,
    ) -> Result<Json<CardioActivity>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        let date =
            Date::parse(&request.date).map_err(|_| AppError::invalid_input("Invalid date"))?;
        if request.minutes <= 0 {
            return Err(AppError::invalid_input("Minutes must be positive"));
        }
        if request.exercise_name.trim().is_empty() {
            return Err(AppError::invalid_input("Exercise name is required"));
        }
        let intensity = Intensity::parse_or_default(&request.intensity);

        let user = resources
            .database
            .get_user(auth.user_id)
            .await
            .map_err(|e| AppError::database(format!("User lookup failed: {e}")))?
            .ok_or_else(|| AppError::not_found("User"))?;

        let exercise = resources
            .database
            .find_or_create_exercise(auth.user_id, request.exercise_name.trim(), ExerciseType::Cardio)
            .await
            .map_err(|e| AppError::database(format!("Exercise resolution failed: {e}")))?;

        let settings = resources.calorie_settings().await;
        let calories = cardio_calories(&settings, intensity, user.weight_kg, request.minutes);

        let activity = CardioActivity {
            id: Uuid::new_v4(),
            user_id: auth.user_id,
            exercise_id: exercise.id,
            exercise_name: exercise.name,
            date,
            minutes: request.minutes,
            intensity,
            calories,
        };

        resources
            .database
            .insert_cardio(&activity)
            .await
            .map_err(|e| AppError::database(format!("Activity creation failed: {e}")))?;

        info!(user_id = %auth.user_id, date = %date, calories, "cardio activity logged");
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
            .delete_cardio(id, auth.user_id)
            .await
            .map_err(|e| AppError::database(format!("Activity deletion failed: {e}")))?;

        if !deleted {
            return Err(AppError::not_found("Activity"));
        }
        Ok(Json(json!({ "success": true })))
    }
}
