// ABOUTME: Exercise catalog route handlers: list, create, rename, delete
// ABOUTME: Owners manage their own entries; admins manage everything including system defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use crate::server::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use sporttrack_core::errors::AppError;
use sporttrack_core::models::{Exercise, ExerciseType};
use std::sync::Arc;
use uuid::Uuid;

/// Query parameters for the exercise listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict to one exercise type
    pub exercise_type: Option<String>,
}

/// Exercise creation request
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    /// Exercise name
    pub name: String,
    /// `cardio` or `strength`
    pub exercise_type: String,
}

/// Exercise rename request
#[derive(Debug, Deserialize)]
pub struct RenameExerciseRequest {
    /// New name
    pub name: String,
}

/// Exercise catalog routes implementation
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/exercises", get(Self::handle_list))
            .route("/api/exercises", post(Self::handle_create))
            .route("/api/exercises/:id", put(Self::handle_rename))
            .route("/api/exercises/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ListQuery>,
    ) -> Result<Json<Vec<Exercise>>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        let exercise_type = match query.exercise_type.as_deref() {
            None => None,
            Some(raw) => Some(
                ExerciseType::parse(raw)
                    .ok_or_else(|| AppError::invalid_input("exercise_type must be cardio or strength"))?,
            ),
        };

        let exercises = resources
            .database
            .list_exercises(auth.user_id, exercise_type)
            .await
            .map_err(|e| AppError::database(format!("Exercise listing failed: {e}")))?;

        Ok(Json(exercises))
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateExerciseRequest>,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        if request.name.trim().is_empty() {
            return Err(AppError::invalid_input("Name is required"));
        }
        let exercise_type = ExerciseType::parse(&request.exercise_type)
            .ok_or_else(|| AppError::invalid_input("exercise_type must be cardio or strength"))?;

        if resources
            .database
            .find_exercise(Some(auth.user_id), &request.name, exercise_type)
            .await
            .map_err(|e| AppError::database(format!("Exercise lookup failed: {e}")))?
            .is_some()
        {
            return Err(AppError::already_exists("Exercise already exists"));
        }

        let exercise = Exercise::new(request.name, exercise_type, auth.user_id);
        resources
            .database
            .create_exercise(&exercise)
            .await
            .map_err(|e| AppError::database(format!("Exercise creation failed: {e}")))?;

        Ok((StatusCode::CREATED, Json(exercise)).into_response())
    }

    /// Load an exercise and verify the caller may modify it
    async fn authorize_modification(
        resources: &Arc<ServerResources>,
        headers: &HeaderMap,
        exercise_id: Uuid,
    ) -> Result<Exercise, AppError> {
        let auth = resources.auth_middleware.authenticate_request(headers)?;

        let exercise = resources
            .database
            .get_exercise(exercise_id)
            .await
            .map_err(|e| AppError::database(format!("Exercise lookup failed: {e}")))?
            .ok_or_else(|| AppError::not_found("Exercise"))?;

        let user = resources
            .database
            .get_user(auth.user_id)
            .await
            .map_err(|e| AppError::database(format!("User lookup failed: {e}")))?
            .ok_or_else(|| AppError::not_found("User"))?;

        if !exercise.can_be_modified_by(user.id, user.role.is_admin()) {
            return Err(AppError::permission_denied(
                "Not authorized to modify this exercise",
            ));
        }

        Ok(exercise)
    }

    async fn handle_rename(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
        Json(request): Json<RenameExerciseRequest>,
    ) -> Result<Json<Exercise>, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::invalid_input("Name is required"));
        }

        let exercise = Self::authorize_modification(&resources, &headers, id).await?;

        resources
            .database
            .rename_exercise(exercise.id, &request.name)
            .await
            .map_err(|e| AppError::database(format!("Exercise rename failed: {e}")))?;

        Ok(Json(Exercise {
            name: request.name,
            ..exercise
        }))
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Json<JsonValue>, AppError> {
        let exercise = Self::authorize_modification(&resources, &headers, id).await?;

        resources
            .database
            .delete_exercise(exercise.id)
            .await
            .map_err(|e| AppError::database(format!("Exercise deletion failed: {e}")))?;

        Ok(Json(json!({ "message": "Exercise deleted successfully" })))
    }
}
