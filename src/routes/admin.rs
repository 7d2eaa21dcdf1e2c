// ABOUTME: Admin route handlers: user management, global counts, runtime calorie settings
// ABOUTME: Every handler passes the admin guard before touching anything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Admin API routes.
//!
//! The calorie settings endpoints edit server memory only: tuned values
//! apply to every subsequent calorie computation but reset to the defaults
//! on restart.

use crate::auth::{hash_password, is_valid_password};
use crate::database::UserOverview;
use crate::middleware::require_admin;
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use sporttrack_core::errors::AppError;
use sporttrack_core::models::Role;
use sporttrack_stats::CalorieSettings;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Password reset request
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    /// Target user
    pub user_id: Uuid,
    /// Replacement password
    pub new_password: String,
}

/// Role change request
#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    /// Target user
    pub user_id: Uuid,
    /// New role (`user` or `admin`)
    pub role: Role,
}

/// Global record counts
#[derive(Debug, Serialize)]
pub struct GlobalStats {
    /// Registered users
    pub total_users: i64,
    /// Cardio sessions across all users
    pub total_cardio: i64,
    /// Strength sessions across all users
    pub total_strength: i64,
    /// Weight entries across all users
    pub total_weight: i64,
}

/// Admin routes implementation
pub struct AdminRoutes;

impl AdminRoutes {
    /// Create all admin routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/admin/users", get(Self::handle_list_users))
            .route("/api/admin/users/:id", delete(Self::handle_delete_user))
            .route("/api/admin/stats", get(Self::handle_global_stats))
            .route("/api/admin/reset-password", post(Self::handle_reset_password))
            .route("/api/admin/change-role", post(Self::handle_change_role))
            .route("/api/admin/settings/calories", get(Self::handle_get_calorie_settings))
            .route("/api/admin/settings/calories", put(Self::handle_put_calorie_settings))
            .with_state(resources)
    }

    /// Authenticate the request and verify the admin role
    async fn authorize(
        resources: &Arc<ServerResources>,
        headers: &HeaderMap,
    ) -> Result<Uuid, AppError> {
        let auth = resources.auth_middleware.authenticate_request(headers)?;
        let admin = require_admin(auth.user_id, &resources.database).await?;
        Ok(admin.id)
    }

    async fn handle_list_users(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<UserOverview>>, AppError> {
        Self::authorize(&resources, &headers).await?;

        let users = resources
            .database
            .list_users_with_counts()
            .await
            .map_err(|e| AppError::database(format!("User listing failed: {e}")))?;

        Ok(Json(users))
    }

    async fn handle_global_stats(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<GlobalStats>, AppError> {
        Self::authorize(&resources, &headers).await?;

        let database = &resources.database;
        let total_users = database
            .count_users()
            .await
            .map_err(|e| AppError::database(format!("Count failed: {e}")))?;
        let total_cardio = database
            .count_cardio()
            .await
            .map_err(|e| AppError::database(format!("Count failed: {e}")))?;
        let total_strength = database
            .count_strength()
            .await
            .map_err(|e| AppError::database(format!("Count failed: {e}")))?;
        let total_weight = database
            .count_weight()
            .await
            .map_err(|e| AppError::database(format!("Count failed: {e}")))?;

        Ok(Json(GlobalStats {
            total_users,
            total_cardio,
            total_strength,
            total_weight,
        }))
    }

    async fn handle_reset_password(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<ResetPasswordRequest>,
    ) -> Result<Json<JsonValue>, AppError> {
        let admin_id = Self::authorize(&resources, &headers).await?;

        if !is_valid_password(&request.new_password) {
            return Err(AppError::invalid_input(
                "Password must be at least 8 characters",
            ));
        }

        // Confirm the target exists before rewriting credentials
        resources
            .database
            .get_user(request.user_id)
            .await
            .map_err(|e| AppError::database(format!("User lookup failed: {e}")))?
            .ok_or_else(|| AppError::not_found("User"))?;

        let password_hash = hash_password(&request.new_password)?;
        resources
            .database
            .update_password_hash(request.user_id, &password_hash)
            .await
            .map_err(|e| AppError::database(format!("Password reset failed: {e}")))?;

        info!(admin_id = %admin_id, user_id = %request.user_id, "password reset by admin");
        Ok(Json(json!({ "message": "Password reset successfully" })))
    }

    async fn handle_change_role(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<ChangeRoleRequest>,
    ) -> Result<Json<JsonValue>, AppError> {
        let admin_id = Self::authorize(&resources, &headers).await?;

        resources
            .database
            .update_role(request.user_id, request.role)
            .await
            .map_err(|e| AppError::database(format!("Role change failed: {e}")))?;

        info!(
            admin_id = %admin_id,
            user_id = %request.user_id,
            role = request.role.as_str(),
            "role changed by admin"
        );
        Ok(Json(json!({ "message": "Role updated successfully" })))
    }

    async fn handle_delete_user(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<Uuid>,
    ) -> Result<Json<JsonValue>, AppError> {
        let admin_id = Self::authorize(&resources, &headers).await?;

        if id == admin_id {
            return Err(AppError::invalid_input("You cannot delete your own account"));
        }

        let deleted = resources
            .database
            .delete_user(id)
            .await
            .map_err(|e| AppError::database(format!("User deletion failed: {e}")))?;
        if !deleted {
            return Err(AppError::not_found("User"));
        }

        info!(admin_id = %admin_id, user_id = %id, "user deleted by admin");
        Ok(Json(json!({ "message": "User deleted successfully" })))
    }

    async fn handle_get_calorie_settings(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<CalorieSettings>, AppError> {
        Self::authorize(&resources, &headers).await?;
        Ok(Json(resources.calorie_settings().await))
    }

    async fn handle_put_calorie_settings(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(settings): Json<CalorieSettings>,
    ) -> Result<Json<CalorieSettings>, AppError> {
        let admin_id = Self::authorize(&resources, &headers).await?;

        if !settings.is_valid() {
            return Err(AppError::invalid_input(
                "All calorie constants must be positive",
            ));
        }

        *resources.calorie_settings.write().await = settings;
        info!(admin_id = %admin_id, "calorie settings updated (in memory, resets on restart)");

        Ok(Json(settings))
    }
}
