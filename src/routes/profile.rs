// ABOUTME: Profile route handlers: view, update, change password, delete account
// ABOUTME: Destructive operations re-confirm the caller's password
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use crate::auth::{hash_password, is_valid_password, verify_password};
use crate::routes::auth::UserInfo;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::HeaderMap,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use sporttrack_core::errors::AppError;
use sporttrack_core::models::User;
use std::sync::Arc;
use tracing::info;

/// Profile update request
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    /// New display name
    pub name: String,
    /// New email address
    pub email: String,
    /// New current body weight in kilograms
    pub weight_kg: f64,
}

/// Password change request
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    /// Current password, re-verified before the change
    pub current_password: String,
    /// Replacement password
    pub new_password: String,
}

/// Account deletion request
#[derive(Debug, Deserialize)]
pub struct DeleteAccountRequest {
    /// Password confirmation
    pub password: String,
}

/// Profile routes implementation
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profile", get(Self::handle_get))
            .route("/api/profile", put(Self::handle_update))
            .route("/api/profile/change-password", post(Self::handle_change_password))
            .route("/api/profile", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn current_user(
        resources: &Arc<ServerResources>,
        headers: &HeaderMap,
    ) -> Result<User, AppError> {
        let auth = resources.auth_middleware.authenticate_request(headers)?;
        resources
            .database
            .get_user(auth.user_id)
            .await
            .map_err(|e| AppError::database(format!("User lookup failed: {e}")))?
            .ok_or_else(|| AppError::not_found("User"))
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Json<UserInfo>, AppError> {
        let user = Self::current_user(&resources, &headers).await?;
        Ok(Json(UserInfo::from(&user)))
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<UpdateProfileRequest>,
    ) -> Result<Json<UserInfo>, AppError> {
        let user = Self::current_user(&resources, &headers).await?;

        if request.name.trim().is_empty() || request.email.trim().is_empty() {
            return Err(AppError::invalid_input("Name and email are required"));
        }
        if request.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be positive"));
        }

        // The new email must not belong to someone else
        if let Some(existing) = resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AppError::database(format!("User lookup failed: {e}")))?
        {
            if existing.id != user.id {
                return Err(AppError::already_exists("Email already in use"));
            }
        }

        resources
            .database
            .update_profile(user.id, &request.name, &request.email, request.weight_kg)
            .await
            .map_err(|e| AppError::database(format!("Profile update failed: {e}")))?;

        let updated = resources
            .database
            .get_user(user.id)
            .await
            .map_err(|e| AppError::database(format!("User lookup failed: {e}")))?
            .ok_or_else(|| AppError::not_found("User"))?;

        info!(user_id = %user.id, "profile updated");
        Ok(Json(UserInfo::from(&updated)))
    }

    async fn handle_change_password(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<ChangePasswordRequest>,
    ) -> Result<Json<JsonValue>, AppError> {
        let user = Self::current_user(&resources, &headers).await?;

        if !is_valid_password(&request.new_password) {
            return Err(AppError::invalid_input(
                "New password must be at least 8 characters",
            ));
        }

        let is_valid =
            verify_password(request.current_password, user.password_hash.clone()).await?;
        if !is_valid {
            return Err(AppError::auth_invalid("Current password is incorrect"));
        }

        let new_hash = hash_password(&request.new_password)?;
        resources
            .database
            .update_password_hash(user.id, &new_hash)
            .await
            .map_err(|e| AppError::database(format!("Password update failed: {e}")))?;

        info!(user_id = %user.id, "password changed");
        Ok(Json(json!({ "message": "Password changed successfully" })))
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<DeleteAccountRequest>,
    ) -> Result<Json<JsonValue>, AppError> {
        let user = Self::current_user(&resources, &headers).await?;

        let is_valid = verify_password(request.password, user.password_hash.clone()).await?;
        if !is_valid {
            return Err(AppError::auth_invalid("Password is incorrect"));
        }

        resources
            .database
            .delete_user(user.id)
            .await
            .map_err(|e| AppError::database(format!("Account deletion failed: {e}")))?;

        info!(user_id = %user.id, "account deleted");
        Ok(Json(json!({ "message": "Account deleted successfully" })))
    }
}
