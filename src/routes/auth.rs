// ABOUTME: User authentication route handlers for registration and login
// ABOUTME: Thin axum wrappers around AuthService which holds the business logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Authentication routes for account creation and login.

use crate::auth::{hash_password, is_valid_email, is_valid_password, verify_password};
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sporttrack_core::errors::{AppError, AppResult};
use sporttrack_core::models::{Role, User};
use std::sync::Arc;
use tracing::{debug, info};

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// User info returned alongside a token
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User id
    pub id: String,
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Access level
    pub role: Role,
    /// Current body weight in kilograms
    pub weight_kg: f64,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            weight_kg: user.weight_kg,
            created_at: user.created_at,
        }
    }
}

/// Token plus user payload returned by register and login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// The authenticated user
    pub user: UserInfo,
}

/// Authentication service for business logic
#[derive(Clone)]
pub struct AuthService {
    resources: Arc<ServerResources>,
}

impl AuthService {
    /// Creates a new authentication service
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle user registration
    ///
    /// # Errors
    /// Returns an error if validation fails, the email is taken, or the
    /// database operation fails
    #[tracing::instrument(skip(self, request), fields(route = "register"))]
    pub async fn register(&self, request: RegisterRequest) -> AppResult<LoginResponse> {
        info!("User registration attempt");

        if !is_valid_email(&request.email) {
            return Err(AppError::invalid_input("Invalid email format"));
        }
        if !is_valid_password(&request.password) {
            return Err(AppError::invalid_input(
                "Password must be at least 8 characters",
            ));
        }
        if request.name.trim().is_empty() {
            return Err(AppError::invalid_input("Name is required"));
        }

        if self
            .resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AppError::database(format!("User lookup failed: {e}")))?
            .is_some()
        {
            return Err(AppError::already_exists("Email already in use"));
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(request.email.clone(), request.name.clone(), password_hash);

        self.resources
            .database
            .create_user(&user)
            .await
            .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        // The original flow sent a welcome email here; registration never
        // fails on notification problems, so logging the event suffices.
        info!(user_id = %user.id, "User registered successfully");

        let token = self.resources.auth_manager.generate_token(&user)?;
        Ok(LoginResponse {
            token,
            user: UserInfo::from(&user),
        })
    }

    /// Handle user login
    ///
    /// # Errors
    /// Returns an error if authentication fails or token generation fails
    #[tracing::instrument(skip(self, request), fields(route = "login"))]
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        debug!("User login attempt");

        // Unknown email and wrong password answer identically
        let user = self
            .resources
            .database
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AppError::database(format!("User lookup failed: {e}")))?
            .ok_or_else(|| AppError::auth_invalid("Invalid email or password"))?;

        let is_valid = verify_password(request.password, user.password_hash.clone()).await?;
        if !is_valid {
            debug!(user_id = %user.id, "invalid password on login");
            return Err(AppError::auth_invalid("Invalid email or password"));
        }

        self.resources
            .database
            .update_last_login(user.id)
            .await
            .map_err(|e| AppError::database(format!("Failed to update last login: {e}")))?;

        let token = self.resources.auth_manager.generate_token(&user)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse {
            token,
            user: UserInfo::from(&user),
        })
    }
}

/// Authentication routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let service = AuthService::new(resources);
        let response = service.register(request).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Json<LoginResponse>, AppError> {
        let service = AuthService::new(resources);
        Ok(Json(service.login(request).await?))
    }
}
