// ABOUTME: Request authentication middleware extracting and validating bearer tokens
// ABOUTME: Produces the authenticated user context consumed by route handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use crate::auth::{AuthManager, AuthResult};
use axum::http::HeaderMap;
use sporttrack_core::errors::{AppError, AppResult};

/// Middleware for bearer-token authentication.
///
/// Handlers pass their request headers in; a missing or malformed
/// `Authorization` header, or an invalid/expired token, yields a 401.
#[derive(Clone)]
pub struct AuthMiddleware {
    auth_manager: AuthManager,
}

impl AuthMiddleware {
    /// Create new auth middleware around a token validator
    #[must_use]
    pub const fn new(auth_manager: AuthManager) -> Self {
        Self { auth_manager }
    }

    /// Authenticate a request from its headers and extract the user context
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `Authorization` header is missing or malformed
    /// - JWT token validation fails
    pub fn authenticate_request(&self, headers: &HeaderMap) -> AppResult<AuthResult> {
        let auth_header = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Authentication failed: missing authorization header");
                AppError::auth_required()
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Authentication failed: invalid authorization header format");
            AppError::auth_invalid("Invalid authorization header format - must be 'Bearer <token>'")
        })?;

        match self.auth_manager.authenticate(token) {
            Ok(result) => {
                tracing::debug!(user_id = %result.user_id, "JWT authentication successful");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!("JWT authentication failed: {}", e);
                Err(e)
            }
        }
    }
}
