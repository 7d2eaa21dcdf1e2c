// ABOUTME: Central admin authorization guard for routes requiring admin privileges
// ABOUTME: Verifies the user has the admin role and returns 403 Forbidden if not
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Admin Authorization Guard
//!
//! Centralized admin checking for route handlers. Instead of each handler
//! performing inline role checks, handlers call [`require_admin`] with the
//! authenticated user id and get the `User` record back when authorized.

use crate::database::Database;
use sporttrack_core::errors::{AppError, AppResult};
use sporttrack_core::models::User;
use std::sync::Arc;
use uuid::Uuid;

/// Require admin privileges for a user.
///
/// Returns the `User` record if authorized.
///
/// # Errors
///
/// Returns an error if:
/// - The user is not found in the database
/// - The database query fails
/// - The user does not have the admin role (403 Forbidden)
pub async fn require_admin(user_id: Uuid, database: &Arc<Database>) -> AppResult<User> {
    let user = database
        .get_user(user_id)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?
        .ok_or_else(|| AppError::not_found("User"))?;

    if !user.role.is_admin() {
        tracing::warn!(user_id = %user_id, "admin access denied");
        return Err(AppError::permission_denied("Admin privileges required"));
    }

    Ok(user)
}
