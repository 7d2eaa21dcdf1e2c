// ABOUTME: HTTP middleware module organization
// ABOUTME: Bearer-token authentication, admin authorization guard, and CORS policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! HTTP middleware for request authentication and authorization.

/// Admin authorization guard
pub mod admin_guard;
/// Bearer-token authentication
pub mod auth;
/// CORS policy
pub mod cors;

pub use admin_guard::require_admin;
pub use auth::AuthMiddleware;
pub use cors::cors_layer;
