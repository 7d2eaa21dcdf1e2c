// ABOUTME: Route module organization for Sport Tracker HTTP endpoints
// ABOUTME: One domain per file; each exposes a Routes struct building its axum Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Route module for the Sport Tracker server.
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the database layer and the statistics engine.

/// Admin API routes for user management and calorie settings
pub mod admin;
/// Authentication routes (register, login)
pub mod auth;
/// Cardio activity routes
pub mod cardio;
/// Exercise catalog routes
pub mod exercises;
/// Health check and service card routes
pub mod health;
/// Profile management routes
pub mod profile;
/// Statistics routes: dashboard, daily series, progression
pub mod stats;
/// Strength activity routes
pub mod strength;
/// Body-weight entry routes
pub mod weight;

pub use admin::AdminRoutes;
pub use auth::{AuthRoutes, AuthService, LoginRequest, LoginResponse, RegisterRequest, UserInfo};
pub use cardio::CardioRoutes;
pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use profile::ProfileRoutes;
pub use stats::StatsRoutes;
pub use strength::StrengthRoutes;
pub use weight::WeightRoutes;
