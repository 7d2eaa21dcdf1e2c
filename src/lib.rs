// ABOUTME: Main library entry point for the Sport Tracker Pro backend
// ABOUTME: Provides the REST API for activity logging, statistics, and user administration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

#![deny(unsafe_code)]

//! # Sport Tracker Pro Server
//!
//! A multi-user fitness tracking backend. Users authenticate with email and
//! password, log cardio sessions, strength-training sets, and body-weight
//! measurements, and query aggregated statistics; an admin role manages
//! users and the runtime calorie-calculation constants.
//!
//! ## Architecture
//!
//! - **Routes**: axum handlers organized by domain, thin wrappers around
//!   services and the database layer
//! - **Middleware**: JWT bearer authentication and the admin guard
//! - **Database**: SQLite via sqlx, one file per entity
//! - **Statistics**: the pure `sporttrack-stats` engine turns fetched
//!   records into gap-filled daily series, summaries, and progressions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sporttrack_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Sport Tracker server configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Authentication and JWT session management
pub mod auth;

/// Configuration management
pub mod config;

/// Database layer: pool ownership, migrations, and per-entity operations
pub mod database;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for bearer authentication and admin authorization
pub mod middleware;

/// `HTTP` routes for activity logging, statistics, and administration
pub mod routes;

/// Server resources and router assembly
pub mod server;

/// Unified error handling (re-exported from `sporttrack-core`)
pub use sporttrack_core::errors;

/// Common data models (re-exported from `sporttrack-core`)
pub use sporttrack_core::models;
