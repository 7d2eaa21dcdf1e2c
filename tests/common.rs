// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, auth, and user creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

#![allow(dead_code)]

//! Shared test utilities for `sporttrack_server`
//!
//! Common setup functions to reduce duplication across integration tests.

use anyhow::Result;
use sporttrack_server::{
    auth::{generate_jwt_secret, AuthManager},
    config::environment::ServerConfig,
    database::Database,
    models::User,
    server::ServerResources,
};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new("sqlite::memory:").await?);
    Ok(database)
}

/// Create test authentication manager
pub fn create_test_auth_manager() -> AuthManager {
    AuthManager::new(generate_jwt_secret().to_vec(), 24)
}

/// Create a test user with a unique email, persisted to the database
pub async fn create_test_user(database: &Database) -> Result<User> {
    let user = User::new(
        format!("test_{}@example.com", Uuid::new_v4()),
        "Test User".into(),
        bcrypt::hash("testpassword", 4)?,
    );
    database.create_user(&user).await?;
    Ok(user)
}

/// Bundle test resources for router-level tests
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    let auth_manager = create_test_auth_manager();
    let config = Arc::new(ServerConfig::from_env()?);
    Ok(Arc::new(ServerResources::new(
        database,
        auth_manager,
        config,
    )))
}
