// ABOUTME: Database layer owning the SQLite pool, migrations, and system secrets
// ABOUTME: Entity operations live in sibling files, one per domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! SQLite persistence via sqlx.
//!
//! [`Database`] owns the connection pool and runs idempotent schema
//! migrations on startup. Per-entity operations are split across this
//! module's siblings: `users`, `exercises`, `activities`, `weight`.

mod activities;
mod exercises;
mod users;
mod weight;

pub use users::UserOverview;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use uuid::Uuid;

/// Database connection manager
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) and migrate the database
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {database_url}"))?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database exists per connection; a pool of more than
        // one would hand out empty databases.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .context("Failed to connect to database")?;

        let database = Self { pool };
        database.migrate().await?;

        Ok(database)
    }

    /// Access the underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run all schema migrations (idempotent)
    async fn migrate(&self) -> Result<()> {
        self.migrate_system_secrets().await?;
        self.migrate_users().await?;
        self.migrate_exercises().await?;
        self.migrate_activities().await?;
        self.migrate_weight().await?;
        tracing::debug!("database migrations complete");
        Ok(())
    }

    async fn migrate_system_secrets(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS system_secrets (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Fetch a named system secret, generating and storing a random one on
    /// first use. Lets the server bootstrap its JWT signing secret without
    /// operator-provided key material.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_or_create_system_secret(&self, name: &str) -> Result<String> {
        use sqlx::Row;

        if let Some(row) = sqlx::query("SELECT value FROM system_secrets WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
        {
            return Ok(row.try_get("value")?);
        }

        let secret = BASE64.encode(crate::auth::generate_jwt_secret());

        // A concurrent writer may have inserted first; the conflict clause
        // keeps the earliest value authoritative.
        sqlx::query(
            "INSERT INTO system_secrets (name, value) VALUES ($1, $2)
             ON CONFLICT(name) DO NOTHING",
        )
        .bind(name)
        .bind(&secret)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query("SELECT value FROM system_secrets WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("value")?)
    }
}

/// Parse a TEXT column back into a `Uuid`
pub(crate) fn parse_uuid(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).with_context(|| format!("Invalid UUID in database: {value}"))
}

/// Parse a TEXT column back into a calendar date
pub(crate) fn parse_date(value: &str) -> Result<sporttrack_core::date::Date> {
    sporttrack_core::date::Date::parse(value)
        .with_context(|| format!("Invalid date in database: {value}"))
}
