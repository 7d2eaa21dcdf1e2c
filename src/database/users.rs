// ABOUTME: User management database operations
// ABOUTME: Handles account creation, lookup, profile updates, and the admin user listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use super::{parse_uuid, Database};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sporttrack_core::models::{Role, User};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

/// A user row joined with activity counts, for the admin listing
#[derive(Debug, Clone, Serialize)]
pub struct UserOverview {
    /// User id
    pub id: Uuid,
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
    /// Most recent login, if any
    pub last_login: Option<DateTime<Utc>>,
    /// Number of cardio sessions logged
    pub cardio_count: i64,
    /// Number of strength sessions logged
    pub strength_count: i64,
    /// Number of weight entries logged
    pub weight_count: i64,
}

fn row_to_user(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        password_hash: row.try_get("password_hash")?,
        role: Role::from_str_or_default(&row.try_get::<String, _>("role")?),
        weight_kg: row.try_get("weight_kg")?,
        created_at: row.try_get("created_at")?,
        last_login: row.try_get("last_login")?,
    })
}

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'user' CHECK (role IN ('user', 'admin')),
                weight_kg REAL NOT NULL DEFAULT 70.0,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                last_login DATETIME
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Create a user
    ///
    /// # Errors
    ///
    /// Returns an error if the email is already in use or the database
    /// operation fails
    pub async fn create_user(&self, user: &User) -> Result<Uuid> {
        if self.get_user_by_email(&user.email).await?.is_some() {
            return Err(anyhow!("Email already in use by another user"));
        }

        sqlx::query(
            r"
            INSERT INTO users (id, email, name, password_hash, role, weight_kg, created_at, last_login)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.weight_kg)
        .bind(user.created_at)
        .bind(user.last_login)
        .execute(self.pool())
        .await?;

        Ok(user.id)
    }

    /// Get a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = $1")
            .bind(user_id.to_string())
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Get a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Get a user by email, failing when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the query fails
    pub async fn get_user_by_email_required(&self, email: &str) -> Result<User> {
        self.get_user_by_email(email)
            .await?
            .ok_or_else(|| anyhow!("User not found: {email}"))
    }

    /// Record a successful login
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_last_login(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE users SET last_login = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(user_id.to_string())
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Update profile fields (name, email, weight)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        name: &str,
        email: &str,
        weight_kg: f64,
    ) -> Result<()> {
        sqlx::query("UPDATE users SET name = $2, email = $3, weight_kg = $4 WHERE id = $1")
            .bind(user_id.to_string())
            .bind(name)
            .bind(email)
            .bind(weight_kg)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Update the user's current body weight (kept in sync with the most
    /// recent weight entry)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_user_weight(&self, user_id: Uuid, weight_kg: f64) -> Result<()> {
        sqlx::query("UPDATE users SET weight_kg = $2 WHERE id = $1")
            .bind(user_id.to_string())
            .bind(weight_kg)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Replace a user's password hash
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_password_hash(&self, user_id: Uuid, password_hash: &str) -> Result<()> {
        sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(user_id.to_string())
            .bind(password_hash)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Change a user's role
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the operation fails
    pub async fn update_role(&self, user_id: Uuid, role: Role) -> Result<()> {
        let result = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(user_id.to_string())
            .bind(role.as_str())
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(anyhow!("User not found: {user_id}"));
        }
        Ok(())
    }

    /// Delete a user and, by cascade, all their data
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_user(&self, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id.to_string())
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of registered users
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_users(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM users")
            .fetch_one(self.pool())
            .await?;
        Ok(row.try_get("n")?)
    }

    /// List all users with their activity counts, newest account first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_users_with_counts(&self) -> Result<Vec<UserOverview>> {
        let rows = sqlx::query(
            r"
            SELECT u.*,
                   (SELECT COUNT(*) FROM cardio_activities c WHERE c.user_id = u.id) AS cardio_count,
                   (SELECT COUNT(*) FROM strength_activities s WHERE s.user_id = u.id) AS strength_count,
                   (SELECT COUNT(*) FROM weight_entries w WHERE w.user_id = u.id) AS weight_count
            FROM users u
            ORDER BY u.created_at DESC
            ",
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(UserOverview {
                    id: parse_uuid(&row.try_get::<String, _>("id")?)?,
                    email: row.try_get("email")?,
                    name: row.try_get("name")?,
                    role: Role::from_str_or_default(&row.try_get::<String, _>("role")?),
                    weight_kg: row.try_get("weight_kg")?,
                    created_at: row.try_get("created_at")?,
                    last_login: row.try_get("last_login")?,
                    cardio_count: row.try_get("cardio_count")?,
                    strength_count: row.try_get("strength_count")?,
                    weight_count: row.try_get("weight_count")?,
                })
            })
            .collect()
    }
}
