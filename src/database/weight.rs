// ABOUTME: Body-weight entry database operations
// ABOUTME: Inserting an entry also refreshes the user's current weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use super::{parse_date, parse_uuid, Database};
use anyhow::Result;
use sporttrack_core::models::WeightEntry;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

fn row_to_entry(row: &SqliteRow) -> Result<WeightEntry> {
    Ok(WeightEntry {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        user_id: parse_uuid(&row.try_get::<String, _>("user_id")?)?,
        date: parse_date(&row.try_get::<String, _>("date")?)?,
        weight_kg: row.try_get("weight_kg")?,
        body_fat_pct: row.try_get("body_fat_pct")?,
        muscle_mass_kg: row.try_get("muscle_mass_kg")?,
    })
}

impl Database {
    /// Create the weight entries table
    pub(super) async fn migrate_weight(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weight_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                weight_kg REAL NOT NULL,
                body_fat_pct REAL,
                muscle_mass_kg REAL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_weight_user_date ON weight_entries(user_id, date)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Insert a weight entry and refresh the user's current weight
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn insert_weight(&self, entry: &WeightEntry) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO weight_entries (id, user_id, date, weight_kg, body_fat_pct, muscle_mass_kg)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(entry.date.to_string())
        .bind(entry.weight_kg)
        .bind(entry.body_fat_pct)
        .bind(entry.muscle_mass_kg)
        .execute(self.pool())
        .await?;

        // The logged weight becomes the user's current weight, feeding
        // future cardio calorie computation
        self.update_user_weight(entry.user_id, entry.weight_kg)
            .await?;

        Ok(entry.id)
    }

    /// List a user's weight entries, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_weight(&self, user_id: Uuid) -> Result<Vec<WeightEntry>> {
        let rows = sqlx::query(
            "SELECT * FROM weight_entries WHERE user_id = $1
             ORDER BY date DESC, created_at DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_entry).collect()
    }

    /// The user's most recent weight entry, if any. With several entries on
    /// the same day the most recently created wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn latest_weight(&self, user_id: Uuid) -> Result<Option<WeightEntry>> {
        let row = sqlx::query(
            "SELECT * FROM weight_entries WHERE user_id = $1
             ORDER BY date DESC, created_at DESC LIMIT 1",
        )
        .bind(user_id.to_string())
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_entry).transpose()
    }

    /// Delete a weight entry owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_weight(&self, entry_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM weight_entries WHERE id = $1 AND user_id = $2")
            .bind(entry_id.to_string())
            .bind(user_id.to_string())
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of weight entries across all users
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_weight(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM weight_entries")
            .fetch_one(self.pool())
            .await?;
        Ok(row.try_get("n")?)
    }
}
