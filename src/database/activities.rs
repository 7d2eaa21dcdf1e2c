// ABOUTME: Cardio and strength activity database operations
// ABOUTME: Listing joins the exercise catalog so records carry their exercise name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use super::{parse_date, parse_uuid, Database};
use anyhow::Result;
use sporttrack_core::date::{Date, DateRange};
use sporttrack_core::models::{CardioActivity, Intensity, StrengthActivity};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

fn row_to_cardio(row: &SqliteRow) -> Result<CardioActivity> {
    Ok(CardioActivity {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        user_id: parse_uuid(&row.try_get::<String, _>("user_id")?)?,
        exercise_id: parse_uuid(&row.try_get::<String, _>("exercise_id")?)?,
        exercise_name: row.try_get("exercise_name")?,
        date: parse_date(&row.try_get::<String, _>("date")?)?,
        minutes: row.try_get("minutes")?,
        intensity: Intensity::parse_or_default(&row.try_get::<String, _>("intensity")?),
        calories: row.try_get("calories")?,
    })
}

fn row_to_strength(row: &SqliteRow) -> Result<StrengthActivity> {
    Ok(StrengthActivity {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        user_id: parse_uuid(&row.try_get::<String, _>("user_id")?)?,
        exercise_id: parse_uuid(&row.try_get::<String, _>("exercise_id")?)?,
        exercise_name: row.try_get("exercise_name")?,
        date: parse_date(&row.try_get::<String, _>("date")?)?,
        sets: row.try_get("sets")?,
        reps: row.try_get("reps")?,
        load_kg: row.try_get("load_kg")?,
        calories: row.try_get("calories")?,
    })
}

impl Database {
    /// Create the activity tables
    pub(super) async fn migrate_activities(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS cardio_activities (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                exercise_id TEXT NOT NULL REFERENCES exercises(id),
                date TEXT NOT NULL,
                minutes INTEGER NOT NULL,
                intensity TEXT NOT NULL,
                calories INTEGER NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS strength_activities (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                exercise_id TEXT NOT NULL REFERENCES exercises(id),
                date TEXT NOT NULL,
                sets INTEGER NOT NULL,
                reps INTEGER NOT NULL,
                load_kg REAL NOT NULL DEFAULT 0,
                calories INTEGER NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_cardio_user_date ON cardio_activities(user_id, date)",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_strength_user_date ON strength_activities(user_id, date)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Insert a cardio activity
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn insert_cardio(&self, activity: &CardioActivity) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO cardio_activities (id, user_id, exercise_id, date, minutes, intensity, calories)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(activity.id.to_string())
        .bind(activity.user_id.to_string())
        .bind(activity.exercise_id.to_string())
        .bind(activity.date.to_string())
        .bind(activity.minutes)
        .bind(activity.intensity.as_str())
        .bind(activity.calories)
        .execute(self.pool())
        .await?;

        Ok(activity.id)
    }

    /// List a user's cardio activities, newest first, optionally restricted
    /// to an inclusive date range
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_cardio(
        &self,
        user_id: Uuid,
        range: Option<&DateRange>,
    ) -> Result<Vec<CardioActivity>> {
        let rows = sqlx::query(
            r"
            SELECT a.*, e.name AS exercise_name
            FROM cardio_activities a
            JOIN exercises e ON e.id = a.exercise_id
            WHERE a.user_id = $1
              AND ($2 IS NULL OR (a.date >= $2 AND a.date <= $3))
            ORDER BY a.date DESC, a.created_at DESC
            ",
        )
        .bind(user_id.to_string())
        .bind(range.map(|r| r.start.to_string()))
        .bind(range.map(|r| r.end.to_string()))
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_cardio).collect()
    }

    /// A user's cardio activities on one day
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn cardio_on(&self, user_id: Uuid, date: Date) -> Result<Vec<CardioActivity>> {
        let range = DateRange::new(date, date);
        self.list_cardio(user_id, Some(&range)).await
    }

    /// Delete a cardio activity owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_cardio(&self, activity_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM cardio_activities WHERE id = $1 AND user_id = $2",
        )
        .bind(activity_id.to_string())
        .bind(user_id.to_string())
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of cardio activities across all users
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_cardio(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM cardio_activities")
            .fetch_one(self.pool())
            .await?;
        Ok(row.try_get("n")?)
    }

    /// Insert a strength activity
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn insert_strength(&self, activity: &StrengthActivity) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO strength_activities (id, user_id, exercise_id, date, sets, reps, load_kg, calories)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(activity.id.to_string())
        .bind(activity.user_id.to_string())
        .bind(activity.exercise_id.to_string())
        .bind(activity.date.to_string())
        .bind(activity.sets)
        .bind(activity.reps)
        .bind(activity.load_kg)
        .bind(activity.calories)
        .execute(self.pool())
        .await?;

        Ok(activity.id)
    }

    /// List a user's strength activities, newest first, optionally
    /// restricted to an inclusive date range
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_strength(
        &self,
        user_id: Uuid,
        range: Option<&DateRange>,
    ) -> Result<Vec<StrengthActivity>> {
        let rows = sqlx::query(
            r"
            SELECT a.*, e.name AS exercise_name
            FROM strength_activities a
            JOIN exercises e ON e.id = a.exercise_id
            WHERE a.user_id = $1
              AND ($2 IS NULL OR (a.date >= $2 AND a.date <= $3))
            ORDER BY a.date DESC, a.created_at DESC
            ",
        )
        .bind(user_id.to_string())
        .bind(range.map(|r| r.start.to_string()))
        .bind(range.map(|r| r.end.to_string()))
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_strength).collect()
    }

    /// A user's strength activities on one day
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn strength_on(&self, user_id: Uuid, date: Date) -> Result<Vec<StrengthActivity>> {
        let range = DateRange::new(date, date);
        self.list_strength(user_id, Some(&range)).await
    }

    /// Delete a strength activity owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_strength(&self, activity_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM strength_activities WHERE id = $1 AND user_id = $2",
        )
        .bind(activity_id.to_string())
        .bind(user_id.to_string())
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of strength activities across all users
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn count_strength(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM strength_activities")
            .fetch_one(self.pool())
            .await?;
        Ok(row.try_get("n")?)
    }
}
