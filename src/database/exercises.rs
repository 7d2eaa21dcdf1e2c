// ABOUTME: Exercise catalog database operations
// ABOUTME: Covers per-user entries, system defaults, and the find-or-create path used by activity logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use super::{parse_uuid, Database};
use anyhow::{anyhow, Result};
use sporttrack_core::models::{Exercise, ExerciseType};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

fn row_to_exercise(row: &SqliteRow) -> Result<Exercise> {
    let type_str: String = row.try_get("exercise_type")?;
    let exercise_type = ExerciseType::parse(&type_str)
        .ok_or_else(|| anyhow!("Invalid exercise type in database: {type_str}"))?;
    let user_id: Option<String> = row.try_get("user_id")?;

    Ok(Exercise {
        id: parse_uuid(&row.try_get::<String, _>("id")?)?,
        name: row.try_get("name")?,
        exercise_type,
        user_id: user_id.as_deref().map(parse_uuid).transpose()?,
    })
}

impl Database {
    /// Create the exercises table
    pub(super) async fn migrate_exercises(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                exercise_type TEXT NOT NULL CHECK (exercise_type IN ('cardio', 'strength')),
                user_id TEXT REFERENCES users(id) ON DELETE CASCADE
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_exercises_owner_name
             ON exercises(user_id, name, exercise_type)",
        )
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Insert an exercise
    ///
    /// # Errors
    ///
    /// Returns an error if an exercise with the same name and type already
    /// exists for the owner, or the database operation fails
    pub async fn create_exercise(&self, exercise: &Exercise) -> Result<Uuid> {
        if self
            .find_exercise(exercise.user_id, &exercise.name, exercise.exercise_type)
            .await?
            .is_some()
        {
            return Err(anyhow!("Exercise already exists: {}", exercise.name));
        }

        sqlx::query(
            "INSERT INTO exercises (id, name, exercise_type, user_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(exercise.id.to_string())
        .bind(&exercise.name)
        .bind(exercise.exercise_type.as_str())
        .bind(exercise.user_id.map(|id| id.to_string()))
        .execute(self.pool())
        .await?;

        Ok(exercise.id)
    }

    /// Get an exercise by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_exercise(&self, exercise_id: Uuid) -> Result<Option<Exercise>> {
        let row = sqlx::query("SELECT * FROM exercises WHERE id = $1")
            .bind(exercise_id.to_string())
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    /// Find an exercise by owner, name, and type. `owner = None` looks up
    /// system defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn find_exercise(
        &self,
        owner: Option<Uuid>,
        name: &str,
        exercise_type: ExerciseType,
    ) -> Result<Option<Exercise>> {
        let row = sqlx::query(
            "SELECT * FROM exercises
             WHERE name = $1 AND exercise_type = $2
               AND (user_id = $3 OR (user_id IS NULL AND $3 IS NULL))",
        )
        .bind(name)
        .bind(exercise_type.as_str())
        .bind(owner.map(|id| id.to_string()))
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    /// Find the user's exercise with this name and type, falling back to a
    /// system default, creating a user-owned entry when neither exists.
    /// This is the path activity logging takes, so free-form exercise names
    /// never fail a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_or_create_exercise(
        &self,
        user_id: Uuid,
        name: &str,
        exercise_type: ExerciseType,
    ) -> Result<Exercise> {
        if let Some(existing) = self.find_exercise(Some(user_id), name, exercise_type).await? {
            return Ok(existing);
        }
        if let Some(system) = self.find_exercise(None, name, exercise_type).await? {
            return Ok(system);
        }

        let exercise = Exercise::new(name.to_owned(), exercise_type, user_id);
        self.create_exercise(&exercise).await?;
        Ok(exercise)
    }

    /// List the user's exercises plus system defaults, optionally filtered
    /// by type, name-ascending
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_exercises(
        &self,
        user_id: Uuid,
        exercise_type: Option<ExerciseType>,
    ) -> Result<Vec<Exercise>> {
        let rows = sqlx::query(
            "SELECT * FROM exercises
             WHERE (user_id = $1 OR user_id IS NULL)
               AND ($2 IS NULL OR exercise_type = $2)
             ORDER BY name ASC",
        )
        .bind(user_id.to_string())
        .bind(exercise_type.map(ExerciseType::as_str))
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Rename an exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn rename_exercise(&self, exercise_id: Uuid, name: &str) -> Result<()> {
        sqlx::query("UPDATE exercises SET name = $2 WHERE id = $1")
            .bind(exercise_id.to_string())
            .bind(name)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Delete an exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_exercise(&self, exercise_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(exercise_id.to_string())
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
