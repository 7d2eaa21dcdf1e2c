// ABOUTME: Exercise catalog model covering per-user and system default entries
// ABOUTME: System defaults carry no owner and are visible to every account
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two activity categories an exercise belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Endurance work measured in minutes at an intensity
    Cardio,
    /// Resistance work measured in sets, reps, and load
    Strength,
}

impl ExerciseType {
    /// Database / wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
        }
    }

    /// Parse a stored type string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cardio" => Some(Self::Cardio),
            "strength" => Some(Self::Strength),
            _ => None,
        }
    }
}

/// A named exercise in the catalog.
///
/// `user_id` is `None` for system defaults seeded at install time; those are
/// visible to all users but owned by nobody.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,
    /// Exercise name, unique per (owner, type)
    pub name: String,
    /// Category the exercise belongs to
    pub exercise_type: ExerciseType,
    /// Owning user, or `None` for a system default
    pub user_id: Option<Uuid>,
}

impl Exercise {
    /// Create a user-owned exercise
    #[must_use]
    pub fn new(name: String, exercise_type: ExerciseType, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            exercise_type,
            user_id: Some(user_id),
        }
    }

    /// Create a system default exercise (no owner)
    #[must_use]
    pub fn system_default(name: String, exercise_type: ExerciseType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            exercise_type,
            user_id: None,
        }
    }

    /// Whether `user_id` may modify or delete this exercise.
    /// Owners may edit their own entries; admins may edit anything.
    #[must_use]
    pub fn can_be_modified_by(&self, user_id: Uuid, is_admin: bool) -> bool {
        is_admin || self.user_id == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_type_round_trip() {
        assert_eq!(ExerciseType::parse("cardio"), Some(ExerciseType::Cardio));
        assert_eq!(ExerciseType::parse("strength"), Some(ExerciseType::Strength));
        assert_eq!(ExerciseType::parse("yoga"), None);
    }

    #[test]
    fn test_modification_permissions() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let exercise = Exercise::new("Squat".into(), ExerciseType::Strength, owner);

        assert!(exercise.can_be_modified_by(owner, false));
        assert!(!exercise.can_be_modified_by(stranger, false));
        assert!(exercise.can_be_modified_by(stranger, true));

        // Nobody owns a system default; only admins may touch it
        let system = Exercise::system_default("Running".into(), ExerciseType::Cardio);
        assert!(!system.can_be_modified_by(owner, false));
        assert!(system.can_be_modified_by(owner, true));
    }
}
