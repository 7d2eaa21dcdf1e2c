// ABOUTME: Cardio and strength activity records, the raw inputs of statistics aggregation
// ABOUTME: Calories are computed once at creation time and stored on the record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use crate::date::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Perceived intensity of a cardio session, mapped to a MET multiplier by
/// the runtime calorie settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Easy effort
    Low,
    /// Moderate effort
    Medium,
    /// Hard effort
    High,
}

impl Intensity {
    /// Database / wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse free-form intensity input. Accepts the English levels and the
    /// legacy French labels still present in imported data. Unrecognized
    /// values degrade to `Medium` rather than failing the request.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" | "faible" => Self::Low,
            "high" | "haute" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// One cardio session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioActivity {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Exercise performed
    pub exercise_id: Uuid,
    /// Exercise name (denormalized from the catalog for display and filtering)
    pub exercise_name: String,
    /// Day the session took place
    pub date: Date,
    /// Session duration in minutes
    pub minutes: i64,
    /// Perceived intensity
    pub intensity: Intensity,
    /// Calories burned, computed at creation from the MET formula
    pub calories: i64,
}

/// One strength-training session (a block of identical sets)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthActivity {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Exercise performed
    pub exercise_id: Uuid,
    /// Exercise name (denormalized from the catalog for display and filtering)
    pub exercise_name: String,
    /// Day the session took place
    pub date: Date,
    /// Number of sets
    pub sets: i64,
    /// Repetitions per set
    pub reps: i64,
    /// Resistance in kilograms (0 for bodyweight work)
    pub load_kg: f64,
    /// Calories burned, computed at creation from the per-set constant
    pub calories: i64,
}

impl StrengthActivity {
    /// Total repetitions across all sets of the session
    #[must_use]
    pub const fn total_reps(&self) -> i64 {
        self.sets * self.reps
    }

    /// Training volume: sets × reps × load, the standard proxy for total
    /// work performed.
    #[must_use]
    pub fn volume(&self) -> f64 {
        (self.sets * self.reps) as f64 * self.load_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_parsing_accepts_legacy_labels() {
        assert_eq!(Intensity::parse_or_default("low"), Intensity::Low);
        assert_eq!(Intensity::parse_or_default("Faible"), Intensity::Low);
        assert_eq!(Intensity::parse_or_default("Moyenne"), Intensity::Medium);
        assert_eq!(Intensity::parse_or_default("Haute"), Intensity::High);
    }

    #[test]
    fn test_intensity_unknown_defaults_to_medium() {
        assert_eq!(Intensity::parse_or_default("extreme"), Intensity::Medium);
        assert_eq!(Intensity::parse_or_default(""), Intensity::Medium);
    }

    #[test]
    fn test_volume_and_total_reps() {
        let session = StrengthActivity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            exercise_name: "Squat".into(),
            date: Date::from_ymd(2024, 1, 1).unwrap(),
            sets: 3,
            reps: 10,
            load_kg: 60.0,
            calories: 15,
        };
        assert_eq!(session.total_reps(), 30);
        assert!((session.volume() - 1800.0).abs() < f64::EPSILON);
    }
}
