// ABOUTME: MET-based calorie formulas and the combined cardio+strength daily calorie series
// ABOUTME: Calorie constants are passed in explicitly so admins can retune them at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Calorie computation.
//!
//! The formulas are deliberately simple: cardio burns
//! `MET(intensity) × body weight × minutes / 60`, strength burns a flat
//! constant per set. The constants live in [`CalorieSettings`] and are
//! passed in by the caller rather than baked in as literals — the admin API
//! retunes them at runtime, and persistence can be added later without
//! touching this module.

use crate::series::{build_daily_series, DailySeries, Fill};
use serde::{Deserialize, Serialize};
use sporttrack_core::date::DateRange;
use sporttrack_core::models::{CardioActivity, Intensity, StrengthActivity};

/// Tunable calorie-calculation constants.
///
/// Held in server memory and editable by admins; the defaults match the
/// standard MET table for light/moderate/vigorous effort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieSettings {
    /// MET multiplier for low-intensity cardio
    pub met_low: f64,
    /// MET multiplier for medium-intensity cardio
    pub met_medium: f64,
    /// MET multiplier for high-intensity cardio
    pub met_high: f64,
    /// Calories credited per strength-training set
    pub calories_per_set: f64,
}

impl Default for CalorieSettings {
    fn default() -> Self {
        Self {
            met_low: 4.0,
            met_medium: 7.0,
            met_high: 10.0,
            calories_per_set: 5.0,
        }
    }
}

impl CalorieSettings {
    /// MET multiplier for a given intensity
    #[must_use]
    pub const fn met(&self, intensity: Intensity) -> f64 {
        match intensity {
            Intensity::Low => self.met_low,
            Intensity::Medium => self.met_medium,
            Intensity::High => self.met_high,
        }
    }

    /// Whether every constant is positive; used to validate admin updates
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.met_low > 0.0
            && self.met_medium > 0.0
            && self.met_high > 0.0
            && self.calories_per_set > 0.0
    }
}

/// Calories burned by a cardio session:
/// `round(MET(intensity) × weight_kg × minutes / 60)`.
#[must_use]
pub fn cardio_calories(
    settings: &CalorieSettings,
    intensity: Intensity,
    weight_kg: f64,
    minutes: i64,
) -> i64 {
    (settings.met(intensity) * weight_kg * minutes as f64 / 60.0).round() as i64
}

/// Calories credited for a strength session: `round(sets × calories_per_set)`.
#[must_use]
pub fn strength_calories(settings: &CalorieSettings, sets: i64) -> i64 {
    (sets as f64 * settings.calories_per_set).round() as i64
}

/// Combined daily calorie series over `range`.
///
/// Builds one gap-filled sub-series per activity kind through
/// [`build_daily_series`] and merges them by date-aligned addition. The two
/// sub-series cover identical date sets by construction, so no day present
/// in one can be dropped from the other.
#[must_use]
pub fn combine_daily_calories(
    cardio: &[CardioActivity],
    strength: &[StrengthActivity],
    range: &DateRange,
) -> DailySeries {
    let cardio_series = build_daily_series(cardio, range, |a| a.calories as f64, Fill::Zero);
    let strength_series = build_daily_series(strength, range, |a| a.calories as f64, Fill::Zero);

    cardio_series
        .into_iter()
        .zip(strength_series)
        .map(|(mut point, other)| {
            debug_assert_eq!(point.date, other.date);
            point.value = Some(point.value.unwrap_or(0.0) + other.value.unwrap_or(0.0));
            point
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sporttrack_core::date::Date;
    use uuid::Uuid;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn cardio(date: &str, calories: i64) -> CardioActivity {
        CardioActivity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            exercise_name: "Running".into(),
            date: d(date),
            minutes: 30,
            intensity: Intensity::High,
            calories,
        }
    }

    fn strength(date: &str, sets: i64, calories: i64) -> StrengthActivity {
        StrengthActivity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            exercise_name: "Squat".into(),
            date: d(date),
            sets,
            reps: 10,
            load_kg: 60.0,
            calories,
        }
    }

    #[test]
    fn test_cardio_formula_matches_met_table() {
        let settings = CalorieSettings::default();
        // round(10 × 80 × 30 / 60) = 400
        assert_eq!(cardio_calories(&settings, Intensity::High, 80.0, 30), 400);
        // round(4 × 70 × 45 / 60) = 210
        assert_eq!(cardio_calories(&settings, Intensity::Low, 70.0, 45), 210);
        // round(7 × 75 × 20 / 60) = round(175) = 175
        assert_eq!(cardio_calories(&settings, Intensity::Medium, 75.0, 20), 175);
    }

    #[test]
    fn test_cardio_formula_rounds_to_nearest() {
        let settings = CalorieSettings::default();
        // 7 × 71 × 10 / 60 = 82.83… → 83
        assert_eq!(cardio_calories(&settings, Intensity::Medium, 71.0, 10), 83);
    }

    #[test]
    fn test_strength_formula_default_constant() {
        let settings = CalorieSettings::default();
        assert_eq!(strength_calories(&settings, 4), 20);
        assert_eq!(strength_calories(&settings, 0), 0);
    }

    #[test]
    fn test_retuned_settings_change_results() {
        let settings = CalorieSettings {
            met_high: 12.0,
            calories_per_set: 8.0,
            ..CalorieSettings::default()
        };
        assert_eq!(cardio_calories(&settings, Intensity::High, 80.0, 30), 480);
        assert_eq!(strength_calories(&settings, 3), 24);
    }

    #[test]
    fn test_settings_validation() {
        assert!(CalorieSettings::default().is_valid());
        let broken = CalorieSettings {
            met_medium: 0.0,
            ..CalorieSettings::default()
        };
        assert!(!broken.is_valid());
    }

    #[test]
    fn test_combined_series_spec_example() {
        // Cardio 400 cal + strength 4 sets × 5 cal on the same day → 420
        let range = DateRange::new(d("2024-01-01"), d("2024-01-01"));
        let series = combine_daily_calories(
            &[cardio("2024-01-01", 400)],
            &[strength("2024-01-01", 4, 20)],
            &range,
        );

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, d("2024-01-01"));
        assert_eq!(series[0].value, Some(420.0));
    }

    #[test]
    fn test_combined_series_keeps_days_unique_to_one_side() {
        // Cardio only on the 1st, strength only on the 3rd: both days must
        // survive the merge, the 2nd stays zero.
        let range = DateRange::new(d("2024-01-01"), d("2024-01-03"));
        let series = combine_daily_calories(
            &[cardio("2024-01-01", 300)],
            &[strength("2024-01-03", 5, 25)],
            &range,
        );

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].value, Some(300.0));
        assert_eq!(series[1].value, Some(0.0));
        assert_eq!(series[2].value, Some(25.0));
    }

    #[test]
    fn test_combined_series_degenerate_range() {
        let range = DateRange::new(d("2024-01-05"), d("2024-01-01"));
        let series = combine_daily_calories(&[cardio("2024-01-03", 100)], &[], &range);
        assert!(series.is_empty());
    }
}
