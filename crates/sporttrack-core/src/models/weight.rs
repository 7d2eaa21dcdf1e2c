// ABOUTME: Body-weight measurement model with optional composition fields
// ABOUTME: Absent composition values mean "not measured", never zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use crate::date::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One body-weight measurement.
///
/// Body-fat percentage and muscle mass come from smart scales and are often
/// absent. An absent value is "not measured": deltas against it are reported
/// as absent too, since zero would falsely read as "no change".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Day of the measurement
    pub date: Date,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage, if measured
    pub body_fat_pct: Option<f64>,
    /// Muscle mass in kilograms, if measured
    pub muscle_mass_kg: Option<f64>,
}

impl WeightEntry {
    /// Change in body weight versus an earlier entry
    #[must_use]
    pub fn weight_delta(&self, earlier: &Self) -> f64 {
        self.weight_kg - earlier.weight_kg
    }

    /// Change in body fat versus an earlier entry; `None` when either
    /// measurement is absent.
    #[must_use]
    pub fn body_fat_delta(&self, earlier: &Self) -> Option<f64> {
        Some(self.body_fat_pct? - earlier.body_fat_pct?)
    }

    /// Change in muscle mass versus an earlier entry; `None` when either
    /// measurement is absent.
    #[must_use]
    pub fn muscle_mass_delta(&self, earlier: &Self) -> Option<f64> {
        Some(self.muscle_mass_kg? - earlier.muscle_mass_kg?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(weight: f64, fat: Option<f64>) -> WeightEntry {
        WeightEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: Date::from_ymd(2024, 1, 1).unwrap(),
            weight_kg: weight,
            body_fat_pct: fat,
            muscle_mass_kg: None,
        }
    }

    #[test]
    fn test_missing_composition_yields_absent_delta() {
        let current = entry(80.0, Some(20.0));
        let earlier = entry(82.0, None);

        assert!((current.weight_delta(&earlier) - -2.0).abs() < f64::EPSILON);
        // One side unmeasured: absent, not zero
        assert_eq!(current.body_fat_delta(&earlier), None);
        assert_eq!(current.muscle_mass_delta(&earlier), None);
    }

    #[test]
    fn test_present_composition_delta() {
        let current = entry(80.0, Some(19.5));
        let earlier = entry(80.0, Some(21.0));
        let delta = current.body_fat_delta(&earlier).unwrap();
        assert!((delta - -1.5).abs() < f64::EPSILON);
    }
}
