// ABOUTME: Per-load strength progression: latest session vs previous vs first in period
// ABOUTME: Loads are grouped by exact numeric equality, heaviest group first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Strength progression comparisons.
//!
//! For one exercise over a period, sessions are grouped by the exact load
//! used and each group reports how the most recent session compares to the
//! one before it and to the first session of the period. Loads entered with
//! different precision (`60` vs `60.5`) form separate groups; any move to
//! tolerance-based grouping is a product decision, not a bug fix.

use serde::{Deserialize, Serialize};
use sporttrack_core::date::{Date, DateRange};
use sporttrack_core::models::StrengthActivity;
use std::collections::HashMap;

/// Progression summary for one load value within a period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionEntry {
    /// The load this group covers, in kilograms
    pub load_kg: f64,
    /// Date of the most recent session at this load
    pub latest_date: Date,
    /// Total repetitions (sets × reps) of the most recent session
    pub latest_total_reps: i64,
    /// Change in total reps versus the second most recent session;
    /// zero when the period holds fewer than two sessions at this load
    pub delta_vs_previous: i64,
    /// Change in total reps versus the earliest session in the period
    pub delta_vs_first: i64,
    /// Number of sessions at this load within the period
    pub session_count: usize,
}

/// Compute per-load progression for one exercise over `range`.
///
/// Records are filtered to `exercise_name` (exact match) and the range,
/// grouped by exact `load_kg` equality, and each group's sessions are
/// ordered date-ascending. Output groups are sorted heaviest first — a
/// presentation convenience, not a correctness requirement. No matching
/// records yields an empty vector, not an error.
#[must_use]
pub fn compute_load_progression(
    records: &[StrengthActivity],
    range: &DateRange,
    exercise_name: &str,
) -> Vec<ProgressionEntry> {
    // Group by the load's bit pattern: exact equality, no tolerance
    let mut groups: HashMap<u64, Vec<&StrengthActivity>> = HashMap::new();
    for record in records {
        if record.exercise_name == exercise_name && range.contains(record.date) {
            groups.entry(record.load_kg.to_bits()).or_default().push(record);
        }
    }

    let mut entries: Vec<ProgressionEntry> = groups
        .into_values()
        .map(|mut sessions| {
            sessions.sort_by_key(|s| s.date);

            // Groups are never empty: every entry was pushed above
            let latest = sessions[sessions.len() - 1];
            let first = sessions[0];
            let latest_total = latest.total_reps();

            let delta_vs_previous = if sessions.len() >= 2 {
                latest_total - sessions[sessions.len() - 2].total_reps()
            } else {
                0
            };

            ProgressionEntry {
                load_kg: latest.load_kg,
                latest_date: latest.date,
                latest_total_reps: latest_total,
                delta_vs_previous,
                delta_vs_first: latest_total - first.total_reps(),
                session_count: sessions.len(),
            }
        })
        .collect();

    // Heaviest first
    entries.sort_by(|a, b| {
        b.load_kg
            .partial_cmp(&a.load_kg)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn session(exercise: &str, date: &str, sets: i64, reps: i64, load_kg: f64) -> StrengthActivity {
        StrengthActivity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            exercise_name: exercise.into(),
            date: d(date),
            sets,
            reps,
            load_kg,
            calories: 0,
        }
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(d(start), d(end))
    }

    #[test]
    fn test_spec_example_two_sessions_one_load() {
        // Squat at 60 kg: 3×10 then 3×12 a week later
        let records = vec![
            session("Squat", "2024-01-01", 3, 10, 60.0),
            session("Squat", "2024-01-08", 3, 12, 60.0),
        ];
        let entries =
            compute_load_progression(&records, &range("2024-01-01", "2024-01-31"), "Squat");

        assert_eq!(entries.len(), 1);
        let entry = entries[0];
        assert!((entry.load_kg - 60.0).abs() < f64::EPSILON);
        assert_eq!(entry.latest_date, d("2024-01-08"));
        assert_eq!(entry.latest_total_reps, 36);
        assert_eq!(entry.delta_vs_previous, 6);
        assert_eq!(entry.delta_vs_first, 6);
        assert_eq!(entry.session_count, 2);
    }

    #[test]
    fn test_single_session_has_zero_previous_delta() {
        let records = vec![session("Squat", "2024-01-05", 4, 8, 80.0)];
        let entries =
            compute_load_progression(&records, &range("2024-01-01", "2024-01-31"), "Squat");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].delta_vs_previous, 0);
        assert_eq!(entries[0].delta_vs_first, 0);
        assert_eq!(entries[0].session_count, 1);
    }

    #[test]
    fn test_three_sessions_first_delta_spans_period() {
        let records = vec![
            session("Bench", "2024-01-01", 3, 8, 70.0),  // 24 reps
            session("Bench", "2024-01-08", 3, 10, 70.0), // 30 reps
            session("Bench", "2024-01-15", 4, 10, 70.0), // 40 reps
        ];
        let entries =
            compute_load_progression(&records, &range("2024-01-01", "2024-01-31"), "Bench");

        let entry = entries[0];
        assert_eq!(entry.latest_total_reps, 40);
        assert_eq!(entry.delta_vs_previous, 10);
        assert_eq!(entry.delta_vs_first, 16);
        assert_eq!(entry.session_count, 3);
    }

    #[test]
    fn test_groups_sorted_heaviest_first() {
        let records = vec![
            session("Squat", "2024-01-01", 3, 10, 60.0),
            session("Squat", "2024-01-02", 3, 8, 100.0),
            session("Squat", "2024-01-03", 3, 9, 80.0),
        ];
        let entries =
            compute_load_progression(&records, &range("2024-01-01", "2024-01-31"), "Squat");

        let loads: Vec<f64> = entries.iter().map(|e| e.load_kg).collect();
        assert_eq!(loads, vec![100.0, 80.0, 60.0]);
    }

    #[test]
    fn test_exact_load_equality_splits_groups() {
        // 60 and 60.5 are different groups; the literal source behavior
        let records = vec![
            session("Squat", "2024-01-01", 3, 10, 60.0),
            session("Squat", "2024-01-08", 3, 12, 60.5),
        ];
        let entries =
            compute_load_progression(&records, &range("2024-01-01", "2024-01-31"), "Squat");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_other_exercises_and_out_of_range_excluded() {
        let records = vec![
            session("Squat", "2024-01-05", 3, 10, 60.0),
            session("Bench", "2024-01-05", 3, 10, 60.0),
            session("Squat", "2024-02-05", 5, 5, 60.0),
        ];
        let entries =
            compute_load_progression(&records, &range("2024-01-01", "2024-01-31"), "Squat");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].session_count, 1);
        assert_eq!(entries[0].latest_total_reps, 30);
    }

    #[test]
    fn test_no_matching_records_yields_empty() {
        let records = vec![session("Bench", "2024-01-05", 3, 10, 60.0)];
        let entries =
            compute_load_progression(&records, &range("2024-01-01", "2024-01-31"), "Deadlift");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_degenerate_range_yields_empty() {
        let records = vec![session("Squat", "2024-01-05", 3, 10, 60.0)];
        let entries =
            compute_load_progression(&records, &range("2024-01-31", "2024-01-01"), "Squat");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_regression_reports_negative_deltas() {
        let records = vec![
            session("Squat", "2024-01-01", 4, 10, 60.0), // 40
            session("Squat", "2024-01-08", 3, 10, 60.0), // 30
        ];
        let entries =
            compute_load_progression(&records, &range("2024-01-01", "2024-01-31"), "Squat");
        assert_eq!(entries[0].delta_vs_previous, -10);
        assert_eq!(entries[0].delta_vs_first, -10);
    }
}
