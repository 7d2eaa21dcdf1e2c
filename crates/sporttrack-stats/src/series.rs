// ABOUTME: Gap-filled daily time series construction and summary statistics
// ABOUTME: One bucket per calendar date in range, summed per day, never skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Daily series with the no-gaps guarantee.
//!
//! [`build_daily_series`] allocates one bucket per calendar date in the
//! requested range, then folds every in-range record into its date's bucket
//! by summation. Days without records keep their fill value, so charts stay
//! honest about rest days. The function knows nothing about activity
//! categories: callers pick the records and the metric selector.

use serde::{Deserialize, Serialize};
use sporttrack_core::date::{Date, DateRange};
use sporttrack_core::models::{CardioActivity, StrengthActivity, WeightEntry};

/// A record that occurred on a calendar date
pub trait Dated {
    /// The day the record belongs to
    fn date(&self) -> Date;
}

impl Dated for CardioActivity {
    fn date(&self) -> Date {
        self.date
    }
}

impl Dated for StrengthActivity {
    fn date(&self) -> Date {
        self.date
    }
}

impl Dated for WeightEntry {
    fn date(&self) -> Date {
        self.date
    }
}

/// One bucket of a daily series. `value` is `None` only for gap days of
/// metrics without zero semantics (body weight).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    /// Calendar date of the bucket
    pub date: Date,
    /// Aggregated metric value, or `None` for a gap day
    pub value: Option<f64>,
}

/// An ordered, gap-free sequence of daily buckets
pub type DailySeries = Vec<DailyPoint>;

/// Fill value for days with no records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Empty days count as zero (minutes, sets, calories, volume)
    Zero,
    /// Empty days are gaps (metrics with no meaningful zero, e.g. weight)
    Gap,
}

impl Fill {
    const fn initial(self) -> Option<f64> {
        match self {
            Self::Zero => Some(0.0),
            Self::Gap => None,
        }
    }
}

/// Build a gap-filled daily series over `range`.
///
/// One bucket is produced per calendar date from `range.start` to
/// `range.end` inclusive, ascending. Every in-range record adds
/// `metric(record)` into its date's bucket — summation, never overwrite, so
/// two sessions on the same day both count. Out-of-range records are
/// ignored.
///
/// Edge behavior: an empty `records` slice yields an all-fill series;
/// `start == end` yields a single bucket; a degenerate range
/// (`start > end`) yields an empty series rather than an error.
pub fn build_daily_series<R, F>(
    records: &[R],
    range: &DateRange,
    metric: F,
    fill: Fill,
) -> DailySeries
where
    R: Dated,
    F: Fn(&R) -> f64,
{
    let days = usize::try_from(range.num_days()).unwrap_or(0);
    if days == 0 {
        tracing::debug!(start = %range.start, end = %range.end, "degenerate date range, returning empty series");
        return Vec::new();
    }
    let mut series: DailySeries = range
        .iter()
        .map(|date| DailyPoint {
            date,
            value: fill.initial(),
        })
        .collect();
    debug_assert_eq!(series.len(), days);

    for record in records {
        let date = record.date();
        if !range.contains(date) {
            continue;
        }
        let Ok(index) = usize::try_from(date.days_since(range.start)) else {
            continue;
        };
        if let Some(bucket) = series.get_mut(index) {
            let current = bucket.value.unwrap_or(0.0);
            bucket.value = Some(current + metric(record));
        }
    }

    series
}

/// Summary statistics over the numeric values of a daily series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Sum of all values
    pub total: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Largest value
    pub max: f64,
    /// Smallest value
    pub min: f64,
}

/// Summarize a daily series, ignoring gap buckets.
///
/// Returns `None` when no numeric values remain — the explicit no-data
/// result, never a division by zero or NaN.
#[must_use]
pub fn summarize(series: &[DailyPoint]) -> Option<SummaryStats> {
    let values: Vec<f64> = series.iter().filter_map(|point| point.value).collect();
    if values.is_empty() {
        return None;
    }

    let total: f64 = values.iter().sum();
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for &value in &values {
        max = max.max(value);
        min = min.min(value);
    }

    Some(SummaryStats {
        total,
        mean: total / values.len() as f64,
        max,
        min,
    })
}
