// ABOUTME: Statistics aggregation engine: gap-filled daily series, summaries, progression
// ABOUTME: Pure and synchronous; operates only on the record collections it is handed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! # Sport Tracker Statistics Engine
//!
//! Turns raw activity records into the series and summary statistics shown
//! to a user. Every function here is pure and synchronous: no shared state,
//! no I/O, no clock reads. Callers fetch the record collections (already
//! filtered to one user and, where relevant, one exercise) and hand them in
//! together with an inclusive [`DateRange`].
//!
//! The load-bearing guarantee is *gap-filling*: a daily series always has
//! exactly one entry per calendar date in range, so a day with no activity
//! renders as zero (or as a gap, for metrics like body weight that have no
//! meaningful zero) instead of being silently skipped.

/// MET-based calorie computation and the combined daily calorie series
pub mod calories;
/// Per-load strength progression comparisons
pub mod progression;
/// Gap-filled daily series construction and summary statistics
pub mod series;

pub use calories::{
    cardio_calories, combine_daily_calories, strength_calories, CalorieSettings,
};
pub use progression::{compute_load_progression, ProgressionEntry};
pub use series::{build_daily_series, summarize, DailyPoint, DailySeries, Dated, Fill, SummaryStats};
