// ABOUTME: Statistics route handlers: daily dashboard, gap-filled series, load progression
// ABOUTME: Handlers fetch the caller's records and delegate all aggregation to sporttrack-stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Statistics routes.
//!
//! The handlers here own fetching and parameter parsing; every aggregation
//! decision (gap filling, summation, progression deltas) lives in the pure
//! `sporttrack-stats` crate. A degenerate range (`start > end`) is answered
//! with an empty series and no-data summary, not an error.

use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sporttrack_core::date::{Date, DateRange};
use sporttrack_core::errors::AppError;
use sporttrack_core::models::{CardioActivity, StrengthActivity, WeightEntry};
use sporttrack_stats::{
    build_daily_series, combine_daily_calories, compute_load_progression, summarize, DailySeries,
    Fill, ProgressionEntry, SummaryStats,
};
use std::sync::Arc;
use uuid::Uuid;

/// The metric a daily series is built over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMetric {
    /// Combined cardio + strength calories
    Calories,
    /// Cardio minutes
    CardioMinutes,
    /// Strength sets
    StrengthSets,
    /// Strength volume (sets × reps × load)
    Volume,
    /// Body weight (gap-filled with nulls)
    Weight,
}

impl SeriesMetric {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "calories" => Some(Self::Calories),
            "cardio_minutes" => Some(Self::CardioMinutes),
            "strength_sets" => Some(Self::StrengthSets),
            "volume" => Some(Self::Volume),
            "weight" => Some(Self::Weight),
            _ => None,
        }
    }
}

/// Query parameters for the series endpoint
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// Metric name (`calories`, `cardio_minutes`, `strength_sets`,
    /// `volume`, `weight`)
    pub metric: String,
    /// Range start (ISO-8601 date, inclusive)
    pub start: String,
    /// Range end (ISO-8601 date, inclusive)
    pub end: String,
    /// Optional exercise-name filter for activity metrics
    pub exercise: Option<String>,
}

/// Series endpoint response
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    /// The metric the series was built over
    pub metric: SeriesMetric,
    /// Gap-filled daily buckets, one per date in range
    pub series: DailySeries,
    /// Summary over the numeric values; absent when no data
    pub summary: Option<SummaryStats>,
}

/// Query parameters for the progression endpoint
#[derive(Debug, Deserialize)]
pub struct ProgressionQuery {
    /// Exercise name (exact match)
    pub exercise: String,
    /// Range start (ISO-8601 date, inclusive)
    pub start: String,
    /// Range end (ISO-8601 date, inclusive)
    pub end: String,
}

/// Query parameters for the dashboard endpoint
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Day to display; defaults to today
    pub date: Option<String>,
}

/// Dashboard endpoint response: one day's activity plus the latest weight
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    /// The day displayed
    pub date: Date,
    /// Cardio sessions on that day
    pub cardio: Vec<CardioActivity>,
    /// Strength sessions on that day
    pub strength: Vec<StrengthActivity>,
    /// Most recent weight entry, regardless of day
    pub weight: Option<WeightEntry>,
}

fn parse_range(start: &str, end: &str) -> Result<DateRange, AppError> {
    let start = Date::parse(start).map_err(|_| AppError::invalid_input("Invalid start date"))?;
    let end = Date::parse(end).map_err(|_| AppError::invalid_input("Invalid end date"))?;
    Ok(DateRange::new(start, end))
}

/// Statistics routes implementation
pub struct StatsRoutes;

impl StatsRoutes {
    /// Create all statistics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/stats/dashboard", get(Self::handle_dashboard))
            .route("/api/stats/series", get(Self::handle_series))
            .route("/api/stats/progression", get(Self::handle_progression))
            .with_state(resources)
    }

    async fn fetch_cardio(
        resources: &Arc<ServerResources>,
        user_id: Uuid,
        range: &DateRange,
        exercise: Option<&str>,
    ) -> Result<Vec<CardioActivity>, AppError> {
        let mut records = resources
            .database
            .list_cardio(user_id, Some(range))
            .await
            .map_err(|e| AppError::database(format!("Activity fetch failed: {e}")))?;
        if let Some(name) = exercise {
            records.retain(|a| a.exercise_name == name);
        }
        Ok(records)
    }

    async fn fetch_strength(
        resources: &Arc<ServerResources>,
        user_id: Uuid,
        range: &DateRange,
        exercise: Option<&str>,
    ) -> Result<Vec<StrengthActivity>, AppError> {
        let mut records = resources
            .database
            .list_strength(user_id, Some(range))
            .await
            .map_err(|e| AppError::database(format!("Activity fetch failed: {e}")))?;
        if let Some(name) = exercise {
            records.retain(|a| a.exercise_name == name);
        }
        Ok(records)
    }

    #[tracing::instrument(skip(resources, headers, query), fields(route = "stats_series"))]
    async fn handle_series(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<SeriesQuery>,
    ) -> Result<Json<SeriesResponse>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        let metric = SeriesMetric::parse(&query.metric)
            .ok_or_else(|| AppError::invalid_input("Unknown metric"))?;
        let range = parse_range(&query.start, &query.end)?;
        let exercise = query.exercise.as_deref();

        let series = match metric {
            SeriesMetric::Calories => {
                // Both collections come from the same store snapshot and
                // are merged date-aligned by the stats engine
                let cardio = Self::fetch_cardio(&resources, auth.user_id, &range, None).await?;
                let strength = Self::fetch_strength(&resources, auth.user_id, &range, None).await?;
                combine_daily_calories(&cardio, &strength, &range)
            }
            SeriesMetric::CardioMinutes => {
                let cardio = Self::fetch_cardio(&resources, auth.user_id, &range, exercise).await?;
                build_daily_series(&cardio, &range, |a| a.minutes as f64, Fill::Zero)
            }
            SeriesMetric::StrengthSets => {
                let strength =
                    Self::fetch_strength(&resources, auth.user_id, &range, exercise).await?;
                build_daily_series(&strength, &range, |a| a.sets as f64, Fill::Zero)
            }
            SeriesMetric::Volume => {
                let strength =
                    Self::fetch_strength(&resources, auth.user_id, &range, exercise).await?;
                build_daily_series(&strength, &range, StrengthActivity::volume, Fill::Zero)
            }
            SeriesMetric::Weight => {
                let entries = resources
                    .database
                    .list_weight(auth.user_id)
                    .await
                    .map_err(|e| AppError::database(format!("Weight fetch failed: {e}")))?;
                // Body weight has no meaningful zero: gap days stay null
                build_daily_series(&entries, &range, |w| w.weight_kg, Fill::Gap)
            }
        };

        let summary = summarize(&series);
        Ok(Json(SeriesResponse {
            metric,
            series,
            summary,
        }))
    }

    #[tracing::instrument(skip(resources, headers, query), fields(route = "stats_progression"))]
    async fn handle_progression(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<ProgressionQuery>,
    ) -> Result<Json<Vec<ProgressionEntry>>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        if query.exercise.trim().is_empty() {
            return Err(AppError::invalid_input("Exercise name is required"));
        }
        let range = parse_range(&query.start, &query.end)?;

        let records = Self::fetch_strength(&resources, auth.user_id, &range, None).await?;
        let entries = compute_load_progression(&records, &range, &query.exercise);

        Ok(Json(entries))
    }

    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<DashboardQuery>,
    ) -> Result<Json<DashboardResponse>, AppError> {
        let auth = resources.auth_middleware.authenticate_request(&headers)?;

        let date = match query.date.as_deref() {
            Some(raw) => Date::parse(raw).map_err(|_| AppError::invalid_input("Invalid date"))?,
            None => Date::today(),
        };

        let cardio = resources
            .database
            .cardio_on(auth.user_id, date)
            .await
            .map_err(|e| AppError::database(format!("Activity fetch failed: {e}")))?;
        let strength = resources
            .database
            .strength_on(auth.user_id, date)
            .await
            .map_err(|e| AppError::database(format!("Activity fetch failed: {e}")))?;
        let weight = resources
            .database
            .latest_weight(auth.user_id)
            .await
            .map_err(|e| AppError::database(format!("Weight fetch failed: {e}")))?;

        Ok(Json(DashboardResponse {
            date,
            cardio,
            strength,
            weight,
        }))
    }
}
