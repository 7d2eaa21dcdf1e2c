// ABOUTME: Domain model module organization for the Sport Tracker platform
// ABOUTME: Re-exports users, exercises, activity records, and weight entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Common data models shared between the server and the statistics engine.

/// Cardio and strength activity records
pub mod activity;
/// Exercise catalog entries
pub mod exercise;
/// User accounts and roles
pub mod user;
/// Body-weight measurements
pub mod weight;

pub use activity::{CardioActivity, Intensity, StrengthActivity};
pub use exercise::{Exercise, ExerciseType};
pub use user::{Role, User};
pub use weight::WeightEntry;
