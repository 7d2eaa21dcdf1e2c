// ABOUTME: Core types for the Sport Tracker platform
// ABOUTME: Calendar-date value type, unified error taxonomy, and shared domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! # Sport Tracker Core
//!
//! Foundation crate for the Sport Tracker platform. Holds the types shared
//! between the HTTP server and the statistics engine:
//!
//! - [`date`] — the single calendar-date value type used everywhere dates
//!   are compared, shifted, or iterated
//! - [`errors`] — unified error handling with standard error codes and
//!   HTTP response formatting (behind the `http-response` feature)
//! - [`models`] — domain models for users, exercises, activities, and
//!   body-weight entries

/// Calendar-date value type and inclusive date ranges
pub mod date;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Common data models for users, exercises, and activity records
pub mod models;

pub use date::{Date, DateRange};
pub use errors::{AppError, AppResult, ErrorCode};
