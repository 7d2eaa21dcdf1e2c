// ABOUTME: Calendar-date value type with comparison, day arithmetic, and ISO-8601 formatting
// ABOUTME: Every date comparison and shift in the platform goes through this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Calendar dates without a time component.
//!
//! Activity records, weight entries, and statistics queries all operate on
//! whole calendar days. [`Date`] wraps [`chrono::NaiveDate`] and exposes the
//! small surface the platform needs: ISO-8601 parse/format, ordering, day
//! arithmetic, and inclusive-range iteration via [`DateRange`].

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar date (year, month, day) with no time component.
///
/// Serializes as an ISO-8601 date string (`"2024-01-31"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Build a date from year, month, day. Returns `None` for invalid
    /// combinations (e.g. February 30th).
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parse an ISO-8601 date string (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid calendar date.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::from_str(s).map(Self)
    }

    /// Shift by a number of days (negative shifts backwards). Saturates at
    /// the representable calendar bounds instead of wrapping.
    #[must_use]
    pub fn plus_days(self, days: i64) -> Self {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map_or(self, Self)
    }

    /// Signed number of days from `other` to `self`.
    #[must_use]
    pub fn days_since(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// Access the underlying `chrono` date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NaiveDate's Display is ISO-8601
        write!(f, "{}", self.0)
    }
}

impl FromStr for Date {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An inclusive range of calendar dates.
///
/// A range with `start > end` is degenerate: it contains no dates and
/// iterates zero times. Degenerate ranges are valid values, not errors —
/// callers that receive reversed bounds from user input get empty results
/// instead of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date in the range (inclusive)
    pub start: Date,
    /// Last date in the range (inclusive)
    pub end: Date,
}

impl DateRange {
    /// Build a range from two inclusive endpoints.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// The last `days` calendar days ending at `end` (inclusive).
    #[must_use]
    pub fn last_days(end: Date, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        Self {
            start: end.plus_days(-span),
            end,
        }
    }

    /// Number of calendar days in the range, inclusive on both ends.
    /// Zero for degenerate ranges.
    #[must_use]
    pub fn num_days(&self) -> u64 {
        if self.start > self.end {
            return 0;
        }
        // +1: both endpoints are included
        u64::try_from(self.end.days_since(self.start) + 1).unwrap_or(0)
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate every date in the range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        let count = self.num_days();
        let start = self.start;
        (0..count).map(move |offset| start.plus_days(i64::try_from(offset).unwrap_or(i64::MAX)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_format_round_trip() {
        let date = d("2024-01-31");
        assert_eq!(date.to_string(), "2024-01-31");
        assert_eq!(date, Date::from_ymd(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(Date::parse("2024-02-30").is_err());
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_day_arithmetic_crosses_month_boundary() {
        assert_eq!(d("2024-01-31").plus_days(1), d("2024-02-01"));
        assert_eq!(d("2024-03-01").plus_days(-1), d("2024-02-29")); // leap year
        assert_eq!(d("2024-02-01").days_since(d("2024-01-31")), 1);
    }

    #[test]
    fn test_range_num_days_inclusive() {
        let range = DateRange::new(d("2024-01-01"), d("2024-01-07"));
        assert_eq!(range.num_days(), 7);

        let single = DateRange::new(d("2024-01-01"), d("2024-01-01"));
        assert_eq!(single.num_days(), 1);
    }

    #[test]
    fn test_degenerate_range_is_empty() {
        let range = DateRange::new(d("2024-01-07"), d("2024-01-01"));
        assert_eq!(range.num_days(), 0);
        assert_eq!(range.iter().count(), 0);
        assert!(!range.contains(d("2024-01-03")));
    }

    #[test]
    fn test_range_iteration_is_ascending_and_complete() {
        let range = DateRange::new(d("2024-02-27"), d("2024-03-02"));
        let dates: Vec<String> = range.iter().map(|date| date.to_string()).collect();
        assert_eq!(
            dates,
            vec![
                "2024-02-27",
                "2024-02-28",
                "2024-02-29",
                "2024-03-01",
                "2024-03-02"
            ]
        );
    }

    #[test]
    fn test_last_days() {
        let range = DateRange::last_days(d("2024-01-07"), 7);
        assert_eq!(range.start, d("2024-01-01"));
        assert_eq!(range.num_days(), 7);

        // A zero-day request still produces a one-day range
        let clamped = DateRange::last_days(d("2024-01-07"), 0);
        assert_eq!(clamped.num_days(), 1);
    }

    #[test]
    fn test_range_contains_endpoints() {
        let range = DateRange::new(d("2024-01-01"), d("2024-01-31"));
        assert!(range.contains(d("2024-01-01")));
        assert!(range.contains(d("2024-01-31")));
        assert!(!range.contains(d("2024-02-01")));
        assert!(!range.contains(d("2023-12-31")));
    }
}
