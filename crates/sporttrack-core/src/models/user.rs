// ABOUTME: User account model with role-based access levels
// ABOUTME: Holds credentials hash, profile fields, and the current body weight used for calorie math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default body weight (kg) assigned to new accounts until the first
/// weight entry is logged.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

/// Access level of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account: owns and manages only its own data
    User,
    /// Administrator: manages users and runtime calorie settings
    Admin,
}

impl Role {
    /// Database / wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse a stored role string. Unknown values degrade to `User` so a
    /// corrupted row can never grant admin access.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }

    /// Whether this role grants administrative access
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Email address (unique across accounts)
    pub email: String,
    /// Display name
    pub name: String,
    /// Bcrypt password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Access level
    pub role: Role,
    /// Current body weight in kilograms, kept in sync with the most recent
    /// weight entry and used for cardio calorie computation
    pub weight_kg: f64,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Most recent login, if any
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new regular user with the default body weight
    #[must_use]
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            role: Role::User,
            weight_kg: DEFAULT_WEIGHT_KG,
            created_at: Utc::now(),
            last_login: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "athlete@example.com".into(),
            "Athlete".into(),
            "hashed".into(),
        );
        assert_eq!(user.role, Role::User);
        assert!((user.weight_kg - DEFAULT_WEIGHT_KG).abs() < f64::EPSILON);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_unknown_role_never_grants_admin() {
        assert_eq!(Role::from_str_or_default("superuser"), Role::User);
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
        assert!(!Role::from_str_or_default("garbage").is_admin());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("a@example.com".into(), "A".into(), "secret-hash".into());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
