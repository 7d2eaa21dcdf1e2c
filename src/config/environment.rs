// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Environment-based configuration management for production deployment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory SQLite (tests and throwaway runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `DATABASE_URL`-style string
    #[must_use]
    pub fn parse(url: &str) -> Self {
        if url == "sqlite::memory:" || url == ":memory:" {
            Self::Memory
        } else {
            let path = url.strip_prefix("sqlite:").unwrap_or(url);
            Self::SQLite {
                path: PathBuf::from(path),
            }
        }
    }

    /// Render as an sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Where the database lives
    pub url: DatabaseUrl,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT token lifetime in hours
    pub jwt_expiry_hours: u32,
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database settings
    pub database: DatabaseConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

/// Default HTTP port when `PORT` is unset
const DEFAULT_HTTP_PORT: u16 = 3000;
/// Default database file when `DATABASE_URL` is unset
const DEFAULT_DATABASE_PATH: &str = "data/sporttrack.db";
/// Default JWT lifetime: 30 days, matching how long a session survives
/// on a personal device
const DEFAULT_JWT_EXPIRY_HOURS: u32 = 24 * 30;

impl ServerConfig {
    /// Load configuration from environment variables, applying defaults
    /// for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse (e.g. a
    /// non-numeric `PORT`)
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {value}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_default(),
        );

        let database_url = env::var("DATABASE_URL")
            .map_or_else(|_| DatabaseUrl::parse(DEFAULT_DATABASE_PATH), |url| DatabaseUrl::parse(&url));

        let jwt_expiry_hours = match env::var("JWT_EXPIRY_HOURS") {
            Ok(value) => value
                .parse::<u32>()
                .with_context(|| format!("Invalid JWT_EXPIRY_HOURS value: {value}"))?,
            Err(_) => DEFAULT_JWT_EXPIRY_HOURS,
        };

        Ok(Self {
            http_port,
            environment,
            database: DatabaseConfig { url: database_url },
            auth: AuthConfig { jwt_expiry_hours },
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} port={} database={} jwt_expiry={}h",
            self.environment,
            self.http_port,
            self.database.url.to_connection_string(),
            self.auth.jwt_expiry_hours
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("TESTING"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything-else"),
            Environment::Development
        );
    }

    #[test]
    fn test_database_url_parsing() {
        assert!(matches!(
            DatabaseUrl::parse("sqlite::memory:"),
            DatabaseUrl::Memory
        ));
        let file = DatabaseUrl::parse("sqlite:data/app.db");
        assert_eq!(file.to_connection_string(), "sqlite:data/app.db");
        // Bare paths are accepted too
        let bare = DatabaseUrl::parse("data/app.db");
        assert_eq!(bare.to_connection_string(), "sqlite:data/app.db");
    }
}
