// ABOUTME: Configuration module organization for the Sport Tracker server
// ABOUTME: Environment-based settings for port, database, and authentication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! Configuration management.

/// Environment-based configuration management
pub mod environment;

pub use environment::{AuthConfig, DatabaseConfig, DatabaseUrl, Environment, ServerConfig};
