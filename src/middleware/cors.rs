// ABOUTME: CORS policy for the REST API
// ABOUTME: Permissive policy matching the single-page frontend deployment model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer applied to the whole router.
///
/// The API is consumed by a browser frontend served from a different
/// origin, so all origins, methods, and headers are allowed. Bearer tokens
/// ride in headers, not cookies, so the permissive policy carries no
/// credential risk.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
