// ABOUTME: Router-level integration tests driving the API end to end
// ABOUTME: Register, login, log activities, and read statistics through oneshot requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use common::create_test_resources;
use serde_json::{json, Value as JsonValue};
use sporttrack_core::models::Role;
use sporttrack_server::server::HttpServer;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> JsonValue {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn post(uri: &str, token: Option<&str>, body: &JsonValue) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

/// Register a user and return their bearer token
async fn register(app: &Router, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(post(
            "/api/auth/register",
            None,
            &json!({ "email": email, "name": "Test User", "password": "testpassword" }),
        ))
        .await
        .expect("register");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["token"].as_str().expect("token").to_owned()
}

#[tokio::test]
async fn test_health_and_service_card() {
    let resources = create_test_resources().await.expect("resources");
    let app = HttpServer::new(resources).router();

    let response = app.clone().oneshot(get("/health", None)).await.expect("health");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");

    let response = app.oneshot(get("/", None)).await.expect("index");
    let body = body_json(response).await;
    assert_eq!(body["message"], "Sport Tracker Pro API");
}

#[tokio::test]
async fn test_register_login_flow() {
    let resources = create_test_resources().await.expect("resources");
    let app = HttpServer::new(resources).router();

    let token = register(&app, "athlete@example.com").await;
    assert!(!token.is_empty());

    // Duplicate registration is rejected
    let response = app
        .clone()
        .oneshot(post(
            "/api/auth/register",
            None,
            &json!({ "email": "athlete@example.com", "name": "Again", "password": "testpassword" }),
        ))
        .await
        .expect("duplicate register");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Login with the right password succeeds
    let response = app
        .clone()
        .oneshot(post(
            "/api/auth/login",
            None,
            &json!({ "email": "athlete@example.com", "password": "testpassword" }),
        ))
        .await
        .expect("login");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "athlete@example.com");

    // Wrong password is a 401 with the same shape as unknown email
    let response = app
        .clone()
        .oneshot(post(
            "/api/auth/login",
            None,
            &json!({ "email": "athlete@example.com", "password": "wrongpassword" }),
        ))
        .await
        .expect("bad login");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Protected routes refuse anonymous callers
    let response = app.oneshot(get("/api/profile", None)).await.expect("anon");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_calorie_series_end_to_end() {
    let resources = create_test_resources().await.expect("resources");
    let app = HttpServer::new(resources).router();
    let token = register(&app, "calories@example.com").await;

    // Body weight 80 kg feeds the MET formula
    let response = app
        .clone()
        .oneshot(post(
            "/api/weight",
            Some(&token),
            &json!({ "date": "2023-12-31", "weight_kg": 80.0 }),
        ))
        .await
        .expect("weight");
    assert_eq!(response.status(), StatusCode::OK);

    // High intensity, 30 minutes: round(10 × 80 × 30 / 60) = 400
    let response = app
        .clone()
        .oneshot(post(
            "/api/cardio",
            Some(&token),
            &json!({
                "date": "2024-01-01",
                "exercise_name": "Running",
                "minutes": 30,
                "intensity": "high"
            }),
        ))
        .await
        .expect("cardio");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["calories"], 400);

    // 4 sets at the default 5 cal/set adds 20
    let response = app
        .clone()
        .oneshot(post(
            "/api/strength",
            Some(&token),
            &json!({
                "date": "2024-01-01",
                "exercise_name": "Squat",
                "sets": 4,
                "reps": 10,
                "load_kg": 60.0
            }),
        ))
        .await
        .expect("strength");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["calories"], 20);

    // Combined series for the single day: 420
    let response = app
        .clone()
        .oneshot(get(
            "/api/stats/series?metric=calories&start=2024-01-01&end=2024-01-01",
            Some(&token),
        ))
        .await
        .expect("series");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let series = body["series"].as_array().expect("series array");
    assert_eq!(series.len(), 1);
    assert_eq!(series[0]["date"], "2024-01-01");
    assert_eq!(series[0]["value"], 420.0);
    assert_eq!(body["summary"]["total"], 420.0);
}

#[tokio::test]
async fn test_series_gap_filling_and_degenerate_range() {
    let resources = create_test_resources().await.expect("resources");
    let app = HttpServer::new(resources).router();
    let token = register(&app, "series@example.com").await;

    let response = app
        .clone()
        .oneshot(post(
            "/api/cardio",
            Some(&token),
            &json!({
                "date": "2024-01-03",
                "exercise_name": "Cycling",
                "minutes": 45,
                "intensity": "medium"
            }),
        ))
        .await
        .expect("cardio");
    assert_eq!(response.status(), StatusCode::OK);

    // A week with one session still renders seven buckets
    let response = app
        .clone()
        .oneshot(get(
            "/api/stats/series?metric=cardio_minutes&start=2024-01-01&end=2024-01-07",
            Some(&token),
        ))
        .await
        .expect("series");
    let body = body_json(response).await;
    let series = body["series"].as_array().expect("series array");
    assert_eq!(series.len(), 7);
    assert_eq!(series[2]["value"], 45.0);
    assert_eq!(series[0]["value"], 0.0);

    // Reversed bounds: empty series and a no-data summary, not an error
    let response = app
        .clone()
        .oneshot(get(
            "/api/stats/series?metric=cardio_minutes&start=2024-01-07&end=2024-01-01",
            Some(&token),
        ))
        .await
        .expect("degenerate series");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["series"].as_array().expect("series array").is_empty());
    assert!(body["summary"].is_null());

    // An unknown metric is a 400
    let response = app
        .oneshot(get(
            "/api/stats/series?metric=steps&start=2024-01-01&end=2024-01-07",
            Some(&token),
        ))
        .await
        .expect("bad metric");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_progression_endpoint() {
    let resources = create_test_resources().await.expect("resources");
    let app = HttpServer::new(resources).router();
    let token = register(&app, "progress@example.com").await;

    for (date, reps) in [("2024-01-01", 10), ("2024-01-08", 12)] {
        let response = app
            .clone()
            .oneshot(post(
                "/api/strength",
                Some(&token),
                &json!({
                    "date": date,
                    "exercise_name": "Squat",
                    "sets": 3,
                    "reps": reps,
                    "load_kg": 60.0
                }),
            ))
            .await
            .expect("strength");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(get(
            "/api/stats/progression?exercise=Squat&start=2024-01-01&end=2024-01-31",
            Some(&token),
        ))
        .await
        .expect("progression");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let entries = body.as_array().expect("entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["load_kg"], 60.0);
    assert_eq!(entries[0]["latest_total_reps"], 36);
    assert_eq!(entries[0]["delta_vs_previous"], 6);
    assert_eq!(entries[0]["delta_vs_first"], 6);
    assert_eq!(entries[0]["session_count"], 2);
}

#[tokio::test]
async fn test_admin_guard_and_calorie_settings() {
    let resources = create_test_resources().await.expect("resources");
    let app = HttpServer::new(resources.clone()).router();
    let token = register(&app, "admin@example.com").await;

    // A regular user is refused
    let response = app
        .clone()
        .oneshot(get("/api/admin/settings/calories", Some(&token)))
        .await
        .expect("settings as user");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Promote the account and retry
    let user = resources
        .database
        .get_user_by_email("admin@example.com")
        .await
        .expect("lookup")
        .expect("present");
    resources
        .database
        .update_role(user.id, Role::Admin)
        .await
        .expect("promote");

    let response = app
        .clone()
        .oneshot(get("/api/admin/settings/calories", Some(&token)))
        .await
        .expect("settings as admin");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["met_high"], 10.0);

    // Retune and verify new cardio logging uses the new constants
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/admin/settings/calories")
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::from(
                    json!({
                        "met_low": 4.0,
                        "met_medium": 7.0,
                        "met_high": 12.0,
                        "calories_per_set": 5.0
                    })
                    .to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("settings update");
    assert_eq!(response.status(), StatusCode::OK);

    // Default weight 70 kg: round(12 × 70 × 30 / 60) = 420
    let response = app
        .clone()
        .oneshot(post(
            "/api/cardio",
            Some(&token),
            &json!({
                "date": "2024-01-01",
                "exercise_name": "Running",
                "minutes": 30,
                "intensity": "high"
            }),
        ))
        .await
        .expect("cardio");
    let body = body_json(response).await;
    assert_eq!(body["calories"], 420);

    // Non-positive constants are rejected
    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/admin/settings/calories")
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::from(
                    json!({
                        "met_low": 0.0,
                        "met_medium": 7.0,
                        "met_high": 10.0,
                        "calories_per_set": 5.0
                    })
                    .to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("bad settings update");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
