// ABOUTME: Integration tests for weight entry database operations
// ABOUTME: Covers the current-weight side effect, latest-entry selection, and optional fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

mod common;

use common::{create_test_database, create_test_user};
use sporttrack_core::date::Date;
use sporttrack_core::models::WeightEntry;
use uuid::Uuid;

fn entry(user_id: Uuid, date: &str, weight_kg: f64) -> WeightEntry {
    WeightEntry {
        id: Uuid::new_v4(),
        user_id,
        date: Date::parse(date).expect("valid date"),
        weight_kg,
        body_fat_pct: None,
        muscle_mass_kg: None,
    }
}

#[tokio::test]
async fn test_insert_updates_current_user_weight() {
    let db = create_test_database().await.expect("test database");
    let user = create_test_user(&db).await.expect("create user");
    assert!((user.weight_kg - 70.0).abs() < f64::EPSILON);

    db.insert_weight(&entry(user.id, "2024-01-01", 82.5))
        .await
        .expect("insert weight");

    let updated = db.get_user(user.id).await.expect("get").expect("present");
    assert!((updated.weight_kg - 82.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_latest_weight_is_newest_by_date() {
    let db = create_test_database().await.expect("test database");
    let user = create_test_user(&db).await.expect("create user");

    db.insert_weight(&entry(user.id, "2024-01-10", 81.0))
        .await
        .expect("insert");
    db.insert_weight(&entry(user.id, "2024-01-01", 83.0))
        .await
        .expect("insert");

    let latest = db
        .latest_weight(user.id)
        .await
        .expect("fetch")
        .expect("present");
    assert_eq!(latest.date, Date::parse("2024-01-10").expect("valid date"));
    assert!((latest.weight_kg - 81.0).abs() < f64::EPSILON);

    let listed = db.list_weight(user.id).await.expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].date, latest.date);
}

#[tokio::test]
async fn test_optional_composition_fields_round_trip() {
    let db = create_test_database().await.expect("test database");
    let user = create_test_user(&db).await.expect("create user");

    let full = WeightEntry {
        id: Uuid::new_v4(),
        user_id: user.id,
        date: Date::parse("2024-01-01").expect("valid date"),
        weight_kg: 80.0,
        body_fat_pct: Some(19.5),
        muscle_mass_kg: Some(36.2),
    };
    db.insert_weight(&full).await.expect("insert");
    db.insert_weight(&entry(user.id, "2024-01-02", 80.2))
        .await
        .expect("insert sparse");

    let listed = db.list_weight(user.id).await.expect("list");
    let sparse = &listed[0];
    let measured = &listed[1];

    assert_eq!(sparse.body_fat_pct, None);
    assert_eq!(sparse.muscle_mass_kg, None);
    assert_eq!(measured.body_fat_pct, Some(19.5));
    assert_eq!(measured.muscle_mass_kg, Some(36.2));
}

#[tokio::test]
async fn test_no_entries_yields_none() {
    let db = create_test_database().await.expect("test database");
    let user = create_test_user(&db).await.expect("create user");

    assert!(db.latest_weight(user.id).await.expect("fetch").is_none());
    assert!(db.list_weight(user.id).await.expect("list").is_empty());
}
