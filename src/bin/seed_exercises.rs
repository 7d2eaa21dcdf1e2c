// ABOUTME: Seeds the system default exercise catalog
// ABOUTME: Idempotent: existing defaults are left alone on re-runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Tracker Pro

//! # Exercise Catalog Seeder
//!
//! Populates the database with the system default exercises every account
//! can log against. Safe to run repeatedly.

use anyhow::Result;
use clap::Parser;
use sporttrack_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    models::{Exercise, ExerciseType},
};
use tracing::info;

const CARDIO_EXERCISES: &[&str] = &[
    "Running",
    "Cycling",
    "Swimming",
    "Elliptical",
    "Rowing machine",
    "Walking",
    "Jump rope",
    "Stairs",
    "Stepper",
    "HIIT",
];

const STRENGTH_EXERCISES: &[&str] = &[
    "Bench press",
    "Squat",
    "Deadlift",
    "Overhead press",
    "Biceps curl",
    "Pull-ups",
    "Dips",
    "Barbell row",
    "Leg press",
    "Calf raise",
    "Incline bench press",
    "Leg curl",
];

#[derive(Parser)]
#[command(name = "seed-exercises")]
#[command(about = "Seed the system default exercise catalog")]
struct Args {
    /// Override the database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse(&database_url);
    }

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Seeding default exercises into {}", config.database.url.to_connection_string());

    let mut created = 0usize;
    for (names, exercise_type) in [
        (CARDIO_EXERCISES, ExerciseType::Cardio),
        (STRENGTH_EXERCISES, ExerciseType::Strength),
    ] {
        for name in names {
            if database
                .find_exercise(None, name, exercise_type)
                .await?
                .is_some()
            {
                continue;
            }
            let exercise = Exercise::system_default((*name).to_owned(), exercise_type);
            database.create_exercise(&exercise).await?;
            created += 1;
        }
    }

    info!(
        created,
        cardio = CARDIO_EXERCISES.len(),
        strength = STRENGTH_EXERCISES.len(),
        "Seed completed"
    );
    Ok(())
}
