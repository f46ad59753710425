// ABOUTME: Shared test utilities and builders for integration tests
// ABOUTME: Provides in-memory history setup, session/log builders, and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics
#![allow(dead_code)]

//! Shared test utilities for the Tartan integration suites.

use std::sync::Once;

use chrono::NaiveDate;
use uuid::Uuid;

use tartan::core::models::{
    DayType, Discipline, DisciplineDetail, Intensity, MealTiming, MealType, NutritionLog,
    SessionType, TrainingSession,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Date within the test month
pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, day).unwrap()
}

fn base_session(
    user: Uuid,
    day: u32,
    discipline: Discipline,
    detail: Option<DisciplineDetail>,
) -> TrainingSession {
    TrainingSession {
        id: Uuid::new_v4(),
        user_id: user,
        date: date(day),
        discipline,
        session_type: SessionType::Training,
        athlete_type: discipline.athlete_type(),
        duration_minutes: 60,
        intensity: Intensity::Moderate,
        rpe: Some(6),
        calories_burned: 0.0,
        notes: None,
        detail,
    }
}

/// Runner session with the given effort time
pub fn runner_session(user: Uuid, day: u32, time_seconds: f64) -> TrainingSession {
    base_session(
        user,
        day,
        Discipline::Sprint400m,
        Some(DisciplineDetail::Runner {
            distance_m: 400.0,
            time_seconds,
            repetitions: 3,
        }),
    )
}

/// Jumper session with the given best jump
pub fn jumper_session(user: Uuid, day: u32, best_jump_m: f64) -> TrainingSession {
    base_session(
        user,
        day,
        Discipline::LongJump,
        Some(DisciplineDetail::Jumper {
            attempts: 6,
            best_jump_m,
        }),
    )
}

/// Thrower session with the given implement weight and best throw
pub fn thrower_session(
    user: Uuid,
    day: u32,
    implement_weight_kg: f64,
    best_throw_m: f64,
) -> TrainingSession {
    base_session(
        user,
        day,
        Discipline::ShotPut,
        Some(DisciplineDetail::Thrower {
            implement_weight_kg,
            attempts: 4,
            best_throw_m,
        }),
    )
}

/// Training-day nutrition log with manual macro entry
pub fn nutrition_log(user: Uuid, day: u32, carbs_g: f64, protein_g: f64) -> NutritionLog {
    NutritionLog {
        id: Uuid::new_v4(),
        user_id: user,
        date: date(day),
        day_type: DayType::Training,
        meal_type: MealType::Lunch,
        timing: MealTiming::PostTraining,
        hydration_liters: 2.0,
        notes: None,
        carbohydrates_g: carbs_g,
        protein_g,
        fats_g: 20.0,
        total_calories: 0.0,
        items: Vec::new(),
    }
}
