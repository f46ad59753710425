// ABOUTME: Domain model module for training sessions and nutrition tracking
// ABOUTME: Re-exports session and nutrition types for flat import paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! Core data models for the Tartan platform.
//!
//! Training-side models live in [`session`], nutrition-side models in
//! [`nutrition`]. Derived fields (`calories_burned`, macro totals,
//! `total_calories`) are always recomputed by their owning model and never
//! trusted from callers.

/// Training session models and discipline enums
pub mod session;

/// Nutrition logs, items, and food reference data
pub mod nutrition;

pub use nutrition::{
    DayType, FoodCategory, FoodItem, FoodRegion, MealTiming, MealType, NutritionItem, NutritionLog,
};
pub use session::{
    AthleteType, Discipline, DisciplineDetail, DisciplineFamily, Intensity, SessionType,
    TrainingSession,
};

/// Round to two decimal places, the precision used for all derived
/// energy and macro fields.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_two_decimal_places() {
        assert!((round2(2.675_4) - 2.68).abs() < 1e-9);
        assert!((round2(489.999_9) - 490.0).abs() < 1e-9);
        assert!((round2(100.0) - 100.0).abs() < f64::EPSILON);
    }
}
