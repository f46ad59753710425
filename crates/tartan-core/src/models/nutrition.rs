// ABOUTME: Nutrition tracking models for food intake analysis
// ABOUTME: NutritionLog, NutritionItem, and FoodItem reference data with derived macro totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::round2;

/// Kilocalories per gram of carbohydrate
const KCAL_PER_G_CARBS: f64 = 4.0;
/// Kilocalories per gram of protein
const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Kilocalories per gram of fat
const KCAL_PER_G_FATS: f64 = 9.0;

/// Kind of day a nutrition log belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Training day
    Training,
    /// Competition day
    Competition,
    /// Rest day
    Rest,
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string, falling back to `Snack`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

/// Timing of a meal relative to training
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealTiming {
    /// Before a training session
    PreTraining,
    /// After a training session
    PostTraining,
    /// Not tied to a session
    General,
}

/// Physical form of a food reference item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Weighed solid food
    Solid,
    /// Liquid measured by volume
    Liquid,
    /// Counted per piece
    Piece,
}

/// Regional catalog a food item belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodRegion {
    /// Global catalog
    Global,
    /// Kerala regional catalog
    Kerala,
}

/// Immutable food reference data, seeded by import tooling and read-only
/// to the analytics engine. Macro values are per 100 g.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique identifier for this food
    pub id: Uuid,
    /// Food name
    pub name: String,
    /// Physical form
    pub category: FoodCategory,
    /// Regional catalog
    pub region: FoodRegion,
    /// Calories per 100 g, when the source catalog provides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_per_100g: Option<f64>,
    /// Carbohydrates per 100 g
    pub carbs_per_100g: f64,
    /// Protein per 100 g
    pub protein_per_100g: f64,
    /// Fats per 100 g
    pub fats_per_100g: f64,
}

impl FoodItem {
    /// Case-insensitive substring match used by the food search collaborator
    #[must_use]
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// A quantity of a food item within a nutrition log. Macro fields are
/// derived from the food's per-100g values at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionItem {
    /// Reference to the food catalog entry
    pub food_id: Uuid,
    /// Food name captured at logging time
    pub food_name: String,
    /// Quantity consumed in grams
    pub quantity_g: f64,
    /// Derived carbohydrates in grams
    pub carbohydrates_g: f64,
    /// Derived protein in grams
    pub protein_g: f64,
    /// Derived fats in grams
    pub fats_g: f64,
}

impl NutritionItem {
    /// Build an item from reference data, deriving each macro as
    /// `per_100g x quantity / 100`, rounded to two decimals.
    #[must_use]
    pub fn from_food(food: &FoodItem, quantity_g: f64) -> Self {
        let factor = quantity_g / 100.0;
        Self {
            food_id: food.id,
            food_name: food.name.clone(),
            quantity_g,
            carbohydrates_g: round2(food.carbs_per_100g * factor),
            protein_g: round2(food.protein_per_100g * factor),
            fats_g: round2(food.fats_per_100g * factor),
        }
    }
}

/// A single logged meal with macro totals.
///
/// When items are present they are the source of truth: the log's macro
/// fields equal the sum of item macros. Logs without items (the legacy
/// manual-entry path) keep their own fields. `total_calories` is always
/// derived from the 4/4/9 kcal-per-gram factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLog {
    /// Unique identifier for this log entry
    pub id: Uuid,
    /// Owning athlete
    pub user_id: Uuid,
    /// Date of the meal
    pub date: NaiveDate,
    /// Kind of day this meal belongs to
    pub day_type: DayType,
    /// Meal slot
    pub meal_type: MealType,
    /// Timing relative to training
    pub timing: MealTiming,
    /// Hydration recorded with this log in liters
    pub hydration_liters: f64,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Carbohydrates in grams
    pub carbohydrates_g: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Fats in grams
    pub fats_g: f64,
    /// Total calories consumed (derived)
    pub total_calories: f64,
    /// Item-level entries; empty for manual-entry logs
    #[serde(default)]
    pub items: Vec<NutritionItem>,
}

impl NutritionLog {
    /// Recompute derived fields. When items exist, aggregate their macros
    /// into the log totals; in all cases recompute `total_calories` from
    /// the macro fields. Idempotent, called on every save and after any
    /// item change.
    pub fn update_totals(&mut self) {
        if !self.items.is_empty() {
            self.carbohydrates_g = round2(self.items.iter().map(|i| i.carbohydrates_g).sum());
            self.protein_g = round2(self.items.iter().map(|i| i.protein_g).sum());
            self.fats_g = round2(self.items.iter().map(|i| i.fats_g).sum());
        }
        self.total_calories = round2(
            self.carbohydrates_g * KCAL_PER_G_CARBS
                + self.protein_g * KCAL_PER_G_PROTEIN
                + self.fats_g * KCAL_PER_G_FATS,
        );
    }

    /// Add an item and recompute totals
    pub fn push_item(&mut self, item: NutritionItem) {
        self.items.push(item);
        self.update_totals();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, carbs: f64, protein: f64, fats: f64) -> FoodItem {
        FoodItem {
            id: Uuid::new_v4(),
            name: name.into(),
            category: FoodCategory::Solid,
            region: FoodRegion::Global,
            calories_per_100g: None,
            carbs_per_100g: carbs,
            protein_per_100g: protein,
            fats_per_100g: fats,
        }
    }

    fn empty_log() -> NutritionLog {
        NutritionLog {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            day_type: DayType::Training,
            meal_type: MealType::Lunch,
            timing: MealTiming::PostTraining,
            hydration_liters: 0.5,
            notes: None,
            carbohydrates_g: 0.0,
            protein_g: 0.0,
            fats_g: 0.0,
            total_calories: 0.0,
            items: Vec::new(),
        }
    }

    #[test]
    fn item_macros_derive_from_per_100g() {
        let rice = food("Basmati Rice", 28.0, 2.7, 0.3);
        let item = NutritionItem::from_food(&rice, 250.0);
        assert!((item.carbohydrates_g - 70.0).abs() < 1e-9);
        assert!((item.protein_g - 6.75).abs() < 1e-9);
        assert!((item.fats_g - 0.75).abs() < 1e-9);
    }

    #[test]
    fn items_are_source_of_truth_for_log_totals() {
        let mut log = empty_log();
        // Stale manual values that must be overwritten once items exist
        log.carbohydrates_g = 999.0;
        log.push_item(NutritionItem::from_food(&food("Oats", 60.0, 13.0, 7.0), 100.0));
        log.push_item(NutritionItem::from_food(&food("Whey", 8.0, 80.0, 6.0), 50.0));

        assert!((log.carbohydrates_g - 64.0).abs() < 1e-9);
        assert!((log.protein_g - 53.0).abs() < 1e-9);
        assert!((log.fats_g - 10.0).abs() < 1e-9);
        // 64*4 + 53*4 + 10*9 = 558
        assert!((log.total_calories - 558.0).abs() < 1e-9);
    }

    #[test]
    fn manual_entry_log_keeps_its_own_macros() {
        let mut log = empty_log();
        log.carbohydrates_g = 120.0;
        log.protein_g = 35.0;
        log.fats_g = 20.0;
        log.update_totals();
        assert!((log.carbohydrates_g - 120.0).abs() < 1e-9);
        // 120*4 + 35*4 + 20*9 = 800
        assert!((log.total_calories - 800.0).abs() < 1e-9);
    }

    #[test]
    fn update_totals_is_idempotent() {
        let mut log = empty_log();
        log.push_item(NutritionItem::from_food(&food("Banana", 23.0, 1.1, 0.3), 118.0));
        let (c, p, f, k) = (
            log.carbohydrates_g,
            log.protein_g,
            log.fats_g,
            log.total_calories,
        );
        log.update_totals();
        log.update_totals();
        assert!((log.carbohydrates_g - c).abs() < f64::EPSILON);
        assert!((log.protein_g - p).abs() < f64::EPSILON);
        assert!((log.fats_g - f).abs() < f64::EPSILON);
        assert!((log.total_calories - k).abs() < f64::EPSILON);
    }

    #[test]
    fn fuzzy_food_name_match() {
        let item = food("Whole Wheat Chapati", 46.0, 11.0, 5.0);
        assert!(item.matches_name("chapati"));
        assert!(item.matches_name("WHEAT"));
        assert!(!item.matches_name("rice"));
    }
}
