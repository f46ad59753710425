// ABOUTME: Session energy, macro calorie, and BMR calculations
// ABOUTME: MET-based expenditure for the live path and Mifflin-St Jeor labels for the dataset path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! Nutrition Calculator Module
//!
//! Energy calculations used by both the live insight path and the offline
//! dataset pipeline.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - Ainsworth, B.E., et al. (2011). Compendium of physical activities.
//!   *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.
//!   <https://doi.org/10.1249/MSS.0b013e31821ece12>

use serde::{Deserialize, Serialize};

use tartan_core::models::{round2, DisciplineFamily, Intensity, SessionType};

use crate::physiological_constants::{bmr, dataset, energy};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male athlete (higher BMR offset)
    Male,
    /// Female athlete (lower BMR offset)
    Female,
}

impl Gender {
    /// Get display name for this gender
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Per-session energy expenditure from the MET formula:
/// `MET(intensity) x body_weight_kg x duration_hours`, rounded to two
/// decimals. This is the derived `calories_burned` value recomputed on
/// every session save.
#[must_use]
pub fn session_energy(intensity: Intensity, body_weight_kg: f64, duration_minutes: u32) -> f64 {
    round2(intensity.met() * body_weight_kg * (f64::from(duration_minutes) / 60.0))
}

/// Total calories from macro grams using the 4/4/9 kcal factors,
/// rounded to two decimals
#[must_use]
pub fn macro_calories(carbs_g: f64, protein_g: f64, fats_g: f64) -> f64 {
    round2(
        carbs_g * energy::KCAL_PER_G_CARBS
            + protein_g * energy::KCAL_PER_G_PROTEIN
            + fats_g * energy::KCAL_PER_G_FATS,
    )
}

/// Basal metabolic rate via Mifflin-St Jeor
#[must_use]
pub fn bmr_mifflin_st_jeor(gender: Gender, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let offset = match gender {
        Gender::Male => bmr::MALE_OFFSET,
        Gender::Female => bmr::FEMALE_OFFSET,
    };
    bmr::WEIGHT_FACTOR * weight_kg + bmr::HEIGHT_FACTOR * height_cm
        - bmr::AGE_FACTOR * f64::from(age_years)
        + offset
}

/// Discipline-family adjustment applied to the MET value by the dataset
/// label model (shorter explosive bursts burn less per minute)
#[must_use]
pub const fn family_met_factor(family: DisciplineFamily) -> f64 {
    match family {
        DisciplineFamily::Throws => dataset::THROWS_MET_FACTOR,
        DisciplineFamily::Jumps => dataset::JUMPS_MET_FACTOR,
        DisciplineFamily::Track => dataset::TRACK_MET_FACTOR,
    }
}

/// Noise-free dataset calorie label: daily energy (BMR scaled by the
/// intensity's activity multiplier) plus the family- and session-type-
/// adjusted MET burn for the session. Used only to synthesize training
/// labels for the external learning dataset, never on the live path.
#[must_use]
#[allow(clippy::too_many_arguments)] // Mirrors the label model's full feature row
pub fn dataset_target_calories(
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    intensity: Intensity,
    family: DisciplineFamily,
    session_type: SessionType,
    duration_minutes: u32,
) -> f64 {
    let tdee = bmr_mifflin_st_jeor(gender, weight_kg, height_cm, age_years)
        * intensity.activity_multiplier();
    let session_kcal = intensity.met()
        * family_met_factor(family)
        * weight_kg
        * (f64::from(duration_minutes) / 60.0);
    tdee + session_kcal * session_type.energy_factor()
}
