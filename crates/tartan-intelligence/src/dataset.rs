// ABOUTME: Offline dataset rows for the external learning pipeline
// ABOUTME: Real-history conversion with defaults, plausibility filters, and clamped labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! # Dataset Support
//!
//! Batch-only support for synthesizing and augmenting the external learning
//! dataset. Everything here is deterministic: the seeder binary owns the
//! random sampling and noise, this module owns row construction, the
//! plausibility filters, and the label model. None of it runs on the live
//! insight path.

use serde::{Deserialize, Serialize};

use tartan_core::models::{Discipline, Intensity, SessionType, TrainingSession};

use crate::nutrition_calculator::{dataset_target_calories, Gender};
use crate::physiological_constants::dataset::{
    defaults, plausibility, LABEL_MAX_KCAL, LABEL_MIN_KCAL,
};

/// Athlete profile fields consumed by the dataset pipeline. Every field is
/// optional; missing values fall back to the documented defaults before
/// filtering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Age in years
    pub age_years: Option<u32>,
    /// Gender for the BMR term
    pub gender: Option<Gender>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
}

/// One ML-ready dataset row. `target_calories` is filled by
/// [`DatasetRow::label`] once the noise factor is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Athlete age in years
    pub age: u32,
    /// Athlete gender
    pub gender: Gender,
    /// Athlete height in cm
    pub height_cm: f64,
    /// Athlete weight in kg
    pub weight_kg: f64,
    /// Session discipline
    pub discipline: Discipline,
    /// Session type
    pub session_type: SessionType,
    /// Session duration in minutes
    pub duration_minutes: u32,
    /// Session intensity
    pub intensity: Intensity,
    /// Distance covered in meters (0 for non-track work)
    pub distance_m: u32,
    /// Repetitions or attempts in the session
    pub effort_count: u32,
    /// Synthesized calorie label in kcal; 0 until labeled
    pub target_calories: u32,
}

impl DatasetRow {
    /// Build an unlabeled row from a profile and a logged session, applying
    /// the documented defaults for missing values. Returns `None` when the
    /// completed row fails the plausibility filters.
    #[must_use]
    pub fn from_history(profile: &AthleteProfile, session: &TrainingSession) -> Option<Self> {
        let (distance_m, effort_count) = match &session.detail {
            Some(tartan_core::models::DisciplineDetail::Runner {
                distance_m,
                repetitions,
                ..
            }) => (distance_m.max(0.0).round() as u32, *repetitions),
            Some(tartan_core::models::DisciplineDetail::Jumper { attempts, .. }
            | tartan_core::models::DisciplineDetail::Thrower { attempts, .. }) => (0, *attempts),
            None => (0, defaults::EFFORT_COUNT),
        };

        let row = Self {
            age: profile.age_years.unwrap_or(defaults::AGE_YEARS),
            gender: profile.gender.unwrap_or(Gender::Male),
            height_cm: profile.height_cm.unwrap_or(defaults::HEIGHT_CM),
            weight_kg: profile.weight_kg.unwrap_or(defaults::WEIGHT_KG),
            discipline: session.discipline,
            session_type: session.session_type,
            duration_minutes: if session.duration_minutes == 0 {
                defaults::DURATION_MINUTES
            } else {
                session.duration_minutes
            },
            intensity: session.intensity,
            distance_m,
            effort_count,
            target_calories: 0,
        };
        row.is_plausible().then_some(row)
    }

    /// Whether the row passes the plausibility ranges the pipeline enforces
    /// before labeling (impossible rows would poison the learned model)
    #[must_use]
    pub fn is_plausible(&self) -> bool {
        let (h_lo, h_hi) = plausibility::HEIGHT_CM;
        let (w_lo, w_hi) = plausibility::WEIGHT_KG;
        let (a_lo, a_hi) = plausibility::AGE_YEARS;
        let (d_lo, d_hi) = plausibility::DURATION_MINUTES;
        (h_lo..=h_hi).contains(&self.height_cm)
            && (w_lo..=w_hi).contains(&self.weight_kg)
            && (a_lo..=a_hi).contains(&self.age)
            && (d_lo..=d_hi).contains(&self.duration_minutes)
    }

    /// Noise-free calorie label for this row's features
    #[must_use]
    pub fn base_label(&self) -> f64 {
        dataset_target_calories(
            self.gender,
            self.weight_kg,
            self.height_cm,
            self.age,
            self.intensity,
            self.discipline.family(),
            self.session_type,
            self.duration_minutes,
        )
    }

    /// Apply a multiplicative noise factor to the base label and store the
    /// clamped integer result. `noise` is the signed fraction the seeder
    /// sampled (e.g. 0.02 for +2%).
    pub fn label(&mut self, noise: f64) {
        let noisy = self.base_label() * (1.0 + noise);
        self.target_calories = noisy.clamp(LABEL_MIN_KCAL, LABEL_MAX_KCAL).round() as u32;
    }

    /// CSV header matching [`Self::to_csv_record`]
    #[must_use]
    pub const fn csv_header() -> &'static str {
        "age,gender,height_cm,weight_kg,discipline,session_type,duration_minutes,intensity,distance_m,effort_count,target_calories"
    }

    /// Render this row as a CSV record in header order
    #[must_use]
    pub fn to_csv_record(&self) -> String {
        format!(
            "{},{},{:.1},{:.1},{},{:?},{},{:?},{},{},{}",
            self.age,
            self.gender.display_name(),
            self.height_cm,
            self.weight_kg,
            self.discipline.display_name(),
            self.session_type,
            self.duration_minutes,
            self.intensity,
            self.distance_m,
            self.effort_count,
            self.target_calories,
        )
    }
}
