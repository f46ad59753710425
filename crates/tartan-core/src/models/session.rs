// ABOUTME: Training session models including the per-discipline detail sum type
// ABOUTME: Discipline, athlete type, session type, and intensity enums with MET mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::round2;
use crate::errors::{AppError, AppResult};

/// Coarse athlete category determining which metric and detail schema applies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AthleteType {
    /// Track athlete, primary metric is time (lower is better)
    Runner,
    /// Horizontal/vertical jumps, primary metric is distance (higher is better)
    Jumper,
    /// Throwing events, primary metric is distance (higher is better)
    Thrower,
}

impl AthleteType {
    /// Parse athlete type from string, falling back to `Runner`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "jumper" => Self::Jumper,
            "thrower" => Self::Thrower,
            _ => Self::Runner,
        }
    }

    /// Get display name for this athlete type
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Runner => "Runner",
            Self::Jumper => "Jumper",
            Self::Thrower => "Thrower",
        }
    }
}

/// Discipline family grouping used by the energy model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DisciplineFamily {
    /// Sprints and middle distance
    Track,
    /// Horizontal and vertical jumps
    Jumps,
    /// Throwing events
    Throws,
}

/// A specific track-and-field event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// 100m sprint
    Sprint100m,
    /// 200m sprint
    Sprint200m,
    /// 400m sprint
    Sprint400m,
    /// 800m run
    Run800m,
    /// 1500m run
    Run1500m,
    /// Long jump
    LongJump,
    /// High jump
    HighJump,
    /// Triple jump
    TripleJump,
    /// Shot put
    ShotPut,
    /// Discus throw
    Discus,
    /// Javelin throw
    Javelin,
    /// Hammer throw
    Hammer,
}

impl Discipline {
    /// Get the discipline family for this event
    #[must_use]
    pub const fn family(self) -> DisciplineFamily {
        match self {
            Self::Sprint100m | Self::Sprint200m | Self::Sprint400m | Self::Run800m
            | Self::Run1500m => DisciplineFamily::Track,
            Self::LongJump | Self::HighJump | Self::TripleJump => DisciplineFamily::Jumps,
            Self::ShotPut | Self::Discus | Self::Javelin | Self::Hammer => DisciplineFamily::Throws,
        }
    }

    /// Coarse athlete category this event belongs to
    #[must_use]
    pub const fn athlete_type(self) -> AthleteType {
        match self.family() {
            DisciplineFamily::Track => AthleteType::Runner,
            DisciplineFamily::Jumps => AthleteType::Jumper,
            DisciplineFamily::Throws => AthleteType::Thrower,
        }
    }

    /// Get display name for this discipline
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sprint100m => "100m Sprint",
            Self::Sprint200m => "200m Sprint",
            Self::Sprint400m => "400m Sprint",
            Self::Run800m => "800m Run",
            Self::Run1500m => "1500m Run",
            Self::LongJump => "Long Jump",
            Self::HighJump => "High Jump",
            Self::TripleJump => "Triple Jump",
            Self::ShotPut => "Shot Put",
            Self::Discus => "Discus Throw",
            Self::Javelin => "Javelin Throw",
            Self::Hammer => "Hammer Throw",
        }
    }
}

/// Kind of session being logged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Regular training session
    Training,
    /// Competition day
    Competition,
    /// Active recovery session
    Recovery,
}

impl SessionType {
    /// Energy adjustment applied by the offline dataset label model
    #[must_use]
    pub const fn energy_factor(self) -> f64 {
        match self {
            Self::Training => 1.00,
            Self::Competition => 1.10,
            Self::Recovery => 0.75,
        }
    }
}

/// Subjective session intensity, mapped to a MET value for energy estimation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Low intensity work (MET 4)
    Low,
    /// Moderate intensity work (MET 7)
    Moderate,
    /// High intensity work (MET 10)
    High,
}

impl Intensity {
    /// Metabolic equivalent of task for this intensity
    #[must_use]
    pub const fn met(self) -> f64 {
        match self {
            Self::Low => 4.0,
            Self::Moderate => 7.0,
            Self::High => 10.0,
        }
    }

    /// Daily activity multiplier used by the offline dataset label model
    #[must_use]
    pub const fn activity_multiplier(self) -> f64 {
        match self {
            Self::Low => 1.375,
            Self::Moderate => 1.55,
            Self::High => 1.725,
        }
    }
}

/// Per-discipline session detail, exactly one variant per session,
/// keyed by the session's athlete type.
///
/// Modeled as a sum type so consumers pattern-match instead of probing
/// optional child relations at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisciplineDetail {
    /// Track session detail
    Runner {
        /// Distance covered per repetition in meters
        distance_m: f64,
        /// Time for the measured effort in seconds
        time_seconds: f64,
        /// Number of repetitions
        repetitions: u32,
    },
    /// Jump session detail
    Jumper {
        /// Number of attempts taken
        attempts: u32,
        /// Best jump of the session in meters
        best_jump_m: f64,
    },
    /// Throw session detail
    Thrower {
        /// Weight of the implement in kilograms
        implement_weight_kg: f64,
        /// Number of attempts taken
        attempts: u32,
        /// Best throw of the session in meters
        best_throw_m: f64,
    },
}

impl DisciplineDetail {
    /// Athlete type this detail variant belongs to
    #[must_use]
    pub const fn athlete_type(&self) -> AthleteType {
        match self {
            Self::Runner { .. } => AthleteType::Runner,
            Self::Jumper { .. } => AthleteType::Jumper,
            Self::Thrower { .. } => AthleteType::Thrower,
        }
    }

    /// The primary performance metric carried by this detail:
    /// time for runners, best distance for jumpers and throwers.
    #[must_use]
    pub const fn primary_metric(&self) -> f64 {
        match self {
            Self::Runner { time_seconds, .. } => *time_seconds,
            Self::Jumper { best_jump_m, .. } => *best_jump_m,
            Self::Thrower { best_throw_m, .. } => *best_throw_m,
        }
    }
}

/// A single logged training session.
///
/// `calories_burned` is a derived field: it is recomputed from intensity,
/// body weight, and duration every time the session is persisted, and never
/// trusted from callers. The discipline detail is optional only to tolerate
/// malformed upstream rows; well-formed sessions always carry the variant
/// matching their athlete type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Unique identifier for this session
    pub id: Uuid,
    /// Owning athlete
    pub user_id: Uuid,
    /// Date of the session
    pub date: NaiveDate,
    /// Event trained in this session
    pub discipline: Discipline,
    /// Kind of session (training, competition, recovery)
    pub session_type: SessionType,
    /// Coarse athlete category for this session
    pub athlete_type: AthleteType,
    /// Session duration in minutes
    pub duration_minutes: u32,
    /// Subjective intensity, drives the MET energy estimate
    pub intensity: Intensity,
    /// Athlete-reported rate of perceived exertion, 1-10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    /// Estimated energy expenditure in kcal (derived, never user-supplied)
    pub calories_burned: f64,
    /// Free-form session notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Discipline-specific detail; absent only for malformed upstream rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DisciplineDetail>,
}

impl TrainingSession {
    /// Validate the invariants a well-formed session must hold:
    /// RPE in 1-10 and the detail variant matching the athlete type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an out-of-range RPE, `MissingDetail` when
    /// the detail is absent or does not match the athlete type.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(rpe) = self.rpe {
            if !(1..=10).contains(&rpe) {
                return Err(AppError::invalid_input(format!(
                    "rpe must be between 1 and 10, got {rpe}"
                )));
            }
        }
        match &self.detail {
            Some(detail) if detail.athlete_type() == self.athlete_type => Ok(()),
            Some(detail) => Err(AppError::missing_detail(format!(
                "detail variant {:?} does not match athlete type {:?}",
                detail.athlete_type(),
                self.athlete_type
            ))),
            None => Err(AppError::missing_detail(format!(
                "session {} has no discipline detail",
                self.id
            ))),
        }
    }

    /// The primary performance metric for trend analysis, or `None` when the
    /// detail is absent, belongs to another athlete type, or carries a
    /// non-positive value. Malformed data must not reach the fitting path.
    #[must_use]
    pub fn primary_metric(&self) -> Option<f64> {
        let detail = self.detail.as_ref()?;
        if detail.athlete_type() != self.athlete_type {
            return None;
        }
        Some(detail.primary_metric()).filter(|metric| *metric > 0.0)
    }

    /// Recompute the derived `calories_burned` field from the MET formula:
    /// `MET(intensity) x body_weight_kg x duration_hours`, rounded to two
    /// decimals. Called by the persistence collaborator on every save.
    pub fn recompute_calories(&mut self, body_weight_kg: f64) {
        self.calories_burned = round2(
            self.intensity.met() * body_weight_kg * (f64::from(self.duration_minutes) / 60.0),
        );
    }
}
