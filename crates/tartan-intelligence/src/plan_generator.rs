// ABOUTME: Deterministic training and diet plan generation from recent history
// ABOUTME: Decision tree over the last two sessions plus unwindowed nutrition means
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! # Plan Generator
//!
//! Canned weekly plans chosen by a fixed decision tree: the two most recent
//! sessions' primary metrics pick between a "setback" and a "progressing"
//! variant per athlete type, and unwindowed nutrition means pick the diet
//! advice per category. No randomness, no model; the same history always
//! produces the same plan.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tartan_core::errors::AppResult;
use tartan_core::models::{AthleteType, Discipline, DisciplineDetail, TrainingSession};

use crate::config::PlanGeneratorConfig;
use crate::provider::HistoryProvider;
use crate::statistical_analysis::StatisticalAnalyzer;
use crate::{Insight, InsightKind};

/// One day of a weekly training plan
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlanEntry {
    /// Day label (Mon, Tue, ...)
    pub day: &'static str,
    /// Prescribed activity
    pub activity: &'static str,
}

/// A generated weekly training plan
#[derive(Debug, Clone, Serialize)]
pub struct TrainingPlan {
    /// Discipline the plan targets
    pub discipline: Discipline,
    /// Focus of the week
    pub focus: &'static str,
    /// Why this variant was chosen
    pub rationale: &'static str,
    /// Ordered day-by-day entries
    pub entries: Vec<PlanEntry>,
}

/// Nutrition category a diet advice entry refers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietCategory {
    /// Daily hydration in liters
    Hydration,
    /// Daily carbohydrates in grams
    Carbohydrates,
    /// Daily protein in grams
    Protein,
    /// Daily fats in grams
    Fats,
}

impl DietCategory {
    /// Get display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hydration => "Hydration",
            Self::Carbohydrates => "Carbs",
            Self::Protein => "Protein",
            Self::Fats => "Fats",
        }
    }
}

/// One category of diet advice with the observed average it was based on
#[derive(Debug, Clone, Serialize)]
pub struct DietAdvice {
    /// Category this advice covers
    pub category: DietCategory,
    /// Observed average for the category
    pub value: f64,
    /// Advice text
    pub advice: &'static str,
}

/// A generated diet plan
#[derive(Debug, Clone, Serialize)]
pub struct DietPlan {
    /// Ordered advice entries (hydration, carbs, protein, fats)
    pub entries: Vec<DietAdvice>,
}

/// Outcome of a plan request: either a plan or a single notice that there
/// is not enough data, never a partial plan.
#[derive(Debug, Clone)]
pub enum PlanOutcome<T> {
    /// A complete generated plan
    Ready(T),
    /// Too few records; the notice replaces the plan
    InsufficientData(&'static str),
}

/// Deterministic plan generator
pub struct PlanGenerator {
    config: PlanGeneratorConfig,
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanGenerator {
    /// Create a generator with default targets
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PlanGeneratorConfig::default(),
        }
    }

    /// Create a generator with custom targets
    #[must_use]
    pub const fn with_config(config: PlanGeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the weekly training plan from the two most recent sessions.
    ///
    /// # Errors
    ///
    /// Propagates provider failures; the caller contains them.
    pub fn training_plan(
        &self,
        provider: &dyn HistoryProvider,
        user: Uuid,
    ) -> AppResult<PlanOutcome<TrainingPlan>> {
        let sessions = provider.training_sessions(user, None, None)?;
        if sessions.len() < self.config.min_records {
            return Ok(PlanOutcome::InsufficientData(
                "Not enough data to generate a training plan. Please log at least 2 training sessions.",
            ));
        }

        let most_recent = &sessions[0];
        let discipline = most_recent.discipline;
        let athlete_type = most_recent.athlete_type;
        let current_metric = metric_or_zero(&sessions[0], athlete_type);
        let previous_metric = metric_or_zero(&sessions[1], athlete_type);

        let plan = match most_recent.athlete_type {
            AthleteType::Runner => {
                // Time increased: the athlete got slower
                if current_metric > previous_metric && current_metric > 0.0 {
                    TrainingPlan {
                        discipline,
                        focus: "Speed & Anaerobic Power",
                        rationale: "Recent trend shows slight slowing",
                        entries: vec![
                            PlanEntry { day: "Mon", activity: "5x 200m sprints @ 90% max effort (3min rest)" },
                            PlanEntry { day: "Tue", activity: "Active recovery (light jog/cycle)" },
                            PlanEntry { day: "Wed", activity: "Tempo run (20 min at threshold)" },
                            PlanEntry { day: "Fri", activity: "Race simulation (broken intervals)" },
                        ],
                    }
                } else {
                    TrainingPlan {
                        discipline,
                        focus: "Endurance & Consistency",
                        rationale: "Performance is stable/improving",
                        entries: vec![
                            PlanEntry { day: "Mon", activity: "6x 400m intervals @ 80% effort" },
                            PlanEntry { day: "Tue", activity: "Long slow distance run" },
                            PlanEntry { day: "Wed", activity: "Technique drills & core" },
                            PlanEntry { day: "Fri", activity: "Speed endurance ladders" },
                        ],
                    }
                }
            }
            AthleteType::Jumper => {
                if current_metric <= previous_metric {
                    TrainingPlan {
                        discipline,
                        focus: "Explosive Power (Plyometrics)",
                        rationale: "Plateau detected",
                        entries: vec![
                            PlanEntry { day: "Mon", activity: "Depth jumps (3x5) + box jumps (3x8)" },
                            PlanEntry { day: "Tue", activity: "Short approach technical jumps" },
                            PlanEntry { day: "Wed", activity: "Heavy squats (5x5)" },
                            PlanEntry { day: "Fri", activity: "Full approach practice" },
                        ],
                    }
                } else {
                    TrainingPlan {
                        discipline,
                        focus: "Technical Refinement",
                        rationale: "Good momentum",
                        entries: vec![
                            PlanEntry { day: "Mon", activity: "Approach rhythm drills" },
                            PlanEntry { day: "Tue", activity: "Flight phase mechanics" },
                            PlanEntry { day: "Wed", activity: "Power cleans & core" },
                            PlanEntry { day: "Fri", activity: "Simulation competition jumps" },
                        ],
                    }
                }
            }
            AthleteType::Thrower => TrainingPlan {
                discipline,
                focus: "Strength Base",
                rationale: "Balancing load and stability",
                entries: vec![
                    PlanEntry { day: "Mon", activity: "Compound lifts (deadlift/bench/squat)" },
                    PlanEntry { day: "Tue", activity: "Medicine ball throws (explosive)" },
                    PlanEntry { day: "Wed", activity: "Technical throws (lighter implement)" },
                    PlanEntry { day: "Fri", activity: "Full throws (measure distance)" },
                ],
            },
        };

        Ok(PlanOutcome::Ready(plan))
    }

    /// Generate the diet plan from unwindowed nutrition averages.
    ///
    /// # Errors
    ///
    /// Propagates provider failures; the caller contains them.
    pub fn diet_plan(
        &self,
        provider: &dyn HistoryProvider,
        user: Uuid,
    ) -> AppResult<PlanOutcome<DietPlan>> {
        let logs = provider.nutrition_logs(user, None, None)?;
        if logs.len() < self.config.min_records {
            return Ok(PlanOutcome::InsufficientData(
                "Not enough data to generate a diet plan. Please log at least 2 meals.",
            ));
        }

        let mean_of = |extract: fn(&tartan_core::models::NutritionLog) -> f64| {
            let values: Vec<f64> = logs.iter().map(extract).collect();
            StatisticalAnalyzer::mean(&values).unwrap_or(0.0)
        };
        let avg_hydration = mean_of(|l| l.hydration_liters);
        let avg_carbs = mean_of(|l| l.carbohydrates_g);
        let avg_protein = mean_of(|l| l.protein_g);
        let avg_fats = mean_of(|l| l.fats_g);

        let hydration_advice = if avg_hydration < self.config.hydration_target_l {
            "Below target. Goal: 3.5L/day. Start with 500ml on waking."
        } else {
            "Excellent. Keep maintaining this level."
        };
        let carb_advice = if avg_carbs < self.config.carb_target_g {
            "Low. Add pasta, rice, or potatoes to post-training meals to replenish glycogen."
        } else {
            "Optimal range. Focus on timing: complex carbs 3h pre-training."
        };
        let protein_advice = if avg_protein < self.config.protein_target_g {
            "Needs boost. Target 120g+. Add eggs/shake at breakfast and lean meat at dinner."
        } else {
            "Great level for synthesis. Ensure protein in every main meal."
        };

        Ok(PlanOutcome::Ready(DietPlan {
            entries: vec![
                DietAdvice {
                    category: DietCategory::Hydration,
                    value: avg_hydration,
                    advice: hydration_advice,
                },
                DietAdvice {
                    category: DietCategory::Carbohydrates,
                    value: avg_carbs,
                    advice: carb_advice,
                },
                DietAdvice {
                    category: DietCategory::Protein,
                    value: avg_protein,
                    advice: protein_advice,
                },
                DietAdvice {
                    category: DietCategory::Fats,
                    value: avg_fats,
                    advice: "Ensure sources are healthy (nuts, olive oil, fish).",
                },
            ],
        }))
    }

    /// Training plan rendered as an insight
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::training_plan`].
    pub fn training_plan_insight(
        &self,
        provider: &dyn HistoryProvider,
        user: Uuid,
    ) -> AppResult<Insight> {
        match self.training_plan(provider, user)? {
            PlanOutcome::InsufficientData(notice) => {
                Ok(Insight::info(InsightKind::DataGap, notice.into()))
            }
            PlanOutcome::Ready(plan) => {
                let mut lines = vec![format!(
                    "Suggested training plan ({}). Focus: {} ({}).",
                    plan.discipline.display_name(),
                    plan.focus,
                    plan.rationale
                )];
                lines.extend(
                    plan.entries
                        .iter()
                        .map(|entry| format!("{}: {}", entry.day, entry.activity)),
                );
                Ok(Insight {
                    kind: InsightKind::TrainingPlan,
                    severity: crate::InsightSeverity::Info,
                    message: lines.join("\n"),
                    data: serde_json::to_value(&plan).ok(),
                })
            }
        }
    }

    /// Diet plan rendered as an insight
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::diet_plan`].
    pub fn diet_plan_insight(
        &self,
        provider: &dyn HistoryProvider,
        user: Uuid,
    ) -> AppResult<Insight> {
        match self.diet_plan(provider, user)? {
            PlanOutcome::InsufficientData(notice) => {
                Ok(Insight::info(InsightKind::DataGap, notice.into()))
            }
            PlanOutcome::Ready(plan) => {
                let mut lines = vec!["Suggested diet plan:".to_owned()];
                lines.extend(plan.entries.iter().map(|entry| {
                    let value = match entry.category {
                        DietCategory::Hydration => format!("{:.1}L", entry.value),
                        _ => format!("{:.0}g", entry.value),
                    };
                    format!("{} ({value}): {}", entry.category.display_name(), entry.advice)
                }));
                Ok(Insight {
                    kind: InsightKind::DietPlan,
                    severity: crate::InsightSeverity::Info,
                    message: lines.join("\n"),
                    data: serde_json::to_value(&plan).ok(),
                })
            }
        }
    }
}

/// Metric of the session read through the given athlete type's detail
/// variant, or 0 when the session carries no such detail. The zero default
/// routes the comparison to the stable branch, matching how missing child
/// rows have always been treated upstream.
fn metric_or_zero(session: &TrainingSession, athlete_type: AthleteType) -> f64 {
    match (&session.detail, athlete_type) {
        (Some(DisciplineDetail::Runner { time_seconds, .. }), AthleteType::Runner) => {
            *time_seconds
        }
        (Some(DisciplineDetail::Jumper { best_jump_m, .. }), AthleteType::Jumper) => *best_jump_m,
        (Some(DisciplineDetail::Thrower { best_throw_m, .. }), AthleteType::Thrower) => {
            *best_throw_m
        }
        _ => 0.0,
    }
}
