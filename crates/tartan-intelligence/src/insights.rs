// ABOUTME: Deterministic comparative rule battery producing fueling, plateau, and load insights
// ABOUTME: Each rule inspects recent-vs-previous windows and is independently skippable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! # Rule Engine
//!
//! Three independent comparative rules, evaluated unconditionally on every
//! insight request. A rule whose data preconditions are unmet produces no
//! output; a rule that fails outright is logged and skipped. Nothing a
//! single rule does can abort the remaining rules.
//!
//! All rules read "most recent discipline" as the discipline of the single
//! most recent session of their athlete type; they never aggregate across
//! disciplines in one call.

use std::collections::BTreeMap;

use tracing::{debug, warn};
use uuid::Uuid;

use tartan_core::errors::AppResult;
use tartan_core::models::{AthleteType, DayType, DisciplineDetail, TrainingSession};

use crate::config::RuleEngineConfig;
use crate::provider::HistoryProvider;
use crate::statistical_analysis::StatisticalAnalyzer;
use crate::windows::split_recent_previous;
use crate::{Insight, InsightKind};

/// Deterministic rule battery over recent training and nutrition history
pub struct RuleEngine {
    config: RuleEngineConfig,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Create a rule engine with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RuleEngineConfig::default(),
        }
    }

    /// Create a rule engine with custom thresholds
    #[must_use]
    pub const fn with_config(config: RuleEngineConfig) -> Self {
        Self { config }
    }

    /// Evaluate every rule, containing per-rule failures.
    #[must_use]
    pub fn evaluate_all(&self, provider: &dyn HistoryProvider, user: Uuid) -> Vec<Insight> {
        let rules: [(&str, AppResult<Option<Insight>>); 3] = [
            ("fueling_alert", self.fueling_alert(provider, user)),
            ("plateau_detection", self.plateau_detection(provider, user)),
            ("load_impact", self.load_impact(provider, user)),
        ];

        let mut insights = Vec::new();
        for (name, outcome) in rules {
            match outcome {
                Ok(Some(insight)) => insights.push(insight),
                Ok(None) => debug!(rule = name, "rule produced no output"),
                Err(err) => warn!(rule = name, error = %err, "rule skipped after failure"),
            }
        }
        insights
    }

    /// Runner fueling rule: flags a >2% slowdown in recent mean time when
    /// average training-day carbohydrate intake sits under the floor.
    ///
    /// # Errors
    ///
    /// Propagates provider failures; the caller contains them.
    pub fn fueling_alert(
        &self,
        provider: &dyn HistoryProvider,
        user: Uuid,
    ) -> AppResult<Option<Insight>> {
        let sessions = provider.training_sessions(user, Some(AthleteType::Runner), None)?;
        let Some(latest) = sessions.first() else {
            return Ok(None);
        };
        let discipline = latest.discipline;

        let discipline_sessions =
            provider.training_sessions(user, Some(AthleteType::Runner), Some(discipline))?;
        if discipline_sessions.len() < 2 {
            return Ok(None);
        }
        let (recent_half, previous_half) =
            split_recent_previous(&discipline_sessions, self.config.fueling_window);

        let recent_times = valid_times(recent_half);
        let previous_times = valid_times(previous_half);
        let (Some(avg_recent), Some(avg_previous)) = (
            StatisticalAnalyzer::mean(&recent_times),
            StatisticalAnalyzer::mean(&previous_times),
        ) else {
            return Ok(None);
        };

        if avg_recent <= avg_previous * self.config.fueling_decline_margin {
            return Ok(None);
        }

        // Performance degraded; check fueling on training days.
        let logs = provider.nutrition_logs(user, Some(DayType::Training), None)?;
        let mut daily_carbs: BTreeMap<_, f64> = BTreeMap::new();
        for log in &logs {
            *daily_carbs.entry(log.date).or_default() += log.carbohydrates_g;
        }
        if daily_carbs.len() < self.config.fueling_min_carb_days {
            return Ok(None);
        }
        let totals: Vec<f64> = daily_carbs.values().copied().collect();
        let Some(avg_carbs) = StatisticalAnalyzer::mean(&totals) else {
            return Ok(None);
        };
        if avg_carbs >= self.config.fueling_carb_floor_g {
            return Ok(None);
        }

        Ok(Some(Insight::warning(
            InsightKind::FuelingAlert,
            format!(
                "Fueling alert ({}): your recent times average {avg_recent:.2}s (vs {avg_previous:.2}s previously) and your average training day carbs are {avg_carbs:.0} g. Increasing carbohydrate intake may help recovery.",
                discipline.display_name()
            ),
            serde_json::json!({
                "discipline": discipline,
                "avg_recent_s": avg_recent,
                "avg_previous_s": avg_previous,
                "avg_training_day_carbs_g": avg_carbs,
            }),
        )))
    }

    /// Jumper plateau rule: no improvement in best jump across the two
    /// comparison windows of the last few sessions.
    ///
    /// # Errors
    ///
    /// Propagates provider failures; the caller contains them.
    pub fn plateau_detection(
        &self,
        provider: &dyn HistoryProvider,
        user: Uuid,
    ) -> AppResult<Option<Insight>> {
        let sessions = provider.training_sessions(user, Some(AthleteType::Jumper), None)?;
        let Some(latest) = sessions.first() else {
            return Ok(None);
        };
        let discipline = latest.discipline;

        let discipline_sessions =
            provider.training_sessions(user, Some(AthleteType::Jumper), Some(discipline))?;
        let window = &discipline_sessions
            [..discipline_sessions.len().min(self.config.plateau_window)];
        if window.len() < 2 {
            return Ok(None);
        }

        // Sessions without a jumper detail are tolerated and dropped.
        let jumps: Vec<f64> = window
            .iter()
            .filter_map(|session| match &session.detail {
                Some(DisciplineDetail::Jumper { best_jump_m, .. }) => Some(*best_jump_m),
                _ => None,
            })
            .collect();
        if jumps.len() < 2 {
            return Ok(None);
        }

        let (recent_half, previous_half) = split_recent_previous(&jumps, jumps.len());
        let recent_max = max_of(recent_half);
        let previous_max = max_of(previous_half);
        let (Some(recent_max), Some(previous_max)) = (recent_max, previous_max) else {
            return Ok(None);
        };

        if recent_max > previous_max {
            return Ok(None);
        }

        Ok(Some(Insight::warning(
            InsightKind::Plateau,
            format!(
                "Plateau detected ({}): your best jump in the last {} sessions ({recent_max} m) hasn't exceeded your previous marker ({previous_max} m). Consider reviewing technique or rest periods.",
                discipline.display_name(),
                recent_half.len(),
            ),
            serde_json::json!({
                "discipline": discipline,
                "recent_best_m": recent_max,
                "previous_best_m": previous_max,
            }),
        )))
    }

    /// Thrower load rule: mean implement weight rose while mean best throw
    /// fell between the two comparison windows.
    ///
    /// # Errors
    ///
    /// Propagates provider failures; the caller contains them.
    pub fn load_impact(
        &self,
        provider: &dyn HistoryProvider,
        user: Uuid,
    ) -> AppResult<Option<Insight>> {
        let sessions = provider.training_sessions(user, Some(AthleteType::Thrower), None)?;
        let Some(latest) = sessions.first() else {
            return Ok(None);
        };
        let discipline = latest.discipline;

        let discipline_sessions =
            provider.training_sessions(user, Some(AthleteType::Thrower), Some(discipline))?;
        if discipline_sessions.len() < 2 {
            return Ok(None);
        }
        let (recent_half, previous_half) =
            split_recent_previous(&discipline_sessions, self.config.load_impact_window);

        // A single session missing its thrower detail silently suppresses
        // the rule rather than failing the whole insight list.
        let (Some(recent), Some(previous)) = (
            throw_loads(recent_half),
            throw_loads(previous_half),
        ) else {
            debug!("load impact skipped: session without thrower detail");
            return Ok(None);
        };

        let weight_increased = recent.avg_weight_kg > previous.avg_weight_kg;
        let distance_dropped = recent.avg_throw_m < previous.avg_throw_m;
        if !(weight_increased && distance_dropped) {
            return Ok(None);
        }

        Ok(Some(Insight::warning(
            InsightKind::LoadImpact,
            format!(
                "Load impact ({}): implement weight increased ({:.1} kg to {:.1} kg) but distance dropped ({:.2} m to {:.2} m). Ensure technique is maintained under load.",
                discipline.display_name(),
                previous.avg_weight_kg,
                recent.avg_weight_kg,
                previous.avg_throw_m,
                recent.avg_throw_m,
            ),
            serde_json::json!({
                "discipline": discipline,
                "avg_weight_recent_kg": recent.avg_weight_kg,
                "avg_weight_previous_kg": previous.avg_weight_kg,
                "avg_throw_recent_m": recent.avg_throw_m,
                "avg_throw_previous_m": previous.avg_throw_m,
            }),
        )))
    }
}

/// Maximum of a slice of finite metric values
fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Valid effort times of a window: runner detail present and time positive
fn valid_times(sessions: &[TrainingSession]) -> Vec<f64> {
    sessions
        .iter()
        .filter_map(|session| match &session.detail {
            Some(DisciplineDetail::Runner { time_seconds, .. }) if *time_seconds > 0.0 => {
                Some(*time_seconds)
            }
            _ => None,
        })
        .collect()
}

/// Mean implement weight and throw distance of a window
struct LoadWindow {
    avg_weight_kg: f64,
    avg_throw_m: f64,
}

/// `None` when the window is empty or any session lacks its thrower detail
fn throw_loads(sessions: &[TrainingSession]) -> Option<LoadWindow> {
    let mut weights = Vec::with_capacity(sessions.len());
    let mut throws = Vec::with_capacity(sessions.len());
    for session in sessions {
        match &session.detail {
            Some(DisciplineDetail::Thrower {
                implement_weight_kg,
                best_throw_m,
                ..
            }) => {
                weights.push(*implement_weight_kg);
                throws.push(*best_throw_m);
            }
            _ => return None,
        }
    }
    Some(LoadWindow {
        avg_weight_kg: StatisticalAnalyzer::mean(&weights)?,
        avg_throw_m: StatisticalAnalyzer::mean(&throws)?,
    })
}
