// ABOUTME: Engine configuration with per-component threshold structs and defaults
// ABOUTME: TrendConfig, RuleEngineConfig, and PlanGeneratorConfig wired to physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! Intelligence Engine Configuration
//!
//! Every tunable threshold the engine uses lives here, with defaults taken
//! from [`crate::physiological_constants`]. Components accept a config via
//! their `with_config` constructors and fall back to the defaults otherwise.

use serde::{Deserialize, Serialize};

use crate::physiological_constants::{diet_targets, energy, fueling, rule_windows, trend};

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Trend classifier configuration
    pub trend: TrendConfig,
    /// Comparative rule configuration
    pub rules: RuleEngineConfig,
    /// Plan generator configuration
    pub plans: PlanGeneratorConfig,
}

/// Trend classifier thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Slope magnitude below which the trend is labeled stable
    pub stability_threshold: f64,
    /// Minimum valid metric points required to fit a trend
    pub min_points: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stability_threshold: trend::STABILITY_THRESHOLD,
            min_points: trend::MIN_TREND_POINTS,
        }
    }
}

/// Comparative rule thresholds and window sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEngineConfig {
    /// Sessions inspected by the runner fueling rule
    pub fueling_window: usize,
    /// Ratio of recent to previous mean time that flags a decline
    pub fueling_decline_margin: f64,
    /// Average training-day carbohydrate floor in grams
    pub fueling_carb_floor_g: f64,
    /// Minimum distinct training days of carb data required
    pub fueling_min_carb_days: usize,
    /// Sessions inspected by the jumper plateau rule
    pub plateau_window: usize,
    /// Sessions inspected by the thrower load-impact rule
    pub load_impact_window: usize,
}

impl Default for RuleEngineConfig {
    fn default() -> Self {
        Self {
            fueling_window: rule_windows::FUELING_WINDOW,
            fueling_decline_margin: fueling::DECLINE_MARGIN,
            fueling_carb_floor_g: fueling::CARB_FLOOR_G,
            fueling_min_carb_days: fueling::MIN_CARB_DAYS,
            plateau_window: rule_windows::PLATEAU_WINDOW,
            load_impact_window: rule_windows::LOAD_IMPACT_WINDOW,
        }
    }
}

/// Plan generator targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanGeneratorConfig {
    /// Daily hydration target in liters
    pub hydration_target_l: f64,
    /// Daily carbohydrate target in grams
    pub carb_target_g: f64,
    /// Daily protein target in grams
    pub protein_target_g: f64,
    /// Minimum records required before generating either plan
    pub min_records: usize,
}

impl Default for PlanGeneratorConfig {
    fn default() -> Self {
        Self {
            hydration_target_l: diet_targets::HYDRATION_TARGET_L,
            carb_target_g: diet_targets::CARB_TARGET_G,
            protein_target_g: diet_targets::PROTEIN_TARGET_G,
            min_records: 2,
        }
    }
}

/// Body weight assumed when the athlete profile has none
#[must_use]
pub const fn default_body_weight_kg() -> f64 {
    energy::DEFAULT_BODY_WEIGHT_KG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = IntelligenceConfig::default();
        assert!((config.trend.stability_threshold - 0.001).abs() < f64::EPSILON);
        assert_eq!(config.rules.fueling_window, 6);
        assert_eq!(config.rules.plateau_window, 5);
        assert_eq!(config.rules.load_impact_window, 4);
        assert!((config.plans.protein_target_g - 110.0).abs() < f64::EPSILON);
        assert_eq!(config.plans.min_records, 2);
    }
}
