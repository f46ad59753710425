// ABOUTME: Top-level insight aggregator composing classifier, rules, and plan generator
// ABOUTME: Contains per-component failures and always returns a non-empty ordered insight list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

use tracing::warn;
use uuid::Uuid;

use crate::config::IntelligenceConfig;
use crate::insights::RuleEngine;
use crate::plan_generator::PlanGenerator;
use crate::provider::HistoryProvider;
use crate::trend_classifier::TrendClassifier;
use crate::{Insight, InsightKind};

/// Fallback message when no component produced an insight
const FALLBACK_MESSAGE: &str =
    "Log at least 2 sessions and 2 meals to see performance insights.";

/// Top-level insight engine.
///
/// Runs the trend classifier, the comparative rule battery, and both plan
/// generators for one user request and concatenates their output in a fixed
/// order: trend, fueling, plateau, load impact, training plan, diet plan.
/// Failures are contained at the component level; the returned list is
/// never empty.
pub struct InsightEngine {
    trend: TrendClassifier,
    rules: RuleEngine,
    plans: PlanGenerator,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::default())
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub fn with_config(config: IntelligenceConfig) -> Self {
        Self {
            trend: TrendClassifier::with_config(config.trend),
            rules: RuleEngine::with_config(config.rules),
            plans: PlanGenerator::with_config(config.plans),
        }
    }

    /// Generate the ordered insight list for one user request
    #[must_use]
    pub fn generate(&self, provider: &dyn HistoryProvider, user: Uuid) -> Vec<Insight> {
        let mut insights = Vec::new();

        match self.trend.insight(provider, user) {
            Ok(Some(insight)) => insights.push(insight),
            Ok(None) => {}
            Err(err) => warn!(component = "trend_classifier", error = %err, "component skipped"),
        }

        insights.extend(self.rules.evaluate_all(provider, user));

        match self.plans.training_plan_insight(provider, user) {
            Ok(insight) => insights.push(insight),
            Err(err) => warn!(component = "training_plan", error = %err, "component skipped"),
        }
        match self.plans.diet_plan_insight(provider, user) {
            Ok(insight) => insights.push(insight),
            Err(err) => warn!(component = "diet_plan", error = %err, "component skipped"),
        }

        if insights.is_empty() {
            insights.push(Insight::info(InsightKind::DataGap, FALLBACK_MESSAGE.into()));
        }
        insights
    }
}
