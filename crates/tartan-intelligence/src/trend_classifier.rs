// ABOUTME: Performance trend classification over a fitted linear trend
// ABOUTME: Labels Improving/Stable/Declining per athlete-type semantics with nutrition context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use tartan_core::errors::AppResult;
use tartan_core::models::Discipline;

use crate::config::TrendConfig;
use crate::metrics_extractor::{collect_series, MetricKind};
use crate::provider::HistoryProvider;
use crate::statistical_analysis::StatisticalAnalyzer;
use crate::{Insight, InsightKind, InsightSeverity, TrendDirection};

/// Classification result for a single (user, discipline) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    /// Fitted trend direction
    pub direction: TrendDirection,
    /// Discipline the series was drawn from
    pub discipline: Discipline,
    /// Number of valid metric points in the fit
    pub sample_count: usize,
    /// Fitted slope in metric units per day
    pub slope: f64,
    /// Mean carbohydrate intake over the series' date span (informational)
    pub avg_carbs_g: f64,
    /// Mean protein intake over the series' date span (informational)
    pub avg_protein_g: f64,
}

/// Outcome of a trend analysis request
#[derive(Debug, Clone)]
pub enum TrendOutcome {
    /// No training history at all; nothing to report
    NoHistory,
    /// Too few valid metric points to fit a trend
    NotEnoughData {
        /// Discipline of the most recent session
        discipline: Discipline,
        /// Valid metric points found
        found: usize,
    },
    /// Successful classification
    Classified(TrendReport),
}

/// Linear-regression trend classifier.
///
/// Fits the user's most recent discipline's metric series on
/// days-since-first-sample and labels the slope per athlete-type
/// semantics: for runners a falling time is improvement, for jumpers and
/// throwers a rising distance is.
pub struct TrendClassifier {
    config: TrendConfig,
}

impl Default for TrendClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendClassifier {
    /// Create a classifier with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: TrendConfig::default(),
        }
    }

    /// Create a classifier with custom thresholds
    #[must_use]
    pub const fn with_config(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Analyze the user's performance trend.
    ///
    /// # Errors
    ///
    /// Propagates provider failures and a `ComputationFailed` fit (all
    /// samples on one day); the caller contains both.
    pub fn analyze(
        &self,
        provider: &dyn HistoryProvider,
        user: Uuid,
    ) -> AppResult<TrendOutcome> {
        let sessions = provider.training_sessions(user, None, None)?;
        let Some(latest) = sessions.first() else {
            return Ok(TrendOutcome::NoHistory);
        };
        let discipline = latest.discipline;
        let athlete_type = latest.athlete_type;

        let relevant = provider.training_sessions(user, None, Some(discipline))?;
        let points = collect_series(&relevant);
        if points.len() < self.config.min_points {
            return Ok(TrendOutcome::NotEnoughData {
                discipline,
                found: points.len(),
            });
        }

        let fit = StatisticalAnalyzer::linear_regression(&points)?;
        let metric = MetricKind::for_athlete(athlete_type);
        let direction = self.label(fit.slope, metric);
        debug!(
            slope = fit.slope,
            r_squared = fit.r_squared,
            samples = points.len(),
            "trend fit for {}",
            discipline.display_name()
        );

        // Informational nutrition context over the inclusive span of the
        // fitted points; it never affects the label.
        let span = points.first().zip(points.last()).map(|(a, b)| (a.date, b.date));
        let logs = provider.nutrition_logs(user, None, span)?;
        let carbs: Vec<f64> = logs.iter().map(|l| l.carbohydrates_g).collect();
        let protein: Vec<f64> = logs.iter().map(|l| l.protein_g).collect();

        Ok(TrendOutcome::Classified(TrendReport {
            direction,
            discipline,
            sample_count: points.len(),
            slope: fit.slope,
            avg_carbs_g: StatisticalAnalyzer::mean(&carbs).unwrap_or(0.0),
            avg_protein_g: StatisticalAnalyzer::mean(&protein).unwrap_or(0.0),
        }))
    }

    /// Analyze and render the outcome as an insight, when there is one
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::analyze`].
    pub fn insight(
        &self,
        provider: &dyn HistoryProvider,
        user: Uuid,
    ) -> AppResult<Option<Insight>> {
        match self.analyze(provider, user)? {
            TrendOutcome::NoHistory => Ok(None),
            TrendOutcome::NotEnoughData { discipline, found } => Ok(Some(Insight::info(
                InsightKind::DataGap,
                format!(
                    "Trend analysis: not enough data to classify a trend for {} yet (need 2+ sessions, found {found}).",
                    discipline.display_name()
                ),
            ))),
            TrendOutcome::Classified(report) => {
                let severity = match report.direction {
                    TrendDirection::Declining => InsightSeverity::Warning,
                    TrendDirection::Improving | TrendDirection::Stable => InsightSeverity::Info,
                };
                let message = format!(
                    "Trend classification: {}. Based on linear analysis of your last {} sessions ({}). Recent context: avg daily carbs {:.0} g, protein {:.0} g during this period.",
                    report.direction.display_name(),
                    report.sample_count,
                    report.discipline.display_name(),
                    report.avg_carbs_g,
                    report.avg_protein_g,
                );
                let data = serde_json::json!({
                    "direction": report.direction,
                    "slope_per_day": report.slope,
                    "sample_count": report.sample_count,
                    "avg_carbs_g": report.avg_carbs_g,
                    "avg_protein_g": report.avg_protein_g,
                });
                Ok(Some(Insight {
                    kind: InsightKind::TrendAnalysis,
                    severity,
                    message,
                    data: Some(data),
                }))
            }
        }
    }

    /// Map a fitted slope to a direction label for the given metric
    fn label(&self, slope: f64, metric: MetricKind) -> TrendDirection {
        let tau = self.config.stability_threshold;
        if metric.is_lower_better() {
            if slope < -tau {
                TrendDirection::Improving
            } else if slope > tau {
                TrendDirection::Declining
            } else {
                TrendDirection::Stable
            }
        } else if slope > tau {
            TrendDirection::Improving
        } else if slope < -tau {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_thresholds_per_athlete_semantics() {
        let classifier = TrendClassifier::new();

        // Runner: falling time is improvement
        assert_eq!(
            classifier.label(-0.5, MetricKind::TimeSeconds),
            TrendDirection::Improving
        );
        assert_eq!(
            classifier.label(0.5, MetricKind::TimeSeconds),
            TrendDirection::Declining
        );
        assert_eq!(
            classifier.label(0.0005, MetricKind::TimeSeconds),
            TrendDirection::Stable
        );

        // Jumper/thrower: rising distance is improvement
        assert_eq!(
            classifier.label(0.01, MetricKind::JumpDistance),
            TrendDirection::Improving
        );
        assert_eq!(
            classifier.label(-0.01, MetricKind::ThrowDistance),
            TrendDirection::Declining
        );
        assert_eq!(
            classifier.label(-0.0009, MetricKind::JumpDistance),
            TrendDirection::Stable
        );
    }

    #[test]
    fn boundary_slope_is_stable() {
        let classifier = TrendClassifier::new();
        // Exactly at the threshold is not beyond it
        assert_eq!(
            classifier.label(0.001, MetricKind::TimeSeconds),
            TrendDirection::Stable
        );
        assert_eq!(
            classifier.label(-0.001, MetricKind::JumpDistance),
            TrendDirection::Stable
        );
    }
}
