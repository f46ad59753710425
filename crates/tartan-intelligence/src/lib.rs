// ABOUTME: Athletics intelligence engine with trend classification, rules, and plan generation
// ABOUTME: Crate root declaring shared analysis types used across all engine modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

#![deny(unsafe_code)]

//! # Tartan Intelligence
//!
//! The analytics engine of the Tartan platform: a linear-regression trend
//! classifier, a battery of deterministic comparative rules, a plan
//! generator, and the calorie/macro aggregation pipeline that feeds them.
//!
//! Every computation is request-scoped, synchronous, and bounded (at most
//! tens of records); failures are contained at the smallest unit so a single
//! malformed session never aborts a whole insight request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level insight aggregator composing all engine components
pub mod engine;

/// Collaborator boundary for training and nutrition history reads
pub mod provider;

/// Primary-metric extraction from heterogeneous discipline records
pub mod metrics_extractor;

/// Ordinary least squares regression for trend fitting
pub mod statistical_analysis;

/// Shared recent/previous half-window slicing used by all comparative rules
pub mod windows;

/// Performance trend classification per athlete-type semantics
pub mod trend_classifier;

/// Deterministic comparative rules (fueling, plateau, load impact)
pub mod insights;

/// Deterministic training and diet plan generation
pub mod plan_generator;

/// Session energy, macro calories, and BMR calculations
pub mod nutrition_calculator;

/// Offline dataset synthesis for the external learning pipeline
pub mod dataset;

/// Engine configuration with per-component threshold structs
pub mod config;

/// Physiological and statistical constants organized by domain
pub mod physiological_constants;

pub use engine::InsightEngine;
pub use insights::RuleEngine;
pub use metrics_extractor::MetricKind;
pub use plan_generator::{DietPlan, PlanGenerator, PlanOutcome, TrainingPlan};
pub use provider::HistoryProvider;
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};
pub use trend_classifier::{TrendClassifier, TrendReport};

/// Direction of a fitted performance trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Performance is getting better per athlete-type semantics
    Improving,
    /// No meaningful change in either direction
    Stable,
    /// Performance is getting worse per athlete-type semantics
    Declining,
}

impl TrendDirection {
    /// Get display name for this direction
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Stable => "Stable",
            Self::Declining => "Declining",
        }
    }
}

/// A single observation in a metric series prepared for regression
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendDataPoint {
    /// Date of the observation
    pub date: NaiveDate,
    /// Days elapsed since the first observation in the series
    pub days_since_start: f64,
    /// Observed metric value
    pub value: f64,
}

/// Categories of insights produced by the engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Regression-based trend classification
    TrendAnalysis,
    /// Runner fueling-vs-performance alert
    FuelingAlert,
    /// Jumper plateau detection
    Plateau,
    /// Thrower load-vs-distance alert
    LoadImpact,
    /// Suggested weekly training plan
    TrainingPlan,
    /// Suggested diet plan
    DietPlan,
    /// Degraded output when a component lacks data
    DataGap,
}

/// Severity attached to an insight for presentation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightSeverity {
    /// Informational finding
    Info,
    /// Finding that warrants attention
    Warning,
}

/// An insight produced by the engine for one request.
///
/// Ephemeral: rendered to the caller and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Category of this insight
    pub kind: InsightKind,
    /// Presentation severity
    pub severity: InsightSeverity,
    /// Human-readable insight message
    pub message: String,
    /// Supporting data for the insight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Insight {
    /// Build an informational insight without supporting data
    #[must_use]
    pub const fn info(kind: InsightKind, message: String) -> Self {
        Self {
            kind,
            severity: InsightSeverity::Info,
            message,
            data: None,
        }
    }

    /// Build a warning insight with supporting data
    #[must_use]
    pub const fn warning(kind: InsightKind, message: String, data: serde_json::Value) -> Self {
        Self {
            kind,
            severity: InsightSeverity::Warning,
            message,
            data: Some(data),
        }
    }
}
