// ABOUTME: Ordinary least squares regression engine for performance trend fitting
// ABOUTME: Fits metric on days-since-first-sample and reports slope, intercept, and fit quality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

use serde::{Deserialize, Serialize};

use tartan_core::errors::{AppError, AppResult};

use crate::TrendDataPoint;

/// Linear regression analysis results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (metric units per day)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Pearson correlation coefficient (-1 to 1)
    pub correlation: f64,
}

/// Statistical analyzer for metric series
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit ordinary least squares of metric value on days since the first
    /// sample.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` for fewer than 2 points and
    /// `ComputationFailed` when all samples fall on the same day (zero
    /// variance in the feature).
    pub fn linear_regression(data_points: &[TrendDataPoint]) -> AppResult<RegressionResult> {
        if data_points.len() < 2 {
            return Err(AppError::insufficient_data(2, data_points.len()));
        }

        let n = data_points.len() as f64;
        let sum_x = data_points.iter().map(|p| p.days_since_start).sum::<f64>();
        let sum_y = data_points.iter().map(|p| p.value).sum::<f64>();
        let sum_xx = data_points
            .iter()
            .map(|p| p.days_since_start * p.days_since_start)
            .sum::<f64>();
        let sum_xy = data_points
            .iter()
            .map(|p| p.days_since_start * p.value)
            .sum::<f64>();
        let sum_yy = data_points.iter().map(|p| p.value * p.value).sum::<f64>();

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
        if denominator.abs() < f64::EPSILON {
            return Err(AppError::computation(
                "cannot fit regression: zero variance in sample days",
            ));
        }

        let slope = (n * mean_x).mul_add(-mean_y, sum_xy) / denominator;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let corr_denominator =
            ((n * mean_x).mul_add(-mean_x, sum_xx) * (n * mean_y).mul_add(-mean_y, sum_yy)).sqrt();
        let correlation = if corr_denominator == 0.0 {
            0.0
        } else {
            (n * mean_x).mul_add(-mean_y, sum_xy) / corr_denominator
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared: correlation * correlation,
            correlation,
        })
    }

    /// Arithmetic mean of a slice; `None` when empty
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
