// ABOUTME: Primary-metric extraction from heterogeneous per-discipline session records
// ABOUTME: Lazy date-ordered series with malformed-row filtering for downstream fitting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tartan_core::models::{AthleteType, TrainingSession};

use crate::TrendDataPoint;

/// Type-safe primary metric enumeration, keyed by athlete type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    /// Effort time in seconds (lower is better)
    TimeSeconds,
    /// Best jump distance in meters
    JumpDistance,
    /// Best throw distance in meters
    ThrowDistance,
}

impl MetricKind {
    /// Primary metric for an athlete type
    #[must_use]
    pub const fn for_athlete(athlete_type: AthleteType) -> Self {
        match athlete_type {
            AthleteType::Runner => Self::TimeSeconds,
            AthleteType::Jumper => Self::JumpDistance,
            AthleteType::Thrower => Self::ThrowDistance,
        }
    }

    /// Check if lower values are better for this metric (time)
    #[must_use]
    pub const fn is_lower_better(self) -> bool {
        matches!(self, Self::TimeSeconds)
    }

    /// Get the unit string for this metric
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::TimeSeconds => "s",
            Self::JumpDistance | Self::ThrowDistance => "m",
        }
    }

    /// Get display name for this metric
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TimeSeconds => "Time",
            Self::JumpDistance => "Best Jump",
            Self::ThrowDistance => "Best Throw",
        }
    }
}

/// Lazy, restartable sequence of `(date, primary_metric)` pairs in date
/// ascending order. Sessions with an absent or mismatched discipline detail,
/// or a non-positive metric, are excluded so malformed data never reaches
/// the fitting path. No side effects; the input is expected newest-first as
/// the provider returns it.
pub fn metric_series(
    sessions: &[TrainingSession],
) -> impl DoubleEndedIterator<Item = (NaiveDate, f64)> + '_ {
    sessions
        .iter()
        .rev()
        .filter_map(|session| session.primary_metric().map(|metric| (session.date, metric)))
}

/// Collect a metric series into regression-ready data points with the
/// days-since-first feature. Returns an empty vector when no session
/// carries a valid metric.
#[must_use]
pub fn collect_series(sessions: &[TrainingSession]) -> Vec<TrendDataPoint> {
    let mut points: Vec<TrendDataPoint> = metric_series(sessions)
        .map(|(date, value)| TrendDataPoint {
            date,
            days_since_start: 0.0,
            value,
        })
        .collect();
    if let Some(first) = points.first().map(|p| p.date) {
        for point in &mut points {
            point.days_since_start = f64::from((point.date - first).num_days() as i32);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use tartan_core::models::{
        Discipline, DisciplineDetail, Intensity, SessionType, TrainingSession,
    };
    use uuid::Uuid;

    fn runner_session(day: u32, time_seconds: f64) -> TrainingSession {
        TrainingSession {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 4, day).unwrap(),
            discipline: Discipline::Sprint400m,
            session_type: SessionType::Training,
            athlete_type: AthleteType::Runner,
            duration_minutes: 60,
            intensity: Intensity::Moderate,
            rpe: Some(6),
            calories_burned: 0.0,
            notes: None,
            detail: Some(DisciplineDetail::Runner {
                distance_m: 400.0,
                time_seconds,
                repetitions: 3,
            }),
        }
    }

    #[test]
    fn series_is_date_ascending_from_newest_first_input() {
        // Provider order: newest first
        let sessions = vec![
            runner_session(10, 54.0),
            runner_session(7, 56.0),
            runner_session(4, 58.0),
        ];
        let series: Vec<_> = metric_series(&sessions).collect();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].0.day(), 4);
        assert!((series[0].1 - 58.0).abs() < f64::EPSILON);
        assert_eq!(series[2].0.day(), 10);
    }

    #[test]
    fn series_excludes_malformed_sessions() {
        let mut missing_detail = runner_session(5, 55.0);
        missing_detail.detail = None;
        let mut zero_metric = runner_session(6, 0.0);
        zero_metric.detail = Some(DisciplineDetail::Runner {
            distance_m: 400.0,
            time_seconds: 0.0,
            repetitions: 1,
        });
        let sessions = vec![runner_session(8, 53.2), missing_detail, zero_metric];
        assert_eq!(metric_series(&sessions).count(), 1);
    }

    #[test]
    fn series_is_restartable() {
        let sessions = vec![runner_session(10, 54.0), runner_session(7, 56.0)];
        let iter = metric_series(&sessions);
        assert_eq!(iter.count(), 2);
        // A fresh call yields the same sequence; extraction has no side effects
        assert_eq!(metric_series(&sessions).count(), 2);
    }

    #[test]
    fn collect_series_computes_days_since_start() {
        let sessions = vec![
            runner_session(11, 54.0),
            runner_session(8, 56.0),
            runner_session(1, 58.0),
        ];
        let points = collect_series(&sessions);
        assert_eq!(points.len(), 3);
        assert!((points[0].days_since_start - 0.0).abs() < f64::EPSILON);
        assert!((points[1].days_since_start - 7.0).abs() < f64::EPSILON);
        assert!((points[2].days_since_start - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn metric_kind_semantics() {
        assert!(MetricKind::for_athlete(AthleteType::Runner).is_lower_better());
        assert!(!MetricKind::for_athlete(AthleteType::Jumper).is_lower_better());
        assert_eq!(MetricKind::ThrowDistance.unit(), "m");
    }
}
