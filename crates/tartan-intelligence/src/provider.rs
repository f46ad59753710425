// ABOUTME: Collaborator boundary for training and nutrition history reads
// ABOUTME: HistoryProvider trait plus an in-memory implementation for tests and demos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! # History Provider
//!
//! The engine is a read-only consumer of per-user history. Storage, access
//! control, and profile management live behind this trait: the engine
//! receives an already-authorized user handle and never re-implements
//! authorization. All reads are call-time snapshots ordered by date
//! descending.

use chrono::NaiveDate;
use uuid::Uuid;

use tartan_core::errors::AppResult;
use tartan_core::models::{AthleteType, DayType, Discipline, NutritionLog, TrainingSession};

/// Inclusive date range filter
pub type DateRange = (NaiveDate, NaiveDate);

/// Read interface the analytics engine consumes.
///
/// Implementations are synchronous: every engine computation is
/// request-scoped and bounded, with no suspension points.
pub trait HistoryProvider {
    /// Training sessions for a user, newest first, optionally filtered by
    /// athlete type and discipline.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store fails; an empty history
    /// is `Ok(vec![])`, not an error.
    fn training_sessions(
        &self,
        user: Uuid,
        athlete_type: Option<AthleteType>,
        discipline: Option<Discipline>,
    ) -> AppResult<Vec<TrainingSession>>;

    /// Nutrition logs for a user, newest first, optionally filtered by day
    /// type and inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store fails.
    fn nutrition_logs(
        &self,
        user: Uuid,
        day_type: Option<DayType>,
        date_range: Option<DateRange>,
    ) -> AppResult<Vec<NutritionLog>>;

    /// Profile body weight in kilograms, when recorded. The engine
    /// substitutes the default weight when `None`.
    fn athlete_body_weight(&self, user: Uuid) -> Option<f64>;
}

/// In-memory provider backed by plain vectors.
///
/// Used by the test suites and example programs; a relational store stands
/// behind this trait in production.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    sessions: Vec<TrainingSession>,
    logs: Vec<NutritionLog>,
    body_weights: Vec<(Uuid, f64)>,
}

impl InMemoryHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a training session, recomputing its derived calories the way the
    /// persistence collaborator does on every save.
    pub fn push_session(&mut self, mut session: TrainingSession) {
        let weight = self
            .athlete_body_weight(session.user_id)
            .unwrap_or(crate::config::default_body_weight_kg());
        session.recompute_calories(weight);
        self.sessions.push(session);
    }

    /// Add a nutrition log, recomputing its derived totals on save.
    pub fn push_log(&mut self, mut log: NutritionLog) {
        log.update_totals();
        self.logs.push(log);
    }

    /// Record a profile body weight
    pub fn set_body_weight(&mut self, user: Uuid, weight_kg: f64) {
        self.body_weights.retain(|(id, _)| *id != user);
        self.body_weights.push((user, weight_kg));
    }
}

impl HistoryProvider for InMemoryHistory {
    fn training_sessions(
        &self,
        user: Uuid,
        athlete_type: Option<AthleteType>,
        discipline: Option<Discipline>,
    ) -> AppResult<Vec<TrainingSession>> {
        let mut sessions: Vec<TrainingSession> = self
            .sessions
            .iter()
            .filter(|s| s.user_id == user)
            .filter(|s| athlete_type.is_none_or(|t| s.athlete_type == t))
            .filter(|s| discipline.is_none_or(|d| s.discipline == d))
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(sessions)
    }

    fn nutrition_logs(
        &self,
        user: Uuid,
        day_type: Option<DayType>,
        date_range: Option<DateRange>,
    ) -> AppResult<Vec<NutritionLog>> {
        let mut logs: Vec<NutritionLog> = self
            .logs
            .iter()
            .filter(|l| l.user_id == user)
            .filter(|l| day_type.is_none_or(|d| l.day_type == d))
            .filter(|l| date_range.is_none_or(|(from, to)| l.date >= from && l.date <= to))
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(logs)
    }

    fn athlete_body_weight(&self, user: Uuid) -> Option<f64> {
        self.body_weights
            .iter()
            .find(|(id, _)| *id == user)
            .map(|(_, w)| *w)
    }
}
