// ABOUTME: Main library entry point for the Tartan athletics analytics platform
// ABOUTME: Re-exports the core and intelligence crates behind one facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

#![deny(unsafe_code)]

//! # Tartan
//!
//! Insight and analytics engine for track-and-field training data. Athletes
//! log training sessions and nutrition intake; Tartan derives deterministic
//! and statistical insights (trend direction, plateau detection, calorie
//! balance) from the accumulated history.
//!
//! ## Architecture
//!
//! - **`tartan-core`**: domain models and unified error handling
//! - **`tartan-intelligence`**: the analytics engine (trend classifier,
//!   rule battery, plan generator, calorie/macro pipeline)
//! - **root crate**: logging setup and the offline `seed-dataset` binary
//!
//! ## Example
//!
//! ```rust
//! use tartan::intelligence::provider::InMemoryHistory;
//! use tartan::intelligence::InsightEngine;
//! use uuid::Uuid;
//!
//! let history = InMemoryHistory::new();
//! let engine = InsightEngine::new();
//! let insights = engine.generate(&history, Uuid::new_v4());
//! // An empty history still yields the fallback guidance message.
//! assert!(!insights.is_empty());
//! ```

/// Structured logging configuration
pub mod logging;

/// Core domain models and errors
pub use tartan_core as core;

/// Analytics engine
pub use tartan_intelligence as intelligence;

// Flat re-exports for the common types callers touch on every request
pub use tartan_core::errors::{AppError, AppResult, ErrorCode};
pub use tartan_core::models::{
    AthleteType, Discipline, DisciplineDetail, NutritionLog, TrainingSession,
};
pub use tartan_intelligence::{
    HistoryProvider, Insight, InsightEngine, InsightKind, InsightSeverity, TrendDirection,
};
