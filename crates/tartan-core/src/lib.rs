// ABOUTME: Core types and constants for the Tartan athletics intelligence platform
// ABOUTME: Foundation crate with error handling and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

#![deny(unsafe_code)]

//! # Tartan Core
//!
//! Foundation crate providing shared types for the Tartan athletics
//! intelligence platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Domain models (`TrainingSession`, `DisciplineDetail`, `NutritionLog`, `FoodItem`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (training sessions, nutrition logs, food reference data)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
