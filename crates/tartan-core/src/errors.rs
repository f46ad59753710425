// ABOUTME: Unified error handling system for the Tartan analytics engine
// ABOUTME: Defines standard error codes, the AppError type, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! # Unified Error Handling System
//!
//! Standard error types and codes shared across the workspace. The analytics
//! engine contains failures at the smallest unit (one rule, one plan, one
//! trend fit); these types carry enough context for callers to log and
//! degrade gracefully instead of aborting an insight request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the workspace
pub type AppResult<T> = Result<T, AppError>;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Fewer records than a rule or model requires
    #[serde(rename = "INSUFFICIENT_DATA")]
    InsufficientData,
    /// A session is missing its expected discipline-specific detail
    #[serde(rename = "MISSING_DETAIL")]
    MissingDetail,
    /// A regression or aggregation failed on malformed numeric input
    #[serde(rename = "COMPUTATION_FAILED")]
    ComputationFailed,
    /// The provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// The requested resource was not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Unexpected internal error
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InsufficientData => "Not enough data recorded to run this analysis",
            Self::MissingDetail => "A training session is missing its discipline detail",
            Self::ComputationFailed => "A statistical computation failed on the recorded data",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InternalError => "An unexpected internal error occurred",
        }
    }
}

/// Application error carrying a standard code and a human-readable message
#[derive(Debug, Clone, Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Standard error code for this failure
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Fewer records than the computation requires
    #[must_use]
    pub fn insufficient_data(needed: usize, got: usize) -> Self {
        Self::new(
            ErrorCode::InsufficientData,
            format!("need at least {needed} data points, got {got}"),
        )
    }

    /// A session lacks the discipline detail its athlete type requires
    pub fn missing_detail(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingDetail, message)
    }

    /// A statistical computation failed on malformed input
    pub fn computation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ComputationFailed, message)
    }

    /// Invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether this failure should degrade to an explanatory message
    /// rather than being surfaced to the caller
    #[must_use]
    pub const fn is_degradable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::InsufficientData | ErrorCode::MissingDetail | ErrorCode::ComputationFailed
        )
    }
}
