// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, formatters, and output destinations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! Structured logging configuration with environment-driven filtering

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

/// Log output format options
#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Build the configuration from the environment: `RUST_LOG` for the
    /// filter and `LOG_FORMAT` for the output format.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
        Self {
            level,
            format,
            include_location: false,
        }
    }

    /// Initialize the global subscriber for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when a subscriber is already installed.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = EnvFilter::try_new(&self.level)?;
        match self.format {
            LogFormat::Json => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .try_init()?;
            }
            LogFormat::Pretty => {
                fmt()
                    .with_env_filter(filter)
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .try_init()?;
            }
            LogFormat::Compact => {
                fmt()
                    .compact()
                    .with_env_filter(filter)
                    .try_init()?;
            }
        }
        Ok(())
    }
}
