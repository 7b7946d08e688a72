// ABOUTME: Output formatting for estimates and growth curves in text and JSON
// ABOUTME: Shared by the HTTP responses and the command-line tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! Output Format Abstraction Layer
//!
//! Estimates are rendered either as the plain-text result summary or as the
//! JSON payload the HTTP API returns.
//!
//! ## Usage
//!
//! ```rust
//! use healthy_growth::formatters::{format_output, EstimateResponse, OutputFormat};
//! use healthy_growth_core::growth::BmiEstimator;
//! use healthy_growth_core::models::{Gender, Measurement};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assessment = BmiEstimator::standard().estimate(&Measurement::new(10, Gender::Boy, 140.0, 28.0))?;
//! let response = EstimateResponse::from_assessment(&assessment);
//! let output = format_output(&response, OutputFormat::Json)?;
//! assert!(output.data.contains("\"HEALTHY\""));
//! # Ok(())
//! # }
//! ```

/// JSON payloads of the HTTP API
pub mod responses;
/// Plain-text result summary
pub mod summary;

pub use responses::{EstimateResponse, GrowthCurveResponse};
pub use summary::{GrowthCurveTable, ResultSummary};

use crate::errors::{AppError, ErrorCode};
use serde::Serialize;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON, identical to the HTTP payload
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, thiserror::Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::new(ErrorCode::SerializationError, error.message.clone()).with_source(error)
    }
}

/// Format data that has both a text and a JSON rendering
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T>(data: &T, format: OutputFormat) -> Result<FormattedOutput, FormatError>
where
    T: Serialize + fmt::Display,
{
    let rendered = match format {
        OutputFormat::Text => data.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data: rendered,
        format,
        content_type: format.content_type(),
    })
}
