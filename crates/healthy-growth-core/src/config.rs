// ABOUTME: Estimator configuration controlling how strictly submitted forms are validated
// ABOUTME: Strict mode applies the age, height, and weight bounds of the original form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use serde::{Deserialize, Serialize};

/// Validation policy for submitted measurement forms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Reject ages outside 2-17, heights outside 50-200 cm and weights
    /// outside 5-150 kg instead of computing an estimate
    pub enforce_form_ranges: bool,
}

impl EstimatorConfig {
    /// Configuration that enforces the form's input ranges
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            enforce_form_ranges: true,
        }
    }
}
