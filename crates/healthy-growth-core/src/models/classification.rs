// ABOUTME: BMI-for-age classification derived from a percentile band
// ABOUTME: Each classification carries a fixed status label and advisory message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a BMI relative to the healthy band for the child's age
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// Below the 5th percentile
    Low,
    /// Between the 5th and 85th percentiles, inclusive
    Healthy,
    /// Above the 85th percentile
    High,
    /// No reference band for this age
    Unclassified,
}

impl Classification {
    /// Wire name, as serialized
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Healthy => "HEALTHY",
            Self::High => "HIGH",
            Self::Unclassified => "UNCLASSIFIED",
        }
    }

    /// Short status label shown next to the BMI
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Underweight",
            Self::Healthy => "Healthy weight",
            Self::High => "Overweight / obesity",
            Self::Unclassified => "Basic calculation",
        }
    }

    /// Advisory message for this classification
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Low => {
                "BMI is below the expected range (5th percentile). Consult a pediatrician about nutrition."
            }
            Self::Healthy => {
                "Great work! BMI is within the healthy range (5th-85th percentiles). Keep up the current healthy habits."
            }
            Self::High => {
                "BMI is above the expected range (85th percentile). This is a good time to review activity and eating habits."
            }
            Self::Unclassified => {
                "BMI calculated, but there is no percentile reference for this age."
            }
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
