// ABOUTME: Gender tag selecting the boys' or girls' percentile reference table
// ABOUTME: Parses the form values and their common aliases case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender tag of the measured child
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Boys' reference table
    Boy,
    /// Girls' reference table
    Girl,
}

impl Gender {
    /// Both genders, in table order
    pub const ALL: [Self; 2] = [Self::Boy, Self::Girl];

    /// Wire name (`boy` or `girl`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boy => "boy",
            Self::Girl => "girl",
        }
    }

    /// Capitalized label for reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boy => "Boy",
            Self::Girl => "Girl",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boy" | "boys" | "male" | "m" => Ok(Self::Boy),
            "girl" | "girls" | "female" | "f" => Ok(Self::Girl),
            other => Err(AppError::invalid_format(format!(
                "Unknown gender: '{other}'. Valid options: boy, girl"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_accepts_form_values_and_aliases() {
        assert_eq!("boy".parse::<Gender>().ok(), Some(Gender::Boy));
        assert_eq!("boys".parse::<Gender>().ok(), Some(Gender::Boy));
        assert_eq!(" Girls ".parse::<Gender>().ok(), Some(Gender::Girl));
        assert_eq!("FEMALE".parse::<Gender>().ok(), Some(Gender::Girl));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "robot".parse::<Gender>().err().map(|e| e.code);
        assert_eq!(err, Some(ErrorCode::InvalidFormat));
    }

    #[test]
    fn test_display_round_trips_wire_name() {
        for gender in Gender::ALL {
            assert_eq!(gender.to_string().parse::<Gender>().ok(), Some(gender));
        }
    }
}
