// ABOUTME: Static BMI-for-age reference table with healthy bands for boys and girls aged 2-17
// ABOUTME: Bands approximate the 5th and 85th percentiles of standardized growth curves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

use crate::models::{Classification, Gender};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Healthy BMI band for one integer age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthBand {
    /// Age in whole years
    pub age: u32,
    /// Lower bound (kg/m², 5th percentile)
    pub min: f64,
    /// Upper bound (kg/m², 85th percentile)
    pub max: f64,
}

impl GrowthBand {
    /// Create a band
    #[must_use]
    pub const fn new(age: u32, min: f64, max: f64) -> Self {
        Self { age, min, max }
    }

    /// Classify a BMI against this band; both bounds count as healthy
    #[must_use]
    pub fn classify(&self, bmi: f64) -> Classification {
        if bmi < self.min {
            Classification::Low
        } else if bmi > self.max {
            Classification::High
        } else {
            Classification::Healthy
        }
    }

    /// Middle of the band, drawn as the reference line of the chart
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// One point of a growth curve, as consumed by a chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthCurvePoint {
    /// Age in whole years
    pub age: u32,
    /// Lower bound (kg/m²)
    pub min: f64,
    /// Upper bound (kg/m²)
    pub max: f64,
    /// Midpoint of the band (kg/m²)
    pub midpoint: f64,
}

impl From<&GrowthBand> for GrowthCurvePoint {
    fn from(band: &GrowthBand) -> Self {
        Self {
            age: band.age,
            min: band.min,
            max: band.max,
            midpoint: band.midpoint(),
        }
    }
}

static BOY_BANDS: [GrowthBand; 16] = [
    GrowthBand::new(2, 14.7, 18.2),
    GrowthBand::new(3, 14.3, 17.4),
    GrowthBand::new(4, 14.0, 16.9),
    GrowthBand::new(5, 13.8, 16.8),
    GrowthBand::new(6, 13.7, 17.0),
    GrowthBand::new(7, 13.7, 17.4),
    GrowthBand::new(8, 13.8, 17.9),
    GrowthBand::new(9, 14.0, 18.6),
    GrowthBand::new(10, 14.2, 19.4),
    GrowthBand::new(11, 14.6, 20.2),
    GrowthBand::new(12, 15.0, 21.0),
    GrowthBand::new(13, 15.5, 21.8),
    GrowthBand::new(14, 16.0, 22.6),
    GrowthBand::new(15, 16.6, 23.4),
    GrowthBand::new(16, 17.1, 24.2),
    GrowthBand::new(17, 17.7, 24.9),
];

static GIRL_BANDS: [GrowthBand; 16] = [
    GrowthBand::new(2, 14.4, 18.0),
    GrowthBand::new(3, 14.0, 17.6),
    GrowthBand::new(4, 13.7, 17.3),
    GrowthBand::new(5, 13.5, 17.1),
    GrowthBand::new(6, 13.4, 17.3),
    GrowthBand::new(7, 13.4, 17.7),
    GrowthBand::new(8, 13.6, 18.3),
    GrowthBand::new(9, 13.9, 19.0),
    GrowthBand::new(10, 14.3, 19.9),
    GrowthBand::new(11, 14.8, 20.8),
    GrowthBand::new(12, 15.3, 21.8),
    GrowthBand::new(13, 15.9, 22.7),
    GrowthBand::new(14, 16.4, 23.6),
    GrowthBand::new(15, 17.0, 24.3),
    GrowthBand::new(16, 17.5, 25.0),
    GrowthBand::new(17, 17.9, 25.6),
];

/// The reference table shipped with the estimator
pub static GROWTH_TABLE: GrowthTable = GrowthTable {
    boys: &BOY_BANDS,
    girls: &GIRL_BANDS,
};

/// BMI-for-age bands per gender, sorted by age with one row per year
#[derive(Debug)]
pub struct GrowthTable {
    boys: &'static [GrowthBand],
    girls: &'static [GrowthBand],
}

impl GrowthTable {
    /// The standard reference table
    #[must_use]
    pub fn standard() -> &'static Self {
        &GROWTH_TABLE
    }

    /// All bands for a gender, ordered by age
    #[must_use]
    pub const fn bands(&self, gender: Gender) -> &'static [GrowthBand] {
        match gender {
            Gender::Boy => self.boys,
            Gender::Girl => self.girls,
        }
    }

    /// Band for the exact age, if the table covers it
    #[must_use]
    pub fn band_for(&self, gender: Gender, age: u32) -> Option<&'static GrowthBand> {
        let bands = self.bands(gender);
        bands
            .binary_search_by_key(&age, |band| band.age)
            .ok()
            .map(|index| &bands[index])
    }

    /// Ages covered for a gender, `None` for an empty table
    #[must_use]
    pub fn age_range(&self, gender: Gender) -> Option<RangeInclusive<u32>> {
        let bands = self.bands(gender);
        Some(bands.first()?.age..=bands.last()?.age)
    }

    /// Chart series for a gender
    #[must_use]
    pub fn curve(&self, gender: Gender) -> Vec<GrowthCurvePoint> {
        self.bands(gender).iter().map(GrowthCurvePoint::from).collect()
    }
}
