// ABOUTME: Integration tests for the BMI estimator through its public interface
// ABOUTME: Covers the reference examples, inclusive band boundaries, and out-of-table ages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthy_growth_core::growth::{body_mass_index, round_to_tenth, BmiEstimator, GrowthTable};
use healthy_growth_core::models::{Classification, Gender, Measurement};
use healthy_growth_core::ErrorCode;

fn estimate(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> (f64, Classification) {
    let assessment = BmiEstimator::standard()
        .estimate(&Measurement::new(age, gender, height_cm, weight_kg))
        .expect("estimate should succeed for positive inputs");
    (assessment.bmi, assessment.classification)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// === Reference examples ===

#[test]
fn test_boy_age_10_healthy() {
    let (bmi, classification) = estimate(10, Gender::Boy, 140.0, 28.0);
    assert_close(bmi, 14.3);
    assert_eq!(classification, Classification::Healthy);
}

#[test]
fn test_boy_age_10_high() {
    let (bmi, classification) = estimate(10, Gender::Boy, 140.0, 45.0);
    assert_close(bmi, 23.0);
    assert_eq!(classification, Classification::High);
}

#[test]
fn test_girl_age_5_low() {
    let (bmi, classification) = estimate(5, Gender::Girl, 110.0, 15.0);
    assert_close(bmi, 12.4);
    assert_eq!(classification, Classification::Low);
}

// === Formula ===

#[test]
fn test_formula_matches_definition() {
    for (height_cm, weight_kg) in [(50.0, 5.0), (123.4, 24.3), (172.0, 61.5), (200.0, 150.0)] {
        let height_m: f64 = height_cm / 100.0;
        let expected = weight_kg / height_m.powi(2);
        let bmi = body_mass_index(height_cm, weight_kg).unwrap();
        assert_close(bmi, expected);

        let assessment = BmiEstimator::standard()
            .estimate(&Measurement::new(8, Gender::Girl, height_cm, weight_kg))
            .unwrap();
        assert_close(assessment.raw_bmi, expected);
        assert_close(assessment.bmi, round_to_tenth(expected));
    }
}

// === Inclusive boundaries ===

#[test]
fn test_band_bounds_classify_healthy_for_every_age() {
    let table = GrowthTable::standard();
    for gender in Gender::ALL {
        for band in table.bands(gender) {
            // At 100 cm, BMI equals the weight in kg exactly
            for weight in [band.min, band.max] {
                let (bmi, classification) = estimate(band.age, gender, 100.0, weight);
                assert_close(bmi, weight);
                assert_eq!(
                    classification,
                    Classification::Healthy,
                    "{gender} age {} weight {weight}",
                    band.age
                );
            }
        }
    }
}

#[test]
fn test_just_outside_bounds() {
    let (_, below) = estimate(10, Gender::Boy, 100.0, 14.19);
    let (_, above) = estimate(10, Gender::Boy, 100.0, 19.41);
    assert_eq!(below, Classification::Low);
    assert_eq!(above, Classification::High);
}

// === Out-of-table ages ===

#[test]
fn test_ages_outside_table_are_unclassified() {
    for age in [0, 1, 18, 25, 90] {
        for weight in [5.0, 20.0, 80.0] {
            let assessment = BmiEstimator::standard()
                .estimate(&Measurement::new(age, Gender::Boy, 150.0, weight))
                .unwrap();
            assert_eq!(assessment.classification, Classification::Unclassified);
            assert!(assessment.reference.is_none());
            assert_eq!(assessment.advice, Classification::Unclassified.advice());
        }
    }
}

// === Output shape ===

#[test]
fn test_assessment_carries_reference_band_and_advice() {
    let assessment = BmiEstimator::standard()
        .estimate(&Measurement::new(10, Gender::Boy, 140.0, 28.0))
        .unwrap();
    let reference = assessment.reference.unwrap();

    assert_eq!(reference.age, 10);
    assert_close(reference.min, 14.2);
    assert_close(reference.max, 19.4);
    assert_eq!(assessment.advice, Classification::Healthy.advice());
    assert_eq!(assessment.status(), "Healthy weight");
}

#[test]
fn test_assessment_serializes_rounded_bmi() {
    let assessment = BmiEstimator::standard()
        .estimate(&Measurement::new(5, Gender::Girl, 110.0, 15.0))
        .unwrap();
    let json = serde_json::to_value(&assessment).unwrap();

    assert_eq!(json["bmi"], 12.4);
    assert_eq!(json["classification"], "LOW");
    assert_eq!(json["gender"], "girl");
    assert!(json.get("rawBmi").is_none());
    assert_eq!(json["reference"]["min"], 13.5);
}

#[test]
fn test_invalid_measurement_rejected() {
    let error = BmiEstimator::standard()
        .estimate(&Measurement::new(10, Gender::Boy, 0.0, 28.0))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_extreme_inputs_rejected_instead_of_non_finite_bmi() {
    let overflow = body_mass_index(100.0, 1e308).unwrap_err();
    assert_eq!(overflow.code, ErrorCode::ValueOutOfRange);
    assert_eq!(overflow.context.field.as_deref(), Some("weightKg"));

    let underflow = body_mass_index(1e-170, 28.0).unwrap_err();
    assert_eq!(underflow.code, ErrorCode::ValueOutOfRange);
    assert_eq!(underflow.context.field.as_deref(), Some("heightCm"));

    for (height_cm, weight_kg) in [(100.0, 1e308), (1e-170, 28.0)] {
        let error = BmiEstimator::standard()
            .estimate(&Measurement::new(10, Gender::Boy, height_cm, weight_kg))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_large_but_computable_bmi_stays_finite() {
    let assessment = BmiEstimator::standard()
        .estimate(&Measurement::new(10, Gender::Boy, 1e-150, 28.0))
        .unwrap();
    assert!(assessment.bmi.is_finite());
    assert_eq!(assessment.classification, Classification::High);
}
