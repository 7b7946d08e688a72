// ABOUTME: Healthy Growth CLI - estimate a child's BMI-for-age from the command line
// ABOUTME: Runs the same form validation and estimator as the HTTP API and prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors
//!
//! Usage:
//! ```bash
//! # Estimate for a 10 year old boy, 140 cm, 28 kg
//! healthy-growth-cli estimate --age 10 --gender boy --height-cm 140 --weight-kg 28
//!
//! # Same estimate as JSON
//! healthy-growth-cli estimate --age 10 --gender boy --height-cm 140 --weight-kg 28 --json
//!
//! # Reject ages, heights and weights outside the form limits
//! healthy-growth-cli estimate --age 25 --gender girl --height-cm 165 --weight-kg 55 --strict
//!
//! # Print the reference bands for girls
//! healthy-growth-cli table --gender girl
//! ```

mod commands;

use clap::{Parser, Subcommand};
use healthy_growth::{errors::AppResult, formatters::OutputFormat, logging::LoggingConfig};
use healthy_growth_core::{EstimatorConfig, MeasurementForm};
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "healthy-growth-cli",
    about = "Healthy Growth BMI-for-age estimator",
    long_about = "Computes a child's BMI and compares it with the healthy band for their age and gender."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate BMI and classify it against the reference band
    Estimate {
        /// Age in whole years
        #[arg(long)]
        age: Option<String>,

        /// Gender (boy or girl)
        #[arg(long)]
        gender: Option<String>,

        /// Height in centimeters
        #[arg(long)]
        height_cm: Option<String>,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: Option<String>,

        /// Reject values outside the form limits
        #[arg(long)]
        strict: bool,
    },

    /// Print the reference bands for one gender
    Table {
        /// Gender (boy or girl)
        #[arg(long)]
        gender: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Logging initialization failed: {e}");
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    debug!(format = %format, "Healthy Growth CLI");

    match cli.command {
        Command::Estimate {
            age,
            gender,
            height_cm,
            weight_kg,
            strict,
        } => {
            let form = MeasurementForm {
                age: age.as_deref().map(Into::into),
                gender,
                height_cm: height_cm.as_deref().map(Into::into),
                weight_kg: weight_kg.as_deref().map(Into::into),
            };
            let config = EstimatorConfig {
                enforce_form_ranges: strict,
            };
            commands::estimate::run(&form, &config, format)?;
        }
        Command::Table { gender } => {
            commands::table::run(&gender, format)?;
        }
    }

    Ok(())
}
