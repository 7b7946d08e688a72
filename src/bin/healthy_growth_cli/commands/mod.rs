// ABOUTME: Command modules for healthy-growth-cli
// ABOUTME: Provides the estimate and reference table commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

pub mod estimate;
pub mod table;

use healthy_growth::errors::AppResult;
use healthy_growth::formatters::{format_output, OutputFormat};
use serde::Serialize;
use std::fmt;

/// Render and print a command result
fn print_output<T>(data: &T, format: OutputFormat) -> AppResult<()>
where
    T: Serialize + fmt::Display,
{
    let output = format_output(data, format)?;
    println!("{}", output.data);
    Ok(())
}
