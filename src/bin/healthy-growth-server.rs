// ABOUTME: Server binary for the Healthy Growth estimator HTTP API
// ABOUTME: Loads environment configuration, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! # Healthy Growth Server Binary
//!
//! Starts the estimator API on the configured address.

use anyhow::Result;
use clap::Parser;
use healthy_growth::{config::ServerConfig, constants::paths, logging, server};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "healthy-growth-server")]
#[command(about = "Healthy Growth - child BMI-for-age estimator API")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    http_host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Enforce the form's age, height, and weight ranges
    #[arg(long)]
    strict_ranges: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_host) = args.http_host {
        config.http_host = http_host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if args.strict_ranges {
        config.estimator.enforce_form_ranges = true;
    }
    config.validate()?;

    info!("Starting Healthy Growth server");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(Arc::new(config)).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display the available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("   Health:        GET  {base}{}", paths::HEALTH);
    info!("   Readiness:     GET  {base}{}", paths::READY);
    info!("   BMI Estimate:  POST {base}{}", paths::BMI);
    info!("   Growth Curve:  GET  {base}/api/growth-curve/{{gender}}");
    info!("=== End of Endpoint List ===");
}
