// ABOUTME: BMI estimate and growth-curve route handlers
// ABOUTME: Validates submitted forms, runs the estimator, and returns chart-ready reference data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

//! BMI estimator routes
//!
//! `POST /api/bmi` accepts the measurement form and returns the estimate;
//! `GET /api/growth-curve/:gender` returns the reference band series a client
//! needs to draw the healthy zone.

use crate::constants::paths;
use crate::errors::AppError;
use crate::formatters::{EstimateResponse, GrowthCurveResponse};
use crate::logging::AppLogger;
use crate::middleware::request_id_from_headers;
use crate::server::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use healthy_growth_core::models::{Gender, MeasurementForm};
use std::sync::Arc;

/// BMI estimator routes
pub struct BmiRoutes;

impl BmiRoutes {
    /// Create all estimator routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(paths::BMI, post(Self::handle_estimate))
            .route(paths::GROWTH_CURVE, get(Self::handle_growth_curve))
            .with_state(resources)
    }

    /// Handle a submitted measurement form
    async fn handle_estimate(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<MeasurementForm>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let with_request_id = |error: AppError| match request_id_from_headers(&headers) {
            Some(request_id) => error.with_request_id(request_id),
            None => error,
        };

        let Json(form) =
            payload.map_err(|rejection| with_request_id(Self::rejection_error(&rejection)))?;

        let assessment = form
            .validate(&resources.config.estimator)
            .and_then(|measurement| resources.estimator.estimate(&measurement))
            .inspect_err(|e| {
                AppLogger::log_rejected_submission(
                    e.code.description(),
                    e.context.field.as_deref(),
                );
            })
            .map_err(with_request_id)?;

        AppLogger::log_estimate(
            assessment.gender,
            assessment.classification,
            assessment.reference.is_some(),
        );

        Ok((
            StatusCode::OK,
            Json(EstimateResponse::from_assessment(&assessment)),
        )
            .into_response())
    }

    /// Map a body rejection: unparseable JSON is a format error, anything
    /// else (wrong content type, wrong field types) is invalid input
    fn rejection_error(rejection: &JsonRejection) -> AppError {
        let message = format!("Invalid measurement form: {}", rejection.body_text());
        match rejection {
            JsonRejection::JsonSyntaxError(_) => AppError::invalid_format(message),
            _ => AppError::invalid_input(message),
        }
    }

    /// Handle a growth curve request
    async fn handle_growth_curve(
        State(resources): State<Arc<ServerResources>>,
        Path(gender): Path<String>,
    ) -> Result<Response, AppError> {
        let gender = gender
            .parse::<Gender>()
            .map_err(|_| AppError::not_found(format!("Growth curve for gender '{gender}'")))?;

        let response = GrowthCurveResponse::new(resources.estimator.table(), gender);
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
