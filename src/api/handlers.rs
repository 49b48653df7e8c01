//! HTTP request handlers for the ROI engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_individual, calculate_team};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::insights::{generate_individual_insights, generate_team_insights};
use crate::models::{CalculationExport, IndividualExport, Scope, TeamExport};
use crate::validation::{validate_individual_inputs, validate_team_inputs};

use super::request::{IndividualCalculationRequest, TeamCalculationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/individual", post(calculate_individual_handler))
        .route("/calculate/team", post(calculate_team_handler))
        .with_state(state)
}

/// Handler for POST /calculate/individual.
async fn calculate_individual_handler(
    State(state): State<AppState>,
    payload: Result<Json<IndividualCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, scope = "individual", "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_individual_calculation(state.config(), request) {
        Ok(export) => {
            info!(
                correlation_id = %correlation_id,
                calculation_type = export.calculation_type.label(),
                roi = %export.results.roi,
                insights = export.insights.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, export)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Handler for POST /calculate/team.
async fn calculate_team_handler(
    State(state): State<AppState>,
    payload: Result<Json<TeamCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, scope = "team", "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_team_calculation(state.config(), request) {
        Ok(export) => {
            info!(
                correlation_id = %correlation_id,
                calculation_type = export.calculation_type.label(),
                learners = export.inputs.number_of_learners,
                roi = %export.results.roi,
                insights = export.insights.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, export)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Validates, calculates and annotates an individual request.
fn perform_individual_calculation(
    config: &ConfigLoader,
    request: IndividualCalculationRequest,
) -> EngineResult<IndividualExport> {
    let IndividualCalculationRequest {
        calculation_type,
        inputs,
    } = request;

    validate_individual_inputs(&inputs)?;
    let results = calculate_individual(&inputs, calculation_type)?;
    let insights =
        generate_individual_insights(config.individual_table(), &inputs, &results, calculation_type);

    Ok(CalculationExport::new(
        Scope::Individual,
        calculation_type,
        inputs,
        results,
        insights,
    ))
}

/// Validates, calculates and annotates a team request.
fn perform_team_calculation(
    config: &ConfigLoader,
    request: TeamCalculationRequest,
) -> EngineResult<TeamExport> {
    let TeamCalculationRequest {
        calculation_type,
        inputs,
    } = request;

    validate_team_inputs(&inputs)?;
    let results = calculate_team(&inputs, calculation_type)?;
    let insights = generate_team_insights(config.team_table(), &inputs, &results, calculation_type);

    Ok(CalculationExport::new(
        Scope::Team,
        calculation_type,
        inputs,
        results,
        insights,
    ))
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
