//! HTTP API module for the ROI engine.
//!
//! This module provides the REST API endpoints for individual and team ROI
//! calculations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{IndividualCalculationRequest, TeamCalculationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
