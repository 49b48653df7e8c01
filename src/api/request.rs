//! Request types for the ROI engine API.
//!
//! This module defines the JSON request structures for the `/calculate/individual`
//! and `/calculate/team` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{CalculationType, IndividualInputs, TeamInputs};

/// Request body for the `/calculate/individual` endpoint.
///
/// `calculation_type` defaults to `productivity`; within `inputs`, the work hours,
/// value-of-work multiple, fees and tech costs may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualCalculationRequest {
    /// The economic model used to value the lift.
    #[serde(default)]
    pub calculation_type: CalculationType,
    /// The individual's inputs.
    pub inputs: IndividualInputs,
}

/// Request body for the `/calculate/team` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCalculationRequest {
    /// The economic model used to value the lift.
    #[serde(default)]
    pub calculation_type: CalculationType,
    /// The team's inputs.
    pub inputs: TeamInputs,
}
