//! Core data models for the ROI engine.
//!
//! This module contains the input, result, insight, and export records shared by
//! the calculators, the insight generator, and the HTTP layer.

mod export;
mod inputs;
mod insight;
mod results;

pub use export::{CalculationExport, IndividualExport, TeamExport};
pub use inputs::{
    CalculationType, IndividualInputs, Scope, TeamInputs, default_value_of_work_multiple,
    default_work_hours,
};
pub use insight::{Insight, InsightCategory, InsightKind};
pub use results::{IndividualResults, TeamResults};
