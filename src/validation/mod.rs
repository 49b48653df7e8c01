//! Input validation.
//!
//! [`IndividualForm`] and [`TeamForm`] carry raw text as entered and parse it into
//! the typed records the calculators accept. [`validate_individual_inputs`] and
//! [`validate_team_inputs`] apply the same bounds to records that arrive already
//! typed, such as HTTP request bodies.

mod form;
mod rules;

pub use form::{IndividualForm, TeamForm};
pub use rules::{
    MAX_AMOUNT, MAX_HOURS, MAX_LEARNERS, MAX_LIFT_PERCENT, MAX_VALUE_OF_WORK_MULTIPLE,
    validate_individual_inputs, validate_team_inputs,
};
