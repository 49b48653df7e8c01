//! Calculation logic for the ROI engine.
//!
//! This module contains the four calculators (individual and team, each under the
//! productivity and efficiency models), the exact evaluators behind them, guarded
//! arithmetic, and the rounding applied once at the output boundary.

mod arithmetic;
mod individual;
mod rounding;
mod team;

pub use arithmetic::{add, divide, multiply, percent_of, return_on, subtract};
pub use individual::{
    calculate_individual, calculate_individual_efficiency, calculate_individual_value,
    evaluate_individual, individual_payback_months,
};
pub use rounding::{
    PERCENT_DP, WHOLE_UNIT_DP, round_individual_results, round_percent, round_team_results,
    round_whole,
};
pub use team::{
    calculate_team, calculate_team_efficiency, calculate_team_value, evaluate_team,
    team_payback_months,
};
