//! Team ROI calculators.
//!
//! A team is modelled as one blended worker: combined compensation is spread over
//! combined work hours to give a blended hourly rate, per-learner averages are
//! priced at that rate, and totals are scaled back up by headcount.

use rust_decimal::Decimal;
use tracing::debug;

use super::arithmetic::{add, divide, multiply, percent_of, return_on, subtract};
use super::individual::payback_months;
use super::rounding::round_team_results;
use crate::error::EngineResult;
use crate::models::{CalculationType, TeamInputs, TeamResults};

/// Evaluates the team formula chain without rounding.
///
/// # Errors
///
/// Returns `DivisionByZero` if combined work hours or total AI costs are zero,
/// and `Overflow` if an intermediate figure does not fit a `Decimal`.
pub fn evaluate_team(
    inputs: &TeamInputs,
    calculation_type: CalculationType,
) -> EngineResult<TeamResults> {
    let learners = inputs.learners();

    let combined_work_hours =
        multiply(inputs.average_work_hours, learners, "combined_work_hours")?;
    let blended_cost_per_hour = divide(
        inputs.combined_comp,
        combined_work_hours,
        "combined_work_hours",
    )?;
    let blended_value_of_work_per_hour = multiply(
        blended_cost_per_hour,
        inputs.value_of_work_multiple,
        "blended_value_of_work_per_hour",
    )?;

    let (avg_annual_value_of_work, avg_value_of_productivity_lift, est_hours_saved) =
        match calculation_type {
            CalculationType::Productivity => {
                let avg_annual = multiply(
                    inputs.average_work_hours,
                    blended_value_of_work_per_hour,
                    "avg_annual_value_of_work",
                )?;
                let avg_lift = percent_of(
                    avg_annual,
                    inputs.est_productivity_lift,
                    "avg_value_of_productivity_lift",
                )?;
                (avg_annual, avg_lift, None)
            }
            CalculationType::Efficiency => {
                let avg_hours_saved = percent_of(
                    inputs.average_work_hours,
                    inputs.est_productivity_lift,
                    "est_hours_saved",
                )?;
                let avg_baseline_cost = multiply(
                    inputs.average_work_hours,
                    blended_cost_per_hour,
                    "avg_annual_value_of_work",
                )?;
                let avg_lift = multiply(
                    avg_hours_saved,
                    blended_cost_per_hour,
                    "avg_value_of_productivity_lift",
                )?;
                let team_hours_saved = percent_of(
                    combined_work_hours,
                    inputs.est_productivity_lift,
                    "est_hours_saved",
                )?;
                (avg_baseline_cost, avg_lift, Some(team_hours_saved))
            }
        };
    let avg_new_annual_value_of_work = add(
        avg_annual_value_of_work,
        avg_value_of_productivity_lift,
        "avg_new_annual_value_of_work",
    )?;
    let total_value_of_productivity_lift = multiply(
        avg_value_of_productivity_lift,
        learners,
        "total_value_of_productivity_lift",
    )?;

    let combined_ai_training_hours = multiply(
        learners,
        inputs.ai_training_hours_per_learner,
        "combined_ai_training_hours",
    )?;
    let combined_ai_training_human_costs = multiply(
        combined_ai_training_hours,
        blended_cost_per_hour,
        "combined_ai_training_human_costs",
    )?;
    let combined_ai_training_license_fees = multiply(
        inputs.ai_training_license_fees_per_learner,
        learners,
        "combined_ai_training_license_fees",
    )?;
    let total_ai_training_costs = add(
        combined_ai_training_human_costs,
        combined_ai_training_license_fees,
        "total_ai_training_costs",
    )?;
    let total_ai_tech_costs = multiply(
        inputs.ai_tech_costs_per_learner,
        learners,
        "total_ai_tech_costs",
    )?;
    let total_ai_costs = add(total_ai_training_costs, total_ai_tech_costs, "total_ai_costs")?;

    let first_year_net_value = subtract(
        total_value_of_productivity_lift,
        total_ai_costs,
        "first_year_net_value",
    )?;
    let roi = return_on(first_year_net_value, total_ai_costs, "total_ai_costs")?;

    debug!(
        calculation_type = calculation_type.label(),
        learners = inputs.number_of_learners,
        total_ai_costs = %total_ai_costs,
        roi = %roi,
        "Evaluated team ROI"
    );

    Ok(TeamResults {
        combined_work_hours,
        blended_cost_per_hour,
        blended_value_of_work_per_hour,
        avg_annual_value_of_work,
        avg_value_of_productivity_lift,
        avg_new_annual_value_of_work,
        total_value_of_productivity_lift,
        combined_ai_training_hours,
        combined_ai_training_human_costs,
        combined_ai_training_license_fees,
        total_ai_training_costs,
        total_ai_tech_costs,
        total_ai_costs,
        first_year_net_value,
        roi,
        est_hours_saved,
    })
}

/// Calculates a team's ROI for the given model, rounded for output.
pub fn calculate_team(
    inputs: &TeamInputs,
    calculation_type: CalculationType,
) -> EngineResult<TeamResults> {
    evaluate_team(inputs, calculation_type).and_then(round_team_results)
}

/// Calculates a team's ROI under the productivity model.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::calculate_team_value;
/// use roi_engine::models::TeamInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = TeamInputs {
///     number_of_learners: 25,
///     combined_comp: Decimal::new(2_500_000, 0),
///     average_work_hours: Decimal::new(2080, 0),
///     value_of_work_multiple: Decimal::new(2, 0),
///     est_productivity_lift: Decimal::new(20, 0),
///     ai_training_hours_per_learner: Decimal::new(15, 0),
///     ai_training_license_fees_per_learner: Decimal::new(300, 0),
///     ai_tech_costs_per_learner: Decimal::new(300, 0),
/// };
///
/// let results = calculate_team_value(&inputs).unwrap();
/// assert_eq!(results.combined_work_hours, Decimal::new(52_000, 0));
/// assert_eq!(results.total_ai_costs, Decimal::new(33_029, 0));
/// ```
pub fn calculate_team_value(inputs: &TeamInputs) -> EngineResult<TeamResults> {
    calculate_team(inputs, CalculationType::Productivity)
}

/// Calculates a team's ROI under the efficiency model.
pub fn calculate_team_efficiency(inputs: &TeamInputs) -> EngineResult<TeamResults> {
    calculate_team(inputs, CalculationType::Efficiency)
}

/// Months of team-wide lift needed to recover the total AI costs, if there is any lift.
pub fn team_payback_months(results: &TeamResults) -> Option<Decimal> {
    payback_months(results.total_ai_costs, results.total_value_of_productivity_lift)
}
