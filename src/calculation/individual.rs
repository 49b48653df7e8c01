//! Individual ROI calculators.
//!
//! This module values the lift of a single learner under either the productivity
//! model (extra output priced at the value of work) or the efficiency model (hours
//! saved priced at the cost of work), and derives the first-year net value and ROI
//! of the AI training and technology spend.

use rust_decimal::Decimal;
use tracing::debug;

use super::arithmetic::{add, divide, multiply, percent_of, return_on, subtract};
use super::rounding::round_individual_results;
use crate::error::EngineResult;
use crate::models::{CalculationType, IndividualInputs, IndividualResults};

/// Evaluates the individual formula chain without rounding.
///
/// The returned figures are exact decimal values. Use this when checking
/// invariants; presentation code should call one of the `calculate_*` functions,
/// which round the results once at the end.
///
/// # Errors
///
/// Returns `DivisionByZero` if `work_hours` is zero, or if total AI costs come
/// to zero (ROI is undefined without a cost base). Returns `Overflow` if an
/// intermediate figure does not fit a `Decimal`.
pub fn evaluate_individual(
    inputs: &IndividualInputs,
    calculation_type: CalculationType,
) -> EngineResult<IndividualResults> {
    let cost_per_hour = divide(inputs.comp, inputs.work_hours, "work_hours")?;
    let value_of_work_per_hour = multiply(
        cost_per_hour,
        inputs.value_of_work_multiple,
        "value_of_work_per_hour",
    )?;

    let (annual_value_of_work, value_of_productivity_lift, est_hours_saved) =
        match calculation_type {
            CalculationType::Productivity => {
                let annual_value_of_work = multiply(
                    inputs.work_hours,
                    value_of_work_per_hour,
                    "annual_value_of_work",
                )?;
                let lift = percent_of(
                    annual_value_of_work,
                    inputs.est_productivity_lift,
                    "value_of_productivity_lift",
                )?;
                (annual_value_of_work, lift, None)
            }
            CalculationType::Efficiency => {
                let hours_saved = percent_of(
                    inputs.work_hours,
                    inputs.est_productivity_lift,
                    "est_hours_saved",
                )?;
                let baseline_cost =
                    multiply(inputs.work_hours, cost_per_hour, "annual_value_of_work")?;
                let lift = multiply(hours_saved, cost_per_hour, "value_of_productivity_lift")?;
                (baseline_cost, lift, Some(hours_saved))
            }
        };
    let new_annual_value_of_work = add(
        annual_value_of_work,
        value_of_productivity_lift,
        "new_annual_value_of_work",
    )?;

    let ai_training_human_costs = multiply(
        inputs.ai_training_hours,
        cost_per_hour,
        "ai_training_human_costs",
    )?;
    let total_ai_training_costs = add(
        ai_training_human_costs,
        inputs.ai_training_license_fees,
        "total_ai_training_costs",
    )?;
    let total_ai_costs = add(total_ai_training_costs, inputs.ai_tech_costs, "total_ai_costs")?;

    let first_year_net_value = subtract(
        value_of_productivity_lift,
        total_ai_costs,
        "first_year_net_value",
    )?;
    let roi = return_on(first_year_net_value, total_ai_costs, "total_ai_costs")?;

    debug!(
        calculation_type = calculation_type.label(),
        total_ai_costs = %total_ai_costs,
        roi = %roi,
        "Evaluated individual ROI"
    );

    Ok(IndividualResults {
        cost_per_hour,
        value_of_work_per_hour,
        annual_value_of_work,
        value_of_productivity_lift,
        new_annual_value_of_work,
        ai_training_human_costs,
        total_ai_training_costs,
        total_ai_costs,
        first_year_net_value,
        roi,
        est_hours_saved,
    })
}

/// Calculates an individual's ROI for the given model, rounded for output.
pub fn calculate_individual(
    inputs: &IndividualInputs,
    calculation_type: CalculationType,
) -> EngineResult<IndividualResults> {
    evaluate_individual(inputs, calculation_type)
        .and_then(|exact| round_individual_results(inputs, exact))
}

/// Calculates an individual's ROI under the productivity model.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::calculate_individual_value;
/// use roi_engine::models::IndividualInputs;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = IndividualInputs::new(
///     Decimal::new(120_000, 0),
///     Decimal::new(20, 0),
///     Decimal::new(25, 0),
///     Decimal::new(300, 0),
///     Decimal::new(300, 0),
/// );
///
/// let results = calculate_individual_value(&inputs).unwrap();
/// assert_eq!(results.cost_per_hour, Decimal::new(58, 0));
/// assert_eq!(results.total_ai_costs, Decimal::new(2042, 0));
/// assert_eq!(results.roi, Decimal::from_str("2250.28").unwrap());
/// ```
pub fn calculate_individual_value(inputs: &IndividualInputs) -> EngineResult<IndividualResults> {
    calculate_individual(inputs, CalculationType::Productivity)
}

/// Calculates an individual's ROI under the efficiency model.
pub fn calculate_individual_efficiency(
    inputs: &IndividualInputs,
) -> EngineResult<IndividualResults> {
    calculate_individual(inputs, CalculationType::Efficiency)
}

/// Months of lift needed to recover the total AI costs, if there is any lift.
pub fn individual_payback_months(results: &IndividualResults) -> Option<Decimal> {
    payback_months(results.total_ai_costs, results.value_of_productivity_lift)
}

pub(crate) fn payback_months(total_costs: Decimal, annual_lift: Decimal) -> Option<Decimal> {
    if annual_lift <= Decimal::ZERO {
        return None;
    }
    total_costs
        .checked_div(annual_lift)
        .and_then(|years| years.checked_mul(Decimal::from(12)))
}
