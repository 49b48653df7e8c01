//! Output-boundary rounding.
//!
//! Currency and hour figures are rounded to whole units and percentages to two
//! decimal places, midpoint away from zero. These functions run exactly once per
//! calculation, after the whole formula chain has been evaluated. Aggregate
//! figures are summed from their rounded parts rather than rounded themselves.

use rust_decimal::{Decimal, RoundingStrategy};

use super::arithmetic::{add, subtract};
use crate::error::EngineResult;
use crate::models::{IndividualInputs, IndividualResults, TeamResults};

/// Decimal places kept for currency and hour figures.
pub const WHOLE_UNIT_DP: u32 = 0;

/// Decimal places kept for percentages.
pub const PERCENT_DP: u32 = 2;

fn round_to(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // Normalize negative zero.
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Rounds a currency or hour figure to the nearest whole unit.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::round_whole;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_whole(Decimal::from_str("57.6923").unwrap()), Decimal::new(58, 0));
/// assert_eq!(round_whole(Decimal::from_str("2.5").unwrap()), Decimal::new(3, 0));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    round_to(value, WHOLE_UNIT_DP)
}

/// Rounds a percentage to two decimal places.
pub fn round_percent(value: Decimal) -> Decimal {
    round_to(value, PERCENT_DP)
}

/// Rounds an individual result at the output boundary.
///
/// Leaf figures are rounded on their own. Sums and differences are rebuilt from
/// the rounded parts, so the record adds up exactly as shown: training costs are
/// human costs plus fees, total costs are training plus tech, and net value is
/// lift minus total costs. ROI keeps the exact ratio, rounded to two places.
///
/// # Errors
///
/// Returns `Overflow` if a rebuilt sum does not fit a `Decimal`.
pub fn round_individual_results(
    inputs: &IndividualInputs,
    exact: IndividualResults,
) -> EngineResult<IndividualResults> {
    let annual_value_of_work = round_whole(exact.annual_value_of_work);
    let value_of_productivity_lift = round_whole(exact.value_of_productivity_lift);
    let ai_training_human_costs = round_whole(exact.ai_training_human_costs);
    let total_ai_training_costs = add(
        ai_training_human_costs,
        round_whole(inputs.ai_training_license_fees),
        "total_ai_training_costs",
    )?;
    let total_ai_costs = add(
        total_ai_training_costs,
        round_whole(inputs.ai_tech_costs),
        "total_ai_costs",
    )?;

    Ok(IndividualResults {
        cost_per_hour: round_whole(exact.cost_per_hour),
        value_of_work_per_hour: round_whole(exact.value_of_work_per_hour),
        annual_value_of_work,
        value_of_productivity_lift,
        new_annual_value_of_work: add(
            annual_value_of_work,
            value_of_productivity_lift,
            "new_annual_value_of_work",
        )?,
        ai_training_human_costs,
        total_ai_training_costs,
        total_ai_costs,
        first_year_net_value: subtract(
            value_of_productivity_lift,
            total_ai_costs,
            "first_year_net_value",
        )?,
        roi: round_percent(exact.roi),
        est_hours_saved: exact.est_hours_saved.map(round_whole),
    })
}

/// Rounds a team result at the output boundary, rebuilding sums from rounded
/// parts the same way as [`round_individual_results`].
pub fn round_team_results(exact: TeamResults) -> EngineResult<TeamResults> {
    let avg_annual_value_of_work = round_whole(exact.avg_annual_value_of_work);
    let avg_value_of_productivity_lift = round_whole(exact.avg_value_of_productivity_lift);
    let total_value_of_productivity_lift = round_whole(exact.total_value_of_productivity_lift);
    let combined_ai_training_human_costs = round_whole(exact.combined_ai_training_human_costs);
    let combined_ai_training_license_fees = round_whole(exact.combined_ai_training_license_fees);
    let total_ai_tech_costs = round_whole(exact.total_ai_tech_costs);
    let total_ai_training_costs = add(
        combined_ai_training_human_costs,
        combined_ai_training_license_fees,
        "total_ai_training_costs",
    )?;
    let total_ai_costs = add(total_ai_training_costs, total_ai_tech_costs, "total_ai_costs")?;

    Ok(TeamResults {
        combined_work_hours: round_whole(exact.combined_work_hours),
        blended_cost_per_hour: round_whole(exact.blended_cost_per_hour),
        blended_value_of_work_per_hour: round_whole(exact.blended_value_of_work_per_hour),
        avg_annual_value_of_work,
        avg_value_of_productivity_lift,
        avg_new_annual_value_of_work: add(
            avg_annual_value_of_work,
            avg_value_of_productivity_lift,
            "avg_new_annual_value_of_work",
        )?,
        total_value_of_productivity_lift,
        combined_ai_training_hours: round_whole(exact.combined_ai_training_hours),
        combined_ai_training_human_costs,
        combined_ai_training_license_fees,
        total_ai_training_costs,
        total_ai_tech_costs,
        total_ai_costs,
        first_year_net_value: subtract(
            total_value_of_productivity_lift,
            total_ai_costs,
            "first_year_net_value",
        )?,
        roi: round_percent(exact.roi),
        est_hours_saved: exact.est_hours_saved.map(round_whole),
    })
}
