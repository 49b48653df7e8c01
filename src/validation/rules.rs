//! Bounds checks on typed input records.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{IndividualInputs, TeamInputs};

/// Largest accepted lift percentage.
pub const MAX_LIFT_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Largest accepted currency amount (1,000,000,000,000).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Largest accepted hour figure: the hours in a leap year.
pub const MAX_HOURS: Decimal = Decimal::from_parts(8784, 0, 0, false, 0);

/// Largest accepted value-of-work multiple.
pub const MAX_VALUE_OF_WORK_MULTIPLE: Decimal = Decimal::ONE_HUNDRED;

/// Largest accepted team headcount.
pub const MAX_LEARNERS: u32 = 1_000_000;

pub(crate) fn require_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            field,
            format!("must be greater than zero, got {}", value),
        ));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

pub(crate) fn require_at_most(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value > max {
        return Err(EngineError::invalid_input(
            field,
            format!("must not exceed {}, got {}", max, value),
        ));
    }
    Ok(())
}

pub(crate) fn require_lift(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > MAX_LIFT_PERCENT {
        return Err(EngineError::invalid_input(
            field,
            format!("must be between 0 and {}, got {}", MAX_LIFT_PERCENT, value),
        ));
    }
    Ok(())
}

/// Checks an individual record against the input bounds.
///
/// Compensation, work hours, the value-of-work multiple and training hours must be
/// positive; the lift must lie within `0..=100`; fees and tech costs must not be
/// negative. Currency amounts are capped at [`MAX_AMOUNT`], hours at
/// [`MAX_HOURS`] and the multiple at [`MAX_VALUE_OF_WORK_MULTIPLE`]. The first
/// violation is returned.
///
/// # Example
///
/// ```
/// use roi_engine::models::IndividualInputs;
/// use roi_engine::validation::validate_individual_inputs;
/// use rust_decimal::Decimal;
///
/// let mut inputs = IndividualInputs::new(
///     Decimal::new(120_000, 0),
///     Decimal::new(20, 0),
///     Decimal::new(25, 0),
///     Decimal::ZERO,
///     Decimal::ZERO,
/// );
/// assert!(validate_individual_inputs(&inputs).is_ok());
///
/// inputs.est_productivity_lift = Decimal::new(150, 0);
/// assert!(validate_individual_inputs(&inputs).is_err());
/// ```
pub fn validate_individual_inputs(inputs: &IndividualInputs) -> EngineResult<()> {
    require_positive("comp", inputs.comp)?;
    require_at_most("comp", inputs.comp, MAX_AMOUNT)?;
    require_positive("work_hours", inputs.work_hours)?;
    require_at_most("work_hours", inputs.work_hours, MAX_HOURS)?;
    require_positive("value_of_work_multiple", inputs.value_of_work_multiple)?;
    require_at_most(
        "value_of_work_multiple",
        inputs.value_of_work_multiple,
        MAX_VALUE_OF_WORK_MULTIPLE,
    )?;
    require_lift("est_productivity_lift", inputs.est_productivity_lift)?;
    require_positive("ai_training_hours", inputs.ai_training_hours)?;
    require_at_most("ai_training_hours", inputs.ai_training_hours, MAX_HOURS)?;
    require_non_negative("ai_training_license_fees", inputs.ai_training_license_fees)?;
    require_at_most(
        "ai_training_license_fees",
        inputs.ai_training_license_fees,
        MAX_AMOUNT,
    )?;
    require_non_negative("ai_tech_costs", inputs.ai_tech_costs)?;
    require_at_most("ai_tech_costs", inputs.ai_tech_costs, MAX_AMOUNT)?;
    Ok(())
}

/// Checks a team record against the input bounds.
///
/// Same bounds as [`validate_individual_inputs`], applied per learner, plus a
/// headcount between 1 and [`MAX_LEARNERS`]. Combined compensation is capped at
/// [`MAX_AMOUNT`] per learner.
pub fn validate_team_inputs(inputs: &TeamInputs) -> EngineResult<()> {
    if inputs.number_of_learners == 0 {
        return Err(EngineError::invalid_input(
            "number_of_learners",
            "must be at least 1",
        ));
    }
    if inputs.number_of_learners > MAX_LEARNERS {
        return Err(EngineError::invalid_input(
            "number_of_learners",
            format!(
                "must not exceed {}, got {}",
                MAX_LEARNERS, inputs.number_of_learners
            ),
        ));
    }
    require_positive("combined_comp", inputs.combined_comp)?;
    require_at_most(
        "combined_comp",
        inputs.combined_comp,
        MAX_AMOUNT * inputs.learners(),
    )?;
    require_positive("average_work_hours", inputs.average_work_hours)?;
    require_at_most("average_work_hours", inputs.average_work_hours, MAX_HOURS)?;
    require_positive("value_of_work_multiple", inputs.value_of_work_multiple)?;
    require_at_most(
        "value_of_work_multiple",
        inputs.value_of_work_multiple,
        MAX_VALUE_OF_WORK_MULTIPLE,
    )?;
    require_lift("est_productivity_lift", inputs.est_productivity_lift)?;
    require_positive(
        "ai_training_hours_per_learner",
        inputs.ai_training_hours_per_learner,
    )?;
    require_at_most(
        "ai_training_hours_per_learner",
        inputs.ai_training_hours_per_learner,
        MAX_HOURS,
    )?;
    require_non_negative(
        "ai_training_license_fees_per_learner",
        inputs.ai_training_license_fees_per_learner,
    )?;
    require_at_most(
        "ai_training_license_fees_per_learner",
        inputs.ai_training_license_fees_per_learner,
        MAX_AMOUNT,
    )?;
    require_non_negative(
        "ai_tech_costs_per_learner",
        inputs.ai_tech_costs_per_learner,
    )?;
    require_at_most(
        "ai_tech_costs_per_learner",
        inputs.ai_tech_costs_per_learner,
        MAX_AMOUNT,
    )?;
    Ok(())
}
