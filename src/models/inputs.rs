//! Validated input records for the calculators.
//!
//! This module defines [`IndividualInputs`] and [`TeamInputs`], the typed records
//! handed to the formula engine once raw form data has been validated, together with
//! the [`CalculationType`] and [`Scope`] selectors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual work hours assumed when none are supplied (52 weeks of 40 hours).
pub fn default_work_hours() -> Decimal {
    Decimal::new(2080, 0)
}

/// Value-of-work multiple assumed when none is supplied.
pub fn default_value_of_work_multiple() -> Decimal {
    Decimal::new(20, 1)
}

/// The economic model used to value the lift.
///
/// # Example
///
/// ```
/// use roi_engine::models::CalculationType;
///
/// let json = serde_json::to_string(&CalculationType::Efficiency).unwrap();
/// assert_eq!(json, "\"efficiency\"");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    /// The lift percentage is additional output; its value is priced at the value of work.
    #[default]
    Productivity,
    /// The lift percentage is time saved; its value is priced at the cost of work.
    Efficiency,
}

impl CalculationType {
    /// Returns the lowercase label used in messages and serialized output.
    pub fn label(&self) -> &'static str {
        match self {
            CalculationType::Productivity => "productivity",
            CalculationType::Efficiency => "efficiency",
        }
    }
}

/// Whether a calculation covers one person or a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// A single learner.
    Individual,
    /// A group of learners modelled as one blended worker.
    Team,
}

/// Inputs for an individual ROI calculation.
///
/// # Example
///
/// ```
/// use roi_engine::models::IndividualInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = IndividualInputs::new(
///     Decimal::new(120_000, 0),
///     Decimal::new(20, 0),
///     Decimal::new(25, 0),
///     Decimal::new(300, 0),
///     Decimal::new(300, 0),
/// );
/// assert_eq!(inputs.work_hours, Decimal::new(2080, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualInputs {
    /// Annual compensation.
    pub comp: Decimal,
    /// Annual work hours.
    #[serde(default = "default_work_hours")]
    pub work_hours: Decimal,
    /// Multiple applied to the hourly cost to obtain the hourly value of work.
    #[serde(default = "default_value_of_work_multiple")]
    pub value_of_work_multiple: Decimal,
    /// Estimated lift, as a percentage between 0 and 100.
    pub est_productivity_lift: Decimal,
    /// Hours spent on AI training.
    pub ai_training_hours: Decimal,
    /// Training and license fees.
    #[serde(default)]
    pub ai_training_license_fees: Decimal,
    /// AI technology costs.
    #[serde(default)]
    pub ai_tech_costs: Decimal,
}

impl IndividualInputs {
    /// Creates inputs with the default work hours and value-of-work multiple.
    pub fn new(
        comp: Decimal,
        est_productivity_lift: Decimal,
        ai_training_hours: Decimal,
        ai_training_license_fees: Decimal,
        ai_tech_costs: Decimal,
    ) -> Self {
        Self {
            comp,
            work_hours: default_work_hours(),
            value_of_work_multiple: default_value_of_work_multiple(),
            est_productivity_lift,
            ai_training_hours,
            ai_training_license_fees,
            ai_tech_costs,
        }
    }
}

/// Inputs for a team ROI calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInputs {
    /// Number of learners on the team.
    pub number_of_learners: u32,
    /// Combined annual compensation of all learners.
    pub combined_comp: Decimal,
    /// Average annual work hours per learner.
    #[serde(default = "default_work_hours")]
    pub average_work_hours: Decimal,
    /// Multiple applied to the blended hourly cost to obtain the hourly value of work.
    #[serde(default = "default_value_of_work_multiple")]
    pub value_of_work_multiple: Decimal,
    /// Estimated lift, as a percentage between 0 and 100.
    pub est_productivity_lift: Decimal,
    /// Training hours per learner.
    pub ai_training_hours_per_learner: Decimal,
    /// Training and license fees per learner.
    #[serde(default)]
    pub ai_training_license_fees_per_learner: Decimal,
    /// AI technology costs per learner.
    #[serde(default)]
    pub ai_tech_costs_per_learner: Decimal,
}

impl TeamInputs {
    /// Returns the headcount as a decimal for use in the formula chain.
    pub fn learners(&self) -> Decimal {
        Decimal::from(self.number_of_learners)
    }
}
