//! Raw form data and its conversion into typed inputs.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    IndividualInputs, TeamInputs, default_value_of_work_multiple, default_work_hours,
};

use super::rules::{
    require_lift, require_non_negative, require_positive, validate_individual_inputs,
    validate_team_inputs,
};

/// Strips surrounding whitespace, a leading currency sign and thousands separators.
fn clean(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect()
}

fn parse_number(field: &str, raw: &str) -> EngineResult<Option<Decimal>> {
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(&cleaned)
        .map(Some)
        .map_err(|_| EngineError::invalid_input(field, format!("'{}' is not a number", raw.trim())))
}

fn required(field: &str, raw: &str) -> EngineResult<Decimal> {
    let value = parse_number(field, raw)?
        .ok_or_else(|| EngineError::invalid_input(field, "is required"))?;
    require_positive(field, value)?;
    Ok(value)
}

fn defaulted(field: &str, raw: &str, default: Decimal) -> EngineResult<Decimal> {
    match parse_number(field, raw)? {
        Some(value) => {
            require_positive(field, value)?;
            Ok(value)
        }
        None => Ok(default),
    }
}

fn lift(field: &str, raw: &str) -> EngineResult<Decimal> {
    let value = parse_number(field, raw)?
        .ok_or_else(|| EngineError::invalid_input(field, "is required"))?;
    require_lift(field, value)?;
    Ok(value)
}

/// Optional currency amount: blank or unreadable text counts as zero.
fn optional_cost(field: &str, raw: &str) -> EngineResult<Decimal> {
    let value = parse_number(field, raw).ok().flatten().unwrap_or(Decimal::ZERO);
    require_non_negative(field, value)?;
    Ok(value)
}

fn learners(field: &str, raw: &str) -> EngineResult<u32> {
    let value = required(field, raw)?;
    if !value.fract().is_zero() {
        return Err(EngineError::invalid_input(
            field,
            format!("must be a whole number, got {}", value),
        ));
    }
    value
        .to_u32()
        .ok_or_else(|| EngineError::invalid_input(field, format!("{} is too large", value)))
}

/// Individual calculator fields as entered, before parsing.
///
/// Every field is text. Missing keys deserialize as empty strings.
///
/// # Example
///
/// ```
/// use roi_engine::validation::IndividualForm;
/// use rust_decimal::Decimal;
///
/// let form = IndividualForm {
///     comp: "$120,000".to_string(),
///     est_productivity_lift: "20".to_string(),
///     ai_training_hours: "25".to_string(),
///     ..IndividualForm::default()
/// };
/// let inputs = form.into_inputs().unwrap();
/// assert_eq!(inputs.comp, Decimal::new(120_000, 0));
/// assert_eq!(inputs.work_hours, Decimal::new(2080, 0));
/// assert_eq!(inputs.ai_tech_costs, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndividualForm {
    /// Annual compensation.
    pub comp: String,
    /// Annual work hours; blank means 2080.
    pub work_hours: String,
    /// Value-of-work multiple; blank means 2.0.
    pub value_of_work_multiple: String,
    /// Lift percentage.
    pub est_productivity_lift: String,
    /// Training hours.
    pub ai_training_hours: String,
    /// Training and license fees.
    pub ai_training_license_fees: String,
    /// AI technology costs.
    pub ai_tech_costs: String,
}

impl IndividualForm {
    /// Parses the form into [`IndividualInputs`], reporting the first invalid field.
    ///
    /// Parsed values are then held to the same upper bounds as
    /// [`validate_individual_inputs`].
    pub fn into_inputs(&self) -> EngineResult<IndividualInputs> {
        let inputs = IndividualInputs {
            comp: required("comp", &self.comp)?,
            work_hours: defaulted("work_hours", &self.work_hours, default_work_hours())?,
            value_of_work_multiple: defaulted(
                "value_of_work_multiple",
                &self.value_of_work_multiple,
                default_value_of_work_multiple(),
            )?,
            est_productivity_lift: lift("est_productivity_lift", &self.est_productivity_lift)?,
            ai_training_hours: required("ai_training_hours", &self.ai_training_hours)?,
            ai_training_license_fees: optional_cost(
                "ai_training_license_fees",
                &self.ai_training_license_fees,
            )?,
            ai_tech_costs: optional_cost("ai_tech_costs", &self.ai_tech_costs)?,
        };
        validate_individual_inputs(&inputs)?;
        Ok(inputs)
    }
}

/// Team calculator fields as entered, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamForm {
    /// Headcount; must be a positive whole number.
    pub number_of_learners: String,
    /// Combined annual compensation.
    pub combined_comp: String,
    /// Average annual work hours; blank means 2080.
    pub average_work_hours: String,
    /// Value-of-work multiple; blank means 2.0.
    pub value_of_work_multiple: String,
    /// Lift percentage.
    pub est_productivity_lift: String,
    /// Training hours per learner.
    pub ai_training_hours_per_learner: String,
    /// Training and license fees per learner.
    pub ai_training_license_fees_per_learner: String,
    /// AI technology costs per learner.
    pub ai_tech_costs_per_learner: String,
}

impl TeamForm {
    /// Parses the form into [`TeamInputs`], reporting the first invalid field.
    ///
    /// Parsed values are then held to the same upper bounds as
    /// [`validate_team_inputs`].
    pub fn into_inputs(&self) -> EngineResult<TeamInputs> {
        let inputs = TeamInputs {
            number_of_learners: learners("number_of_learners", &self.number_of_learners)?,
            combined_comp: required("combined_comp", &self.combined_comp)?,
            average_work_hours: defaulted(
                "average_work_hours",
                &self.average_work_hours,
                default_work_hours(),
            )?,
            value_of_work_multiple: defaulted(
                "value_of_work_multiple",
                &self.value_of_work_multiple,
                default_value_of_work_multiple(),
            )?,
            est_productivity_lift: lift("est_productivity_lift", &self.est_productivity_lift)?,
            ai_training_hours_per_learner: required(
                "ai_training_hours_per_learner",
                &self.ai_training_hours_per_learner,
            )?,
            ai_training_license_fees_per_learner: optional_cost(
                "ai_training_license_fees_per_learner",
                &self.ai_training_license_fees_per_learner,
            )?,
            ai_tech_costs_per_learner: optional_cost(
                "ai_tech_costs_per_learner",
                &self.ai_tech_costs_per_learner,
            )?,
        };
        validate_team_inputs(&inputs)?;
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn individual_form() -> IndividualForm {
        IndividualForm {
            comp: "120000".to_string(),
            work_hours: "2080".to_string(),
            value_of_work_multiple: "2".to_string(),
            est_productivity_lift: "20".to_string(),
            ai_training_hours: "25".to_string(),
            ai_training_license_fees: "300".to_string(),
            ai_tech_costs: "300".to_string(),
        }
    }

    fn team_form() -> TeamForm {
        TeamForm {
            number_of_learners: "25".to_string(),
            combined_comp: "2,500,000".to_string(),
            average_work_hours: String::new(),
            value_of_work_multiple: String::new(),
            est_productivity_lift: "15".to_string(),
            ai_training_hours_per_learner: "15".to_string(),
            ai_training_license_fees_per_learner: "300".to_string(),
            ai_tech_costs_per_learner: "300".to_string(),
        }
    }

    fn rejected<T: std::fmt::Debug>(result: EngineResult<T>) -> (String, String) {
        match result {
            Err(EngineError::InvalidInput { field, message }) => (field, message),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_individual_form_parses() {
        let inputs = individual_form().into_inputs().unwrap();
        assert_eq!(
            inputs,
            IndividualInputs::new(dec("120000"), dec("20"), dec("25"), dec("300"), dec("300"))
        );
    }

    #[test]
    fn test_blank_work_hours_and_multiple_use_defaults() {
        let mut form = individual_form();
        form.work_hours = "  ".to_string();
        form.value_of_work_multiple = String::new();

        let inputs = form.into_inputs().unwrap();
        assert_eq!(inputs.work_hours, dec("2080"));
        assert_eq!(inputs.value_of_work_multiple, dec("2.0"));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let mut form = individual_form();
        form.comp = String::new();
        let (field, message) = rejected(form.into_inputs());
        assert_eq!(field, "comp");
        assert_eq!(message, "is required");
    }

    #[test]
    fn test_non_numeric_required_field_is_rejected() {
        let mut form = individual_form();
        form.ai_training_hours = "lots".to_string();
        let (field, message) = rejected(form.into_inputs());
        assert_eq!(field, "ai_training_hours");
        assert!(message.contains("not a number"));
    }

    #[test]
    fn test_unreadable_optional_costs_become_zero() {
        let mut form = individual_form();
        form.ai_training_license_fees = String::new();
        form.ai_tech_costs = "n/a".to_string();

        let inputs = form.into_inputs().unwrap();
        assert_eq!(inputs.ai_training_license_fees, Decimal::ZERO);
        assert_eq!(inputs.ai_tech_costs, Decimal::ZERO);
    }

    #[test]
    fn test_negative_optional_cost_is_rejected() {
        let mut form = individual_form();
        form.ai_tech_costs = "-100".to_string();
        let (field, _) = rejected(form.into_inputs());
        assert_eq!(field, "ai_tech_costs");
    }

    #[test]
    fn test_lift_out_of_range_is_rejected() {
        let mut form = individual_form();
        form.est_productivity_lift = "120".to_string();
        let (field, _) = rejected(form.into_inputs());
        assert_eq!(field, "est_productivity_lift");
    }

    #[test]
    fn test_team_form_parses_with_defaults() {
        let inputs = team_form().into_inputs().unwrap();
        assert_eq!(inputs.number_of_learners, 25);
        assert_eq!(inputs.combined_comp, dec("2500000"));
        assert_eq!(inputs.average_work_hours, dec("2080"));
        assert_eq!(inputs.value_of_work_multiple, dec("2"));
    }

    #[test]
    fn test_fractional_learners_rejected() {
        let mut form = team_form();
        form.number_of_learners = "2.5".to_string();
        let (field, message) = rejected(form.into_inputs());
        assert_eq!(field, "number_of_learners");
        assert!(message.contains("whole number"));
    }

    #[test]
    fn test_zero_learners_rejected() {
        let mut form = team_form();
        form.number_of_learners = "0".to_string();
        let (field, _) = rejected(form.into_inputs());
        assert_eq!(field, "number_of_learners");
    }

    #[test]
    fn test_oversized_compensation_rejected() {
        let mut form = individual_form();
        form.comp = "$50,000,000,000,000".to_string();
        let (field, message) = rejected(form.into_inputs());
        assert_eq!(field, "comp");
        assert!(message.contains("must not exceed"));
    }

    #[test]
    fn test_oversized_team_rejected() {
        let mut form = team_form();
        form.number_of_learners = "2000000".to_string();
        let (field, _) = rejected(form.into_inputs());
        assert_eq!(field, "number_of_learners");
    }

    #[test]
    fn test_form_deserializes_with_missing_keys() {
        let form: TeamForm = serde_json::from_str(r#"{"number_of_learners": "3"}"#).unwrap();
        assert_eq!(form.number_of_learners, "3");
        assert!(form.combined_comp.is_empty());
    }
}
