//! Result records produced by the calculators.
//!
//! Results are plain value records. The calculators first fill them with exact
//! values and then round them once at the output boundary (see
//! [`crate::calculation::round_individual_results`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Results of an individual ROI calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualResults {
    /// Compensation per work hour.
    pub cost_per_hour: Decimal,
    /// Value of one hour of work (cost per hour times the value-of-work multiple).
    pub value_of_work_per_hour: Decimal,
    /// Annual value of work. For the efficiency model this is the baseline cost of work.
    pub annual_value_of_work: Decimal,
    /// Value of the lift: extra output (productivity) or hours saved (efficiency).
    pub value_of_productivity_lift: Decimal,
    /// Annual value of work including the lift.
    pub new_annual_value_of_work: Decimal,
    /// Cost of the hours spent in training.
    pub ai_training_human_costs: Decimal,
    /// Training human costs plus license fees.
    pub total_ai_training_costs: Decimal,
    /// Training costs plus technology costs.
    pub total_ai_costs: Decimal,
    /// Value of the lift minus total AI costs.
    pub first_year_net_value: Decimal,
    /// Return on investment, as a percentage.
    pub roi: Decimal,
    /// Hours saved per year, reported for the efficiency model only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub est_hours_saved: Option<Decimal>,
}

/// Results of a team ROI calculation.
///
/// Averages are per learner and computed from blended team rates; totals are
/// scaled by headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResults {
    /// Average work hours times the number of learners.
    pub combined_work_hours: Decimal,
    /// Combined compensation per combined work hour.
    pub blended_cost_per_hour: Decimal,
    /// Blended cost per hour times the value-of-work multiple.
    pub blended_value_of_work_per_hour: Decimal,
    /// Annual value of work per learner. For the efficiency model this is the baseline cost.
    pub avg_annual_value_of_work: Decimal,
    /// Value of the lift per learner.
    pub avg_value_of_productivity_lift: Decimal,
    /// Annual value of work per learner including the lift.
    pub avg_new_annual_value_of_work: Decimal,
    /// Value of the lift across the whole team.
    pub total_value_of_productivity_lift: Decimal,
    /// Training hours across the whole team.
    pub combined_ai_training_hours: Decimal,
    /// Cost of the team's training hours at the blended rate.
    pub combined_ai_training_human_costs: Decimal,
    /// License fees across the whole team.
    pub combined_ai_training_license_fees: Decimal,
    /// Training human costs plus license fees.
    pub total_ai_training_costs: Decimal,
    /// Technology costs across the whole team.
    pub total_ai_tech_costs: Decimal,
    /// Training costs plus technology costs.
    pub total_ai_costs: Decimal,
    /// Total value of the lift minus total AI costs.
    pub first_year_net_value: Decimal,
    /// Return on investment, as a percentage.
    pub roi: Decimal,
    /// Team-wide hours saved per year, reported for the efficiency model only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub est_hours_saved: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_individual() -> IndividualResults {
        IndividualResults {
            cost_per_hour: Decimal::new(58, 0),
            value_of_work_per_hour: Decimal::new(115, 0),
            annual_value_of_work: Decimal::new(240_000, 0),
            value_of_productivity_lift: Decimal::new(48_000, 0),
            new_annual_value_of_work: Decimal::new(288_000, 0),
            ai_training_human_costs: Decimal::new(1442, 0),
            total_ai_training_costs: Decimal::new(1742, 0),
            total_ai_costs: Decimal::new(2042, 0),
            first_year_net_value: Decimal::new(45_958, 0),
            roi: Decimal::new(225_028, 2),
            est_hours_saved: None,
        }
    }

    #[test]
    fn test_individual_results_skip_missing_hours_saved() {
        let json = serde_json::to_string(&sample_individual()).unwrap();
        assert!(json.contains("\"roi\":\"2250.28\""));
        assert!(json.contains("\"total_ai_costs\":\"2042\""));
        assert!(!json.contains("est_hours_saved"));
    }

    #[test]
    fn test_individual_results_include_hours_saved_when_present() {
        let mut results = sample_individual();
        results.est_hours_saved = Some(Decimal::new(416, 0));

        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"est_hours_saved\":\"416\""));

        let parsed: IndividualResults = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, results);
    }
}
