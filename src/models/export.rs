//! Export record bundling a calculation's inputs, results, and insights.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    CalculationType, Insight, IndividualInputs, IndividualResults, Scope, TeamInputs, TeamResults,
};

/// The complete, serializable record of one calculation.
///
/// This is what the HTTP API returns and what a presentation layer writes out
/// when the user exports their results as JSON.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::calculate_individual_value;
/// use roi_engine::config::InsightConfig;
/// use roi_engine::insights::generate_individual_insights;
/// use roi_engine::models::{CalculationExport, CalculationType, IndividualInputs, Scope};
/// use rust_decimal::Decimal;
///
/// let inputs = IndividualInputs::new(
///     Decimal::new(120_000, 0),
///     Decimal::new(20, 0),
///     Decimal::new(25, 0),
///     Decimal::new(300, 0),
///     Decimal::new(300, 0),
/// );
/// let results = calculate_individual_value(&inputs).unwrap();
/// let insights = generate_individual_insights(
///     &InsightConfig::default().individual,
///     &inputs,
///     &results,
///     CalculationType::Productivity,
/// );
/// let export = CalculationExport::new(
///     Scope::Individual,
///     CalculationType::Productivity,
///     inputs,
///     results,
///     insights,
/// );
/// assert_eq!(export.insights.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationExport<I, R> {
    /// Unique identifier for this export.
    pub export_id: Uuid,
    /// When the export was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Individual or team.
    pub scope: Scope,
    /// Productivity or efficiency.
    pub calculation_type: CalculationType,
    /// The validated inputs.
    pub inputs: I,
    /// The rounded results.
    pub results: R,
    /// Insights generated from the inputs and results.
    pub insights: Vec<Insight>,
}

/// Export record for an individual calculation.
pub type IndividualExport = CalculationExport<IndividualInputs, IndividualResults>;

/// Export record for a team calculation.
pub type TeamExport = CalculationExport<TeamInputs, TeamResults>;

impl<I, R> CalculationExport<I, R> {
    /// Stamps a calculation with a fresh id, the current time, and the engine version.
    pub fn new(
        scope: Scope,
        calculation_type: CalculationType,
        inputs: I,
        results: R,
        insights: Vec<Insight>,
    ) -> Self {
        Self {
            export_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            scope,
            calculation_type,
            inputs,
            results,
            insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InsightCategory, InsightKind};
    use rust_decimal::Decimal;

    fn sample_team_inputs() -> TeamInputs {
        TeamInputs {
            number_of_learners: 4,
            combined_comp: Decimal::new(400_000, 0),
            average_work_hours: Decimal::new(2000, 0),
            value_of_work_multiple: Decimal::new(2, 0),
            est_productivity_lift: Decimal::new(10, 0),
            ai_training_hours_per_learner: Decimal::new(10, 0),
            ai_training_license_fees_per_learner: Decimal::ZERO,
            ai_tech_costs_per_learner: Decimal::ZERO,
        }
    }

    fn sample_team_results() -> TeamResults {
        TeamResults {
            combined_work_hours: Decimal::new(8000, 0),
            blended_cost_per_hour: Decimal::new(50, 0),
            blended_value_of_work_per_hour: Decimal::new(100, 0),
            avg_annual_value_of_work: Decimal::new(200_000, 0),
            avg_value_of_productivity_lift: Decimal::new(20_000, 0),
            avg_new_annual_value_of_work: Decimal::new(220_000, 0),
            total_value_of_productivity_lift: Decimal::new(80_000, 0),
            combined_ai_training_hours: Decimal::new(40, 0),
            combined_ai_training_human_costs: Decimal::new(2000, 0),
            combined_ai_training_license_fees: Decimal::ZERO,
            total_ai_training_costs: Decimal::new(2000, 0),
            total_ai_tech_costs: Decimal::ZERO,
            total_ai_costs: Decimal::new(2000, 0),
            first_year_net_value: Decimal::new(78_000, 0),
            roi: Decimal::new(3900, 0),
            est_hours_saved: None,
        }
    }

    #[test]
    fn test_new_stamps_version_and_unique_ids() {
        let first: TeamExport = CalculationExport::new(
            Scope::Team,
            CalculationType::Productivity,
            sample_team_inputs(),
            sample_team_results(),
            vec![],
        );
        let second: TeamExport = CalculationExport::new(
            Scope::Team,
            CalculationType::Productivity,
            sample_team_inputs(),
            sample_team_results(),
            vec![],
        );

        assert_eq!(first.engine_version, env!("CARGO_PKG_VERSION"));
        assert_ne!(first.export_id, second.export_id);
    }

    #[test]
    fn test_export_serializes_verbatim() {
        let export: TeamExport = CalculationExport::new(
            Scope::Team,
            CalculationType::Efficiency,
            sample_team_inputs(),
            sample_team_results(),
            vec![Insight {
                kind: InsightKind::Success,
                category: InsightCategory::Roi,
                message: "Exceptional team ROI".to_string(),
            }],
        );

        let value = serde_json::to_value(&export).unwrap();
        assert_eq!(value["scope"], "team");
        assert_eq!(value["calculation_type"], "efficiency");
        assert_eq!(value["inputs"]["number_of_learners"], 4);
        assert_eq!(value["results"]["roi"], "3900");
        assert_eq!(value["insights"][0]["type"], "success");

        let parsed: TeamExport = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, export);
    }
}
