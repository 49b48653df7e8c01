//! Insight generation.
//!
//! Insights are recomputed on every call from the inputs, the rounded results,
//! and an [`InsightTable`]. Nothing is cached between calls.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::table::{InsightTable, Metric};
use crate::calculation::{divide, individual_payback_months, team_payback_months};
use crate::models::{
    CalculationType, IndividualInputs, IndividualResults, Insight, TeamInputs, TeamResults,
};

/// The calculation an insight table is evaluated against.
#[derive(Debug, Clone, Copy)]
pub enum InsightSubject<'a> {
    /// An individual calculation.
    Individual {
        /// The validated inputs.
        inputs: &'a IndividualInputs,
        /// The rounded results.
        results: &'a IndividualResults,
    },
    /// A team calculation.
    Team {
        /// The validated inputs.
        inputs: &'a TeamInputs,
        /// The rounded results.
        results: &'a TeamResults,
    },
}

impl InsightSubject<'_> {
    /// Reads `metric` from the calculation, or `None` if it has no value here.
    ///
    /// Values come from the rounded results, so an exact ROI of 99.996 reads as
    /// 100.00 and lands in an `at_least: 100` band. Team size and cost per
    /// learner have no value for an individual.
    pub fn metric(&self, metric: Metric) -> Option<Decimal> {
        match (self, metric) {
            (InsightSubject::Individual { results, .. }, Metric::Roi) => Some(results.roi),
            (InsightSubject::Team { results, .. }, Metric::Roi) => Some(results.roi),
            (InsightSubject::Individual { results, .. }, Metric::PaybackMonths) => {
                individual_payback_months(results)
            }
            (InsightSubject::Team { results, .. }, Metric::PaybackMonths) => {
                team_payback_months(results)
            }
            (InsightSubject::Individual { inputs, .. }, Metric::TrainingHours) => {
                Some(inputs.ai_training_hours)
            }
            (InsightSubject::Team { inputs, .. }, Metric::TrainingHours) => {
                Some(inputs.ai_training_hours_per_learner)
            }
            (InsightSubject::Team { inputs, .. }, Metric::TeamSize) => Some(inputs.learners()),
            (InsightSubject::Individual { .. }, Metric::TeamSize | Metric::CostPerLearner) => None,
            (InsightSubject::Team { inputs, results }, Metric::CostPerLearner) => {
                divide(results.total_ai_costs, inputs.learners(), "number_of_learners").ok()
            }
        }
    }
}

/// Evaluates `table` against `subject`, producing at most one insight per tier.
pub fn generate_insights(
    table: &InsightTable,
    subject: InsightSubject<'_>,
    calculation_type: CalculationType,
) -> Vec<Insight> {
    let insights: Vec<Insight> = table
        .tiers
        .iter()
        .filter_map(|tier| {
            let value = subject.metric(tier.metric);
            tier.classify(value).map(|band| Insight {
                kind: band.kind,
                category: tier.category,
                message: render(&band.message, value, tier.metric, calculation_type),
            })
        })
        .collect();

    debug!(count = insights.len(), "Generated insights");
    insights
}

/// Generates insights for an individual calculation.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::calculate_individual_value;
/// use roi_engine::insights::{InsightTable, generate_individual_insights};
/// use roi_engine::models::{CalculationType, IndividualInputs, InsightCategory, InsightKind};
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
///
/// let insights = generate_individual_insights(
///     &InsightTable::individual_default(),
///     &inputs,
///     &results,
///     CalculationType::Productivity,
/// );
/// assert_eq!(insights[0].category, InsightCategory::Roi);
/// assert_eq!(insights[0].kind, InsightKind::Success);
/// ```
pub fn generate_individual_insights(
    table: &InsightTable,
    inputs: &IndividualInputs,
    results: &IndividualResults,
    calculation_type: CalculationType,
) -> Vec<Insight> {
    generate_insights(
        table,
        InsightSubject::Individual { inputs, results },
        calculation_type,
    )
}

/// Generates insights for a team calculation.
pub fn generate_team_insights(
    table: &InsightTable,
    inputs: &TeamInputs,
    results: &TeamResults,
    calculation_type: CalculationType,
) -> Vec<Insight> {
    generate_insights(
        table,
        InsightSubject::Team { inputs, results },
        calculation_type,
    )
}

fn render(
    template: &str,
    value: Option<Decimal>,
    metric: Metric,
    calculation_type: CalculationType,
) -> String {
    let value = value
        .map(|v| {
            v.round_dp_with_strategy(metric.display_dp(), RoundingStrategy::MidpointAwayFromZero)
                .normalize()
                .to_string()
        })
        .unwrap_or_else(|| "n/a".to_string());
    template
        .replace("{value}", &value)
        .replace("{lift}", calculation_type.label())
}
