//! Data-driven insight tables.
//!
//! An [`InsightTable`] is an ordered list of [`InsightTier`]s. Each tier reads one
//! [`Metric`] and walks its [`InsightBand`]s in order; the first band whose
//! [`Condition`] holds produces the tier's insight. Tables deserialize from YAML,
//! so thresholds can be audited and tuned without touching the generator.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{InsightCategory, InsightKind};

/// A quantity an insight tier classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// First-year ROI, in percent.
    Roi,
    /// Months of lift needed to recover the total AI costs.
    PaybackMonths,
    /// Training hours per learner.
    TrainingHours,
    /// Number of learners.
    TeamSize,
    /// Total AI costs divided by the number of learners.
    CostPerLearner,
}

impl Metric {
    /// Decimal places shown when the metric is interpolated into a message.
    pub fn display_dp(&self) -> u32 {
        match self {
            Metric::Roi => 2,
            Metric::PaybackMonths => 1,
            Metric::TrainingHours | Metric::TeamSize | Metric::CostPerLearner => 0,
        }
    }
}

/// The test a band applies to a metric value.
///
/// Comparisons are strict except [`Condition::AtLeast`]. A metric that could not
/// be computed only satisfies [`Condition::Otherwise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// `value > threshold`
    GreaterThan(Decimal),
    /// `value >= threshold`
    AtLeast(Decimal),
    /// `value < threshold`
    LessThan(Decimal),
    /// Always holds.
    Otherwise,
}

impl Condition {
    /// Returns true if the condition holds for `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roi_engine::insights::Condition;
    /// use rust_decimal::Decimal;
    ///
    /// let above = Condition::GreaterThan(Decimal::new(1000, 0));
    /// assert!(!above.matches(Some(Decimal::new(1000, 0))));
    /// assert!(above.matches(Some(Decimal::new(1001, 0))));
    /// assert!(!above.matches(None));
    /// assert!(Condition::Otherwise.matches(None));
    /// ```
    pub fn matches(&self, value: Option<Decimal>) -> bool {
        match (self, value) {
            (Condition::Otherwise, _) => true,
            (_, None) => false,
            (Condition::GreaterThan(threshold), Some(v)) => v > *threshold,
            (Condition::AtLeast(threshold), Some(v)) => v >= *threshold,
            (Condition::LessThan(threshold), Some(v)) => v < *threshold,
        }
    }
}

/// One row of a tier: a condition, the kind it maps to, and a message template.
///
/// Templates may contain `{value}` (the formatted metric) and `{lift}`
/// (`productivity` or `efficiency`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBand")]
pub struct InsightBand {
    /// When this band applies.
    pub condition: Condition,
    /// The kind of insight produced.
    pub kind: InsightKind,
    /// The message template.
    pub message: String,
}

impl InsightBand {
    /// Creates a band.
    pub fn new(condition: Condition, kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            condition,
            kind,
            message: message.into(),
        }
    }
}

/// YAML shape of a band: at most one comparison key, none meaning "otherwise".
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBand {
    #[serde(default)]
    greater_than: Option<Decimal>,
    #[serde(default)]
    at_least: Option<Decimal>,
    #[serde(default)]
    less_than: Option<Decimal>,
    kind: InsightKind,
    message: String,
}

impl TryFrom<RawBand> for InsightBand {
    type Error = String;

    fn try_from(raw: RawBand) -> Result<Self, Self::Error> {
        let condition = match (raw.greater_than, raw.at_least, raw.less_than) {
            (Some(t), None, None) => Condition::GreaterThan(t),
            (None, Some(t), None) => Condition::AtLeast(t),
            (None, None, Some(t)) => Condition::LessThan(t),
            (None, None, None) => Condition::Otherwise,
            _ => {
                return Err(format!(
                    "band '{}' sets more than one of greater_than, at_least, less_than",
                    raw.message
                ));
            }
        };
        Ok(InsightBand {
            condition,
            kind: raw.kind,
            message: raw.message,
        })
    }
}

/// A rule family evaluated against one metric.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsightTier {
    /// The category stamped on the insight this tier produces.
    pub category: InsightCategory,
    /// The metric the bands are tested against.
    pub metric: Metric,
    /// Bands in evaluation order.
    pub bands: Vec<InsightBand>,
}

impl InsightTier {
    /// Returns the first band whose condition holds for `value`.
    pub fn classify(&self, value: Option<Decimal>) -> Option<&InsightBand> {
        self.bands.iter().find(|band| band.condition.matches(value))
    }
}

/// An ordered list of tiers; each tier yields at most one insight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct InsightTable {
    /// Tiers in output order.
    pub tiers: Vec<InsightTier>,
}

impl InsightTable {
    /// Returns the built-in table for individual calculations.
    ///
    /// Tier order: ROI, payback, training investment.
    pub fn individual_default() -> Self {
        use Condition::*;
        use InsightKind::*;

        InsightTable {
            tiers: vec![
                InsightTier {
                    category: InsightCategory::Roi,
                    metric: Metric::Roi,
                    bands: vec![
                        InsightBand::new(
                            GreaterThan(Decimal::new(1000, 0)),
                            Success,
                            "Exceptional return: {value}% first-year ROI from the {lift} lift",
                        ),
                        InsightBand::new(
                            GreaterThan(Decimal::new(500, 0)),
                            Info,
                            "Strong return: {value}% first-year ROI from the {lift} lift",
                        ),
                        InsightBand::new(
                            AtLeast(Decimal::new(100, 0)),
                            Info,
                            "Solid return: {value}% first-year ROI covers the AI investment",
                        ),
                        InsightBand::new(
                            Otherwise,
                            Warning,
                            "Limited return: {value}% first-year ROI, review the {lift} estimate and costs",
                        ),
                    ],
                },
                InsightTier {
                    category: InsightCategory::Payback,
                    metric: Metric::PaybackMonths,
                    bands: vec![
                        InsightBand::new(
                            LessThan(Decimal::new(3, 0)),
                            Success,
                            "Quick payback: AI costs are recovered in about {value} months",
                        ),
                        InsightBand::new(
                            LessThan(Decimal::new(12, 0)),
                            Info,
                            "Payback within the first year: about {value} months",
                        ),
                        InsightBand::new(
                            Otherwise,
                            Warning,
                            "AI costs are not recovered within the first year",
                        ),
                    ],
                },
                InsightTier {
                    category: InsightCategory::TrainingInvestment,
                    metric: Metric::TrainingHours,
                    bands: vec![
                        InsightBand::new(
                            LessThan(Decimal::new(10, 0)),
                            Warning,
                            "Only {value} training hours planned, more training may be needed to reach the estimated lift",
                        ),
                        InsightBand::new(
                            GreaterThan(Decimal::new(80, 0)),
                            Info,
                            "{value} training hours is a substantial time commitment, plan it around delivery",
                        ),
                        InsightBand::new(
                            Otherwise,
                            Success,
                            "{value} training hours is a balanced investment",
                        ),
                    ],
                },
            ],
        }
    }

    /// Returns the built-in table for team calculations.
    ///
    /// Tier order: ROI, team size, cost per learner.
    pub fn team_default() -> Self {
        use Condition::*;
        use InsightKind::*;

        InsightTable {
            tiers: vec![
                InsightTier {
                    category: InsightCategory::Roi,
                    metric: Metric::Roi,
                    bands: vec![
                        InsightBand::new(
                            GreaterThan(Decimal::new(2000, 0)),
                            Success,
                            "Exceptional team return: {value}% first-year ROI",
                        ),
                        InsightBand::new(
                            GreaterThan(Decimal::new(1000, 0)),
                            Success,
                            "Excellent team return: {value}% first-year ROI",
                        ),
                        InsightBand::new(
                            GreaterThan(Decimal::new(500, 0)),
                            Info,
                            "Good team return: {value}% first-year ROI",
                        ),
                        InsightBand::new(
                            Otherwise,
                            Warning,
                            "Modest team return: {value}% first-year ROI, review the {lift} estimate and per-learner costs",
                        ),
                    ],
                },
                InsightTier {
                    category: InsightCategory::TeamSize,
                    metric: Metric::TeamSize,
                    bands: vec![
                        InsightBand::new(
                            LessThan(Decimal::new(5, 0)),
                            Info,
                            "Small team of {value}: treat this rollout as a pilot",
                        ),
                        InsightBand::new(
                            GreaterThan(Decimal::new(100, 0)),
                            Info,
                            "Large rollout of {value} learners: phase the training to protect delivery",
                        ),
                        InsightBand::new(
                            Otherwise,
                            Success,
                            "A team of {value} learners is a practical rollout size",
                        ),
                    ],
                },
                InsightTier {
                    category: InsightCategory::CostPerLearner,
                    metric: Metric::CostPerLearner,
                    bands: vec![
                        InsightBand::new(
                            GreaterThan(Decimal::new(5000, 0)),
                            Warning,
                            "High AI cost of ${value} per learner, look for volume licensing",
                        ),
                        InsightBand::new(
                            LessThan(Decimal::new(500, 0)),
                            Success,
                            "Low AI cost of ${value} per learner",
                        ),
                        InsightBand::new(
                            Otherwise,
                            Info,
                            "AI cost of ${value} per learner is within the typical range",
                        ),
                    ],
                },
            ],
        }
    }
}
