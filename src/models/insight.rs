//! Insight models.
//!
//! An [`Insight`] is a qualitative message attached to a calculation, classified
//! by [`InsightKind`] and tagged with the [`InsightCategory`] of the rule that
//! produced it.

use serde::{Deserialize, Serialize};

/// The classification of an insight.
///
/// # Example
///
/// ```
/// use roi_engine::models::InsightKind;
///
/// let kind: InsightKind = serde_json::from_str("\"warning\"").unwrap();
/// assert_eq!(kind, InsightKind::Warning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// A favourable result.
    Success,
    /// A neutral observation.
    Info,
    /// A result worth reviewing.
    Warning,
}

/// The rule family an insight belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// Return on investment.
    Roi,
    /// Months until the AI costs are recovered.
    Payback,
    /// Size of the training-hour investment.
    TrainingInvestment,
    /// Number of learners.
    TeamSize,
    /// Total AI costs per learner.
    CostPerLearner,
}

/// A single qualitative message about a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// The classification of the message.
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// The rule family that produced the message.
    pub category: InsightCategory,
    /// The human-readable message.
    pub message: String,
}
