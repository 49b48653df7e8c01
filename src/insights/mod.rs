//! Qualitative insights for ROI calculations.
//!
//! Each calculation is classified by a table of tiers (ROI first, then payback or
//! team scale, then training investment or cost per learner). Individual and team
//! tables keep separate thresholds because team ROI figures run roughly an order
//! of magnitude higher.

mod generator;
mod table;

pub use generator::{
    InsightSubject, generate_individual_insights, generate_insights, generate_team_insights,
};
pub use table::{Condition, InsightBand, InsightTable, InsightTier, Metric};
