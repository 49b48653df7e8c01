//! Configuration types for the ROI engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::insights::InsightTable;

/// Insight tables for both calculation scopes.
///
/// A configuration file may override either table; a missing table falls back
/// to the built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsightConfig {
    /// Table applied to individual calculations.
    #[serde(default = "InsightTable::individual_default")]
    pub individual: InsightTable,
    /// Table applied to team calculations.
    #[serde(default = "InsightTable::team_default")]
    pub team: InsightTable,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            individual: InsightTable::individual_default(),
            team: InsightTable::team_default(),
        }
    }
}

impl InsightConfig {
    /// Names the first tier that has no bands, if any.
    pub(crate) fn first_empty_tier(&self) -> Option<String> {
        [("individual", &self.individual), ("team", &self.team)]
            .into_iter()
            .find_map(|(scope, table)| {
                table
                    .tiers
                    .iter()
                    .position(|tier| tier.bands.is_empty())
                    .map(|index| format!("{}[{}]", scope, index))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tables_fall_back_to_defaults() {
        let config: InsightConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, InsightConfig::default());
    }

    #[test]
    fn test_first_empty_tier() {
        let yaml = r#"
team:
  - category: team_size
    metric: team_size
    bands: []
"#;
        let config: InsightConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.first_empty_tier(), Some("team[0]".to_string()));
        assert_eq!(InsightConfig::default().first_empty_tier(), None);
    }
}
