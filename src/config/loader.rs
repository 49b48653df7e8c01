//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading insight
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::insights::InsightTable;

use super::types::InsightConfig;

/// Name of the insight configuration file inside a configuration directory.
pub const INSIGHTS_FILE: &str = "insights.yaml";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── insights.yaml   # Insight tiers for individual and team calculations
/// ```
///
/// # Example
///
/// ```no_run
/// use roi_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Team tiers: {}", loader.team_table().tiers.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: InsightConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `insights.yaml` is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML, or a tier has no bands (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let insights_path = path.as_ref().join(INSIGHTS_FILE);
        let config = Self::load_yaml::<InsightConfig>(&insights_path)?;

        if let Some(tier) = config.first_empty_tier() {
            return Err(EngineError::ConfigParseError {
                path: insights_path.display().to_string(),
                message: format!("insight tier {} has no bands", tier),
            });
        }

        info!(
            path = %insights_path.display(),
            individual_tiers = config.individual.tiers.len(),
            team_tiers = config.team.tiers.len(),
            "Loaded insight configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying insight configuration.
    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Returns the insight table for individual calculations.
    pub fn individual_table(&self) -> &InsightTable {
        &self.config.individual
    }

    /// Returns the insight table for team calculations.
    pub fn team_table(&self) -> &InsightTable {
        &self.config.team
    }
}
