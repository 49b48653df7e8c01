//! Configuration loading and management for the ROI engine.
//!
//! This module loads the insight tier tables from YAML, falling back to the
//! built-in tables when no configuration directory is given.
//!
//! # Example
//!
//! ```no_run
//! use roi_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Individual tiers: {}", config.individual_table().tiers.len());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, INSIGHTS_FILE};
pub use types::InsightConfig;
