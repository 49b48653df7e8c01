//! ROI Engine for AI Tool Adoption
//!
//! This crate calculates the first-year return on investment of adopting AI tools,
//! for a single person or a whole team, under a productivity model (the lift is
//! extra output) or an efficiency model (the lift is time saved). Results are
//! classified into qualitative insights and can be served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod validation;
