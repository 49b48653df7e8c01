//! Error types for the ROI engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating inputs,
//! loading configuration, or running a calculation.

use thiserror::Error;

/// The main error type for the ROI engine.
///
/// All fallible operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roi_engine::error::EngineError;
///
/// let error = EngineError::DivisionByZero {
///     denominator: "total_ai_costs".to_string(),
/// };
/// assert_eq!(error.to_string(), "Division by zero: total_ai_costs is zero");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input field was missing, non-numeric, or outside its allowed range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was rejected.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A computed denominator collapsed to zero.
    #[error("Division by zero: {denominator} is zero")]
    DivisionByZero {
        /// The name of the quantity used as the denominator.
        denominator: String,
    },

    /// An intermediate value grew beyond what a `Decimal` can hold.
    #[error("Arithmetic overflow computing {quantity}")]
    Overflow {
        /// The quantity being computed when the overflow happened.
        quantity: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an [`EngineError::DivisionByZero`].
    pub fn division_by_zero(denominator: impl Into<String>) -> Self {
        EngineError::DivisionByZero {
            denominator: denominator.into(),
        }
    }

    /// Shorthand for an [`EngineError::Overflow`].
    pub fn overflow(quantity: impl Into<String>) -> Self {
        EngineError::Overflow {
            quantity: quantity.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
