//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Every failure is a
/// deterministic consequence of the inputs, so none of them is retryable.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `ArbitrageViolation`: Risk-neutral probability outside `[0, 1]`
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Up/down factors inconsistent with the rate, volatility and step size.
    #[error("Arbitrage violation: risk-neutral probability p = {probability} outside [0, 1]")]
    ArbitrageViolation {
        /// The offending risk-neutral probability (may be NaN or infinite)
        probability: f64,
    },

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Returns whether this is an input validation failure.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }

    /// Returns whether this is an arbitrage violation.
    #[inline]
    pub fn is_arbitrage_violation(&self) -> bool {
        matches!(self, PricingError::ArbitrageViolation { .. })
    }
}
