//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! parameter validation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// Provides structured error handling for parameter validation with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidSpot`: Spot price is non-positive or not finite
/// - `InvalidStrike`: Strike price is non-positive or not finite
/// - `InvalidVolatility`: Volatility is negative or not finite
/// - `InvalidMaturity`: Maturity is non-positive or not finite
/// - `InvalidSteps`: Lattice step count is zero
/// - `InvalidParameter`: General parameter validation failure
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid maturity.
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Invalid lattice step count.
    #[error("Invalid step count: N = {steps} (must be >= 1)")]
    InvalidSteps {
        /// The invalid step count
        steps: usize,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = InstrumentError::InvalidSpot { spot: -5.0 };
        assert_eq!(format!("{}", err), "Invalid spot: S = -5");
    }

    #[test]
    fn test_invalid_steps_display() {
        let err = InstrumentError::InvalidSteps { steps: 0 };
        assert_eq!(format!("{}", err), "Invalid step count: N = 0 (must be >= 1)");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = InstrumentError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_every_variant_maps_to_invalid_input() {
        let errors = vec![
            InstrumentError::InvalidSpot { spot: 0.0 },
            InstrumentError::InvalidStrike { strike: 0.0 },
            InstrumentError::InvalidVolatility { volatility: -1.0 },
            InstrumentError::InvalidMaturity { maturity: 0.0 },
            InstrumentError::InvalidSteps { steps: 0 },
            InstrumentError::InvalidParameter {
                message: "t_now after maturity".to_string(),
            },
        ];

        for err in errors {
            let message = err.to_string();
            let pricing_err: PricingError = err.into();
            assert_eq!(pricing_err, PricingError::InvalidInput(message));
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = InstrumentError::InvalidMaturity { maturity: -1.0 };
        let _: &dyn std::error::Error = &err;
    }
}
