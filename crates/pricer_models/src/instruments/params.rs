//! Lattice pricing parameters.
//!
//! This module provides the immutable, validated input tuple for a
//! binomial valuation.

use super::error::InstrumentError;

/// Inputs to a binomial lattice valuation.
///
/// Holds spot, strike, risk-free rate, volatility, maturity and the number
/// of lattice steps. Construction validates every field, so a value of this
/// type is always safe to hand to a pricer:
/// - all real inputs are finite
/// - `spot > 0`, `strike > 0`, `maturity > 0`
/// - `volatility >= 0`
/// - `steps >= 1`
///
/// The rate is unrestricted (negative rates are allowed).
///
/// # Examples
/// ```
/// use pricer_models::instruments::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100).unwrap();
/// assert_eq!(params.spot(), 100.0);
/// assert_eq!(params.steps(), 100);
///
/// assert!(PricingParameters::new(0.0, 100.0, 0.05, 0.2, 1.0, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingParameters {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    steps: usize,
}

impl PricingParameters {
    /// Creates new pricing parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Continuously compounded risk-free rate
    /// * `volatility` - Annualised volatility (must be non-negative)
    /// * `maturity` - Time to expiry in years (must be positive)
    /// * `steps` - Number of lattice steps (must be at least 1)
    ///
    /// # Errors
    /// Returns the [`InstrumentError`] variant naming the first offending field.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        maturity: f64,
        steps: usize,
    ) -> Result<Self, InstrumentError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(InstrumentError::InvalidSpot { spot });
        }

        if !strike.is_finite() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }

        if !rate.is_finite() {
            return Err(InstrumentError::InvalidParameter {
                message: format!("rate must be finite, got {}", rate),
            });
        }

        if !volatility.is_finite() || volatility < 0.0 {
            return Err(InstrumentError::InvalidVolatility { volatility });
        }

        if !maturity.is_finite() || maturity <= 0.0 {
            return Err(InstrumentError::InvalidMaturity { maturity });
        }

        if steps == 0 {
            return Err(InstrumentError::InvalidSteps { steps });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
            maturity,
            steps,
        })
    }

    /// Returns a copy with a different spot, re-validating it.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::PricingParameters;
    ///
    /// let base = PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 50).unwrap();
    /// let bumped = base.with_spot(101.0).unwrap();
    /// assert_eq!(bumped.spot(), 101.0);
    /// assert_eq!(bumped.strike(), base.strike());
    /// ```
    pub fn with_spot(&self, spot: f64) -> Result<Self, InstrumentError> {
        Self::new(
            spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
            self.steps,
        )
    }

    /// Returns a copy with a different step count.
    pub fn with_steps(&self, steps: usize) -> Result<Self, InstrumentError> {
        Self::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
            steps,
        )
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the number of lattice steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
}
