//! Sensitivity estimator configuration.
//!
//! Provides [`GreeksConfig`] for the spot bump width, the exercise style used
//! in the revaluations, and whether the three revaluations run concurrently.

use pricer_models::instruments::ExerciseStyle;
use thiserror::Error;

/// Default relative spot bump (1%).
pub const DEFAULT_SPOT_BUMP: f64 = 0.01;

/// Configuration for bump-and-revalue delta and gamma.
///
/// Use the builder via [`GreeksConfig::builder()`] for validated construction.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `spot_bump_relative` | 0.01 (1%) | Relative bump for spot price |
/// | `exercise_style` | European | Style of the three revaluations |
/// | `parallel` | false | Run revaluations with `rayon::join` |
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::ExerciseStyle;
/// use pricer_pricing::greeks::GreeksConfig;
///
/// // Use defaults
/// let config = GreeksConfig::default();
/// assert_eq!(config.exercise_style, ExerciseStyle::European);
///
/// // Use builder for custom values
/// let config = GreeksConfig::builder()
///     .spot_bump_relative(0.005)
///     .exercise_style(ExerciseStyle::American)
///     .parallel(true)
///     .build()
///     .unwrap();
/// assert!((config.spot_bump(100.0) - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksConfig {
    /// Relative bump for spot price (default: 0.01 = 1%).
    ///
    /// The actual bump is `spot_bump_relative * spot`.
    pub spot_bump_relative: f64,

    /// Exercise style used for the base and bumped valuations.
    pub exercise_style: ExerciseStyle,

    /// Evaluate the three valuations concurrently.
    pub parallel: bool,
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self {
            spot_bump_relative: DEFAULT_SPOT_BUMP,
            exercise_style: ExerciseStyle::European,
            parallel: false,
        }
    }
}

impl GreeksConfig {
    /// Creates a new builder for constructing a `GreeksConfig`.
    pub fn builder() -> GreeksConfigBuilder {
        GreeksConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// The relative bump must lie strictly inside `(0, 1)` so that the
    /// down-bumped spot stays positive.
    pub fn validate(&self) -> Result<(), GreeksConfigError> {
        let bump = self.spot_bump_relative;
        if !bump.is_finite() || bump <= 0.0 {
            return Err(GreeksConfigError::InvalidSpotBump(format!(
                "spot_bump_relative must be positive, got {}",
                bump
            )));
        }
        if bump >= 1.0 {
            return Err(GreeksConfigError::InvalidSpotBump(format!(
                "spot_bump_relative must be < 1.0 (100%), got {}",
                bump
            )));
        }

        Ok(())
    }

    /// Computes the absolute spot bump `h` for a given spot price.
    #[inline]
    pub fn spot_bump(&self, spot: f64) -> f64 {
        self.spot_bump_relative * spot
    }
}

/// Builder for [`GreeksConfig`].
#[derive(Debug, Default)]
pub struct GreeksConfigBuilder {
    spot_bump_relative: Option<f64>,
    exercise_style: Option<ExerciseStyle>,
    parallel: Option<bool>,
}

impl GreeksConfigBuilder {
    /// Sets the relative spot bump (default: 0.01 = 1%).
    pub fn spot_bump_relative(mut self, bump: f64) -> Self {
        self.spot_bump_relative = Some(bump);
        self
    }

    /// Sets the exercise style of the revaluations (default: European).
    pub fn exercise_style(mut self, style: ExerciseStyle) -> Self {
        self.exercise_style = Some(style);
        self
    }

    /// Enables concurrent revaluation (default: false).
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GreeksConfigError`] if any parameter is invalid.
    pub fn build(self) -> Result<GreeksConfig, GreeksConfigError> {
        let config = GreeksConfig {
            spot_bump_relative: self.spot_bump_relative.unwrap_or(DEFAULT_SPOT_BUMP),
            exercise_style: self.exercise_style.unwrap_or_default(),
            parallel: self.parallel.unwrap_or(false),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Error type for [`GreeksConfig`] validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GreeksConfigError {
    /// Invalid spot bump value.
    #[error("Invalid spot bump: {0}")]
    InvalidSpotBump(String),
}

impl From<GreeksConfigError> for pricer_core::types::PricingError {
    fn from(err: GreeksConfigError) -> Self {
        pricer_core::types::PricingError::InvalidInput(err.to_string())
    }
}
