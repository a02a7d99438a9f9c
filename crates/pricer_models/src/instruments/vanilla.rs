//! Vanilla option definitions.
//!
//! This module provides the vanilla option contract combining
//! lattice parameters, payoff kind, and exercise style.

use super::exercise::ExerciseStyle;
use super::params::PricingParameters;
use super::payoff::OptionKind;

/// Vanilla option instrument.
///
/// Combines [`PricingParameters`], an [`OptionKind`] and an
/// [`ExerciseStyle`]. The two enums are orthogonal: every kind can be paired
/// with every style.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{
///     ExerciseStyle, OptionKind, PricingParameters, VanillaOption,
/// };
///
/// let params = PricingParameters::new(100.0, 95.0, 0.05, 0.2, 0.5, 200).unwrap();
/// let call = VanillaOption::new(params, OptionKind::Call, ExerciseStyle::European);
///
/// assert_eq!(call.strike(), 95.0);
/// assert_eq!(call.intrinsic(100.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VanillaOption {
    params: PricingParameters,
    kind: OptionKind,
    exercise_style: ExerciseStyle,
}

impl VanillaOption {
    /// Creates a new vanilla option.
    pub fn new(params: PricingParameters, kind: OptionKind, exercise_style: ExerciseStyle) -> Self {
        Self {
            params,
            kind,
            exercise_style,
        }
    }

    /// Intrinsic value at the given spot.
    #[inline]
    pub fn intrinsic(&self, spot: f64) -> f64 {
        self.kind.intrinsic(spot, self.params.strike())
    }

    /// Returns a reference to the pricing parameters.
    #[inline]
    pub fn params(&self) -> &PricingParameters {
        &self.params
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise_style
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.params.strike()
    }

    /// Returns the time to maturity.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.params.maturity()
    }
}
