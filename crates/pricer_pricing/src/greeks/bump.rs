//! Bump-and-revalue delta and gamma.
//!
//! Three lattice valuations with identical strike, rate, volatility,
//! maturity, steps and kind, at spots `S − h`, `S`, `S + h` with
//! `h = spot_bump_relative · S`.

use pricer_core::types::PricingError;
use pricer_models::instruments::{ExerciseStyle, OptionKind, PricingParameters};

use super::config::GreeksConfig;
use super::result::SensitivityResult;
use crate::lattice::price;

/// Computes delta and gamma with the default configuration.
///
/// The revaluations use European exercise regardless of the contract's
/// style; use [`sensitivities_with_config`] for American sensitivities.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionKind, PricingParameters};
/// use pricer_pricing::greeks::sensitivities;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100).unwrap();
/// let greeks = sensitivities(&params, OptionKind::Call).unwrap();
///
/// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
/// assert!(greeks.gamma > 0.0);
/// ```
pub fn sensitivities(
    params: &PricingParameters,
    kind: OptionKind,
) -> Result<SensitivityResult, PricingError> {
    sensitivities_with_config(params, kind, &GreeksConfig::default())
}

/// Computes delta and gamma under an explicit [`GreeksConfig`].
///
/// # Errors
/// - `PricingError::InvalidInput` if the configuration is invalid
/// - any error of the underlying lattice valuations
pub fn sensitivities_with_config(
    params: &PricingParameters,
    kind: OptionKind,
    config: &GreeksConfig,
) -> Result<SensitivityResult, PricingError> {
    config.validate()?;

    let spot = params.spot();
    let bump = config.spot_bump(spot);
    let up = params.with_spot(spot + bump)?;
    let down = params.with_spot(spot - bump)?;
    let style = config.exercise_style;

    let (base, (value_up, value_down)) = if config.parallel {
        rayon::join(
            || price(params, kind, style),
            || rayon::join(|| price(&up, kind, style), || price(&down, kind, style)),
        )
    } else {
        (
            price(params, kind, style),
            (price(&up, kind, style), price(&down, kind, style)),
        )
    };

    Ok(SensitivityResult::from_bumps(
        base?,
        value_up?,
        value_down?,
        bump,
    ))
}

/// Computes delta and gamma from raw scalar inputs.
///
/// # Errors
/// `PricingError::InvalidInput` for any rejected input (including
/// `spot <= 0`), otherwise as [`sensitivities`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionKind;
/// use pricer_pricing::greeks::crr_sensitivities;
///
/// let greeks = crr_sensitivities(100.0, 100.0, 0.05, 0.2, 1.0, 100, OptionKind::Put).unwrap();
/// assert!(greeks.delta < 0.0 && greeks.delta > -1.0);
///
/// assert!(crr_sensitivities(0.0, 100.0, 0.05, 0.2, 1.0, 100, OptionKind::Put).is_err());
/// ```
pub fn crr_sensitivities(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    steps: usize,
    kind: OptionKind,
) -> Result<SensitivityResult, PricingError> {
    let params = PricingParameters::new(spot, strike, rate, volatility, maturity, steps)?;
    sensitivities(&params, kind)
}

/// Style-explicit shorthand over [`sensitivities_with_config`] with the
/// default bump.
pub fn sensitivities_with_style(
    params: &PricingParameters,
    kind: OptionKind,
    style: ExerciseStyle,
) -> Result<SensitivityResult, PricingError> {
    let config = GreeksConfig {
        exercise_style: style,
        ..GreeksConfig::default()
    };
    sensitivities_with_config(params, kind, &config)
}
