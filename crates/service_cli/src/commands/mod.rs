//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a report
//! with `evaluate` and print it with `run`.

pub mod demo;
pub mod forward;
pub mod greeks;
pub mod hedge;
pub mod price;

use clap::Args;
use pricer_models::instruments::{InstrumentError, PricingParameters};

/// Market and contract inputs shared by `price` and `greeks`.
#[derive(Debug, Clone, Args)]
pub struct MarketArgs {
    /// Current underlying price
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_hyphen_values = true)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(long = "vol")]
    pub volatility: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub maturity: f64,

    /// Lattice steps (defaults to the configured value)
    #[arg(long)]
    pub steps: Option<usize>,
}

impl MarketArgs {
    /// Validates the inputs into lattice parameters.
    pub fn params(&self, default_steps: usize) -> Result<PricingParameters, InstrumentError> {
        PricingParameters::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
            self.steps.unwrap_or(default_steps),
        )
    }
}

#[cfg(test)]
pub(crate) fn atm_market() -> MarketArgs {
    MarketArgs {
        spot: 100.0,
        strike: 100.0,
        rate: 0.05,
        volatility: 0.2,
        maturity: 1.0,
        steps: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_args_default_steps() {
        let params = atm_market().params(250).unwrap();
        assert_eq!(params.steps(), 250);

        let explicit = MarketArgs {
            steps: Some(10),
            ..atm_market()
        };
        assert_eq!(explicit.params(250).unwrap().steps(), 10);
    }

    #[test]
    fn test_market_args_invalid() {
        let bad = MarketArgs {
            spot: -1.0,
            ..atm_market()
        };
        assert!(matches!(
            bad.params(100),
            Err(InstrumentError::InvalidSpot { .. })
        ));
    }
}
