//! Greeks command implementation
//!
//! Bump-and-revalue delta and gamma on the CRR lattice.

use clap::Args;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{ExerciseStyle, OptionKind, PricingParameters};
use pricer_pricing::greeks::{sensitivities_with_config, GreeksConfig};
use pricer_pricing::lattice::price;
use serde::Serialize;
use tracing::{debug, info};

use super::MarketArgs;
use crate::config::CliConfig;
use crate::output::{self, fixed, Report};
use crate::Result;

/// Arguments of the `greeks` command
#[derive(Debug, Clone, Args)]
pub struct GreeksArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Option kind (call, put)
    #[arg(long, default_value = "call")]
    pub kind: OptionKind,

    /// Run the three revaluations concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Also report the Black-Scholes delta and gamma
    #[arg(long)]
    pub compare: bool,
}

/// Analytical reference sensitivities
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalyticalGreeks {
    pub delta: f64,
    pub gamma: f64,
}

/// Result of the `greeks` command
#[derive(Debug, Clone, Serialize)]
pub struct GreeksReport {
    pub params: PricingParameters,
    pub kind: OptionKind,
    pub style: ExerciseStyle,
    pub bump: f64,
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_scholes: Option<AnalyticalGreeks>,
}

impl Report for GreeksReport {
    fn title(&self) -> &'static str {
        "CRR Greeks"
    }

    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Kind".to_string(), self.kind.to_string()),
            ("Style".to_string(), self.style.to_string()),
            ("Steps".to_string(), self.params.steps().to_string()),
            ("Spot bump".to_string(), fixed(self.bump, 6)),
            ("Price".to_string(), fixed(self.price, 6)),
            ("Delta".to_string(), fixed(self.delta, 6)),
            ("Gamma".to_string(), fixed(self.gamma, 6)),
        ];
        if let Some(bs) = self.black_scholes {
            rows.push(("BS delta".to_string(), fixed(bs.delta, 6)));
            rows.push(("BS gamma".to_string(), fixed(bs.gamma, 6)));
        }
        rows
    }
}

/// Computes the sensitivity report without printing it
pub fn evaluate(args: &GreeksArgs, config: &CliConfig) -> Result<GreeksReport> {
    let params = args.market.params(config.steps)?;
    let greeks_config = GreeksConfig::builder()
        .spot_bump_relative(config.spot_bump_relative)
        .exercise_style(config.greeks_style)
        .parallel(args.parallel)
        .build()
        .map_err(pricer_core::types::PricingError::from)?;

    debug!(
        ?params,
        kind = %args.kind,
        style = %greeks_config.exercise_style,
        bump = greeks_config.spot_bump_relative,
        parallel = greeks_config.parallel,
        "Computing sensitivities"
    );

    let value = price(&params, args.kind, greeks_config.exercise_style)?;
    let sensitivities = sensitivities_with_config(&params, args.kind, &greeks_config)?;

    let black_scholes = if args.compare {
        let model = BlackScholes::from_params(&params)?;
        Some(AnalyticalGreeks {
            delta: model.delta(args.kind, params.strike(), params.maturity()),
            gamma: model.gamma(params.strike(), params.maturity()),
        })
    } else {
        None
    };

    Ok(GreeksReport {
        params,
        kind: args.kind,
        style: greeks_config.exercise_style,
        bump: greeks_config.spot_bump(params.spot()),
        price: value,
        delta: sensitivities.delta,
        gamma: sensitivities.gamma,
        black_scholes,
    })
}

/// Run the greeks command
pub fn run(args: &GreeksArgs, config: &CliConfig) -> Result<()> {
    info!("Starting sensitivity calculation...");
    let report = evaluate(args, config)?;
    info!(delta = report.delta, gamma = report.gamma, "Sensitivities complete");
    output::emit(&report, config.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::atm_market;
    use approx::assert_relative_eq;

    fn args(kind: OptionKind) -> GreeksArgs {
        GreeksArgs {
            market: atm_market(),
            kind,
            parallel: false,
            compare: false,
        }
    }

    #[test]
    fn test_default_call_greeks() {
        let report = evaluate(&args(OptionKind::Call), &CliConfig::default()).unwrap();

        assert_eq!(report.style, ExerciseStyle::European);
        assert_relative_eq!(report.bump, 1.0, epsilon = 1e-12);
        assert_relative_eq!(report.delta, 0.6365119623646, epsilon = 1e-9);
        assert_relative_eq!(report.gamma, 0.0748600395118, epsilon = 1e-7);
    }

    #[test]
    fn test_configured_american_style() {
        let config = CliConfig {
            greeks_style: ExerciseStyle::American,
            ..CliConfig::default()
        };
        let report = evaluate(&args(OptionKind::Put), &config).unwrap();

        assert_eq!(report.style, ExerciseStyle::American);
        assert_relative_eq!(report.price, 6.0823544091, epsilon = 1e-8);
        assert_relative_eq!(report.delta, -0.413191539230307, epsilon = 1e-9);
    }

    #[test]
    fn test_comparison_and_parallel() {
        let mut a = args(OptionKind::Call);
        a.parallel = true;
        a.compare = true;
        let report = evaluate(&a, &CliConfig::default()).unwrap();

        let bs = report.black_scholes.unwrap();
        assert!((report.delta - bs.delta).abs() < 1e-2);
        assert_eq!(report.rows().len(), 9);
    }
}
