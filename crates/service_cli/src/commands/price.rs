//! Price command implementation
//!
//! Values a vanilla option on the CRR lattice, optionally alongside the
//! Black-Scholes European price.

use clap::Args;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{ExerciseStyle, OptionKind, PricingParameters};
use pricer_pricing::lattice::LatticePricer;
use serde::Serialize;
use tracing::{debug, info};

use super::MarketArgs;
use crate::config::CliConfig;
use crate::output::{self, fixed, Report};
use crate::Result;

/// Arguments of the `price` command
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Option kind (call, put)
    #[arg(long, default_value = "call")]
    pub kind: OptionKind,

    /// Exercise style (european, american)
    #[arg(long, default_value = "european")]
    pub style: ExerciseStyle,

    /// Also report the Black-Scholes European price
    #[arg(long)]
    pub compare: bool,
}

/// Result of the `price` command
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub params: PricingParameters,
    pub kind: OptionKind,
    pub style: ExerciseStyle,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_scholes: Option<f64>,
}

impl Report for PriceReport {
    fn title(&self) -> &'static str {
        "CRR Price"
    }

    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Kind".to_string(), self.kind.to_string()),
            ("Style".to_string(), self.style.to_string()),
            ("Steps".to_string(), self.params.steps().to_string()),
            ("Price".to_string(), fixed(self.price, 6)),
        ];
        if let Some(bs) = self.black_scholes {
            rows.push(("Black-Scholes".to_string(), fixed(bs, 6)));
            rows.push(("Difference".to_string(), fixed(self.price - bs, 6)));
        }
        rows
    }
}

/// Computes the price report without printing it
pub fn evaluate(args: &PriceArgs, config: &CliConfig) -> Result<PriceReport> {
    let params = args.market.params(config.steps)?;
    debug!(?params, kind = %args.kind, style = %args.style, "Pricing on lattice");

    let price = LatticePricer::new(args.style).price(&params, args.kind)?;

    let black_scholes = if args.compare {
        let model = BlackScholes::from_params(&params)?;
        Some(model.price(args.kind, params.strike(), params.maturity()))
    } else {
        None
    };

    Ok(PriceReport {
        params,
        kind: args.kind,
        style: args.style,
        price,
        black_scholes,
    })
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    info!("Starting pricing...");
    let report = evaluate(args, config)?;
    info!(price = report.price, steps = report.params.steps(), "Pricing complete");
    output::emit(&report, config.format)
}
