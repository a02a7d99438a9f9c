//! Hedge command implementation
//!
//! Minimum-variance hedge ratio and the P&L of a futures-hedged spot position.

use clap::Args;
use pricer_models::hedging::{hedge_pnl, hedge_ratio};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{self, fixed, Report};
use crate::Result;

/// Arguments of the `hedge` command
#[derive(Debug, Clone, Args)]
pub struct HedgeArgs {
    /// Correlation between spot and futures price changes
    #[arg(long, allow_hyphen_values = true)]
    pub correlation: f64,

    /// Volatility of spot price changes
    #[arg(long)]
    pub sigma_spot: f64,

    /// Volatility of futures price changes
    #[arg(long)]
    pub sigma_futures: f64,

    /// Spot price at inception
    #[arg(long)]
    pub spot_start: f64,

    /// Spot price at the end of the horizon
    #[arg(long)]
    pub spot_end: f64,

    /// Futures price at inception
    #[arg(long)]
    pub fut_start: f64,

    /// Futures price at the end of the horizon
    #[arg(long)]
    pub fut_end: f64,

    /// Units of the underlying held long
    #[arg(long)]
    pub units: f64,
}

/// Result of the `hedge` command
#[derive(Debug, Clone, Serialize)]
pub struct HedgeReport {
    pub hedge_ratio: f64,
    pub unhedged: f64,
    pub futures_pnl: f64,
    pub total: f64,
}

impl Report for HedgeReport {
    fn title(&self) -> &'static str {
        "Futures Hedge"
    }

    fn rows(&self) -> Vec<(String, String)> {
        vec![
            ("Optimal hedge ratio".to_string(), fixed(self.hedge_ratio, 3)),
            ("Unhedged PnL".to_string(), fixed(self.unhedged, 2)),
            ("Futures PnL".to_string(), fixed(self.futures_pnl, 2)),
            ("Total PnL".to_string(), fixed(self.total, 2)),
        ]
    }
}

/// Computes the hedge report without printing it
pub fn evaluate(args: &HedgeArgs) -> Result<HedgeReport> {
    let ratio = hedge_ratio(args.correlation, args.sigma_spot, args.sigma_futures)?;
    let pnl = hedge_pnl(
        args.spot_start,
        args.spot_end,
        args.fut_start,
        args.fut_end,
        args.units,
        ratio,
    );

    Ok(HedgeReport {
        hedge_ratio: ratio,
        unhedged: pnl.unhedged,
        futures_pnl: pnl.futures_pnl,
        total: pnl.total,
    })
}

/// Run the hedge command
pub fn run(args: &HedgeArgs, config: &CliConfig) -> Result<()> {
    let report = evaluate(args)?;
    info!(hedge_ratio = report.hedge_ratio, total = report.total, "Hedge evaluated");
    output::emit(&report, config.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;

    fn args() -> HedgeArgs {
        HedgeArgs {
            correlation: 0.9,
            sigma_spot: 0.2,
            sigma_futures: 0.18,
            spot_start: 100.0,
            spot_end: 105.0,
            fut_start: 101.5,
            fut_end: 105.5,
            units: 1000.0,
        }
    }

    #[test]
    fn test_reference_hedge() {
        let report = evaluate(&args()).unwrap();
        assert_relative_eq!(report.hedge_ratio, 1.0, epsilon = 1e-12);
        assert_relative_eq!(report.unhedged, 5000.0, epsilon = 1e-9);
        assert_relative_eq!(report.futures_pnl, -4000.0, epsilon = 1e-9);
        assert_relative_eq!(report.total, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_futures_volatility_rejected() {
        let a = HedgeArgs {
            sigma_futures: 0.0,
            ..args()
        };
        assert!(matches!(evaluate(&a), Err(CliError::Instrument(_))));
    }
}
