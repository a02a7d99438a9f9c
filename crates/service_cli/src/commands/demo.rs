//! Demo command with the reference scenarios.
//!
//! - Lattice: S = K = 100, r = 5%, σ = 20%, T = 1, 100 steps
//! - Forward: S = 100, r = 5%, q = 2%, T = 0.5, revalued at t = 0.25 with S = 104
//! - Hedge: ρ = 0.9, σ_S = 20%, σ_F = 18%, 1000 units, spot +5, futures +4
//!
//! # Expected Output
//!
//! ```text
//! European Call     10.4306
//! American Put       6.0824
//! Delta              0.6365
//! Gamma              0.0749
//! Forward Price      101.51
//! Forward Value        3.23
//! Optimal Hedge Ratio 1.000
//! Unhedged PnL      5000.00
//! Futures PnL      -4000.00
//! Total PnL         1000.00
//! ```

use pricer_models::hedging::{hedge_pnl, hedge_ratio};
use pricer_models::instruments::{
    forward_price, forward_value, ExerciseStyle, OptionKind, PricingParameters,
};
use pricer_pricing::greeks::sensitivities;
use pricer_pricing::lattice::price;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{self, fixed, Report};
use crate::Result;

/// Values of the reference scenarios
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub european_call: f64,
    pub american_put: f64,
    pub delta: f64,
    pub gamma: f64,
    pub forward_price: f64,
    pub forward_value: f64,
    pub hedge_ratio: f64,
    pub unhedged_pnl: f64,
    pub futures_pnl: f64,
    pub total_pnl: f64,
}

impl Report for DemoReport {
    fn title(&self) -> &'static str {
        "Reference Scenarios"
    }

    fn rows(&self) -> Vec<(String, String)> {
        vec![
            ("European Call".to_string(), fixed(self.european_call, 4)),
            ("American Put".to_string(), fixed(self.american_put, 4)),
            ("Delta".to_string(), fixed(self.delta, 4)),
            ("Gamma".to_string(), fixed(self.gamma, 4)),
            ("Forward Price".to_string(), fixed(self.forward_price, 2)),
            ("Forward Value".to_string(), fixed(self.forward_value, 2)),
            ("Optimal Hedge Ratio".to_string(), fixed(self.hedge_ratio, 3)),
            ("Unhedged PnL".to_string(), fixed(self.unhedged_pnl, 2)),
            ("Futures PnL".to_string(), fixed(self.futures_pnl, 2)),
            ("Total PnL".to_string(), fixed(self.total_pnl, 2)),
        ]
    }
}

/// Computes every reference scenario
pub fn evaluate() -> Result<DemoReport> {
    let params = PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100)?;
    let european_call = price(&params, OptionKind::Call, ExerciseStyle::European)?;
    let american_put = price(&params, OptionKind::Put, ExerciseStyle::American)?;
    let greeks = sensitivities(&params, OptionKind::Call)?;

    let (spot, rate, dividend_yield, maturity) = (100.0, 0.05, 0.02, 0.5);
    let f0 = forward_price(spot, rate, dividend_yield, maturity);
    let value = forward_value(104.0, f0, rate, dividend_yield, 0.25, maturity)?;

    let ratio = hedge_ratio(0.9, 0.2, 0.18)?;
    let pnl = hedge_pnl(100.0, 105.0, f0, f0 + 4.0, 1000.0, ratio);

    Ok(DemoReport {
        european_call,
        american_put,
        delta: greeks.delta,
        gamma: greeks.gamma,
        forward_price: f0,
        forward_value: value,
        hedge_ratio: ratio,
        unhedged_pnl: pnl.unhedged,
        futures_pnl: pnl.futures_pnl,
        total_pnl: pnl.total,
    })
}

/// Runs the reference scenario demonstration.
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Running reference scenarios");
    let report = evaluate()?;
    output::emit(&report, config.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_reference_outputs() {
        let report = evaluate().unwrap();
        let rows = report.rows();
        let value = |label: &str| {
            rows.iter()
                .find(|(l, _)| l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(value("European Call"), "10.4306");
        assert_eq!(value("American Put"), "6.0824");
        assert_eq!(value("Delta"), "0.6365");
        assert_eq!(value("Gamma"), "0.0749");
        assert_eq!(value("Forward Price"), "101.51");
        assert_eq!(value("Forward Value"), "3.23");
        assert_eq!(value("Optimal Hedge Ratio"), "1.000");
        assert_eq!(value("Unhedged PnL"), "5000.00");
        assert_eq!(value("Futures PnL"), "-4000.00");
        assert_eq!(value("Total PnL"), "1000.00");
    }

    #[test]
    fn test_json_output() {
        let json = output::render(&evaluate().unwrap(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["european_call"].as_f64().unwrap() > 10.0);
        assert!(value["hedge_ratio"].is_number());
    }
}
