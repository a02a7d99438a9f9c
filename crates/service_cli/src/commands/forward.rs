//! Forward command implementation
//!
//! Cost-of-carry forward price and, when a later observation is given, the
//! mark-to-market value of a forward struck at that price.

use clap::Args;
use pricer_models::instruments::{forward_price, forward_value};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{self, fixed, Report};
use crate::{CliError, Result};

/// Arguments of the `forward` command
#[derive(Debug, Clone, Args)]
pub struct ForwardArgs {
    /// Underlying price today
    #[arg(long)]
    pub spot: f64,

    /// Continuously compounded financing rate
    #[arg(long, allow_hyphen_values = true)]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dividend_yield: f64,

    /// Time to delivery in years
    #[arg(long)]
    pub time: f64,

    /// Delivery price (defaults to today's fair forward price)
    #[arg(long)]
    pub delivery_price: Option<f64>,

    /// Underlying price at the valuation time
    #[arg(long)]
    pub spot_now: Option<f64>,

    /// Valuation time in years
    #[arg(long, default_value_t = 0.0)]
    pub t_now: f64,
}

/// Result of the `forward` command
#[derive(Debug, Clone, Serialize)]
pub struct ForwardReport {
    pub forward_price: f64,
    pub delivery_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Report for ForwardReport {
    fn title(&self) -> &'static str {
        "Forward"
    }

    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Forward price".to_string(), fixed(self.forward_price, 4)),
            ("Delivery price".to_string(), fixed(self.delivery_price, 4)),
        ];
        if let Some(value) = self.value {
            rows.push(("Forward value".to_string(), fixed(value, 4)));
        }
        rows
    }
}

/// Computes the forward report without printing it
pub fn evaluate(args: &ForwardArgs) -> Result<ForwardReport> {
    if !args.spot.is_finite() || args.spot <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "spot must be positive, got {}",
            args.spot
        )));
    }
    if !args.time.is_finite() || args.time < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "time must be non-negative, got {}",
            args.time
        )));
    }

    let fair = forward_price(args.spot, args.rate, args.dividend_yield, args.time);
    let delivery_price = args.delivery_price.unwrap_or(fair);

    let value = args
        .spot_now
        .map(|spot_now| {
            forward_value(
                spot_now,
                delivery_price,
                args.rate,
                args.dividend_yield,
                args.t_now,
                args.time,
            )
        })
        .transpose()?;

    Ok(ForwardReport {
        forward_price: fair,
        delivery_price,
        value,
    })
}

/// Run the forward command
pub fn run(args: &ForwardArgs, config: &CliConfig) -> Result<()> {
    let report = evaluate(args)?;
    info!(forward_price = report.forward_price, value = ?report.value, "Forward priced");
    output::emit(&report, config.format)
}
