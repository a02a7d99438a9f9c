//! Minimum-variance futures hedging.
//!
//! This module provides:
//! - [`hedge_ratio`]: h* = ρ·σ_S / σ_F
//! - [`hedge_pnl`]: P&L decomposition of a spot position hedged with futures
//!
//! The hedge is short futures: a long spot position of `units` is offset by
//! selling `h·units` futures contracts.

use num_traits::Float;

use crate::instruments::InstrumentError;

/// P&L decomposition of a futures-hedged spot position.
///
/// `total = unhedged + futures_pnl`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgePnl<T: Float> {
    /// P&L of the spot position alone.
    pub unhedged: T,
    /// P&L of the short futures leg.
    pub futures_pnl: T,
    /// Combined P&L.
    pub total: T,
}

/// Computes the minimum-variance hedge ratio.
///
/// # Arguments
/// * `correlation` - Correlation between spot and futures price changes
/// * `sigma_spot` - Volatility of spot price changes
/// * `sigma_futures` - Volatility of futures price changes (must be positive)
///
/// # Errors
/// Returns `InstrumentError::InvalidParameter` if `sigma_futures <= 0`.
///
/// # Examples
/// ```
/// use pricer_models::hedging::hedge_ratio;
///
/// let h = hedge_ratio(0.9_f64, 0.2, 0.18).unwrap();
/// assert!((h - 1.0).abs() < 1e-12);
/// ```
pub fn hedge_ratio<T: Float>(
    correlation: T,
    sigma_spot: T,
    sigma_futures: T,
) -> Result<T, InstrumentError> {
    if sigma_futures.is_nan() || sigma_futures <= T::zero() {
        return Err(InstrumentError::InvalidParameter {
            message: format!(
                "futures volatility must be positive, got {}",
                sigma_futures.to_f64().unwrap_or(f64::NAN)
            ),
        });
    }

    Ok(correlation * (sigma_spot / sigma_futures))
}

/// Computes the P&L of a long spot position hedged by shorting futures.
///
/// - unhedged = units·(S_end − S_start)
/// - contracts = h·units
/// - futures_pnl = −contracts·(F_end − F_start)
///
/// # Examples
/// ```
/// use pricer_models::hedging::hedge_pnl;
///
/// let pnl = hedge_pnl(100.0_f64, 105.0, 101.5, 105.5, 1000.0, 1.0);
/// assert!((pnl.unhedged - 5000.0).abs() < 1e-9);
/// assert!((pnl.futures_pnl + 4000.0).abs() < 1e-9);
/// assert!((pnl.total - 1000.0).abs() < 1e-9);
/// ```
pub fn hedge_pnl<T: Float>(
    spot_start: T,
    spot_end: T,
    fut_start: T,
    fut_end: T,
    units: T,
    hedge_ratio: T,
) -> HedgePnl<T> {
    let unhedged = units * (spot_end - spot_start);
    let contracts = hedge_ratio * units;
    let futures_pnl = -contracts * (fut_end - fut_start);

    HedgePnl {
        unhedged,
        futures_pnl,
        total: unhedged + futures_pnl,
    }
}
