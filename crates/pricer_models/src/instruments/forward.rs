//! Cost-of-carry forward pricing.
//!
//! This module provides forward price and mark-to-market formulas under a
//! continuous financing rate `r` and a continuous yield `q`:
//!
//! - Forward price: F = S·e^((r - q)·T)
//! - Value at time t: V = S_t·e^(-q·τ) - K·e^(-r·τ), τ = T - t
//!
//! plus a [`Forward`] contract that applies direction and notional.

use num_traits::Float;

use super::error::InstrumentError;

/// Computes the cost-of-carry forward price.
///
/// # Arguments
/// * `spot` - Current underlying price
/// * `rate` - Continuously compounded financing rate
/// * `dividend_yield` - Continuous dividend (or convenience) yield
/// * `time` - Time to delivery in years
///
/// # Examples
/// ```
/// use pricer_models::instruments::forward_price;
///
/// let f = forward_price(100.0_f64, 0.05, 0.02, 0.5);
/// assert!((f - 101.5113).abs() < 1e-4);
/// ```
#[inline]
pub fn forward_price<T: Float>(spot: T, rate: T, dividend_yield: T, time: T) -> T {
    spot * ((rate - dividend_yield) * time).exp()
}

/// Computes the mark-to-market value of a long forward at time `t_now`.
///
/// # Arguments
/// * `spot_now` - Underlying price at `t_now`
/// * `delivery_price` - Contractual delivery price (K)
/// * `rate` - Continuously compounded financing rate
/// * `dividend_yield` - Continuous dividend yield
/// * `t_now` - Valuation time in years
/// * `t_maturity` - Delivery time in years
///
/// # Errors
/// Returns `InstrumentError::InvalidParameter` if `t_now > t_maturity`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{forward_price, forward_value};
///
/// // A forward struck at the fair forward price is worth nothing at inception.
/// let k = forward_price(100.0_f64, 0.05, 0.02, 0.5);
/// let v = forward_value(100.0_f64, k, 0.05, 0.02, 0.0, 0.5).unwrap();
/// assert!(v.abs() < 1e-10);
/// ```
pub fn forward_value<T: Float>(
    spot_now: T,
    delivery_price: T,
    rate: T,
    dividend_yield: T,
    t_now: T,
    t_maturity: T,
) -> Result<T, InstrumentError> {
    let tau = t_maturity - t_now;
    if tau < T::zero() {
        return Err(InstrumentError::InvalidParameter {
            message: format!(
                "valuation time {} is after maturity {}",
                t_now.to_f64().unwrap_or(f64::NAN),
                t_maturity.to_f64().unwrap_or(f64::NAN)
            ),
        });
    }

    Ok(spot_now * (-dividend_yield * tau).exp() - delivery_price * (-rate * tau).exp())
}

/// Trade direction for forward contracts.
///
/// # Variants
/// - `Long`: Buyer of the underlying (profits when price rises)
/// - `Short`: Seller of the underlying (profits when price falls)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Long position (buy underlying)
    Long,
    /// Short position (sell underlying)
    Short,
}

impl Direction {
    /// Returns +1 for long and -1 for short.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            Direction::Long => T::one(),
            Direction::Short => -T::one(),
        }
    }
}

/// Forward contract on a yield-paying underlying.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Direction, Forward};
///
/// let fwd = Forward::at_market(100.0_f64, 0.05, 0.02, 0.5, 1000.0, Direction::Long).unwrap();
/// let mtm = fwd.mark_to_market(104.0, 0.05, 0.02, 0.25).unwrap();
/// assert!((mtm - 3230.985).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Forward<T: Float> {
    delivery_price: T,
    maturity: T,
    notional: T,
    direction: Direction,
}

impl<T: Float> Forward<T> {
    /// Creates a new forward contract.
    ///
    /// # Errors
    /// - `InvalidStrike` if the delivery price is not positive
    /// - `InvalidMaturity` if the maturity is not positive
    /// - `InvalidParameter` if the notional is not positive
    pub fn new(
        delivery_price: T,
        maturity: T,
        notional: T,
        direction: Direction,
    ) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if delivery_price <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: delivery_price.to_f64().unwrap_or(f64::NAN),
            });
        }

        if maturity <= zero {
            return Err(InstrumentError::InvalidMaturity {
                maturity: maturity.to_f64().unwrap_or(f64::NAN),
            });
        }

        if notional <= zero {
            return Err(InstrumentError::InvalidParameter {
                message: format!(
                    "notional must be positive, got {}",
                    notional.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }

        Ok(Self {
            delivery_price,
            maturity,
            notional,
            direction,
        })
    }

    /// Creates a forward struck at today's fair forward price.
    pub fn at_market(
        spot: T,
        rate: T,
        dividend_yield: T,
        maturity: T,
        notional: T,
        direction: Direction,
    ) -> Result<Self, InstrumentError> {
        let delivery_price = forward_price(spot, rate, dividend_yield, maturity);
        Self::new(delivery_price, maturity, notional, direction)
    }

    /// Payoff at delivery for a given terminal spot.
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        self.direction.sign::<T>() * self.notional * (spot - self.delivery_price)
    }

    /// Mark-to-market value at `t_now`, signed by direction and scaled by notional.
    pub fn mark_to_market(
        &self,
        spot_now: T,
        rate: T,
        dividend_yield: T,
        t_now: T,
    ) -> Result<T, InstrumentError> {
        let unit = forward_value(
            spot_now,
            self.delivery_price,
            rate,
            dividend_yield,
            t_now,
            self.maturity,
        )?;
        Ok(self.direction.sign::<T>() * self.notional * unit)
    }

    /// Returns the delivery price.
    #[inline]
    pub fn delivery_price(&self) -> T {
        self.delivery_price
    }

    /// Returns the delivery time in years.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }

    /// Returns the direction (Long or Short).
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
