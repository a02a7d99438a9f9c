//! Financial instrument definitions.
//!
//! This module provides the vocabulary a lattice valuation is phrased in:
//!
//! - [`OptionKind`]: Call or Put, with its intrinsic value
//! - [`ExerciseStyle`]: European or American
//! - [`PricingParameters`]: validated spot/strike/rate/vol/maturity/steps tuple
//! - [`VanillaOption`]: the three combined into one contract
//! - [`Forward`], [`forward_price`], [`forward_value`]: cost-of-carry forwards
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{
//!     ExerciseStyle, OptionKind, PricingParameters, VanillaOption,
//! };
//!
//! let params = PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100).unwrap();
//! let put = VanillaOption::new(params, OptionKind::Put, ExerciseStyle::American);
//!
//! assert!(put.exercise_style().allows_early_exercise());
//! assert_eq!(put.intrinsic(90.0), 10.0);
//! ```

mod error;
mod exercise;
mod forward;
mod params;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use forward::{forward_price, forward_value, Direction, Forward};
pub use params::PricingParameters;
pub use payoff::OptionKind;
pub use vanilla::VanillaOption;
