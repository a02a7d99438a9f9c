//! # Pricer Pricing (Layer 3: Lattice Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing values vanilla options on a Cox-Ross-Rubinstein binomial
//! tree and derives spot sensitivities from it:
//! - [`lattice`]: tree construction and backward induction with optional
//!   early exercise
//! - [`greeks`]: bump-and-revalue delta and gamma
//!
//! Inputs come from Layer 2 (`pricer_models::instruments`) and failures are
//! reported as Layer 1 [`PricingError`](pricer_core::types::PricingError).
//! Every operation is a pure synchronous function of its inputs.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{ExerciseStyle, OptionKind, PricingParameters};
//! use pricer_pricing::{price, sensitivities};
//!
//! let params = PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100).unwrap();
//!
//! let european = price(&params, OptionKind::Put, ExerciseStyle::European).unwrap();
//! let american = price(&params, OptionKind::Put, ExerciseStyle::American).unwrap();
//! assert!(american >= european);
//!
//! let greeks = sensitivities(&params, OptionKind::Call).unwrap();
//! assert!(greeks.delta > 0.5 && greeks.delta < 0.7);
//! ```

#![warn(missing_docs)]

pub mod greeks;
pub mod lattice;

// Re-export commonly used items for convenience
pub use greeks::{crr_sensitivities, sensitivities, GreeksConfig, SensitivityResult};
pub use lattice::{crr_price, price, CrrTree, LatticePricer};
