//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! For convenience, [`PricingError`] is re-exported at this module level.

pub mod error;

pub use error::PricingError;
