//! # Pricer Models (L2: Business Logic)
//!
//! Option instrument vocabulary and closed-form collaborators.
//!
//! This crate provides:
//! - Instrument definitions (option kind, exercise style, lattice inputs)
//! - Cost-of-carry forward pricing and valuation
//! - Minimum-variance futures hedging
//! - Black-Scholes formulas used as the reference for lattice convergence
//!
//! ## Design Principles
//!
//! - **Validated construction**: parameter structs reject bad inputs up front
//! - **Enum-based vocabulary** for static dispatch
//! - **Generic over `T: Float`** where the formula is scalar-agnostic

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod hedging;
pub mod instruments;
