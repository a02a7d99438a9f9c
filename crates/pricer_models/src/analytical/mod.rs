//! Analytical pricing formulas for European options.
//!
//! The closed-form Black-Scholes model is the limit the CRR lattice
//! converges to as the step count grows, so it serves as the reference for
//! lattice accuracy checks.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports `f32` and `f64`
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
