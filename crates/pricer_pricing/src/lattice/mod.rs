//! Cox-Ross-Rubinstein binomial lattice.
//!
//! - [`CrrTree`]: per-step tree parameters
//! - [`price`]: European and American valuation by backward induction
//! - [`LatticePricer`]: engine value carrying a default exercise style

mod pricer;
mod tree;

pub use pricer::{crr_price, price, LatticePricer};
pub use tree::CrrTree;
