//! Bump-and-revalue sensitivities of the lattice price.
//!
//! - [`sensitivities`]: delta and gamma under the default 1% spot bump
//! - [`GreeksConfig`]: bump width, revaluation style, concurrency
//! - [`SensitivityResult`]: the `{delta, gamma}` pair

mod bump;
mod config;
mod result;


pub use bump::{crr_sensitivities, sensitivities, sensitivities_with_config, sensitivities_with_style};
pub use config::{GreeksConfig, GreeksConfigBuilder, GreeksConfigError, DEFAULT_SPOT_BUMP};
pub use result::SensitivityResult;
