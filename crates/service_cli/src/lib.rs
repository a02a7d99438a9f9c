//! # CRR CLI (Service Layer)
//!
//! Command-line front end over the lattice pricer:
//! - `config`: layered configuration (defaults, TOML file, environment, flags)
//! - `commands`: `price`, `greeks`, `forward`, `hedge` and `demo`
//! - `output`: table and JSON rendering of command results
//!
//! Library crates below this one do not log; every `tracing` event of the
//! workspace is emitted from here.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
