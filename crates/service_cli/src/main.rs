//! CRR CLI - Command Line Operations for Lattice Pricing
//!
//! # Commands
//!
//! - `crr price` - Value a European or American option on the CRR lattice
//! - `crr greeks` - Bump-and-revalue delta and gamma
//! - `crr forward` - Cost-of-carry forward price and value
//! - `crr hedge` - Minimum-variance futures hedge and its P&L
//! - `crr demo` - Reference scenarios
//!
//! # Configuration
//!
//! Priority (highest to lowest): command-line flags, `CRR_*` environment
//! variables, the TOML file given with `--config`, built-in defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use service_cli::commands::{
    self, forward::ForwardArgs, greeks::GreeksArgs, hedge::HedgeArgs, price::PriceArgs,
};
use service_cli::config::{build_config, CliArgs};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CRR binomial lattice pricer
#[derive(Parser)]
#[command(name = "crr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Default lattice steps
    #[arg(long = "default-steps", global = true)]
    default_steps: Option<usize>,

    /// Relative spot bump for greeks
    #[arg(long, global = true)]
    bump: Option<f64>,

    /// Exercise style of the greeks revaluations (european, american)
    #[arg(long, global = true)]
    greeks_style: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value an option on the CRR lattice
    Price(PriceArgs),

    /// Compute delta and gamma by bump-and-revalue
    Greeks(GreeksArgs),

    /// Forward price and mark-to-market value
    Forward(ForwardArgs),

    /// Minimum-variance futures hedge
    Hedge(HedgeArgs),

    /// Run the reference scenarios
    Demo,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
            steps: cli.default_steps,
            spot_bump: cli.bump,
            greeks_style: cli.greeks_style.clone(),
            format: cli.format.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        version = service_cli::VERSION,
        steps = config.steps,
        spot_bump_relative = config.spot_bump_relative,
        greeks_style = %config.greeks_style,
        format = %config.format,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config)?,
        Commands::Greeks(args) => commands::greeks::run(args, &config)?,
        Commands::Forward(args) => commands::forward::run(args, &config)?,
        Commands::Hedge(args) => commands::hedge::run(args, &config)?,
        Commands::Demo => commands::demo::run(&config)?,
    }

    Ok(())
}
