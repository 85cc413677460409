//! Meanpath CLI - command line operations for average-price option pricing.
//!
//! # Commands
//!
//! - `meanpath price` - Price one contract by simulation and closed form
//! - `meanpath sweep` - Re-price a contract across a volatility grid
//!
//! As the service layer of the workspace, this binary orchestrates the
//! models and pricing layers; it holds no pricing logic of its own.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Meanpath average-price option pricer CLI
#[derive(Parser)]
#[command(name = "meanpath")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one contract with and without antithetic variates
    Price {
        /// Time to expiry in years
        #[arg(long, default_value_t = 20.0 / 365.0)]
        maturity: f64,

        /// Strike price
        #[arg(long, default_value_t = 100.0)]
        strike: f64,

        /// Spot price of the underlying
        #[arg(long, default_value_t = 100.0)]
        spot: f64,

        /// Annualised volatility
        #[arg(long, default_value_t = 0.25)]
        volatility: f64,

        /// Annualised risk-free rate
        #[arg(long, default_value_t = 0.1)]
        rate: f64,

        /// Averaging period in years (defaults to maturity)
        #[arg(long)]
        averaging_period: Option<f64>,

        /// Number of simulated paths
        #[arg(short = 'p', long, default_value_t = 1_500)]
        n_paths: usize,

        /// Price observations per path
        #[arg(short = 'o', long, default_value_t = 20)]
        n_observations: usize,

        /// Seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Re-price one contract across a volatility grid
    Sweep {
        /// Time to expiry in years
        #[arg(long, default_value_t = 20.0 / 365.0)]
        maturity: f64,

        /// Strike price
        #[arg(long, default_value_t = 100.0)]
        strike: f64,

        /// Spot price of the underlying
        #[arg(long, default_value_t = 100.0)]
        spot: f64,

        /// Annualised risk-free rate
        #[arg(long, default_value_t = 0.1)]
        rate: f64,

        /// Volatility grid
        #[arg(long, value_delimiter = ',', default_values_t = [0.1, 0.25, 0.5])]
        volatilities: Vec<f64>,

        /// Number of simulated paths per grid point
        #[arg(short = 'p', long, default_value_t = 10_000)]
        n_paths: usize,

        /// Price observations per path
        #[arg(short = 'o', long, default_value_t = 20)]
        n_observations: usize,

        /// Seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            maturity,
            strike,
            spot,
            volatility,
            rate,
            averaging_period,
            n_paths,
            n_observations,
            seed,
        } => commands::price::run(
            maturity,
            strike,
            spot,
            volatility,
            rate,
            averaging_period,
            n_paths,
            n_observations,
            seed,
        ),
        Commands::Sweep {
            maturity,
            strike,
            spot,
            rate,
            volatilities,
            n_paths,
            n_observations,
            seed,
        } => commands::sweep::run(
            maturity,
            strike,
            spot,
            rate,
            &volatilities,
            n_paths,
            n_observations,
            seed,
        ),
    }
}
