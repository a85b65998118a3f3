//! CLI entry point for the assetmix rebalancer.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use assetmix_rebalancer::config::{Config, OutputFormat};
use assetmix_rebalancer::prompt::parse_contribution;
use assetmix_rebalancer::{Contribution, run};

#[derive(Parser)]
#[command(name = "rebalancer")]
#[command(about = "Shares to buy or sell per holding to reach target asset-class proportions")]
#[command(version)]
struct Cli {
    /// Path to a rebalancer.toml (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding allocation.json, price.json and quantity.json
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Extra contribution in dollars (skips the prompt)
    #[arg(long, allow_hyphen_values = true)]
    contribution: Option<String>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    if let Some(dir) = cli.dir {
        config.inputs.dir = dir;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let contribution = match cli.contribution.as_deref().map(parse_contribution) {
        Some(Ok(amount)) => Contribution::Fixed(amount),
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        None => Contribution::Prompt,
    };

    match run(&config, contribution) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
