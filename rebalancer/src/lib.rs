//! assetmix-rebalancer: command-line front end for the assetmix rebalancer.
//!
//! Reads allocation, price and quantity JSON files, asks for the extra
//! contribution, and prints the dollar delta per asset class with the shares
//! to buy or sell per holding.

pub mod config;
pub mod error;
pub mod input;
pub mod prompt;
pub mod report;

use log::info;

use crate::config::Config;
use crate::error::Result;

/// Where the extra contribution comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    /// Given up front (e.g. `--contribution`).
    Fixed(f64),
    /// Asked on the terminal once the inputs have loaded.
    Prompt,
}

/// Load inputs, resolve the contribution, compute, and render the report.
///
/// Inputs are read and cross-checked before any prompt, so a bad input file
/// fails without asking for a number first. Nothing is rendered unless the
/// whole computation succeeds.
pub fn run(config: &Config, contribution: Contribution) -> Result<String> {
    let inputs = input::load(&config.input_paths())?;

    let contribution = match contribution {
        Contribution::Fixed(amount) => amount,
        Contribution::Prompt => prompt::prompt_contribution()?,
    };

    let plan = assetmix::compute(&inputs.allocation, &inputs.snapshot, contribution)?;
    info!(
        "market value {:.2} + contribution {:.2} = total {:.2}",
        plan.market_value, plan.contribution, plan.total_value
    );

    report::render(&plan, &config.output)
}
