//! Input loading: allocation.json, price.json and quantity.json.
//!
//! Each file is a JSON object. Key order is kept, since it decides report
//! order, and the price and quantity files must list the same tickers in the
//! same order.

use std::path::Path;

use assetmix::{Allocation, OrderedMap, Snapshot, Ticker};
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::config::InputPaths;
use crate::error::{Error, Result};

/// Proportion sums further than this from 1.0 are logged.
const PROPORTION_SUM_TOLERANCE: f64 = 1e-6;

/// Parsed and cross-checked inputs, ready for `compute`.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub allocation: Allocation,
    pub snapshot: Snapshot,
}

impl Inputs {
    /// Parse from JSON strings (useful for testing).
    pub fn from_json(allocation: &str, price: &str, quantity: &str) -> Result<Self> {
        let allocation = parse(Path::new("<allocation>"), allocation)?;
        let prices = parse(Path::new("<price>"), price)?;
        let quantities = parse(Path::new("<quantity>"), quantity)?;
        Self::assemble(allocation, &prices, &quantities)
    }

    fn assemble(
        allocation: Allocation,
        prices: &OrderedMap<Ticker, f64>,
        quantities: &OrderedMap<Ticker, f64>,
    ) -> Result<Self> {
        let snapshot = Snapshot::from_maps(prices, quantities)?;

        let sum = allocation.proportion_sum();
        if (sum - 1.0).abs() > PROPORTION_SUM_TOLERANCE {
            warn!("allocation proportions sum to {sum}, not 1.0");
        }
        debug!(
            "loaded {} asset classes and {} holdings",
            allocation.len(),
            snapshot.len()
        );

        Ok(Self {
            allocation,
            snapshot,
        })
    }
}

/// Read and cross-check the three input files.
pub fn load(paths: &InputPaths) -> Result<Inputs> {
    let allocation: Allocation = read_json(&paths.allocation)?;
    let prices: OrderedMap<Ticker, f64> = read_json(&paths.price)?;
    let quantities: OrderedMap<Ticker, f64> = read_json(&paths.quantity)?;
    Inputs::assemble(allocation, &prices, &quantities)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("read {}", path.display());
    parse(path, &contents)
}

fn parse<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T> {
    serde_json::from_str(contents).map_err(|e| Error::InputParse {
        path: path.to_path_buf(),
        source: e,
    })
}
