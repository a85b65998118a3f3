//! Error types for the rebalancer.

use std::path::PathBuf;

use assetmix::RebalanceError;

/// All errors that can occur during a rebalancer run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse input file {path}: {source}")]
    InputParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Rebalance(#[from] RebalanceError),

    #[error("invalid contribution {input:?}: {reason}")]
    Contribution { input: String, reason: String },

    #[error("contribution prompt failed: {0}")]
    Prompt(String),

    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
