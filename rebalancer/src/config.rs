//! TOML configuration loading and validation.
//!
//! Every field has a default, so running without a config file behaves like
//! an empty one: inputs are read from the current directory and the report
//! is printed as text.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Largest fixed precision accepted for report numbers.
const MAX_PRECISION: usize = 12;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inputs: InputConfig,
    pub output: OutputConfig,
}

/// Where the three input files live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub dir: PathBuf,
    pub allocation: String,
    pub price: String,
    pub quantity: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            allocation: "allocation.json".into(),
            price: "price.json".into(),
            quantity: "quantity.json".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Fixed decimals for numbers; `None` prints the shortest exact form.
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolved paths of the allocation, price and quantity files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub allocation: PathBuf,
    pub price: PathBuf,
    pub quantity: PathBuf,
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse from a TOML string (useful for testing).
    pub fn from_toml(toml: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    pub fn validate(&self) -> Result<()> {
        for (name, file) in [
            ("allocation", &self.inputs.allocation),
            ("price", &self.inputs.price),
            ("quantity", &self.inputs.quantity),
        ] {
            if file.trim().is_empty() {
                return Err(Error::Config(format!("inputs.{name} must not be empty")));
            }
        }
        if let Some(p) = self.output.precision {
            if p > MAX_PRECISION {
                return Err(Error::Config(format!(
                    "output.precision must be <= {MAX_PRECISION}, got {p}"
                )));
            }
        }
        Ok(())
    }

    /// Full paths of the three input files.
    pub fn input_paths(&self) -> InputPaths {
        let dir = &self.inputs.dir;
        InputPaths {
            allocation: dir.join(&self.inputs.allocation),
            price: dir.join(&self.inputs.price),
            quantity: dir.join(&self.inputs.quantity),
        }
    }
}
