//! Contribution prompt.
//!
//! On a terminal the amount is asked interactively; otherwise (e.g.
//! `echo 50 | rebalancer`) one line is read from stdin.

use std::io::{BufRead, IsTerminal};

use dialoguer::Input;
use log::debug;

use crate::error::{Error, Result};

/// Ask for the extra contribution.
///
/// A value that does not parse aborts the run; there is no re-prompt.
pub fn prompt_contribution() -> Result<f64> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        debug!("stdin is not a terminal; reading contribution from it");
        return read_contribution(stdin.lock());
    }

    let raw: String = Input::new()
        .with_prompt("extra contribution ($)")
        .allow_empty(false)
        .interact_text()
        .map_err(|e| Error::Prompt(e.to_string()))?;
    parse_contribution(&raw)
}

/// Read one line from `reader` and parse it as the contribution.
pub fn read_contribution<R: BufRead>(mut reader: R) -> Result<f64> {
    let mut line = String::new();
    let n = reader
        .read_line(&mut line)
        .map_err(|e| Error::Prompt(e.to_string()))?;
    if n == 0 {
        return Err(Error::Contribution {
            input: String::new(),
            reason: "no input".into(),
        });
    }
    parse_contribution(&line)
}

/// Parse a contribution amount: a non-negative, finite number of dollars.
pub fn parse_contribution(raw: &str) -> Result<f64> {
    let invalid = |reason: &str| Error::Contribution {
        input: raw.trim().to_string(),
        reason: reason.to_string(),
    };

    let amount: f64 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if !amount.is_finite() {
        return Err(invalid("must be finite"));
    }
    if amount < 0.0 {
        return Err(invalid("must not be negative"));
    }
    Ok(amount)
}
