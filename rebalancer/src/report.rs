//! Report rendering: per-class dollar deltas and per-holding share counts.

use assetmix::RebalancePlan;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;

/// Render a plan in the configured format.
pub fn render(plan: &RebalancePlan, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => Ok(render_text(plan, output.precision)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)? + "\n"),
    }
}

/// Plain text, one block per asset class:
///
/// ```text
/// stocks
/// dollars delta: 70.0
/// shares to buy: 7.0 of A
/// ```
pub fn render_text(plan: &RebalancePlan, precision: Option<usize>) -> String {
    let mut out = String::new();
    for class in &plan.classes {
        out.push_str(&format!(
            "{}\ndollars delta: {}\n",
            class.name,
            number(class.dollars_delta, precision)
        ));
        for trade in &class.trades {
            out.push_str(&format!(
                "shares to buy: {} of {}\n",
                number(trade.shares_to_buy, precision),
                trade.ticker
            ));
        }
    }
    out
}

/// Shortest round-trip form (`70.0`, `0.1`) or fixed decimals.
///
/// Very large or small magnitudes switch to Rust's exponent form (`1e16`,
/// `1e-5`), without the sign and zero padding of `1e+16` / `1e-05`.
fn number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{value:.p$}"),
        None => format!("{value:?}"),
    }
}
