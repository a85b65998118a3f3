//! Errors raised while building a snapshot or computing a rebalance.

use crate::types::Ticker;

/// Errors returned by snapshot construction and [`compute`](crate::compute).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RebalanceError {
    /// Price and quantity inputs do not list the same tickers in the same order.
    #[error(
        "price and quantity tickers differ at position {position}: price has {}, quantity has {}",
        describe(.price),
        describe(.quantity)
    )]
    KeyMismatch {
        position: usize,
        price: Option<Ticker>,
        quantity: Option<Ticker>,
    },

    /// The same key appears twice in an ordered input.
    #[error("duplicate key `{0}`")]
    DuplicateKey(String),

    /// An asset class names a ticker absent from the price/quantity data.
    #[error("asset class `{asset_class}` references unknown ticker {ticker}")]
    UnknownTicker { asset_class: String, ticker: Ticker },

    /// A referenced holding is priced at zero, so no share count exists.
    #[error("price of {ticker} is zero; cannot compute shares to buy")]
    ZeroPrice { ticker: Ticker },

    /// The extra contribution is negative, NaN or infinite.
    #[error("extra contribution must be a non-negative finite amount, got {0}")]
    InvalidContribution(f64),
}

fn describe(ticker: &Option<Ticker>) -> String {
    match ticker {
        Some(t) => format!("`{t}`"),
        None => "nothing".to_string(),
    }
}
