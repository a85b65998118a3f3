//! Rebalance computation: dollar delta per asset class, shares per holding.
//!
//! For each asset class, in allocation order:
//!
//! ```text
//! target_value  = proportion * (market_value + contribution)
//! current_value = sum of the class's holding values
//! dollars_delta = target_value - current_value
//! shares_to_buy = dollars_delta / price      (for every fund of the class)
//! ```
//!
//! The whole class delta is divided by each fund's own price. It is not split
//! between the funds of a class: every suggestion assumes the full delta is
//! traded in that single fund.

use crate::allocation::Allocation;
use crate::error::RebalanceError;
use crate::ordered::OrderedMap;
use crate::snapshot::Snapshot;
use crate::types::Ticker;

/// Suggested trade in a single holding. Negative `shares_to_buy` means sell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShareTrade {
    pub ticker: Ticker,
    pub price: f64,
    pub shares_to_buy: f64,
}

/// Outcome for one asset class.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssetClassResult {
    pub name: String,
    pub proportion: f64,
    pub target_value: f64,
    pub current_value: f64,
    /// `target_value - current_value`
    pub dollars_delta: f64,
    /// One entry per fund, in the order the class lists them
    pub trades: Vec<ShareTrade>,
}

/// Full result of a rebalance computation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RebalancePlan {
    /// Sum of all holding values before the contribution
    pub market_value: f64,
    pub contribution: f64,
    /// `market_value + contribution`
    pub total_value: f64,
    /// One entry per asset class, in allocation order
    pub classes: Vec<AssetClassResult>,
}

impl RebalancePlan {
    /// Sum of all class deltas.
    ///
    /// Equals the contribution when proportions sum to 1.0 and every
    /// holding belongs to exactly one class.
    pub fn net_delta(&self) -> f64 {
        self.classes.iter().map(|c| c.dollars_delta).sum()
    }

    pub fn class(&self, name: &str) -> Option<&AssetClassResult> {
        self.classes.iter().find(|c| c.name == name)
    }
}

/// Compute the rebalance plan for `allocation` over `snapshot`, adding
/// `extra_contribution` to the total before targets are taken.
///
/// Pure: the same inputs always give the same plan.
///
/// # Errors
///
/// - [`RebalanceError::InvalidContribution`] if the contribution is negative or not finite
/// - [`RebalanceError::UnknownTicker`] if a class lists a fund missing from the snapshot
/// - [`RebalanceError::ZeroPrice`] if a listed fund has a price of zero
pub fn compute(
    allocation: &Allocation,
    snapshot: &Snapshot,
    extra_contribution: f64,
) -> Result<RebalancePlan, RebalanceError> {
    if !extra_contribution.is_finite() || extra_contribution < 0.0 {
        return Err(RebalanceError::InvalidContribution(extra_contribution));
    }

    let market_value = snapshot.market_value();
    let total_value = market_value + extra_contribution;

    let mut classes = Vec::with_capacity(allocation.len());
    for (name, class) in allocation.iter() {
        let target_value = class.proportion * total_value;

        let mut current_value = 0.0;
        for ticker in &class.funds {
            let value = snapshot
                .value(ticker)
                .ok_or_else(|| RebalanceError::UnknownTicker {
                    asset_class: name.to_string(),
                    ticker: ticker.clone(),
                })?;
            current_value += value;
        }

        let dollars_delta = target_value - current_value;

        let trades = class
            .funds
            .iter()
            .map(|ticker| {
                // Presence checked while summing current_value.
                let price = snapshot.holding(ticker).map_or(0.0, |h| h.price);
                if price == 0.0 {
                    return Err(RebalanceError::ZeroPrice {
                        ticker: ticker.clone(),
                    });
                }
                Ok(ShareTrade {
                    ticker: ticker.clone(),
                    price,
                    shares_to_buy: dollars_delta / price,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        classes.push(AssetClassResult {
            name: name.to_string(),
            proportion: class.proportion,
            target_value,
            current_value,
            dollars_delta,
            trades,
        });
    }

    Ok(RebalancePlan {
        market_value,
        contribution: extra_contribution,
        total_value,
        classes,
    })
}

/// Same as [`compute`], starting from separate price and quantity maps.
///
/// The maps must share tickers and order (see [`Snapshot::from_maps`]).
pub fn compute_from_maps(
    allocation: &Allocation,
    prices: &OrderedMap<Ticker, f64>,
    quantities: &OrderedMap<Ticker, f64>,
    extra_contribution: f64,
) -> Result<RebalancePlan, RebalanceError> {
    let snapshot = Snapshot::from_maps(prices, quantities)?;
    compute(allocation, &snapshot, extra_contribution)
}
