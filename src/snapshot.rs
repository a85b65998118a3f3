//! Portfolio snapshot: prices and quantities at a point in time.

use crate::error::RebalanceError;
use crate::ordered::OrderedMap;
use crate::types::{Holding, Ticker};

/// Every holding with its price and quantity, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Snapshot {
    holdings: OrderedMap<Ticker, Holding>,
}

impl Snapshot {
    /// Join the price and quantity maps into one snapshot.
    ///
    /// Both maps must list exactly the same tickers in exactly the same
    /// order. The first position where they differ is reported as
    /// [`RebalanceError::KeyMismatch`].
    pub fn from_maps(
        prices: &OrderedMap<Ticker, f64>,
        quantities: &OrderedMap<Ticker, f64>,
    ) -> Result<Self, RebalanceError> {
        let n = prices.len().max(quantities.len());
        let mut holdings = OrderedMap::new();

        for position in 0..n {
            match (prices.get_index(position), quantities.get_index(position)) {
                (Some((pt, &price)), Some((qt, &quantity))) if pt == qt => {
                    holdings
                        .try_insert(pt.clone(), Holding::new(price, quantity))
                        .map_err(|t| RebalanceError::DuplicateKey(t.to_string()))?;
                }
                (p, q) => {
                    return Err(RebalanceError::KeyMismatch {
                        position,
                        price: p.map(|(t, _)| t.clone()),
                        quantity: q.map(|(t, _)| t.clone()),
                    });
                }
            }
        }

        Ok(Self { holdings })
    }

    /// Build directly from `(ticker, holding)` pairs.
    pub fn from_holdings<I>(holdings: I) -> Result<Self, RebalanceError>
    where
        I: IntoIterator<Item = (Ticker, Holding)>,
    {
        Ok(Self {
            holdings: OrderedMap::from_pairs(holdings)?,
        })
    }

    pub fn holding(&self, ticker: &Ticker) -> Option<&Holding> {
        self.holdings.get(ticker)
    }

    /// Market value of one holding, if present.
    pub fn value(&self, ticker: &Ticker) -> Option<f64> {
        self.holding(ticker).map(Holding::value)
    }

    /// Sum of all holding values, in input order.
    pub fn market_value(&self) -> f64 {
        self.holdings.values().map(Holding::value).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ticker, &Holding)> {
        self.holdings.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
