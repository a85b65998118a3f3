//! Target allocation: asset classes with their proportions and holdings.

use crate::error::RebalanceError;
use crate::ordered::OrderedMap;
use crate::types::Ticker;

/// A named grouping of holdings with a target share of total portfolio value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetClass {
    /// Target fraction of total value, in `[0, 1]`
    pub proportion: f64,
    /// Holdings belonging to this class, in report order
    pub funds: Vec<Ticker>,
}

impl AssetClass {
    pub fn new<I, T>(proportion: f64, funds: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Ticker>,
    {
        Self {
            proportion,
            funds: funds.into_iter().map(Into::into).collect(),
        }
    }
}

/// Asset classes keyed by name, in input order.
///
/// Proportions are expected to sum to 1.0 and every fund to exist in the
/// snapshot; neither is enforced here.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Allocation {
    classes: OrderedMap<String, AssetClass>,
}

impl Allocation {
    /// Build from `(name, class)` pairs; a repeated name is an error.
    pub fn from_classes<I, S>(classes: I) -> Result<Self, RebalanceError>
    where
        I: IntoIterator<Item = (S, AssetClass)>,
        S: Into<String>,
    {
        let classes = OrderedMap::from_pairs(classes.into_iter().map(|(n, c)| (n.into(), c)))?;
        Ok(Self { classes })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&AssetClass> {
        self.classes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetClass)> {
        self.classes.iter().map(|(name, class)| (name.as_str(), class))
    }

    /// Sum of all target proportions (1.0 for a well-formed allocation).
    pub fn proportion_sum(&self) -> f64 {
        self.classes.values().map(|c| c.proportion).sum()
    }
}
