//! # assetmix
//!
//! Computes the trades that move a portfolio toward target asset-class
//! proportions.
//!
//! Three inputs describe the portfolio: an [`Allocation`] (asset classes,
//! their target proportions and the tickers in each), and the current price
//! and quantity of every ticker, joined into a [`Snapshot`]. Together with an
//! extra cash contribution, [`compute`] reports per asset class the dollar
//! delta to its target and, per ticker, the number of shares that close it.
//!
//! ## Quick Start
//!
//! ```
//! use assetmix::{compute, Allocation, AssetClass, Holding, Snapshot, Ticker};
//!
//! let allocation = Allocation::from_classes([
//!     ("stocks", AssetClass::new(0.6, ["A"])),
//!     ("bonds", AssetClass::new(0.4, ["B"])),
//! ])
//! .unwrap();
//!
//! let snapshot = Snapshot::from_holdings([
//!     (Ticker::new("A"), Holding::new(10.0, 5.0)),  // $50
//!     (Ticker::new("B"), Holding::new(20.0, 5.0)),  // $100
//! ])
//! .unwrap();
//!
//! // About to deposit $50: total becomes $200
//! let plan = compute(&allocation, &snapshot, 50.0).unwrap();
//!
//! let stocks = &plan.classes[0];
//! assert!((stocks.dollars_delta - 70.0).abs() < 1e-9);          // 120 target - 50 held
//! assert!((stocks.trades[0].shares_to_buy - 7.0).abs() < 1e-9); // $70 / $10
//!
//! let bonds = &plan.classes[1];
//! assert!((bonds.trades[0].shares_to_buy + 1.0).abs() < 1e-9);  // sell one share
//! ```
//!
//! ## Ordering
//!
//! Output order follows input order: asset classes in allocation order,
//! trades in the order each class lists its funds. Inputs are kept in an
//! [`OrderedMap`] so that order survives parsing.
//!
//! ## Price and quantity consistency
//!
//! [`Snapshot::from_maps`] requires the price and quantity maps to list the
//! same tickers in the same order:
//!
//! ```
//! use assetmix::{OrderedMap, RebalanceError, Snapshot, Ticker};
//!
//! let prices = OrderedMap::from_pairs([(Ticker::new("A"), 10.0), (Ticker::new("B"), 20.0)]).unwrap();
//! let quantities = OrderedMap::from_pairs([(Ticker::new("B"), 5.0), (Ticker::new("A"), 5.0)]).unwrap();
//!
//! let err = Snapshot::from_maps(&prices, &quantities).unwrap_err();
//! assert!(matches!(err, RebalanceError::KeyMismatch { position: 0, .. }));
//! ```
//!
//! ## Features
//!
//! - `serde`: `Deserialize` for inputs (order-preserving) and `Serialize` for
//!   [`RebalancePlan`]

mod allocation;
mod error;
mod ordered;
pub mod rebalance;
mod snapshot;
mod types;

// Re-export public API
pub use allocation::{Allocation, AssetClass};
pub use error::RebalanceError;
pub use ordered::OrderedMap;
pub use rebalance::{AssetClassResult, RebalancePlan, ShareTrade, compute, compute_from_maps};
pub use snapshot::Snapshot;
pub use types::{Holding, Ticker};
