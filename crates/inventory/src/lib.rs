//! Inventory snapshot model.
//!
//! This crate holds the records the analytics core consumes: items, the
//! pass-through trend series, and the validated [`Snapshot`] that bundles
//! them. It is pure data plus boundary validation (no IO, no storage).

pub mod error;
pub mod item;
pub mod snapshot;
pub mod trend;

pub use error::InvalidItemError;
pub use item::InventoryItem;
pub use snapshot::Snapshot;
pub use trend::TrendPoint;
