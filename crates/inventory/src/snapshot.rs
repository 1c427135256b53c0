use std::collections::HashSet;

use stocklens_core::ItemId;

use crate::error::InvalidItemError;
use crate::item::InventoryItem;
use crate::trend::TrendPoint;

/// A complete, immutable set of inventory records at one point in time.
///
/// The only way to build one is [`Snapshot::new`], which validates every
/// item. Downstream analytics can therefore assume:
/// - every quantity is finite and non-negative,
/// - `min_threshold <= max_threshold`,
/// - names are non-empty,
/// - ids are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    items: Vec<InventoryItem>,
    trend: Vec<TrendPoint>,
}

impl Snapshot {
    /// Accept a set of items, rejecting the first one that is malformed.
    pub fn new(items: Vec<InventoryItem>) -> Result<Self, InvalidItemError> {
        let mut seen: HashSet<ItemId> = HashSet::with_capacity(items.len());
        for item in &items {
            validate_item(item)?;
            if !seen.insert(item.id) {
                return Err(InvalidItemError::DuplicateId { item_id: item.id });
            }
        }

        tracing::debug!(items = items.len(), "snapshot accepted");

        Ok(Self {
            items,
            trend: Vec::new(),
        })
    }

    /// Attach the trend series shown next to the snapshot. Not validated.
    pub fn with_trend(mut self, trend: Vec<TrendPoint>) -> Self {
        self.trend = trend;
        self
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn trend(&self) -> &[TrendPoint] {
        &self.trend
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_item(item: &InventoryItem) -> Result<(), InvalidItemError> {
    if item.name.trim().is_empty() {
        return Err(InvalidItemError::EmptyName { item_id: item.id });
    }

    for (field, value) in item.quantities() {
        if !value.is_finite() {
            return Err(InvalidItemError::NonFinite {
                item_id: item.id,
                field,
            });
        }
        if value < 0.0 {
            return Err(InvalidItemError::Negative {
                item_id: item.id,
                field,
                value,
            });
        }
    }

    if item.min_threshold > item.max_threshold {
        return Err(InvalidItemError::ThresholdsInverted {
            item_id: item.id,
            min: item.min_threshold,
            max: item.max_threshold,
        });
    }

    Ok(())
}
