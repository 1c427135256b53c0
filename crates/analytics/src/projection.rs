//! Run-rate depletion projection.
//!
//! Remaining days are `floor(current_stock / daily_demand)`: whole days of
//! cover, never rounded up. Items without demand never deplete.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, Utc};
use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, ValueObject};
use stocklens_inventory::InventoryItem;

/// Whole days of cover left at the current demand rate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaysUntilStockout {
    Days(u64),
    /// No measurable demand.
    Unbounded,
}

impl DaysUntilStockout {
    pub fn days(&self) -> Option<u64> {
        match self {
            DaysUntilStockout::Days(d) => Some(*d),
            DaysUntilStockout::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, DaysUntilStockout::Unbounded)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepletionProjection {
    pub item_id: ItemId,
    pub days_until_stockout: DaysUntilStockout,
    /// `None` when demand is zero, or when the date falls outside the
    /// representable calendar.
    pub projected_stockout_date: Option<DateTime<Utc>>,
}

impl ValueObject for DepletionProjection {}

/// Entry of the per-item projected stockout map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedStockout {
    pub item_name: String,
    pub date: DateTime<Utc>,
}

impl ValueObject for ProjectedStockout {}

pub fn project(item: &InventoryItem, as_of: DateTime<Utc>) -> DepletionProjection {
    if item.daily_demand <= 0.0 {
        return DepletionProjection {
            item_id: item.id,
            days_until_stockout: DaysUntilStockout::Unbounded,
            projected_stockout_date: None,
        };
    }

    // Float-to-int `as` saturates, so absurd ratios clamp to u64::MAX.
    let days = (item.current_stock / item.daily_demand).floor() as u64;

    DepletionProjection {
        item_id: item.id,
        days_until_stockout: DaysUntilStockout::Days(days),
        projected_stockout_date: as_of.checked_add_days(Days::new(days)),
    }
}

/// Projected stockout dates for every item that has demand, keyed by id.
///
/// Items without demand are left out of the map.
pub fn project_all(
    items: &[InventoryItem],
    as_of: DateTime<Utc>,
) -> BTreeMap<ItemId, ProjectedStockout> {
    items
        .iter()
        .filter_map(|item| {
            let date = project(item, as_of).projected_stockout_date?;
            Some((
                item.id,
                ProjectedStockout {
                    item_name: item.name.clone(),
                    date,
                },
            ))
        })
        .collect()
}
