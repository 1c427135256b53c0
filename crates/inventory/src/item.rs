use serde::{Deserialize, Serialize};

use stocklens_core::ItemId;

/// Inventory item record as supplied by the host application.
///
/// Quantities are plain `f64` so fractional demand rates and per-unit costs
/// survive untouched. Records are only checked when they enter a
/// [`Snapshot`](crate::Snapshot); the analytics functions assume that check
/// has already happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    /// Display label. Not unique.
    pub name: String,
    pub current_stock: f64,
    pub min_threshold: f64,
    pub max_threshold: f64,
    /// Units consumed per day; `0` means no measurable demand.
    pub daily_demand: f64,
    /// Informational; surfaced in recommendations only.
    pub reorder_point: f64,
    pub storage_per_unit: f64,
    pub cost_per_unit: f64,
}

impl InventoryItem {
    /// Create an item with every quantity set to zero.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            current_stock: 0.0,
            min_threshold: 0.0,
            max_threshold: 0.0,
            daily_demand: 0.0,
            reorder_point: 0.0,
            storage_per_unit: 0.0,
            cost_per_unit: 0.0,
        }
    }

    pub fn with_stock(mut self, current_stock: f64) -> Self {
        self.current_stock = current_stock;
        self
    }

    pub fn with_thresholds(mut self, min_threshold: f64, max_threshold: f64) -> Self {
        self.min_threshold = min_threshold;
        self.max_threshold = max_threshold;
        self
    }

    pub fn with_daily_demand(mut self, daily_demand: f64) -> Self {
        self.daily_demand = daily_demand;
        self
    }

    pub fn with_reorder_point(mut self, reorder_point: f64) -> Self {
        self.reorder_point = reorder_point;
        self
    }

    pub fn with_costs(mut self, storage_per_unit: f64, cost_per_unit: f64) -> Self {
        self.storage_per_unit = storage_per_unit;
        self.cost_per_unit = cost_per_unit;
        self
    }

    /// Quantity fields paired with their wire names, in declaration order.
    pub(crate) fn quantities(&self) -> [(&'static str, f64); 7] {
        [
            ("currentStock", self.current_stock),
            ("minThreshold", self.min_threshold),
            ("maxThreshold", self.max_threshold),
            ("dailyDemand", self.daily_demand),
            ("reorderPoint", self.reorder_point),
            ("storagePerUnit", self.storage_per_unit),
            ("costPerUnit", self.cost_per_unit),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let id = ItemId::new();
        let json = format!(
            r#"{{
                "id": "{id}",
                "name": "Widget",
                "currentStock": 5,
                "minThreshold": 10,
                "maxThreshold": 50,
                "dailyDemand": 2,
                "reorderPoint": 15,
                "storagePerUnit": 0.5,
                "costPerUnit": 20
            }}"#
        );

        let item: InventoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(
            item,
            InventoryItem::new(id, "Widget")
                .with_stock(5.0)
                .with_thresholds(10.0, 50.0)
                .with_daily_demand(2.0)
                .with_reorder_point(15.0)
                .with_costs(0.5, 20.0)
        );
    }
}
