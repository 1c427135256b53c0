//! Critical / overstock partitioning and impact figures.

use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, ValueObject};
use stocklens_inventory::InventoryItem;

use crate::config::AnalyticsConfig;
use crate::status::{StockStatus, classify};

/// Item at or below its minimum threshold, with the estimated margin loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalItem {
    pub item_id: ItemId,
    pub item_name: String,
    pub current_stock: f64,
    pub min_threshold: f64,
    pub reorder_point: f64,
    /// `min_threshold - current_stock`.
    pub shortfall: f64,
    pub potential_loss: f64,
}

impl ValueObject for CriticalItem {}

/// Item at or above its maximum threshold, with the cost of carrying the excess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverstockItem {
    pub item_id: ItemId,
    pub item_name: String,
    pub current_stock: f64,
    pub max_threshold: f64,
    pub excess_stock: f64,
    pub storage_waste: f64,
    pub capital_tied: f64,
}

impl ValueObject for OverstockItem {}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverstockImpact {
    pub excess_stock: f64,
    pub storage_waste: f64,
    pub capital_tied: f64,
}

impl ValueObject for OverstockImpact {}

/// Both alert collections for one snapshot, in input order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSet {
    pub critical: Vec<CriticalItem>,
    pub overstock: Vec<OverstockItem>,
}

impl AlertSet {
    pub fn total_potential_loss(&self) -> f64 {
        self.critical.iter().map(|c| c.potential_loss).sum()
    }

    pub fn total_storage_waste(&self) -> f64 {
        self.overstock.iter().map(|o| o.storage_waste).sum()
    }

    pub fn total_capital_tied(&self) -> f64 {
        self.overstock.iter().map(|o| o.capital_tied).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.overstock.is_empty()
    }
}

/// Status counts for a snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub stockout_risk: usize,
    pub overstock: usize,
    pub optimal: usize,
}

impl StatusBreakdown {
    pub fn total(&self) -> usize {
        self.stockout_risk + self.overstock + self.optimal
    }

    /// Share of optimal items as a rounded percentage; an empty snapshot
    /// counts as fully efficient (100).
    pub fn efficiency(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 100;
        }
        (100.0 * self.optimal as f64 / total as f64).round() as u8
    }
}

impl ValueObject for StatusBreakdown {}

/// Split items into (stockout-risk, overstock), dropping optimal ones.
pub fn partition(items: &[InventoryItem]) -> (Vec<&InventoryItem>, Vec<&InventoryItem>) {
    let mut critical = Vec::new();
    let mut overstock = Vec::new();
    for item in items {
        match classify(item) {
            StockStatus::StockoutRisk => critical.push(item),
            StockStatus::Overstock => overstock.push(item),
            StockStatus::Optimal => {}
        }
    }
    (critical, overstock)
}

/// `(min_threshold - current_stock) * cost_per_unit * loss_margin`.
pub fn potential_loss(item: &InventoryItem, loss_margin: f64) -> f64 {
    (item.min_threshold - item.current_stock) * item.cost_per_unit * loss_margin
}

pub fn overstock_impact(item: &InventoryItem) -> OverstockImpact {
    let excess_stock = item.current_stock - item.max_threshold;
    OverstockImpact {
        excess_stock,
        storage_waste: excess_stock * item.storage_per_unit,
        capital_tied: excess_stock * item.cost_per_unit,
    }
}

pub fn build_alert_set(items: &[InventoryItem], config: &AnalyticsConfig) -> AlertSet {
    let (critical, overstock) = partition(items);

    let critical = critical
        .into_iter()
        .map(|item| CriticalItem {
            item_id: item.id,
            item_name: item.name.clone(),
            current_stock: item.current_stock,
            min_threshold: item.min_threshold,
            reorder_point: item.reorder_point,
            shortfall: item.min_threshold - item.current_stock,
            potential_loss: potential_loss(item, config.loss_margin),
        })
        .collect();

    let overstock = overstock
        .into_iter()
        .map(|item| {
            let impact = overstock_impact(item);
            OverstockItem {
                item_id: item.id,
                item_name: item.name.clone(),
                current_stock: item.current_stock,
                max_threshold: item.max_threshold,
                excess_stock: impact.excess_stock,
                storage_waste: impact.storage_waste,
                capital_tied: impact.capital_tied,
            }
        })
        .collect();

    AlertSet {
        critical,
        overstock,
    }
}

pub fn breakdown(items: &[InventoryItem]) -> StatusBreakdown {
    items
        .iter()
        .fold(StatusBreakdown::default(), |mut acc, item| {
            match classify(item) {
                StockStatus::StockoutRisk => acc.stockout_risk += 1,
                StockStatus::Overstock => acc.overstock += 1,
                StockStatus::Optimal => acc.optimal += 1,
            }
            acc
        })
}

/// Percentage of items in the optimal band, rounded; 100 for an empty set.
pub fn stock_efficiency(items: &[InventoryItem]) -> u8 {
    breakdown(items).efficiency()
}
