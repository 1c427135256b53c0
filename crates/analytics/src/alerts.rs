//! Stockout alert events and remediation recommendations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use stocklens_core::{ItemId, ValueObject};
use stocklens_inventory::InventoryItem;

use crate::aggregate::AlertSet;
use crate::projection::{DaysUntilStockout, project};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Critical,
}

/// Trigger for the external notifier. Carries no state between evaluations;
/// de-duplication is the notifier's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    pub item_id: ItemId,
    pub item_name: String,
    pub days_until_stockout: u64,
    pub severity: AlertSeverity,
}

impl ValueObject for AlertEvent {}

/// Emit one critical event per item with a projected stockout date within
/// `threshold_days` (inclusive).
///
/// Events follow input order. Callers that want the most urgent first sort
/// on `days_until_stockout` themselves.
pub fn evaluate_and_alert(
    items: &[InventoryItem],
    as_of: DateTime<Utc>,
    threshold_days: u64,
) -> Vec<AlertEvent> {
    let mut events = Vec::new();

    for item in items {
        let p = project(item, as_of);
        let (DaysUntilStockout::Days(days), Some(_)) =
            (p.days_until_stockout, p.projected_stockout_date)
        else {
            continue;
        };
        if days > threshold_days {
            continue;
        }

        warn!(
            item_id = %item.id,
            item = %item.name,
            days_until_stockout = days,
            "projected stockout within alert window"
        );

        events.push(AlertEvent {
            item_id: item.id,
            item_name: item.name.clone(),
            days_until_stockout: days,
            severity: AlertSeverity::Critical,
        });
    }

    events
}

/// Suggested remediation for an out-of-band item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Recommendation {
    #[serde(rename_all = "camelCase")]
    Reorder {
        item_id: ItemId,
        item_name: String,
        reorder_point: f64,
        shortfall: f64,
    },
    #[serde(rename_all = "camelCase")]
    ReduceStock {
        item_id: ItemId,
        item_name: String,
        excess_stock: f64,
    },
}

impl Recommendation {
    pub fn item_id(&self) -> ItemId {
        match self {
            Recommendation::Reorder { item_id, .. } | Recommendation::ReduceStock { item_id, .. } => {
                *item_id
            }
        }
    }
}

impl ValueObject for Recommendation {}

/// Reorders for critical items first, then stock reductions for overstock.
pub fn recommendations(alerts: &AlertSet) -> Vec<Recommendation> {
    let reorders = alerts.critical.iter().map(|c| Recommendation::Reorder {
        item_id: c.item_id,
        item_name: c.item_name.clone(),
        reorder_point: c.reorder_point,
        shortfall: c.shortfall,
    });

    let reductions = alerts.overstock.iter().map(|o| Recommendation::ReduceStock {
        item_id: o.item_id,
        item_name: o.item_name.clone(),
        excess_stock: o.excess_stock,
    });

    reorders.chain(reductions).collect()
}
