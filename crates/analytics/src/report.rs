//! One-shot evaluation of a snapshot.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use stocklens_core::ItemId;
use stocklens_inventory::{InventoryItem, Snapshot, TrendPoint};

use crate::aggregate::{AlertSet, StatusBreakdown, breakdown, build_alert_set};
use crate::alerts::{AlertEvent, Recommendation, evaluate_and_alert, recommendations};
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::projection::{DepletionProjection, ProjectedStockout, project, project_all};
use crate::status::{StockStatus, classify};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStatus {
    pub item_id: ItemId,
    pub item_name: String,
    pub status: StockStatus,
}

/// Everything the presentation layer renders for one snapshot.
///
/// Per-item collections follow snapshot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub as_of: DateTime<Utc>,
    pub statuses: Vec<ItemStatus>,
    pub projections: Vec<DepletionProjection>,
    pub projected_stockouts: BTreeMap<ItemId, ProjectedStockout>,
    pub alerts: AlertSet,
    pub events: Vec<AlertEvent>,
    pub breakdown: StatusBreakdown,
    pub stock_efficiency: u8,
    pub recommendations: Vec<Recommendation>,
    /// Passed through from the snapshot untouched.
    pub trend: Vec<TrendPoint>,
}

/// Analytics engine: a validated config applied to snapshots.
///
/// Holds no state besides the config, so evaluating the same snapshot at the
/// same `as_of` always yields the same report.
#[derive(Debug, Clone)]
pub struct InventoryAnalytics {
    config: AnalyticsConfig,
}

impl InventoryAnalytics {
    pub fn new(config: AnalyticsConfig) -> Result<Self, AnalyticsError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    #[instrument(skip_all, fields(items = snapshot.len(), as_of = %as_of))]
    pub fn evaluate(&self, snapshot: &Snapshot, as_of: DateTime<Utc>) -> AnalyticsReport {
        let items = snapshot.items();

        let statuses = items
            .iter()
            .map(|item| ItemStatus {
                item_id: item.id,
                item_name: item.name.clone(),
                status: classify(item),
            })
            .collect();
        let projections = items.iter().map(|item| project(item, as_of)).collect();
        let projected_stockouts = project_all(items, as_of);

        let alerts = build_alert_set(items, &self.config);
        let events = evaluate_and_alert(items, as_of, self.config.alert_threshold_days);
        let breakdown = breakdown(items);
        let recommendations = recommendations(&alerts);

        debug!(
            critical = alerts.critical.len(),
            overstock = alerts.overstock.len(),
            events = events.len(),
            efficiency = breakdown.efficiency(),
            "snapshot evaluated"
        );

        AnalyticsReport {
            as_of,
            statuses,
            projections,
            projected_stockouts,
            stock_efficiency: breakdown.efficiency(),
            breakdown,
            alerts,
            events,
            recommendations,
            trend: snapshot.trend().to_vec(),
        }
    }

    /// Validate raw records and evaluate them in one step.
    pub fn evaluate_items(
        &self,
        items: Vec<InventoryItem>,
        as_of: DateTime<Utc>,
    ) -> Result<AnalyticsReport, AnalyticsError> {
        let snapshot = Snapshot::new(items)?;
        Ok(self.evaluate(&snapshot, as_of))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stocklens_inventory::InvalidItemError;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let err = InventoryAnalytics::new(AnalyticsConfig::default().with_loss_margin(2.0))
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidConfig(_)));
    }

    #[test]
    fn evaluate_items_surfaces_validation_error() {
        let engine = InventoryAnalytics::new(AnalyticsConfig::default()).unwrap();
        let bad = InventoryItem::new(ItemId::new(), "Bolts").with_thresholds(20.0, 10.0);

        let err = engine.evaluate_items(vec![bad], as_of()).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::InvalidSnapshot(InvalidItemError::ThresholdsInverted { .. })
        ));
    }

    #[test]
    fn empty_snapshot_has_defined_report() {
        let engine = InventoryAnalytics::new(AnalyticsConfig::default()).unwrap();
        let report = engine.evaluate_items(Vec::new(), as_of()).unwrap();

        assert!(report.statuses.is_empty());
        assert!(report.projected_stockouts.is_empty());
        assert!(report.alerts.is_empty());
        assert!(report.events.is_empty());
        assert_eq!(report.breakdown.total(), 0);
        assert_eq!(report.stock_efficiency, 100);
    }

    #[test]
    fn threshold_days_come_from_config() {
        let item = InventoryItem::new(ItemId::new(), "Bolts")
            .with_stock(30.0)
            .with_thresholds(5.0, 100.0)
            .with_daily_demand(2.0);

        let default_engine = InventoryAnalytics::new(AnalyticsConfig::default()).unwrap();
        let wide_engine =
            InventoryAnalytics::new(AnalyticsConfig::default().with_alert_threshold_days(15))
                .unwrap();

        let narrow = default_engine.evaluate_items(vec![item.clone()], as_of()).unwrap();
        let wide = wide_engine.evaluate_items(vec![item], as_of()).unwrap();

        assert!(narrow.events.is_empty());
        assert_eq!(wide.events.len(), 1);
        assert_eq!(wide.events[0].days_until_stockout, 15);
    }
}
