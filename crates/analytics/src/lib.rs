//! `stocklens-analytics`
//!
//! **Responsibility:** the inventory analytics core.
//!
//! Three stages run in sequence over a validated [`Snapshot`](stocklens_inventory::Snapshot):
//! - [`status`]: classify each item as stockout-risk, overstock or optimal.
//! - [`projection`]: run-rate depletion projection per item.
//! - [`aggregate`] / [`alerts`]: critical and overstock sets with impact
//!   figures, stockout alert events and recommendations.
//!
//! Everything here is synchronous and stateless. The evaluation timestamp is
//! always passed in; nothing reads the system clock.

pub mod aggregate;
pub mod alerts;
pub mod config;
pub mod error;
pub mod projection;
pub mod report;
pub mod status;

pub use aggregate::{
    AlertSet, CriticalItem, OverstockImpact, OverstockItem, StatusBreakdown, breakdown,
    build_alert_set, overstock_impact, partition, potential_loss, stock_efficiency,
};
pub use alerts::{AlertEvent, AlertSeverity, Recommendation, evaluate_and_alert, recommendations};
pub use config::AnalyticsConfig;
pub use error::AnalyticsError;
pub use projection::{DaysUntilStockout, DepletionProjection, ProjectedStockout, project, project_all};
pub use report::{AnalyticsReport, InventoryAnalytics, ItemStatus};
pub use status::{StockStatus, classify};
