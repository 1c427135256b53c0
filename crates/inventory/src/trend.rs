use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of the stock/demand trend series.
///
/// Trend points are handed to charting collaborators unmodified. `predicted`
/// comes from an upstream forecaster; nothing in this workspace computes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub stock: f64,
    pub demand: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted: Option<f64>,
}
