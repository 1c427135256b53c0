//! Analytics tuning knobs.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AnalyticsError;

pub const LOSS_MARGIN_ENV: &str = "STOCKLENS_LOSS_MARGIN";
pub const ALERT_THRESHOLD_DAYS_ENV: &str = "STOCKLENS_ALERT_THRESHOLD_DAYS";

/// Policy parameters for the aggregator and alerting stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    /// Share of the shortfall value counted as lost margin (0.3 = 30%).
    pub loss_margin: f64,
    /// Items projected to run out within this many days raise an alert.
    pub alert_threshold_days: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            loss_margin: 0.3,
            alert_threshold_days: 7,
        }
    }
}

impl AnalyticsConfig {
    pub fn with_loss_margin(mut self, loss_margin: f64) -> Self {
        self.loss_margin = loss_margin;
        self
    }

    pub fn with_alert_threshold_days(mut self, days: u64) -> Self {
        self.alert_threshold_days = days;
        self
    }

    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if !(self.loss_margin.is_finite() && (0.0..=1.0).contains(&self.loss_margin)) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "loss_margin must be a finite number in [0, 1] (got {})",
                self.loss_margin
            )));
        }
        Ok(())
    }

    /// Build from `STOCKLENS_*` environment variables, defaulting anything
    /// missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let loss_margin = parse_or(&lookup, LOSS_MARGIN_ENV, defaults.loss_margin);
        let alert_threshold_days =
            parse_or(&lookup, ALERT_THRESHOLD_DAYS_ENV, defaults.alert_threshold_days);

        Self {
            loss_margin,
            alert_threshold_days,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: core::str::FromStr + core::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "unparsable setting; using default");
            default
        }),
    }
}
