use thiserror::Error;

use stocklens_inventory::InvalidItemError;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid analytics config: {0}")]
    InvalidConfig(String),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] InvalidItemError),
}
