use thiserror::Error;

use stocklens_core::ItemId;

/// Why an item was refused when a snapshot was accepted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidItemError {
    #[error("item {item_id}: name cannot be empty")]
    EmptyName { item_id: ItemId },

    #[error("item {item_id}: {field} must not be negative (got {value})")]
    Negative {
        item_id: ItemId,
        field: &'static str,
        value: f64,
    },

    #[error("item {item_id}: {field} must be a finite number")]
    NonFinite { item_id: ItemId, field: &'static str },

    #[error("item {item_id}: minThreshold {min} exceeds maxThreshold {max}")]
    ThresholdsInverted { item_id: ItemId, min: f64, max: f64 },

    #[error("item {item_id}: duplicate id in snapshot")]
    DuplicateId { item_id: ItemId },
}

impl InvalidItemError {
    pub fn item_id(&self) -> ItemId {
        match self {
            InvalidItemError::EmptyName { item_id }
            | InvalidItemError::Negative { item_id, .. }
            | InvalidItemError::NonFinite { item_id, .. }
            | InvalidItemError::ThresholdsInverted { item_id, .. }
            | InvalidItemError::DuplicateId { item_id } => *item_id,
        }
    }
}
