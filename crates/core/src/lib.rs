//! `stocklens-core` — shared building blocks.
//!
//! This crate contains **pure** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::DomainError;
pub use id::ItemId;
pub use value_object::ValueObject;
