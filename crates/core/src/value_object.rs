//! Value object trait: equality by value, not identity.

/// Marker trait for derived values.
///
/// Everything the analytics layer computes (statuses, projections, impact
/// figures) is a value object: immutable, compared by value, and rebuilt from
/// the snapshot on every evaluation rather than updated in place.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Shortfall {
///     units: f64,
/// }
///
/// impl ValueObject for Shortfall {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
