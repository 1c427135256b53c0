//! Stock status classifier.

use serde::{Deserialize, Serialize};

use stocklens_core::ValueObject;
use stocklens_inventory::InventoryItem;

/// Stock health of a single item. Derived on demand, never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    StockoutRisk,
    Overstock,
    Optimal,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::StockoutRisk => "stockout_risk",
            StockStatus::Overstock => "overstock",
            StockStatus::Optimal => "optimal",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueObject for StockStatus {}

/// Classify an item against its thresholds.
///
/// The low-side check runs first, so an item sitting exactly on a collapsed
/// band (`min == max == current`) is a stockout risk.
pub fn classify(item: &InventoryItem) -> StockStatus {
    if item.current_stock <= item.min_threshold {
        StockStatus::StockoutRisk
    } else if item.current_stock >= item.max_threshold {
        StockStatus::Overstock
    } else {
        StockStatus::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stocklens_core::ItemId;

    fn item(stock: f64, min: f64, max: f64) -> InventoryItem {
        InventoryItem::new(ItemId::new(), "Item")
            .with_stock(stock)
            .with_thresholds(min, max)
    }

    #[test]
    fn below_min_is_stockout_risk() {
        assert_eq!(classify(&item(5.0, 10.0, 50.0)), StockStatus::StockoutRisk);
    }

    #[test]
    fn at_min_is_stockout_risk() {
        assert_eq!(classify(&item(10.0, 10.0, 50.0)), StockStatus::StockoutRisk);
    }

    #[test]
    fn at_max_is_overstock() {
        assert_eq!(classify(&item(50.0, 10.0, 50.0)), StockStatus::Overstock);
        assert_eq!(classify(&item(80.0, 10.0, 50.0)), StockStatus::Overstock);
    }

    #[test]
    fn inside_band_is_optimal() {
        assert_eq!(classify(&item(30.0, 10.0, 50.0)), StockStatus::Optimal);
    }

    #[test]
    fn collapsed_band_favors_risk() {
        assert_eq!(classify(&item(10.0, 10.0, 10.0)), StockStatus::StockoutRisk);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(StockStatus::StockoutRisk.to_string(), "stockout_risk");
        assert_eq!(
            serde_json::to_string(&StockStatus::Overstock).unwrap(),
            "\"overstock\""
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: exactly one status predicate holds, following the
        /// risk-first precedence.
        #[test]
        fn statuses_are_exclusive_and_exhaustive(
            stock in 0.0f64..1_000.0,
            min in 0.0f64..500.0,
            spread in 0.0f64..500.0,
        ) {
            let it = item(stock, min, min + spread);
            let status = classify(&it);

            let risk = stock <= min;
            let over = !risk && stock >= min + spread;
            let optimal = !risk && !over;

            let matches = [
                (risk, StockStatus::StockoutRisk),
                (over, StockStatus::Overstock),
                (optimal, StockStatus::Optimal),
            ];
            prop_assert_eq!(matches.iter().filter(|(holds, _)| *holds).count(), 1);
            for (holds, expected) in matches {
                prop_assert_eq!(holds, status == expected);
            }
        }

        /// Property: classification is a pure function of the item.
        #[test]
        fn classify_is_deterministic(
            stock in 0.0f64..1_000.0,
            min in 0.0f64..500.0,
            spread in 0.0f64..500.0,
        ) {
            let it = item(stock, min, min + spread);
            let before = it.clone();
            prop_assert_eq!(classify(&it), classify(&it));
            prop_assert_eq!(it, before);
        }
    }
}
