//! Sector-based portfolio bucketing.
//!
//! Provides the distribution of current value across sector labels.

use std::collections::BTreeMap;

use fingenius_traits::UNKNOWN_SECTOR;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{checked_add, PortfolioResult};
use crate::types::HoldingDetail;

/// Sector label → percent of total current value (0-100).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorBreakdown(BTreeMap<String, f64>);

impl SectorBreakdown {
    /// Creates an empty breakdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of one sector, if present.
    #[must_use]
    pub fn get(&self, sector: &str) -> Option<f64> {
        self.0.get(sector).copied()
    }

    /// Number of sectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no sectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates sectors in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all weights (100 when the portfolio has value).
    #[must_use]
    pub fn total_percent(&self) -> f64 {
        self.0.values().sum()
    }

    /// Sectors sorted by weight descending, ties by label.
    #[must_use]
    pub fn sorted_by_weight(&self) -> Vec<(&str, f64)> {
        let mut result: Vec<_> = self.iter().collect();
        result.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        result
    }

    /// Sectors whose weight is strictly above `threshold_pct`, heaviest first.
    #[must_use]
    pub fn concentrated(&self, threshold_pct: f64) -> Vec<(&str, f64)> {
        self.sorted_by_weight()
            .into_iter()
            .filter(|(_, w)| *w > threshold_pct)
            .collect()
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.0
    }
}

impl From<BTreeMap<String, f64>> for SectorBreakdown {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Self(map)
    }
}

/// Buckets holding details by sector label.
///
/// Blank labels fall into `"Unknown"`. When total value is zero every
/// sector present gets `0.0`. No holdings yields an empty breakdown.
///
/// # Errors
///
/// Returns [`PortfolioError::CalculationFailed`](crate::PortfolioError) when
/// a sector total overflows `Decimal`.
pub fn bucket_by_sector(details: &[HoldingDetail]) -> PortfolioResult<SectorBreakdown> {
    let mut values: BTreeMap<String, Decimal> = BTreeMap::new();
    for detail in details {
        let label = detail.sector.trim();
        let label = if label.is_empty() { UNKNOWN_SECTOR } else { label };
        let entry = values.entry(label.to_string()).or_default();
        *entry = checked_add(*entry, detail.current_value, "sector value")?;
    }

    let total = values
        .values()
        .try_fold(Decimal::ZERO, |sum, v| checked_add(sum, *v, "portfolio value"))?;
    let weights = values
        .into_iter()
        .map(|(sector, value)| {
            let pct = if total > Decimal::ZERO {
                (value / total * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
            } else {
                0.0
            };
            (sector, pct)
        })
        .collect();

    Ok(SectorBreakdown(weights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PortfolioError;
    use approx::assert_relative_eq;
    use fingenius_traits::Symbol;
    use rust_decimal_macros::dec;

    fn detail(symbol: &str, sector: &str, value: Decimal) -> HoldingDetail {
        HoldingDetail {
            symbol: Symbol::parse(symbol).unwrap(),
            quantity: dec!(1),
            purchase_price: value,
            current_price: value,
            invested_amount: value,
            current_value: value,
            profit_loss: Decimal::ZERO,
            roi_percent: 0.0,
            sector: sector.to_string(),
            valuation_multiple: None,
            recommendation: String::new(),
        }
    }

    #[test]
    fn test_bucket_by_sector() {
        let details = vec![
            detail("AAPL", "Technology", dec!(600)),
            detail("MSFT", "Technology", dec!(150)),
            detail("JPM", "Financial Services", dec!(250)),
        ];
        let breakdown = bucket_by_sector(&details).unwrap();

        assert_eq!(breakdown.len(), 2);
        assert_relative_eq!(breakdown.get("Technology").unwrap(), 75.0);
        assert_relative_eq!(breakdown.get("Financial Services").unwrap(), 25.0);
        assert_relative_eq!(breakdown.total_percent(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_blank_sector_is_unknown() {
        let breakdown = bucket_by_sector(&[detail("X", "  ", dec!(10)), detail("Y", "", dec!(10))]).unwrap();
        assert_eq!(breakdown.iter().collect::<Vec<_>>(), vec![("Unknown", 100.0)]);
    }

    #[test]
    fn test_zero_total_and_empty() {
        let breakdown =
            bucket_by_sector(&[detail("A", "Energy", dec!(0)), detail("B", "Utilities", dec!(0))]).unwrap();
        assert_eq!(breakdown.get("Energy"), Some(0.0));
        assert_eq!(breakdown.get("Utilities"), Some(0.0));

        assert!(bucket_by_sector(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_overflowing_totals_are_errors() {
        let same_sector = [
            detail("A", "Energy", Decimal::MAX),
            detail("B", "Energy", Decimal::MAX),
        ];
        assert!(matches!(
            bucket_by_sector(&same_sector),
            Err(PortfolioError::CalculationFailed { .. })
        ));

        let across_sectors = [
            detail("A", "Energy", Decimal::MAX),
            detail("B", "Utilities", Decimal::MAX),
        ];
        let err = bucket_by_sector(&across_sectors).unwrap_err();
        assert!(err.to_string().contains("portfolio value"));
    }

    #[test]
    fn test_concentrated_is_strict_and_ordered() {
        let breakdown = SectorBreakdown::from(BTreeMap::from([
            ("A".to_string(), 50.0),
            ("B".to_string(), 30.0),
            ("C".to_string(), 20.0),
        ]));
        assert!(breakdown.concentrated(50.0).is_empty());
        assert_eq!(breakdown.concentrated(25.0), vec![("A", 50.0), ("B", 30.0)]);
        assert_eq!(breakdown.sorted_by_weight()[2], ("C", 20.0));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let breakdown = SectorBreakdown::from(BTreeMap::from([("Technology".to_string(), 100.0)]));
        assert_eq!(serde_json::to_string(&breakdown).unwrap(), r#"{"Technology":100.0}"#);
    }
}
