//! Portfolio struct and core methods.

use std::collections::HashMap;

use fingenius_traits::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{checked_add, PortfolioResult};
use crate::types::Holding;

/// An ordered collection of holdings.
///
/// Holdings may repeat a symbol. Each lot keeps its own cost basis while
/// price lookups and position weights use the merged symbol set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Holdings in caller order.
    #[serde(alias = "holdings")]
    pub items: Vec<Holding>,
}

impl Portfolio {
    /// Creates a portfolio from a list of holdings.
    #[must_use]
    pub fn new(items: Vec<Holding>) -> Self {
        Self { items }
    }

    /// Adds a holding (builder style).
    #[must_use]
    pub fn with_holding(mut self, holding: Holding) -> Self {
        self.items.push(holding);
        self
    }

    /// Returns the holdings in caller order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.items
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Unique symbols in first-seen order.
    #[must_use]
    pub fn unique_symbols(&self) -> Vec<Symbol> {
        let mut seen = Vec::with_capacity(self.items.len());
        for holding in &self.items {
            if !seen.contains(&holding.symbol) {
                seen.push(holding.symbol.clone());
            }
        }
        seen
    }

    /// Total quantity per symbol across all lots.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::CalculationFailed`](crate::PortfolioError)
    /// when a symbol's total quantity overflows `Decimal`.
    pub fn quantity_by_symbol(&self) -> PortfolioResult<HashMap<Symbol, Decimal>> {
        let mut totals: HashMap<Symbol, Decimal> = HashMap::new();
        for holding in &self.items {
            let total = totals.entry(holding.symbol.clone()).or_default();
            *total = checked_add(*total, holding.quantity, "total quantity")?;
        }
        Ok(totals)
    }

    /// Validates every holding, failing on the first invalid one.
    pub fn validate(&self) -> PortfolioResult<()> {
        self.items.iter().try_for_each(Holding::validate)
    }
}

impl FromIterator<Holding> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Holding>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn lot(symbol: &str, quantity: Decimal, price: Decimal) -> Holding {
        Holding::new(symbol, quantity, price).unwrap()
    }

    #[test]
    fn test_unique_symbols_first_seen_order() {
        let portfolio = Portfolio::default()
            .with_holding(lot("msft", dec!(1), dec!(300)))
            .with_holding(lot("AAPL", dec!(2), dec!(150)))
            .with_holding(lot("Msft", dec!(3), dec!(310)));

        let symbols: Vec<_> = portfolio
            .unique_symbols()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL"]);
        assert_eq!(portfolio.holding_count(), 3);
    }

    #[test]
    fn test_quantity_by_symbol_merges_lots() {
        let portfolio: Portfolio = vec![
            lot("AAPL", dec!(10), dec!(150)),
            lot("aapl", dec!(5), dec!(160)),
        ]
        .into_iter()
        .collect();

        let totals = portfolio.quantity_by_symbol().unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&Symbol::parse("AAPL").unwrap()], dec!(15));
    }

    #[test]
    fn test_quantity_by_symbol_overflow() {
        let portfolio = Portfolio::default()
            .with_holding(lot("AAPL", Decimal::MAX, dec!(1)))
            .with_holding(lot("AAPL", Decimal::MAX, dec!(1)));

        assert!(matches!(
            portfolio.quantity_by_symbol(),
            Err(crate::PortfolioError::CalculationFailed { .. })
        ));
    }

    #[test]
    fn test_deserialize_items_and_holdings_alias() {
        let a: Portfolio = serde_json::from_str(
            r#"{"items": [{"symbol": "aapl", "quantity": 10, "purchase_price": 150}]}"#,
        )
        .unwrap();
        let b: Portfolio = serde_json::from_str(
            r#"{"holdings": [{"symbol": "AAPL", "quantity": 10, "purchase_price": 150}]}"#,
        )
        .unwrap();
        assert_eq!(a, b);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_bad_lot() {
        let portfolio: Portfolio = serde_json::from_str(
            r#"{"items": [
                {"symbol": "AAPL", "quantity": 1, "purchase_price": 1},
                {"symbol": "TSLA", "quantity": 1, "purchase_price": -2}
            ]}"#,
        )
        .unwrap();
        let err = portfolio.validate().unwrap_err();
        assert!(err.to_string().contains("TSLA"));
    }
}
