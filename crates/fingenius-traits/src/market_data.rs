//! Market data source traits.
//!
//! A [`PriceHistoryProvider`] supplies, for a set of symbols, the latest close
//! per symbol ([`PriceSnapshot`]) and a daily close series per symbol over a
//! trailing window ([`PriceHistory`]). Both are request-scoped values.
//!
//! A price of zero in a snapshot means "unavailable". Consumers propagate it
//! rather than treating it as an error.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;
use crate::ids::Symbol;

/// Source type for market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Remote request/response API (Yahoo, Alpha Vantage, ...)
    Remote,
    /// File-based (CSV, JSON)
    File,
    /// In-memory cache in front of another source
    Cached,
    /// Manual entry or fixed values
    Manual,
}

// =============================================================================
// VALUES
// =============================================================================

/// One daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyClose {
    /// Trading date
    pub date: NaiveDate,
    /// Closing price
    pub close: Decimal,
}

impl DailyClose {
    /// Create a new daily close.
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }
}

/// Latest price per symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    prices: HashMap<Symbol, Decimal>,
}

impl PriceSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latest price for a symbol.
    pub fn insert(&mut self, symbol: Symbol, price: Decimal) {
        self.prices.insert(symbol, price);
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_price(mut self, symbol: Symbol, price: Decimal) -> Self {
        self.insert(symbol, price);
        self
    }

    /// Latest price, or zero when the symbol is absent.
    pub fn price(&self, symbol: &Symbol) -> Decimal {
        self.prices.get(symbol).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the snapshot has a price entry for the symbol.
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.prices.contains_key(symbol)
    }

    /// Number of priced symbols.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no symbol is priced.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Decimal)> {
        self.prices.iter()
    }
}

impl FromIterator<(Symbol, Decimal)> for PriceSnapshot {
    fn from_iter<T: IntoIterator<Item = (Symbol, Decimal)>>(iter: T) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

/// Daily close series per symbol, chronological.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    series: HashMap<Symbol, Vec<DailyClose>>,
}

impl PriceHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the series for a symbol. Points are sorted by date.
    pub fn insert(&mut self, symbol: Symbol, mut closes: Vec<DailyClose>) {
        closes.sort_by_key(|c| c.date);
        self.series.insert(symbol, closes);
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_series(mut self, symbol: Symbol, closes: Vec<DailyClose>) -> Self {
        self.insert(symbol, closes);
        self
    }

    /// Series for a symbol; empty when absent.
    pub fn series(&self, symbol: &Symbol) -> &[DailyClose] {
        self.series.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Last available close for a symbol.
    pub fn last_close(&self, symbol: &Symbol) -> Option<Decimal> {
        self.series(symbol).last().map(|c| c.close)
    }

    /// Returns true if no symbol has any data.
    pub fn is_empty(&self) -> bool {
        self.series.values().all(Vec::is_empty)
    }

    /// Iterate over all series.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Vec<DailyClose>)> {
        self.series.iter()
    }
}

/// Snapshot plus history, as returned by one provider call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// Latest close per symbol
    pub snapshot: PriceSnapshot,
    /// Daily closes per symbol
    pub history: PriceHistory,
}

impl MarketData {
    /// Empty market data, used as the fallback on provider failure.
    pub fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Trait for price history providers.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Fetch latest prices and daily history for the given symbols.
    ///
    /// Symbols the provider has no data for are simply absent from the
    /// result. Transport failures are reported as `Err`.
    async fn fetch(&self, symbols: &[Symbol]) -> Result<MarketData, TraitError>;
}

#[async_trait]
impl<T: PriceHistoryProvider + ?Sized> PriceHistoryProvider for Arc<T> {
    fn source_type(&self) -> SourceType {
        (**self).source_type()
    }

    async fn fetch(&self, symbols: &[Symbol]) -> Result<MarketData, TraitError> {
        (**self).fetch(symbols).await
    }
}
