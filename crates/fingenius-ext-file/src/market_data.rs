//! File-based price history sources.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

use fingenius_traits::{DailyClose, MarketData, PriceHistoryProvider, SourceType, Symbol, TraitError};

// =============================================================================
// CSV PRICE HISTORY SOURCE
// =============================================================================

/// CSV record for daily closes.
#[derive(Debug, Deserialize)]
struct CloseRecord {
    date: NaiveDate,
    symbol: String,
    close: String,
}

/// CSV-based daily close source.
///
/// Expects a header row `date,symbol,close` with ISO dates. Only closes
/// within `window_days` calendar days of the latest date in the file are
/// kept. The latest price of a symbol is its last close by date.
pub struct CsvPriceHistorySource {
    file_path: PathBuf,
    window_days: u32,
    series: DashMap<Symbol, Vec<DailyClose>>,
}

impl CsvPriceHistorySource {
    /// Create a new CSV price source.
    pub fn new(file_path: impl AsRef<Path>, window_days: u32) -> Result<Self, TraitError> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            window_days,
            series: DashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload closes from file.
    pub fn reload(&self) -> Result<(), TraitError> {
        self.series.clear();
        if !self.file_path.exists() {
            return Ok(()); // Empty source
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.file_path)
            .map_err(|e| TraitError::IoError(e.to_string()))?;

        let mut rows: Vec<(Symbol, DailyClose)> = Vec::new();
        for result in reader.deserialize() {
            let record: CloseRecord = result.map_err(|e| TraitError::ParseError(e.to_string()))?;
            let symbol = Symbol::parse(&record.symbol)?;
            let close = Decimal::from_str(&record.close).map_err(|e| {
                TraitError::ParseError(format!("close for {symbol} on {}: {e}", record.date))
            })?;
            if close.is_sign_negative() {
                return Err(TraitError::ParseError(format!(
                    "negative close for {symbol} on {}",
                    record.date
                )));
            }
            rows.push((symbol, DailyClose::new(record.date, close)));
        }

        let Some(latest) = rows.iter().map(|(_, p)| p.date).max() else {
            return Ok(());
        };
        let cutoff = latest - Duration::days(i64::from(self.window_days));

        let mut kept = 0usize;
        for (symbol, point) in rows.into_iter().filter(|(_, p)| p.date >= cutoff) {
            self.series.entry(symbol).or_default().push(point);
            kept += 1;
        }
        for mut entry in self.series.iter_mut() {
            entry.value_mut().sort_by_key(|p| p.date);
        }

        info!(
            path = %self.file_path.display(),
            symbols = self.series.len(),
            closes = kept,
            "Loaded price history"
        );
        Ok(())
    }

    /// Number of symbols with data.
    pub fn symbol_count(&self) -> usize {
        self.series.len()
    }
}

#[async_trait]
impl PriceHistoryProvider for CsvPriceHistorySource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    async fn fetch(&self, symbols: &[Symbol]) -> Result<MarketData, TraitError> {
        let mut market = MarketData::empty();
        for symbol in symbols {
            let Some(series) = self.series.get(symbol) else {
                debug!(symbol = %symbol, "No closes on file");
                continue;
            };
            if let Some(last) = series.last() {
                market.snapshot.insert(symbol.clone(), last.close);
            }
            market.history.insert(symbol.clone(), series.value().clone());
        }
        Ok(market)
    }
}

// =============================================================================
// EMPTY SOURCE
// =============================================================================

/// Price source with no data. Every holding values at zero.
pub struct EmptyPriceHistorySource;

#[async_trait]
impl PriceHistoryProvider for EmptyPriceHistorySource {
    fn source_type(&self) -> SourceType {
        SourceType::Manual
    }

    async fn fetch(&self, _symbols: &[Symbol]) -> Result<MarketData, TraitError> {
        Ok(MarketData::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn sym(s: &str) -> Symbol {
        Symbol::parse(s).unwrap()
    }

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const PRICES: &str = "\
date,symbol,close
2024-05-03,AAPL,171.50
2024-05-01,aapl,169.00
2024-05-02,AAPL,170.25
2024-05-02,MSFT,402.10
2024-05-03,MSFT,406.66
2024-03-01,AAPL,150.00
";

    #[tokio::test]
    async fn test_csv_prices_sorted_and_windowed() {
        let file = write_csv(PRICES);
        let source = CsvPriceHistorySource::new(file.path(), 30).unwrap();

        let market = source.fetch(&[sym("AAPL"), sym("MSFT"), sym("TSLA")]).await.unwrap();

        assert_eq!(market.snapshot.price(&sym("AAPL")), dec!(171.50));
        assert_eq!(market.snapshot.price(&sym("MSFT")), dec!(406.66));
        assert!(!market.snapshot.contains(&sym("TSLA")));

        let aapl = market.history.series(&sym("AAPL"));
        assert_eq!(aapl.len(), 3, "March close falls outside the window");
        assert!(aapl.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(source.source_type(), SourceType::File);
        assert_eq!(source.symbol_count(), 2);
    }

    #[tokio::test]
    async fn test_wide_window_keeps_everything() {
        let file = write_csv(PRICES);
        let source = CsvPriceHistorySource::new(file.path(), 365).unwrap();
        let market = source.fetch(&[sym("AAPL")]).await.unwrap();
        assert_eq!(market.history.series(&sym("AAPL")).len(), 4);
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let source = CsvPriceHistorySource::new("/no/such/prices.csv", 30).unwrap();
        let market = source.fetch(&[sym("AAPL")]).await.unwrap();
        assert!(market.snapshot.is_empty());
        assert!(market.history.is_empty());
    }

    #[test]
    fn test_bad_rows_are_parse_errors() {
        let file = write_csv("date,symbol,close\n2024-05-01,AAPL,abc\n");
        assert!(matches!(
            CsvPriceHistorySource::new(file.path(), 30),
            Err(TraitError::ParseError(_))
        ));

        let file = write_csv("date,symbol,close\n2024-05-01,AAPL,-1\n");
        assert!(CsvPriceHistorySource::new(file.path(), 30).is_err());

        let file = write_csv("date,symbol,close\nnot-a-date,AAPL,1\n");
        assert!(CsvPriceHistorySource::new(file.path(), 30).is_err());
    }

    #[tokio::test]
    async fn test_empty_source() {
        let market = EmptyPriceHistorySource.fetch(&[sym("AAPL")]).await.unwrap();
        assert_eq!(market, MarketData::empty());
    }
}
