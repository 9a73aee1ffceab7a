//! In-memory caching in front of a price history provider.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use fingenius_traits::{MarketData, PriceHistoryProvider, SourceType, Symbol, TraitError};

/// Cache key for a symbol set: upper-cased, de-duplicated, sorted, joined
/// with `,`.
pub fn cache_key(symbols: &[Symbol]) -> String {
    let mut keys: Vec<String> = symbols.iter().map(|s| s.as_str().to_uppercase()).collect();
    keys.sort();
    keys.dedup();
    keys.join(",")
}

struct CachedMarketData {
    data: MarketData,
    fetched_at: Instant,
}

/// Price provider decorator with TTL-based staleness.
///
/// Only successful responses are cached.
pub struct CachedPriceHistoryProvider<P> {
    inner: P,
    entries: DashMap<String, CachedMarketData>,
    ttl: Duration,
}

impl<P: PriceHistoryProvider> CachedPriceHistoryProvider<P> {
    /// Wrap a provider with the given TTL.
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Wrap a provider with a TTL in minutes.
    pub fn with_ttl_minutes(inner: P, minutes: u64) -> Self {
        Self::new(inner, Duration::from_secs(minutes.saturating_mul(60)))
    }

    /// Fresh cached data for the symbol set, if any.
    pub fn get(&self, symbols: &[Symbol]) -> Option<MarketData> {
        self.entries
            .get(&cache_key(symbols))
            .filter(|c| c.fetched_at.elapsed() <= self.ttl)
            .map(|c| c.data.clone())
    }

    /// Check if the entry for a symbol set is missing or stale.
    pub fn is_stale(&self, symbols: &[Symbol]) -> bool {
        self.entries
            .get(&cache_key(symbols))
            .map(|c| c.fetched_at.elapsed() > self.ttl)
            .unwrap_or(true)
    }

    /// Remove stale entries.
    pub fn cleanup_stale(&self) {
        self.entries
            .retain(|_, v| v.fetched_at.elapsed() <= self.ttl);
    }

    /// Number of cached symbol sets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: PriceHistoryProvider> PriceHistoryProvider for CachedPriceHistoryProvider<P> {
    fn source_type(&self) -> SourceType {
        SourceType::Cached
    }

    async fn fetch(&self, symbols: &[Symbol]) -> Result<MarketData, TraitError> {
        let key = cache_key(symbols);
        if let Some(hit) = self.get(symbols) {
            debug!(key = %key, "price cache hit");
            return Ok(hit);
        }

        debug!(key = %key, "price cache miss");
        let data = self.inner.fetch(symbols).await?;
        self.entries.insert(
            key,
            CachedMarketData {
                data: data.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use fingenius_traits::PriceSnapshot;
    use rust_decimal_macros::dec;

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl PriceHistoryProvider for CountingProvider {
        fn source_type(&self) -> SourceType {
            SourceType::Manual
        }

        async fn fetch(&self, symbols: &[Symbol]) -> Result<MarketData, TraitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(TraitError::ConnectionFailed("offline".into()));
            }
            let snapshot: PriceSnapshot = symbols.iter().map(|s| (s.clone(), dec!(100))).collect();
            Ok(MarketData {
                snapshot,
                ..MarketData::empty()
            })
        }
    }

    fn sym(s: &str) -> Symbol {
        Symbol::parse(s).unwrap()
    }

    fn provider(fail: bool) -> (CachedPriceHistoryProvider<CountingProvider>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedPriceHistoryProvider::with_ttl_minutes(
            CountingProvider {
                calls: calls.clone(),
                fail,
            },
            15,
        );
        (cached, calls)
    }

    #[test]
    fn test_cache_key_is_order_and_case_insensitive() {
        assert_eq!(cache_key(&[sym("msft"), sym("AAPL")]), "AAPL,MSFT");
        assert_eq!(cache_key(&[sym("AAPL"), sym("msft"), sym("aapl")]), "AAPL,MSFT");
        assert_eq!(cache_key(&[]), "");
    }

    #[tokio::test]
    async fn test_hit_within_ttl() {
        let (cached, calls) = provider(false);

        let first = cached.fetch(&[sym("AAPL"), sym("MSFT")]).await.unwrap();
        let second = cached.fetch(&[sym("msft"), sym("aapl")]).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.len(), 1);
        assert!(!cached.is_stale(&[sym("AAPL"), sym("MSFT")]));
        assert_eq!(cached.source_type(), SourceType::Cached);
    }

    #[tokio::test]
    async fn test_failures_not_cached() {
        let (cached, calls) = provider(true);

        assert!(cached.fetch(&[sym("AAPL")]).await.is_err());
        assert!(cached.fetch(&[sym("AAPL")]).await.is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(cached.is_empty());
    }

    #[tokio::test]
    async fn test_zero_ttl_always_refetches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = CachedPriceHistoryProvider::new(
            CountingProvider {
                calls: calls.clone(),
                fail: false,
            },
            Duration::ZERO,
        );

        cached.fetch(&[sym("AAPL")]).await.unwrap();
        std::thread::sleep(Duration::from_millis(2));
        cached.fetch(&[sym("AAPL")]).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        std::thread::sleep(Duration::from_millis(2));
        cached.cleanup_stale();
        assert!(cached.is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let (cached, calls) = provider(false);
        cached.fetch(&[sym("AAPL")]).await.unwrap();
        cached.clear();
        cached.fetch(&[sym("AAPL")]).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
