//! Reference data source traits.
//!
//! A [`FundamentalsSource`] supplies per-symbol classification data: sector
//! label, an optional valuation multiple (P/E) and analyst ratings.
//!
//! Upstream analyst data arrives in more than one table layout. Rather than
//! sniffing column names at each call site, raw JSON is classified once into
//! the [`AnalystRatings`] tagged union.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TraitError;
use crate::ids::Symbol;

/// Sector label used when classification is missing.
pub const UNKNOWN_SECTOR: &str = "Unknown";

// =============================================================================
// ANALYST RATINGS
// =============================================================================

/// Aggregated analyst recommendation counts for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Strong buy count
    pub strong_buy: u32,
    /// Buy count
    pub buy: u32,
    /// Hold count
    pub hold: u32,
    /// Sell count
    pub sell: u32,
    /// Strong sell count
    pub strong_sell: u32,
}

impl RatingSummary {
    /// Total number of analysts.
    ///
    /// Summed in `u64`, which holds five `u32::MAX` counts.
    pub fn total(&self) -> u64 {
        self.counts().iter().map(|&(n, _)| n).sum()
    }

    /// Mean rating on a 1 (strong buy) to 5 (strong sell) scale.
    pub fn mean_score(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: u64 = self.counts().iter().map(|&(n, score)| n * score).sum();
        Some(weighted as f64 / total as f64)
    }

    fn counts(&self) -> [(u64, u64); 5] {
        [
            (u64::from(self.strong_buy), 1),
            (u64::from(self.buy), 2),
            (u64::from(self.hold), 3),
            (u64::from(self.sell), 4),
            (u64::from(self.strong_sell), 5),
        ]
    }

    /// Consensus label derived from the mean score.
    pub fn consensus(&self) -> Option<&'static str> {
        let score = self.mean_score()?;
        Some(match score {
            s if s <= 1.5 => "strong buy",
            s if s <= 2.5 => "buy",
            s if s <= 3.5 => "hold",
            s if s <= 4.5 => "sell",
            _ => "strong sell",
        })
    }
}

/// One broker upgrade/downgrade record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeChange {
    /// Broker or research firm
    pub firm: String,
    /// Grade after the action
    pub to_grade: String,
    /// Grade before the action, if any
    pub from_grade: Option<String>,
    /// Action code (up, down, main, init, ...)
    pub action: Option<String>,
}

/// Analyst ratings in one of the recognized upstream layouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalystRatings {
    /// No ratings supplied.
    #[default]
    None,
    /// Trend layout: counts per recommendation bucket (most recent period).
    Summary(RatingSummary),
    /// Grade layout: list of firm upgrades/downgrades, most recent last.
    Grades {
        /// Grade changes
        changes: Vec<GradeChange>,
    },
    /// Data was present but matched no known layout.
    Unrecognized,
}

impl AnalystRatings {
    /// Classifies a raw JSON table into a recognized layout.
    ///
    /// Accepts either an array of row objects or a single row object.
    /// Trend rows carry `strongBuy`/`buy`/`hold`/`sell`/`strongSell`; the
    /// row with `period == "0m"` wins, otherwise the first row. Grade rows
    /// carry `To Grade` (or `toGrade`/`to_grade`) and `Firm`.
    pub fn from_json(raw: &Value) -> Self {
        let rows: Vec<&serde_json::Map<String, Value>> = match raw {
            Value::Null => return Self::None,
            Value::Array(items) if items.is_empty() => return Self::None,
            Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
            Value::Object(obj) => vec![obj],
            _ => return Self::Unrecognized,
        };

        let Some(first) = rows.first() else {
            return Self::Unrecognized;
        };

        if first.contains_key("strongBuy") || first.contains_key("strong_buy") {
            let current = rows
                .iter()
                .find(|r| r.get("period").and_then(Value::as_str) == Some("0m"))
                .unwrap_or(first);
            return Self::Summary(RatingSummary {
                strong_buy: count(current, &["strongBuy", "strong_buy"]),
                buy: count(current, &["buy"]),
                hold: count(current, &["hold"]),
                sell: count(current, &["sell"]),
                strong_sell: count(current, &["strongSell", "strong_sell"]),
            });
        }

        const TO_GRADE: &[&str] = &["To Grade", "toGrade", "to_grade"];
        if TO_GRADE.iter().any(|k| first.contains_key(*k)) {
            let changes = rows
                .iter()
                .filter_map(|r| {
                    Some(GradeChange {
                        firm: text(r, &["Firm", "firm"]).unwrap_or_default(),
                        to_grade: text(r, TO_GRADE)?,
                        from_grade: text(r, &["From Grade", "fromGrade", "from_grade"])
                            .filter(|g| !g.is_empty()),
                        action: text(r, &["Action", "action"]),
                    })
                })
                .collect();
            return Self::Grades { changes };
        }

        Self::Unrecognized
    }

    /// Short human-readable consensus, if one can be derived.
    pub fn consensus(&self) -> Option<String> {
        match self {
            Self::Summary(summary) => summary.consensus().map(str::to_string),
            Self::Grades { changes } => changes.last().map(|c| c.to_grade.to_lowercase()),
            Self::None | Self::Unrecognized => None,
        }
    }
}

fn count(row: &serde_json::Map<String, Value>, keys: &[&str]) -> u32 {
    keys.iter()
        .find_map(|k| row.get(*k))
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

fn text(row: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| row.get(*k))
        .and_then(Value::as_str)
        .map(str::to_string)
}

// =============================================================================
// FUNDAMENTALS
// =============================================================================

/// Classification data for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Sector label ("Unknown" when not classified)
    pub sector: String,
    /// Price/earnings multiple, if known
    pub valuation_multiple: Option<f64>,
    /// Analyst ratings
    #[serde(default)]
    pub analyst_ratings: AnalystRatings,
}

impl Fundamentals {
    /// Create fundamentals with a sector label. Blank labels become "Unknown".
    pub fn new(sector: impl Into<String>) -> Self {
        let sector = sector.into();
        let sector = if sector.trim().is_empty() {
            UNKNOWN_SECTOR.to_string()
        } else {
            sector.trim().to_string()
        };
        Self {
            sector,
            valuation_multiple: None,
            analyst_ratings: AnalystRatings::None,
        }
    }

    /// Fallback used when the source fails or has no entry.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_SECTOR)
    }

    /// Set the valuation multiple. Non-finite values are dropped.
    #[must_use]
    pub fn with_valuation_multiple(mut self, multiple: f64) -> Self {
        self.valuation_multiple = multiple.is_finite().then_some(multiple);
        self
    }

    /// Set analyst ratings.
    #[must_use]
    pub fn with_analyst_ratings(mut self, ratings: AnalystRatings) -> Self {
        self.analyst_ratings = ratings;
        self
    }
}

impl Default for Fundamentals {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Trait for fundamentals/sector classification providers.
#[async_trait]
pub trait FundamentalsSource: Send + Sync {
    /// Fetch fundamentals for one symbol.
    ///
    /// A symbol the source does not know may be reported either as
    /// `Ok(Fundamentals::unknown())` or `Err(TraitError::NotFound)`.
    async fn fetch(&self, symbol: &Symbol) -> Result<Fundamentals, TraitError>;
}
