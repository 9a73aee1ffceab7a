//! Identifier types used across the analytics engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TraitError;

/// Ticker symbol, trimmed and canonicalized to upper case.
///
/// `"aapl "` and `"AAPL"` are the same symbol. Deserialization applies the
/// same canonicalization and rejects blank symbols.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parses and canonicalizes a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`TraitError::InvalidInput`] if the symbol is blank.
    pub fn parse(raw: &str) -> Result<Self, TraitError> {
        let canonical = raw.trim().to_uppercase();
        if canonical.is_empty() {
            return Err(TraitError::InvalidInput("symbol must not be blank".into()));
        }
        Ok(Self(canonical))
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = TraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = TraitError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalization() {
        let s = Symbol::parse("  msft ").unwrap();
        assert_eq!(s.as_str(), "MSFT");
        assert_eq!(s, "MSFT".parse::<Symbol>().unwrap());
    }

    #[test]
    fn test_blank_rejected() {
        assert!(Symbol::parse("   ").is_err());
        assert!(Symbol::parse("").is_err());
    }

    #[test]
    fn test_serde_canonicalizes() {
        let s: Symbol = serde_json::from_str("\"brk.b\"").unwrap();
        assert_eq!(s.as_str(), "BRK.B");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"BRK.B\"");

        assert!(serde_json::from_str::<Symbol>("\"\"").is_err());
    }
}
