//! Instrument identity and tick metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A tradable symbol as the broker knows it (e.g. "XAUUSD", "EURUSD").
///
/// An empty symbol is representable on purpose: instrument lists are split
/// and trimmed but empty entries are not dropped, and the broker is the one
/// that gets to reject them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol '{0}' contains whitespace")]
    Whitespace(String),

    #[error("symbol '{0}' contains control characters")]
    Control(String),
}

impl Symbol {
    /// Wraps a symbol without validating it.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Validates an already-trimmed instrument list entry.
    pub fn parse(raw: &str) -> Result<Self, SymbolError> {
        if raw.chars().any(char::is_control) {
            return Err(SymbolError::Control(raw.escape_debug().to_string()));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(SymbolError::Whitespace(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Minimal tick-size metadata for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSpecification {
    /// Smallest price increment (e.g. 0.00001 for a five-digit FX pair).
    point_size: f64,
}

impl InstrumentSpecification {
    pub fn new(point_size: f64) -> Self {
        Self { point_size }
    }

    pub fn point_size(&self) -> f64 {
        self.point_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_and_empty() {
        assert_eq!(Symbol::parse("XAUUSD").unwrap().as_str(), "XAUUSD");
        assert!(Symbol::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_inner_whitespace() {
        assert_eq!(
            Symbol::parse("EUR USD"),
            Err(SymbolError::Whitespace("EUR USD".into()))
        );
    }

    #[test]
    fn test_parse_rejects_control_chars() {
        assert!(matches!(
            "XAU\u{7}USD".parse::<Symbol>(),
            Err(SymbolError::Control(_))
        ));
    }

    #[test]
    fn test_symbol_serializes_as_string() {
        let json = serde_json::to_string(&Symbol::new("EURUSD")).unwrap();
        assert_eq!(json, "\"EURUSD\"");
    }
}
