//! Currency identifiers and the selectable currency list.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::ports::ExchangeError;

/// A 3-letter currency identifier such as `USD`.
///
/// Only the shape is checked here. Whether the provider actually supports the
/// code is decided upstream: unsupported codes come back as rate errors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and normalizes a code (trimmed, uppercased).
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let code = code.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::InvalidCurrencyCode(code));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl From<fx_currencies::KnownCurrency> for CurrencyCode {
    fn from(currency: fx_currencies::KnownCurrency) -> Self {
        Self(currency.code().to_string())
    }
}

/// A currency as offered to the user: code plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySelection {
    pub code: CurrencyCode,
    pub name: String,
}

impl CurrencySelection {
    pub fn new(code: CurrencyCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

impl fmt::Display for CurrencySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

/// Outcome of listing currencies.
///
/// Listing never fails outright: when the provider is unreachable the built-in
/// catalogue is returned, tagged so callers can tell degraded mode apart.
#[derive(Debug, Clone)]
pub enum CurrencyListing {
    Live(Vec<CurrencySelection>),
    Fallback {
        currencies: Vec<CurrencySelection>,
        reason: ExchangeError,
    },
}

impl CurrencyListing {
    /// Builds the degraded-mode listing from the built-in catalogue.
    pub fn fallback(reason: ExchangeError) -> Self {
        let currencies = fx_currencies::KnownCurrency::all()
            .iter()
            .map(|&c| CurrencySelection::new(c.into(), c.name()))
            .collect();
        CurrencyListing::Fallback { currencies, reason }
    }

    pub fn currencies(&self) -> &[CurrencySelection] {
        match self {
            CurrencyListing::Live(currencies) => currencies,
            CurrencyListing::Fallback { currencies, .. } => currencies,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CurrencyListing::Fallback { .. })
    }

    /// Looks up the display entry for a code.
    pub fn find(&self, code: &CurrencyCode) -> Option<&CurrencySelection> {
        self.currencies().iter().find(|c| &c.code == code)
    }
}
