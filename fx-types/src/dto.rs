//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{CurrencyCode, CurrencyListing, CurrencySelection, Trend, TrendSummary};
use crate::error::DomainError;

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount between two currencies.
///
/// Codes arrive as entered and are validated by [`ConvertRequest::pair`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub base: String,
    pub target: String,
    /// Non-negative amount of `base` to convert
    #[serde(default = "default_amount")]
    pub amount: Decimal,
}

fn default_amount() -> Decimal {
    Decimal::ONE
}

impl ConvertRequest {
    pub fn pair(&self) -> Result<(CurrencyCode, CurrencyCode), DomainError> {
        Ok((CurrencyCode::new(&self.base)?, CurrencyCode::new(&self.target)?))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trend DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for a trend request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRequest {
    pub base: String,
    pub target: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TrendRequest {
    pub fn pair(&self) -> Result<(CurrencyCode, CurrencyCode), DomainError> {
        Ok((CurrencyCode::new(&self.base)?, CurrencyCode::new(&self.target)?))
    }
}

/// Trend series plus chart caption figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendResponse {
    #[serde(flatten)]
    pub trend: Trend,
    pub summary: Option<TrendSummary>,
}

impl From<Trend> for TrendResponse {
    fn from(trend: Trend) -> Self {
        let summary = trend.summary();
        Self { trend, summary }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Currency DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Where a currency list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    Live,
    Fallback,
}

/// Currency list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyListResponse {
    pub source: ListingSource,
    /// Why the fallback list is being served
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub currencies: Vec<CurrencySelection>,
}

impl From<CurrencyListing> for CurrencyListResponse {
    fn from(listing: CurrencyListing) -> Self {
        match listing {
            CurrencyListing::Live(currencies) => Self {
                source: ListingSource::Live,
                reason: None,
                currencies,
            },
            CurrencyListing::Fallback { currencies, reason } => Self {
                source: ListingSource::Fallback,
                reason: Some(reason.to_string()),
                currencies,
            },
        }
    }
}
