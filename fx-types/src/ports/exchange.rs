//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, fakes for tests, etc.

use chrono::NaiveDate;

use crate::domain::{CurrencyCode, CurrencyListing, CurrencySelection, LatestRate, TrendPoint};

/// Error type for exchange rate operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("Rate not available for {base} -> {target}: {reason}")]
    RateUnavailable {
        base: CurrencyCode,
        target: CurrencyCode,
        reason: String,
    },

    #[error("No rates for {base} -> {target} between {start} and {end}: {reason}")]
    RangeUnavailable {
        base: CurrencyCode,
        target: CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
        reason: String,
    },

    #[error("Currency list unavailable: {0}")]
    CurrencyListUnavailable(String),
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateClient: Send + Sync {
    /// Fetches the provider's supported currencies, sorted by code.
    async fn fetch_currencies(&self) -> Result<Vec<CurrencySelection>, ExchangeError>;

    /// Gets the latest rate: how many units of `target` one unit of `base` buys.
    async fn latest_rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<LatestRate, ExchangeError>;

    /// Gets daily rates for `base -> target` over `[start, end]`, in provider order.
    ///
    /// Callers guarantee `start < end`.
    async fn range_rates(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TrendPoint>, ExchangeError>;

    /// Lists currencies, degrading to the built-in catalogue on failure.
    async fn list_currencies(&self) -> CurrencyListing {
        let reason = match self.fetch_currencies().await {
            Ok(currencies) if !currencies.is_empty() => return CurrencyListing::Live(currencies),
            Ok(_) => ExchangeError::CurrencyListUnavailable("provider returned no currencies".into()),
            Err(ExchangeError::CurrencyListUnavailable(msg)) => {
                ExchangeError::CurrencyListUnavailable(msg)
            }
            Err(e) => ExchangeError::CurrencyListUnavailable(e.to_string()),
        };
        tracing::warn!(%reason, "falling back to built-in currency list");
        CurrencyListing::fallback(reason)
    }
}
