//! Error types for the converter.

use chrono::NaiveDate;

use crate::ports::ExchangeError;

/// Domain-level errors (business rule violations).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0:?} (expected three letters)")]
    InvalidCurrencyCode(String),

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Converted amount is too large to represent")]
    AmountOverflow,
}

/// Ledger-level errors (storage failures).
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt ledger row: {0}")]
    Corrupt(String),
}

/// Application-level errors returned by the services.
///
/// Maps cleanly to HTTP status codes and CLI messages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date range: start {start} must be before end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Conversion failed: {0}")]
    RateUnavailable(String),

    #[error("No data for this range: {0}")]
    RangeUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCurrencyCode(_) => AppError::InvalidCurrency(err.to_string()),
            DomainError::NegativeAmount | DomainError::AmountOverflow => {
                AppError::InvalidAmount(err.to_string())
            }
        }
    }
}

impl From<ExchangeError> for AppError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::RateUnavailable { .. } | ExchangeError::CurrencyListUnavailable(_) => {
                AppError::RateUnavailable(err.to_string())
            }
            ExchangeError::RangeUnavailable { .. } => AppError::RangeUnavailable(err.to_string()),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        AppError::Storage(err.to_string())
    }
}
