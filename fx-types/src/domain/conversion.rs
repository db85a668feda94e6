//! Conversion record domain model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::CurrencyCode;
use crate::error::DomainError;

/// Number of conversions the ledger retains.
pub const LEDGER_CAPACITY: usize = 10;

/// Surrogate ledger key. Strictly increasing in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point-in-time rate as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestRate {
    /// Units of target per one unit of base.
    pub rate: Decimal,
    /// Provider's publication date for the rate.
    pub date: NaiveDate,
}

/// One completed conversion.
///
/// `converted_amount` is derived from `amount * rate` at construction and has
/// no setter. Serialize-only: records are never read back from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRecord {
    base: CurrencyCode,
    target: CurrencyCode,
    amount: Decimal,
    converted_amount: Decimal,
    rate: Decimal,
    date: NaiveDate,
}

impl ConversionRecord {
    /// Creates a record, computing the converted amount.
    ///
    /// # Validation
    /// - Amount cannot be negative
    /// - The product must fit in a `Decimal`
    pub fn new(
        base: CurrencyCode,
        target: CurrencyCode,
        amount: Decimal,
        quote: LatestRate,
    ) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeAmount);
        }
        let converted_amount = amount
            .checked_mul(quote.rate)
            .ok_or(DomainError::AmountOverflow)?;

        Ok(Self {
            base,
            target,
            amount,
            converted_amount,
            rate: quote.rate,
            date: quote.date,
        })
    }

    /// Reconstructs a record from storage (used by repository adapters).
    ///
    /// The stored converted value is kept as-is; it was derived when the
    /// record was first built.
    pub fn from_parts(
        base: CurrencyCode,
        target: CurrencyCode,
        amount: Decimal,
        converted_amount: Decimal,
        rate: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            base,
            target,
            amount,
            converted_amount,
            rate,
            date,
        }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn converted_amount(&self) -> Decimal {
        self.converted_amount
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} | {} {} = {:.2} {} (Rate: {:.4}, Date: {})",
            self.base,
            self.target,
            self.amount.normalize(),
            self.base,
            self.converted_amount,
            self.target,
            self.rate,
            self.date
        )
    }
}
