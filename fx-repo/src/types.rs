//! Database row types.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

use fx_types::{ConversionRecord, CurrencyCode, LedgerError};

/// History row from database.
///
/// Decimals and dates are stored as TEXT so values round-trip exactly.
#[derive(FromRow)]
pub struct DbConversion {
    pub id: i64,
    pub base: String,
    pub target: String,
    pub amount: String,
    pub converted: String,
    pub rate: String,
    pub date: String,
}

impl DbConversion {
    pub fn into_domain(self) -> Result<ConversionRecord, LedgerError> {
        let id = self.id;
        let corrupt = |column: &str, value: &str| {
            LedgerError::Corrupt(format!("row {id}: bad {column} {value:?}"))
        };

        let base = CurrencyCode::new(&self.base).map_err(|_| corrupt("base", &self.base))?;
        let target =
            CurrencyCode::new(&self.target).map_err(|_| corrupt("target", &self.target))?;
        let amount =
            Decimal::from_str(&self.amount).map_err(|_| corrupt("amount", &self.amount))?;
        let converted = Decimal::from_str(&self.converted)
            .map_err(|_| corrupt("converted", &self.converted))?;
        let rate = Decimal::from_str(&self.rate).map_err(|_| corrupt("rate", &self.rate))?;
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| corrupt("date", &self.date))?;

        Ok(ConversionRecord::from_parts(
            base, target, amount, converted, rate, date,
        ))
    }
}
