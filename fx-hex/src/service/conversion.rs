//! Conversion application service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use fx_types::{AppError, ConversionLedger, ConversionRecord, CurrencyCode, RateClient};

/// Executes user-initiated conversions and records them in the ledger.
///
/// Owns its ledger handle; the rate client may be shared with other services.
pub struct ConversionService<C: RateClient, L: ConversionLedger> {
    rates: Arc<C>,
    ledger: L,
}

impl<C: RateClient, L: ConversionLedger> ConversionService<C, L> {
    /// Creates a new conversion service.
    pub fn new(rates: Arc<C>, ledger: L) -> Self {
        Self { rates, ledger }
    }

    /// Returns a reference to the underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Converts `amount` of `base` into `target` at the latest rate.
    ///
    /// Validation runs before any network call. Identical calls record
    /// duplicate entries.
    #[instrument(skip_all, fields(%base, %target, %amount))]
    pub async fn convert(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
        amount: Decimal,
    ) -> Result<ConversionRecord, AppError> {
        if amount < Decimal::ZERO {
            return Err(AppError::InvalidAmount(format!(
                "amount must be zero or positive, got {amount}"
            )));
        }

        let quote = self.rates.latest_rate(base, target).await?;
        let record = ConversionRecord::new(base.clone(), target.clone(), amount, quote)?;
        let id = self.ledger.insert(&record).await?;

        info!(
            %id,
            rate = %record.rate(),
            converted = %record.converted_amount(),
            date = %record.date(),
            "conversion recorded"
        );
        Ok(record)
    }

    /// Lists the retained conversions, newest first.
    pub async fn recent(&self) -> Result<Vec<ConversionRecord>, AppError> {
        self.ledger.list_recent().await.map_err(Into::into)
    }
}
