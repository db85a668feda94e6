//! Trend query service.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use fx_types::{AppError, CurrencyCode, RateClient, Trend};

/// Produces chartable rate series. Every call re-queries the provider.
pub struct TrendQuery<C: RateClient> {
    rates: Arc<C>,
}

impl<C: RateClient> TrendQuery<C> {
    pub fn new(rates: Arc<C>) -> Self {
        Self { rates }
    }

    /// Fetches the `base -> target` series for `[start, end]`.
    ///
    /// `start` must be strictly before `end`. Points are returned in provider
    /// order.
    #[instrument(skip_all, fields(%base, %target, %start, %end))]
    pub async fn fetch_trend(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Trend, AppError> {
        if start >= end {
            return Err(AppError::InvalidDateRange { start, end });
        }

        let points = self.rates.range_rates(base, target, start, end).await?;
        if points.is_empty() {
            return Err(AppError::RangeUnavailable(format!(
                "no rates for {base} -> {target} between {start} and {end}"
            )));
        }
        debug!(points = points.len(), "trend fetched");

        Ok(Trend {
            base: base.clone(),
            target: target.clone(),
            start,
            end,
            points,
        })
    }
}
