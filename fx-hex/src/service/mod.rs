//! Application services.
//!
//! Orchestrate domain operations through the `RateClient` and
//! `ConversionLedger` ports. Contain NO infrastructure logic.

mod catalog;
mod conversion;
mod trend;

use std::sync::Arc;

use fx_types::{ConversionLedger, RateClient};

pub use catalog::CurrencyCatalog;
pub use conversion::ConversionService;
pub use trend::TrendQuery;

/// All services wired to one rate client and one ledger.
pub struct FxServices<C: RateClient, L: ConversionLedger> {
    pub conversions: ConversionService<C, L>,
    pub trends: TrendQuery<C>,
    pub catalog: CurrencyCatalog<C>,
}

impl<C: RateClient, L: ConversionLedger> FxServices<C, L> {
    pub fn new(rates: C, ledger: L) -> Self {
        let rates = Arc::new(rates);
        Self {
            conversions: ConversionService::new(rates.clone(), ledger),
            trends: TrendQuery::new(rates.clone()),
            catalog: CurrencyCatalog::new(rates),
        }
    }
}
