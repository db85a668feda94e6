//! Currency catalogue service.

use std::sync::Arc;

use tracing::{info, warn};

use fx_currencies::{DEFAULT_BASE, DEFAULT_TARGET};
use fx_types::{CurrencyCode, CurrencyListing, RateClient};

/// Supplies the currencies the user can pick from.
pub struct CurrencyCatalog<C: RateClient> {
    rates: Arc<C>,
}

impl<C: RateClient> CurrencyCatalog<C> {
    pub fn new(rates: Arc<C>) -> Self {
        Self { rates }
    }

    /// Lists currencies; degraded mode is logged, never an error.
    pub async fn list(&self) -> CurrencyListing {
        let listing = self.rates.list_currencies().await;
        match &listing {
            CurrencyListing::Live(currencies) => {
                info!(count = currencies.len(), "currency list loaded")
            }
            CurrencyListing::Fallback { reason, .. } => {
                warn!(%reason, "serving built-in currency list")
            }
        }
        listing
    }

    /// Pair preselected by the front-ends.
    pub fn default_pair(&self) -> (CurrencyCode, CurrencyCode) {
        (DEFAULT_BASE.into(), DEFAULT_TARGET.into())
    }
}
