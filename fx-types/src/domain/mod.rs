//! Domain models for the converter.

pub mod conversion;
pub mod currency;
pub mod trend;

pub use conversion::{ConversionRecord, LEDGER_CAPACITY, LatestRate, RecordId};
pub use currency::{CurrencyCode, CurrencyListing, CurrencySelection};
pub use trend::{Trend, TrendPoint, TrendSummary};
