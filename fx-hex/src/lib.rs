//! # FX Hex
//!
//! Application service layer and HTTP adapter for the converter.
//!
//! ## Architecture
//!
//! - `service/` - Application services (conversion, trend, currency catalogue)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The services are generic over `C: RateClient` and `L: ConversionLedger`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::{ConversionService, CurrencyCatalog, FxServices, TrendQuery};
