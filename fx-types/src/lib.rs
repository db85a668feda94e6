//! # FX Types
//!
//! Domain types and port traits for the live currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, ConversionRecord, TrendPoint)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ConversionRecord, CurrencyCode, CurrencyListing, CurrencySelection, LEDGER_CAPACITY,
    LatestRate, RecordId, Trend, TrendPoint, TrendSummary,
};
pub use dto::*;
pub use error::{AppError, DomainError, LedgerError};
pub use ports::{ConversionLedger, ExchangeError, RateClient};
