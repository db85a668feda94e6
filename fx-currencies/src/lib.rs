//! Built-in Currency Catalogue with Macro-Based Currency Generation
//!
//! The rate provider is the source of truth for which currencies exist. This
//! crate holds the small, fixed catalogue the application falls back to when
//! the provider's list cannot be fetched, plus display metadata (names and
//! symbols) for the common currencies.
//!
//! Currencies are defined declaratively using a macro that generates the
//! `KnownCurrency` enum and its lookups. `KnownCurrency::all()` is the
//! ordered fallback list.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     NZD => ("NZD", "New Zealand Dollar", "NZ$"),
//! }
//! ```
//!
//! # Example
//! ```
//! use fx_currencies::KnownCurrency;
//!
//! let usd: KnownCurrency = "usd".parse().unwrap();
//! assert_eq!(usd.name(), "United States Dollar");
//! assert_eq!(KnownCurrency::all().len(), 10);
//! ```

use std::fmt;

/// Error returned when a code is not part of the built-in catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines KnownCurrency and its metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the built-in catalogue.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Variant => ("CODE", "Display Name", "SYMBOL"),
/// }
/// ```
///
/// Declaration order is the order of the fallback list.
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $display:literal, $symbol:literal)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KnownCurrency {
            $($name),*
        }

        impl KnownCurrency {
            pub fn code(&self) -> &'static str {
                match self {
                    $(KnownCurrency::$name => $code),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(KnownCurrency::$name => $display),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(KnownCurrency::$name => $symbol),*
                }
            }

            /// Every catalogue entry in declaration order.
            pub fn all() -> &'static [KnownCurrency] {
                &[$(KnownCurrency::$name),*]
            }
        }

        impl std::str::FromStr for KnownCurrency {
            type Err = UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(KnownCurrency::$name),)*
                    _ => Err(UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "United States Dollar", "$"),
    EUR => ("EUR", "Euro", "€"),
    INR => ("INR", "Indian Rupee", "₹"),
    GBP => ("GBP", "British Pound", "£"),
    AUD => ("AUD", "Australian Dollar", "A$"),
    CAD => ("CAD", "Canadian Dollar", "C$"),
    JPY => ("JPY", "Japanese Yen", "¥"),
    CNY => ("CNY", "Chinese Yuan", "CN¥"),
    SGD => ("SGD", "Singapore Dollar", "S$"),
    CHF => ("CHF", "Swiss Franc", "CHF "),
}

impl fmt::Display for KnownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Returns the display symbol for a code if it is in the catalogue.
pub fn symbol_for(code: &str) -> Option<&'static str> {
    code.parse::<KnownCurrency>().ok().map(|c| c.symbol())
}

/// Base currency preselected by the front-ends.
pub const DEFAULT_BASE: KnownCurrency = KnownCurrency::USD;

/// Target currency preselected by the front-ends.
pub const DEFAULT_TARGET: KnownCurrency = KnownCurrency::INR;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
