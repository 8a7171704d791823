//! Currency Set with Macro-Based Code Generation
//!
//! The converter offers a fixed, closed set of currencies. Each one is declared
//! exactly once in the `define_currencies!` invocation below, which generates the
//! `CurrencyCode` enum together with its metadata lookups, parsing and display.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` macro invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     CHF => ("CHF", "Fr", "Swiss Franc", 2),
//! }
//! ```
//!
//! # Example
//! ```
//! use currencies::CurrencyCode;
//!
//! let code: CurrencyCode = "idr".parse().unwrap();
//! assert_eq!(code, CurrencyCode::IDR);
//! assert_eq!(code.format_amount(1550000.0), "IDR 1550000.00");
//! ```

use std::fmt;

/// Error returned when a string is not one of the supported currency codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the currency set with auto-generated lookups.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Name => ("CODE", "SYMBOL", "display name", minor_digits),
/// }
/// ```
///
/// Declaration order is the order `CurrencyCode::all()` returns.
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal, $display:literal, $minor_digits:expr)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $display),*
                }
            }

            /// Number of digits after the decimal point used when displaying amounts.
            pub fn minor_digits(&self) -> usize {
                match self {
                    $(CurrencyCode::$name => $minor_digits),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "$", "US Dollar", 2),
    EUR => ("EUR", "€", "Euro", 2),
    IDR => ("IDR", "Rp", "Indonesian Rupiah", 2),
    JPY => ("JPY", "¥", "Japanese Yen", 0),
    GBP => ("GBP", "£", "British Pound", 2),
}

impl CurrencyCode {
    /// Formats an amount in this currency, e.g. `IDR 1550000.00` or `JPY 15820`.
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{} {:.*}", self.code(), self.minor_digits(), amount)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returns true if `code` names a member of the currency set (case-insensitive).
pub fn is_supported(code: &str) -> bool {
    code.parse::<CurrencyCode>().is_ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
