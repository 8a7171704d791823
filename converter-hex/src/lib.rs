//! # Converter Hex
//!
//! Application layer of the currency converter.
//!
//! ## Architecture
//!
//! - `controller` - Owns the screen state and drives conversion requests
//! - `selector` - Picker state for one currency (used once for source, once for target)
//!
//! The controller is generic over `S: ConversionService`, so the HTTP client
//! can be swapped for an in-memory service in tests.

pub mod controller;
pub mod selector;


pub use controller::ConversionController;
pub use selector::CurrencySelector;
