//! Port traits (interfaces for adapters).
//!
//! The application layer depends on these traits, not on concrete clients.

mod conversion;

pub use conversion::ConversionService;
