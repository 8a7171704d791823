//! # Converter Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (ConversionRequest, ConversionOutcome, ScreenState)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Wire shapes exchanged with the remote conversion endpoint
//! - `error/` - Validation and transport error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use currencies::CurrencyCode;
pub use domain::{ConversionOutcome, ConversionRequest, FailureReason, ScreenState};
pub use dto::*;
pub use error::{ConversionError, ValidationError};
pub use ports::ConversionService;
