//! Domain models for the currency converter.

pub mod outcome;
pub mod request;
pub mod screen;

pub use outcome::{ConversionOutcome, FailureReason};
pub use request::ConversionRequest;
pub use screen::ScreenState;
