//! Error types for the currency converter.

/// Reasons amount text cannot become a `ConversionRequest`.
///
/// The controller swallows these silently; they exist so callers that want to
/// explain a rejected amount can do so.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Amount is empty")]
    Empty,

    #[error("Amount is not a number: {0}")]
    NotANumber(String),

    #[error("Amount must be finite")]
    NotFinite,

    #[error("Amount must be positive")]
    NotPositive,
}

/// Failures talking to the remote conversion service.
///
/// Every variant is a transport failure from the screen's point of view; the
/// variants only matter for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),
}
