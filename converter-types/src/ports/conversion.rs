//! Conversion service port.
//!
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::ConversionRequest;
use crate::dto::ConversionResponse;
use crate::error::ConversionError;

/// Port trait for the remote conversion service.
#[async_trait::async_trait]
pub trait ConversionService: Send + Sync + 'static {
    /// Converts `request.amount()` from `request.from()` to `request.to()`.
    ///
    /// A well-formed answer is returned as-is even when its `success` flag is
    /// false; interpreting it is the caller's job. Anything else is an error.
    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResponse, ConversionError>;
}
