//! Validated conversion request.

use serde::Serialize;

use crate::CurrencyCode;
use crate::error::ValidationError;

/// A validated request to convert `amount` from one currency to another.
///
/// Can only be built through [`ConversionRequest::new`], so an instance always
/// carries a finite, strictly positive amount. Same-currency requests are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionRequest {
    from: CurrencyCode,
    to: CurrencyCode,
    amount: f64,
}

impl ConversionRequest {
    /// Parses `amount_text` and builds a request.
    ///
    /// Surrounding whitespace is ignored; anything else that does not parse as a
    /// positive finite decimal is rejected.
    pub fn new(
        from: CurrencyCode,
        to: CurrencyCode,
        amount_text: &str,
    ) -> Result<Self, ValidationError> {
        let amount = parse_amount(amount_text)?;
        Ok(Self { from, to, amount })
    }

    pub fn from(&self) -> CurrencyCode {
        self.from
    }

    pub fn to(&self) -> CurrencyCode {
        self.to
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Parses raw amount text into a positive finite number.
pub fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let amount: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;

    if !amount.is_finite() {
        return Err(ValidationError::NotFinite);
    }
    if amount <= 0.0 {
        return Err(ValidationError::NotPositive);
    }
    Ok(amount)
}
