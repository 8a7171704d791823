//! Snapshot of everything the converter screen renders.

use serde::Serialize;

use super::outcome::ConversionOutcome;
use crate::CurrencyCode;

/// State of the converter screen.
///
/// Owned by the controller; renderers only ever see clones of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenState {
    /// Raw amount text exactly as typed.
    pub amount_text: String,
    pub source: CurrencyCode,
    pub target: CurrencyCode,
    pub outcome: ConversionOutcome,
    pub is_loading: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            amount_text: String::new(),
            source: CurrencyCode::USD,
            target: CurrencyCode::IDR,
            outcome: ConversionOutcome::Pending,
            is_loading: false,
        }
    }
}

impl ScreenState {
    /// Whether the convert action should be offered.
    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }

    /// Result line, e.g. `100 USD = 1550000 IDR`.
    ///
    /// Only available once loading finished with a successful outcome.
    pub fn summary(&self) -> Option<String> {
        if self.is_loading {
            return None;
        }
        self.outcome.converted_amount().map(|converted| {
            format!(
                "{} {} = {} {}",
                self.amount_text.trim(),
                self.source,
                converted,
                self.target
            )
        })
    }
}
