//! Data Transfer Objects exchanged with the remote conversion endpoint.

use serde::{Deserialize, Serialize};

use crate::CurrencyCode;
use crate::domain::ConversionRequest;

// ─────────────────────────────────────────────────────────────────────────────
// Outbound
// ─────────────────────────────────────────────────────────────────────────────

/// Query string of `GET /convert`.
///
/// `amount` goes out through serde's number formatting, which never depends on
/// the host locale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvertQuery {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
}

impl From<&ConversionRequest> for ConvertQuery {
    fn from(req: &ConversionRequest) -> Self {
        Self {
            from: req.from(),
            to: req.to(),
            amount: req.amount(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inbound
// ─────────────────────────────────────────────────────────────────────────────

/// Body of a 2xx answer from `GET /convert`.
///
/// Extra fields sent by the provider (query echo, rate info, timestamps) are
/// ignored. `result` may be absent or null when `success` is false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Option<f64>,
}

impl ConversionResponse {
    pub fn converted(result: f64) -> Self {
        Self {
            success: true,
            result: Some(result),
        }
    }

    pub fn unsuccessful() -> Self {
        Self {
            success: false,
            result: None,
        }
    }
}
