//! Result of a conversion attempt.

use serde::Serialize;
use std::fmt;

/// Why a conversion produced no amount.
///
/// Both reasons look the same to the user; the split is kept for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The service answered well-formed JSON with `success: false`.
    Rejected,
    /// Network error, non-2xx status, malformed payload, or a crashed request task.
    Transport,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Rejected => f.write_str("unsuccessful response"),
            FailureReason::Transport => f.write_str("request failed"),
        }
    }
}

/// Outcome shown on the screen. Exactly one variant is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// No outcome yet: nothing submitted, or a request is in flight.
    #[default]
    Pending,
    Success {
        converted_amount: f64,
    },
    Failure {
        reason: FailureReason,
    },
}

impl ConversionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, ConversionOutcome::Pending)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ConversionOutcome::Failure { .. })
    }

    pub fn converted_amount(&self) -> Option<f64> {
        match self {
            ConversionOutcome::Success { converted_amount } => Some(*converted_amount),
            _ => None,
        }
    }
}
