//! Conversion Request Controller
//!
//! Owns the [`ScreenState`] and orchestrates calls to the conversion service.
//!
//! ## Lifecycle of a submission
//!
//! ```text
//! Idle ──submit()──▶ Loading ──settle()──▶ Resolved(Success | Failure) ──submit()──▶ Loading ...
//! ```
//!
//! The service call runs on a spawned Tokio task that only ever sees the
//! request, never the state. The owner of the controller applies the result by
//! awaiting [`ConversionController::settle`], so every state mutation happens in
//! the owner's control flow and no locks guard the state.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use uuid::Uuid;

use converter_types::{
    ConversionError, ConversionOutcome, ConversionRequest, ConversionResponse, ConversionService,
    CurrencyCode, FailureReason, ScreenState,
};

type ServiceResult = Result<ConversionResponse, ConversionError>;

/// The single request allowed in flight.
struct InFlight {
    id: Uuid,
    task: JoinHandle<ServiceResult>,
}

/// Controller for the converter screen.
///
/// Generic over `S: ConversionService` - the adapter is injected at construction.
pub struct ConversionController<S: ConversionService> {
    service: Arc<S>,
    state: ScreenState,
    in_flight: Option<InFlight>,
    publisher: watch::Sender<ScreenState>,
}

impl<S: ConversionService> ConversionController<S> {
    /// Creates a controller with the screen's mount defaults.
    pub fn new(service: Arc<S>) -> Self {
        let state = ScreenState::default();
        let (publisher, _) = watch::channel(state.clone());
        Self {
            service,
            state,
            in_flight: None,
            publisher,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────────

    /// Returns a snapshot of the current state for rendering.
    pub fn current_state(&self) -> ScreenState {
        self.state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Subscribes to state changes.
    ///
    /// The receiver starts out marked as seen; it is notified after every
    /// operation that actually changed the state.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.publisher.subscribe()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────────

    /// Stores the amount text verbatim. Validation happens on submit.
    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        self.state.amount_text = text.into();
        self.publish();
    }

    /// Changes the source currency. An in-flight request keeps its own currencies.
    pub fn select_source(&mut self, code: CurrencyCode) {
        self.state.source = code;
        self.publish();
    }

    /// Changes the target currency. An in-flight request keeps its own currencies.
    pub fn select_target(&mut self, code: CurrencyCode) {
        self.state.target = code;
        self.publish();
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Dispatches a conversion for the current input.
    ///
    /// Returns `false` without touching the state when the amount text is not a
    /// positive number or a request is already in flight. Must be called from
    /// within a Tokio runtime.
    pub fn submit(&mut self) -> bool {
        let request = match ConversionRequest::new(
            self.state.source,
            self.state.target,
            &self.state.amount_text,
        ) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring submit with invalid amount");
                return false;
            }
        };

        if let Some(in_flight) = &self.in_flight {
            tracing::debug!(request_id = %in_flight.id, "Ignoring submit while a request is in flight");
            return false;
        }

        let id = Uuid::new_v4();
        let task = tokio::spawn(dispatch(Arc::clone(&self.service), request, id));
        self.in_flight = Some(InFlight { id, task });

        self.state.is_loading = true;
        self.state.outcome = ConversionOutcome::Pending;
        self.publish();
        true
    }

    /// Waits for the in-flight request and applies its outcome.
    ///
    /// Returns `None` immediately when nothing is in flight. Cancel-safe: if the
    /// returned future is dropped before completion the request stays in flight
    /// and a later call picks it up.
    pub async fn settle(&mut self) -> Option<ConversionOutcome> {
        let in_flight = self.in_flight.as_mut()?;
        let joined = (&mut in_flight.task).await;
        let InFlight { id, .. } = self.in_flight.take()?;

        let outcome = resolve(id, joined);
        self.state.outcome = outcome;
        self.state.is_loading = false;
        self.publish();
        Some(outcome)
    }

    fn publish(&self) {
        let state = &self.state;
        self.publisher.send_if_modified(|current| {
            if current == state {
                return false;
            }
            *current = state.clone();
            true
        });
    }
}

impl<S: ConversionService> Drop for ConversionController<S> {
    fn drop(&mut self) {
        // The screen is gone; its result must never be applied.
        if let Some(in_flight) = self.in_flight.take() {
            tracing::debug!(request_id = %in_flight.id, "Discarding in-flight request on teardown");
            in_flight.task.abort();
        }
    }
}

#[tracing::instrument(
    name = "conversion",
    skip(service, request),
    fields(from = %request.from(), to = %request.to(), amount = request.amount())
)]
async fn dispatch<S: ConversionService>(
    service: Arc<S>,
    request: ConversionRequest,
    request_id: Uuid,
) -> ServiceResult {
    tracing::info!("Dispatching conversion request");
    service.convert(&request).await
}

/// Maps whatever the request task produced onto a terminal outcome.
fn resolve(id: Uuid, joined: Result<ServiceResult, JoinError>) -> ConversionOutcome {
    let reason = match joined {
        Ok(Ok(ConversionResponse {
            success: true,
            result: Some(converted_amount),
        })) => {
            tracing::info!(request_id = %id, converted_amount, "Conversion succeeded");
            return ConversionOutcome::Success { converted_amount };
        }
        Ok(Ok(ConversionResponse {
            success: true,
            result: None,
        })) => {
            tracing::warn!(request_id = %id, "Successful response without a result");
            FailureReason::Transport
        }
        Ok(Ok(_)) => {
            tracing::warn!(request_id = %id, "Conversion service reported an unsuccessful response");
            FailureReason::Rejected
        }
        Ok(Err(e)) => {
            tracing::warn!(request_id = %id, error = %e, "Conversion request failed");
            FailureReason::Transport
        }
        Err(e) => {
            tracing::error!(request_id = %id, error = %e, "Conversion task did not complete");
            FailureReason::Transport
        }
    };
    ConversionOutcome::Failure { reason }
}
