//! Inbound Dispatcher
//!
//! Routes inbound stream events to the caller's processor and error
//! callback. Two states: `Active` and terminated (`Closed` or `Failed`).
//! Termination is absorbing - events delivered by the transport after the
//! stream has ended are dropped, and the error callback fires at most once.

use std::sync::Arc;

use parking_lot::RwLock;

use marketgate_contract::marketdata::MarketDataResponse;

use super::{ErrorCallback, StreamProcessor, StreamState};
use crate::error::SdkError;

/// Inbound side of one streaming session.
pub struct InboundDispatcher {
    processor: Box<dyn StreamProcessor>,
    on_error: Option<ErrorCallback>,
    state: Arc<RwLock<StreamState>>,
}

impl InboundDispatcher {
    /// Wrap a processor and an optional error callback.
    #[must_use]
    pub fn new(processor: Box<dyn StreamProcessor>, on_error: Option<ErrorCallback>) -> Self {
        Self {
            processor,
            on_error,
            state: Arc::new(RwLock::new(StreamState::Active)),
        }
    }

    /// Shared view of the state; stays readable after the dispatcher itself
    /// has been consumed by the receive loop.
    #[must_use]
    pub fn state_handle(&self) -> Arc<RwLock<StreamState>> {
        Arc::clone(&self.state)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> StreamState {
        *self.state.read()
    }

    /// Forward one inbound message in arrival order. Dropped once
    /// terminated.
    pub fn dispatch(&mut self, response: MarketDataResponse) {
        if *self.state.read() != StreamState::Active {
            tracing::debug!("dropping inbound message after stream termination");
            return;
        }
        self.processor.process(response);
    }

    /// Normal end of stream. The error callback is not invoked.
    pub fn complete(&mut self) {
        let mut state = self.state.write();
        if *state != StreamState::Active {
            return;
        }
        *state = StreamState::Closed;
        drop(state);
        tracing::debug!("market data stream closed");
    }

    /// Abnormal termination. Invokes the error callback exactly once; a
    /// missing callback still leaves the failure observable via the state
    /// and the log.
    pub fn fail(&mut self, error: SdkError) {
        {
            let mut state = self.state.write();
            if *state != StreamState::Active {
                tracing::debug!(%error, "ignoring stream error after termination");
                return;
            }
            *state = StreamState::Failed;
        }
        tracing::warn!(%error, "market data stream failed");
        if let Some(callback) = self.on_error.take() {
            callback(error);
        }
    }
}
