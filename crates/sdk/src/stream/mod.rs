//! Market-Data Streaming Core
//!
//! The subscription manager for the platform's bidirectional market-data
//! stream. One stream carries all five subscription kinds; control messages
//! are built by `request`, inbound traffic is routed by `dispatcher`, and
//! `session` owns the stream's lifetime.

/// Inbound dispatcher state machine.
pub mod dispatcher;

/// Control-message builders.
pub mod request;

/// Subscription session.
pub mod session;

pub use dispatcher::InboundDispatcher;
pub use session::MarketDataStreamSession;

use marketgate_contract::marketdata::MarketDataResponse;

use crate::error::SdkError;

/// Caller-supplied handler invoked once per inbound stream message.
pub trait StreamProcessor: Send {
    /// Handle one decoded inbound message.
    fn process(&mut self, response: MarketDataResponse);
}

impl<F> StreamProcessor for F
where
    F: FnMut(MarketDataResponse) + Send,
{
    fn process(&mut self, response: MarketDataResponse) {
        self(response);
    }
}

/// Callback invoked at most once with the cause of an abnormal stream
/// termination.
pub type ErrorCallback = Box<dyn FnOnce(SdkError) + Send>;

/// Lifecycle of one streaming session's inbound side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Messages are flowing.
    Active,
    /// Stream ended normally (server close or local cancellation).
    Closed,
    /// Stream ended with a transport failure.
    Failed,
}
