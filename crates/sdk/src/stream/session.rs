//! Subscription Session
//!
//! The stateful core of the streaming subscription manager. A session owns
//! the outbound half of one bidirectional market-data stream and a
//! cancellable scope forked from the caller's ambient scope. Subscribe and
//! unsubscribe calls are fire-and-forget: each enqueues one control message
//! and returns without waiting for a server ack.
//!
//! Sends issued after the session has been cancelled or the stream has died
//! are dropped with a `warn` log; the terminal condition stays observable
//! through [`MarketDataStreamSession::state`] and, for transport failures,
//! through the error callback on the inbound side.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::StreamExt;
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use marketgate_contract::marketdata::{
    MarketDataRequest, SubscriptionAction, SubscriptionInterval,
};

use super::dispatcher::InboundDispatcher;
use super::{ErrorCallback, StreamProcessor, StreamState, request};
use crate::error::SdkError;
use crate::transport::{InboundStream, StreamTransport};

/// Cancellation reason recorded by the first `cancel()` caller.
const CANCEL_REASON: &str = "canceled by user";

/// Outbound queue capacity; control messages are tiny and infrequent.
const OUTBOUND_BUFFER: usize = 64;

/// One open market-data streaming session.
///
/// All methods take `&self`: the session is shared freely across threads
/// (typically behind an [`Arc`]), and every operation is safe to call
/// concurrently with every other, including [`cancel`](Self::cancel).
pub struct MarketDataStreamSession {
    outbound: mpsc::Sender<MarketDataRequest>,
    scope: CancellationToken,
    cancelled: AtomicBool,
    state: Arc<RwLock<StreamState>>,
}

impl MarketDataStreamSession {
    /// Open a session over `transport`.
    ///
    /// A child cancellation scope is forked from `parent` before the stream
    /// is opened, so cancelling `parent` also tears this session down. The
    /// scope is stored in the returned session before any other thread can
    /// observe it; a concurrent `cancel()` immediately after construction
    /// always finds a live scope.
    ///
    /// # Errors
    ///
    /// Returns the transport error when the stream cannot be opened; the
    /// child scope is cancelled before the error surfaces, so a failed
    /// construction holds no resources.
    pub async fn open<T>(
        transport: &T,
        parent: &CancellationToken,
        processor: impl StreamProcessor + 'static,
        on_error: Option<ErrorCallback>,
    ) -> Result<Self, SdkError>
    where
        T: StreamTransport + ?Sized,
    {
        let scope = parent.child_token();
        let (outbound, outbound_rx) = mpsc::channel(OUTBOUND_BUFFER);

        let inbound = match transport.open_market_data_stream(outbound_rx).await {
            Ok(stream) => stream,
            Err(error) => {
                scope.cancel();
                return Err(error);
            }
        };

        let dispatcher = InboundDispatcher::new(Box::new(processor), on_error);
        let state = dispatcher.state_handle();
        tokio::spawn(receive_loop(inbound, dispatcher, scope.clone()));
        tracing::debug!("market data stream session opened");

        Ok(Self {
            outbound,
            scope,
            cancelled: AtomicBool::new(false),
            state,
        })
    }

    /// Subscribe to executed trades.
    pub fn subscribe_trades(&self, instrument_ids: &[String]) {
        self.send(request::trades_request(
            instrument_ids,
            SubscriptionAction::Subscribe,
        ));
    }

    /// Unsubscribe from executed trades.
    pub fn unsubscribe_trades(&self, instrument_ids: &[String]) {
        self.send(request::trades_request(
            instrument_ids,
            SubscriptionAction::Unsubscribe,
        ));
    }

    /// Subscribe to order-book updates at the default depth.
    pub fn subscribe_order_book(&self, instrument_ids: &[String]) {
        self.subscribe_order_book_with_depth(instrument_ids, request::DEFAULT_ORDER_BOOK_DEPTH);
    }

    /// Subscribe to order-book updates at an explicit depth.
    pub fn subscribe_order_book_with_depth(&self, instrument_ids: &[String], depth: i32) {
        self.send(request::order_book_request(
            instrument_ids,
            SubscriptionAction::Subscribe,
            depth,
        ));
    }

    /// Unsubscribe from order-book updates at the default depth.
    pub fn unsubscribe_order_book(&self, instrument_ids: &[String]) {
        self.unsubscribe_order_book_with_depth(instrument_ids, request::DEFAULT_ORDER_BOOK_DEPTH);
    }

    /// Unsubscribe from order-book updates at an explicit depth.
    pub fn unsubscribe_order_book_with_depth(&self, instrument_ids: &[String], depth: i32) {
        self.send(request::order_book_request(
            instrument_ids,
            SubscriptionAction::Unsubscribe,
            depth,
        ));
    }

    /// Subscribe to candles at the default interval, delivered while the
    /// interval is still open.
    pub fn subscribe_candles(&self, instrument_ids: &[String]) {
        self.subscribe_candles_with(instrument_ids, request::DEFAULT_CANDLE_INTERVAL, false);
    }

    /// Subscribe to candles with an explicit interval and wait-for-close
    /// flag.
    pub fn subscribe_candles_with(
        &self,
        instrument_ids: &[String],
        interval: SubscriptionInterval,
        waiting_close: bool,
    ) {
        self.send(request::candles_request(
            instrument_ids,
            SubscriptionAction::Subscribe,
            interval,
            waiting_close,
        ));
    }

    /// Unsubscribe from candles at the default interval.
    pub fn unsubscribe_candles(&self, instrument_ids: &[String]) {
        self.unsubscribe_candles_with(instrument_ids, request::DEFAULT_CANDLE_INTERVAL);
    }

    /// Unsubscribe from candles at an explicit interval.
    pub fn unsubscribe_candles_with(
        &self,
        instrument_ids: &[String],
        interval: SubscriptionInterval,
    ) {
        self.send(request::candles_request(
            instrument_ids,
            SubscriptionAction::Unsubscribe,
            interval,
            false,
        ));
    }

    /// Subscribe to instrument trading-status updates.
    pub fn subscribe_info(&self, instrument_ids: &[String]) {
        self.send(request::info_request(
            instrument_ids,
            SubscriptionAction::Subscribe,
        ));
    }

    /// Unsubscribe from instrument trading-status updates.
    pub fn unsubscribe_info(&self, instrument_ids: &[String]) {
        self.send(request::info_request(
            instrument_ids,
            SubscriptionAction::Unsubscribe,
        ));
    }

    /// Subscribe to last-price updates.
    pub fn subscribe_last_prices(&self, instrument_ids: &[String]) {
        self.send(request::last_price_request(
            instrument_ids,
            SubscriptionAction::Subscribe,
        ));
    }

    /// Unsubscribe from last-price updates.
    pub fn unsubscribe_last_prices(&self, instrument_ids: &[String]) {
        self.send(request::last_price_request(
            instrument_ids,
            SubscriptionAction::Unsubscribe,
        ));
    }

    /// Cancel the session and tear down the stream in both directions.
    ///
    /// Safe to call from any thread, any number of times, concurrently with
    /// in-flight subscribe/unsubscribe calls. Only the first call performs
    /// the transition; it never blocks on teardown completion.
    pub fn cancel(&self) {
        if self
            .cancelled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            tracing::info!(reason = CANCEL_REASON, "cancelling market data stream");
            self.scope.cancel();
        }
    }

    /// Whether the session's scope has been cancelled, directly or through
    /// its parent.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.scope.is_cancelled()
    }

    /// Inbound-side lifecycle state.
    #[must_use]
    pub fn state(&self) -> StreamState {
        *self.state.read()
    }

    fn send(&self, message: MarketDataRequest) {
        if self.scope.is_cancelled() {
            tracing::warn!("dropping control message: session is cancelled");
            return;
        }
        match self.outbound.try_send(message) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::warn!("dropping control message: stream is closed");
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!("dropping control message: outbound queue is full");
            }
        }
    }
}

impl Drop for MarketDataStreamSession {
    fn drop(&mut self) {
        if self
            .cancelled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            tracing::debug!("session dropped, cancelling market data stream");
            self.scope.cancel();
        }
    }
}

/// Pump inbound events into the dispatcher until the stream ends or the
/// scope is cancelled. Dropping the inbound stream on exit releases the
/// underlying transport stream in both directions.
async fn receive_loop(
    mut inbound: InboundStream,
    mut dispatcher: InboundDispatcher,
    scope: CancellationToken,
) {
    loop {
        tokio::select! {
            () = scope.cancelled() => {
                dispatcher.complete();
                break;
            }
            item = inbound.next() => match item {
                Some(Ok(response)) => dispatcher.dispatch(response),
                Some(Err(status)) => {
                    dispatcher.fail(SdkError::Rpc(status));
                    break;
                }
                None => {
                    dispatcher.complete();
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use tokio_stream::wrappers::ReceiverStream;

    use marketgate_contract::marketdata::MarketDataResponse;

    use super::*;

    /// Transport whose outbound/inbound channels the test controls.
    struct LoopbackTransport {
        outbound_slot: Mutex<Option<mpsc::Receiver<MarketDataRequest>>>,
        inbound_slot: Mutex<Option<mpsc::Receiver<Result<MarketDataResponse, tonic::Status>>>>,
        fail_connect: bool,
    }

    impl LoopbackTransport {
        fn new() -> (Self, mpsc::Sender<Result<MarketDataResponse, tonic::Status>>) {
            let (inbound_tx, inbound_rx) = mpsc::channel(16);
            (
                Self {
                    outbound_slot: Mutex::new(None),
                    inbound_slot: Mutex::new(Some(inbound_rx)),
                    fail_connect: false,
                },
                inbound_tx,
            )
        }

        fn failing() -> Self {
            Self {
                outbound_slot: Mutex::new(None),
                inbound_slot: Mutex::new(None),
                fail_connect: true,
            }
        }
    }

    #[async_trait]
    impl StreamTransport for LoopbackTransport {
        async fn open_market_data_stream(
            &self,
            outbound: mpsc::Receiver<MarketDataRequest>,
        ) -> Result<InboundStream, SdkError> {
            if self.fail_connect {
                return Err(SdkError::Rpc(tonic::Status::unavailable(
                    "connection refused",
                )));
            }
            *self.outbound_slot.lock() = Some(outbound);
            let inbound = self
                .inbound_slot
                .lock()
                .take()
                .expect("one stream per transport");
            Ok(Box::pin(ReceiverStream::new(inbound)))
        }
    }

    fn noop_processor() -> impl StreamProcessor + 'static {
        |_response: MarketDataResponse| {}
    }

    #[tokio::test]
    async fn cancel_twice_is_idempotent() {
        let (transport, _inbound_tx) = LoopbackTransport::new();
        let parent = CancellationToken::new();
        let session =
            MarketDataStreamSession::open(&transport, &parent, noop_processor(), None)
                .await
                .unwrap();

        session.cancel();
        session.cancel();

        assert!(session.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn construction_failure_leaves_parent_untouched() {
        let transport = LoopbackTransport::failing();
        let parent = CancellationToken::new();

        let result =
            MarketDataStreamSession::open(&transport, &parent, noop_processor(), None).await;

        assert!(matches!(result, Err(SdkError::Rpc(_))));
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn send_after_cancel_is_dropped() {
        let (transport, _inbound_tx) = LoopbackTransport::new();
        let parent = CancellationToken::new();
        let session =
            MarketDataStreamSession::open(&transport, &parent, noop_processor(), None)
                .await
                .unwrap();
        let mut outbound = transport.outbound_slot.lock().take().unwrap();

        session.cancel();
        session.subscribe_trades(&["FIGI1".to_string()]);

        // nothing was enqueued after cancellation
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(outbound.try_recv().is_err());
    }

    #[tokio::test]
    async fn parent_cancellation_propagates() {
        let (transport, _inbound_tx) = LoopbackTransport::new();
        let parent = CancellationToken::new();
        let session =
            MarketDataStreamSession::open(&transport, &parent, noop_processor(), None)
                .await
                .unwrap();

        parent.cancel();

        assert!(session.is_cancelled());
    }

    #[tokio::test]
    async fn drop_cancels_the_scope() {
        let (transport, _inbound_tx) = LoopbackTransport::new();
        let parent = CancellationToken::new();
        let session =
            MarketDataStreamSession::open(&transport, &parent, noop_processor(), None)
                .await
                .unwrap();
        let scope = session.scope.clone();

        drop(session);

        assert!(scope.is_cancelled());
        assert!(!parent.is_cancelled());
    }
}
