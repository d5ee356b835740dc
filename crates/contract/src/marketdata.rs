//! Market-data stream contract.
//!
//! One bidirectional stream carries every subscription kind. Each outbound
//! [`MarketDataRequest`] selects exactly one subscription payload through its
//! `oneof`; the platform dispatches on the populated variant, so the payload
//! tags (1..=5) and the [`SubscriptionAction`] values are frozen.

// =============================================================================
// Enums
// =============================================================================

/// Whether a control message adds to or removes from the server-side
/// subscription table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SubscriptionAction {
    /// Action not set.
    Unspecified = 0,
    /// Add the listed instruments.
    Subscribe = 1,
    /// Remove the listed instruments.
    Unsubscribe = 2,
}

/// Candle aggregation interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SubscriptionInterval {
    /// Interval not set.
    Unspecified = 0,
    /// One-minute candles.
    OneMinute = 1,
    /// Five-minute candles.
    FiveMinutes = 2,
}

/// Per-instrument result of a subscribe/unsubscribe request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SubscriptionStatus {
    /// Status not set.
    Unspecified = 0,
    /// Subscription applied.
    Success = 1,
    /// Instrument id is unknown to the platform.
    InstrumentNotFound = 2,
    /// Action value was missing or invalid.
    SubscriptionActionIsInvalid = 3,
    /// Requested order-book depth is not supported.
    DepthIsInvalid = 4,
    /// Requested candle interval is not supported.
    IntervalIsInvalid = 5,
    /// Per-connection subscription limit exceeded.
    LimitIsExceeded = 6,
    /// Platform-side failure.
    InternalError = 7,
}

/// Aggressor side of an executed trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TradeDirection {
    /// Direction not set.
    Unspecified = 0,
    /// Buyer-initiated trade.
    Buy = 1,
    /// Seller-initiated trade.
    Sell = 2,
}

/// Trading availability of an instrument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SecurityTradingStatus {
    /// Status not set.
    Unspecified = 0,
    /// Instrument is not tradable right now.
    NotAvailableForTrading = 1,
    /// Opening auction period.
    OpeningPeriod = 2,
    /// Closing auction period.
    ClosingPeriod = 3,
    /// Trading halted.
    BreakInTrading = 4,
    /// Regular continuous trading.
    NormalTrading = 5,
}

// =============================================================================
// Outbound control messages
// =============================================================================

/// One outbound unit on the market-data stream.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketDataRequest {
    /// The single subscription payload this message carries.
    #[prost(oneof = "market_data_request::Payload", tags = "1, 2, 3, 4, 5")]
    pub payload: Option<market_data_request::Payload>,
}

/// Nested types of [`MarketDataRequest`].
pub mod market_data_request {
    /// Subscription-kind selector. Exactly one variant per message.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        /// Candle subscription change.
        #[prost(message, tag = "1")]
        SubscribeCandlesRequest(super::SubscribeCandlesRequest),
        /// Order-book subscription change.
        #[prost(message, tag = "2")]
        SubscribeOrderBookRequest(super::SubscribeOrderBookRequest),
        /// Trades subscription change.
        #[prost(message, tag = "3")]
        SubscribeTradesRequest(super::SubscribeTradesRequest),
        /// Instrument-status subscription change.
        #[prost(message, tag = "4")]
        SubscribeInfoRequest(super::SubscribeInfoRequest),
        /// Last-price subscription change.
        #[prost(message, tag = "5")]
        SubscribeLastPriceRequest(super::SubscribeLastPriceRequest),
    }
}

/// Change the candle subscription set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeCandlesRequest {
    /// Subscribe or unsubscribe.
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    /// Instruments affected, in caller order.
    #[prost(message, repeated, tag = "2")]
    pub instruments: Vec<CandleInstrument>,
    /// Deliver a candle only once its interval has closed.
    #[prost(bool, tag = "3")]
    pub waiting_close: bool,
}

/// One candle subscription entry.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CandleInstrument {
    // Tag 1 reserved (legacy exchange-local identifier).
    /// Candle interval for this instrument.
    #[prost(enumeration = "SubscriptionInterval", tag = "2")]
    pub interval: i32,
    /// Platform instrument identifier.
    #[prost(string, tag = "3")]
    pub instrument_id: String,
}

/// Change the order-book subscription set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeOrderBookRequest {
    /// Subscribe or unsubscribe.
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    /// Instruments affected, in caller order.
    #[prost(message, repeated, tag = "2")]
    pub instruments: Vec<OrderBookInstrument>,
}

/// One order-book subscription entry.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderBookInstrument {
    // Tag 1 reserved (legacy exchange-local identifier).
    /// Number of price levels per side.
    #[prost(int32, tag = "2")]
    pub depth: i32,
    /// Platform instrument identifier.
    #[prost(string, tag = "3")]
    pub instrument_id: String,
}

/// Change the executed-trades subscription set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeTradesRequest {
    /// Subscribe or unsubscribe.
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    /// Instruments affected, in caller order.
    #[prost(message, repeated, tag = "2")]
    pub instruments: Vec<TradeInstrument>,
}

/// One trades subscription entry.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradeInstrument {
    // Tag 1 reserved (legacy exchange-local identifier).
    /// Platform instrument identifier.
    #[prost(string, tag = "2")]
    pub instrument_id: String,
}

/// Change the instrument-status subscription set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeInfoRequest {
    /// Subscribe or unsubscribe.
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    /// Instruments affected, in caller order.
    #[prost(message, repeated, tag = "2")]
    pub instruments: Vec<InfoInstrument>,
}

/// One instrument-status subscription entry.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InfoInstrument {
    // Tag 1 reserved (legacy exchange-local identifier).
    /// Platform instrument identifier.
    #[prost(string, tag = "2")]
    pub instrument_id: String,
}

/// Change the last-price subscription set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeLastPriceRequest {
    /// Subscribe or unsubscribe.
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    /// Instruments affected, in caller order.
    #[prost(message, repeated, tag = "2")]
    pub instruments: Vec<LastPriceInstrument>,
}

/// One last-price subscription entry.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LastPriceInstrument {
    // Tag 1 reserved (legacy exchange-local identifier).
    /// Platform instrument identifier.
    #[prost(string, tag = "2")]
    pub instrument_id: String,
}

// =============================================================================
// Inbound messages
// =============================================================================

/// One inbound unit on the market-data stream: a subscription ack, a data
/// message, or a keep-alive ping.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketDataResponse {
    /// The single payload this message carries.
    #[prost(
        oneof = "market_data_response::Payload",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11"
    )]
    pub payload: Option<market_data_response::Payload>,
}

/// Nested types of [`MarketDataResponse`].
pub mod market_data_response {
    /// Inbound payload selector.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        /// Ack for a candle subscription change.
        #[prost(message, tag = "1")]
        SubscribeCandlesResponse(super::SubscribeCandlesResponse),
        /// Ack for an order-book subscription change.
        #[prost(message, tag = "2")]
        SubscribeOrderBookResponse(super::SubscribeOrderBookResponse),
        /// Ack for a trades subscription change.
        #[prost(message, tag = "3")]
        SubscribeTradesResponse(super::SubscribeTradesResponse),
        /// Ack for an instrument-status subscription change.
        #[prost(message, tag = "4")]
        SubscribeInfoResponse(super::SubscribeInfoResponse),
        /// Candle update.
        #[prost(message, tag = "5")]
        Candle(super::Candle),
        /// Executed trade.
        #[prost(message, tag = "6")]
        Trade(super::Trade),
        /// Order-book snapshot or delta.
        #[prost(message, tag = "7")]
        Orderbook(super::OrderBook),
        /// Instrument trading-status change.
        #[prost(message, tag = "8")]
        TradingStatus(super::TradingStatus),
        /// Keep-alive.
        #[prost(message, tag = "9")]
        Ping(crate::common::Ping),
        /// Ack for a last-price subscription change.
        #[prost(message, tag = "10")]
        SubscribeLastPriceResponse(super::SubscribeLastPriceResponse),
        /// Last-price update.
        #[prost(message, tag = "11")]
        LastPrice(super::LastPrice),
    }
}

/// Ack for a candle subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeCandlesResponse {
    /// Server-assigned id of the request being acknowledged.
    #[prost(string, tag = "1")]
    pub tracking_id: String,
    /// Per-instrument results, in request order.
    #[prost(message, repeated, tag = "2")]
    pub candles_subscriptions: Vec<CandleSubscription>,
}

/// Per-instrument result of a candle subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CandleSubscription {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// Candle interval applied.
    #[prost(enumeration = "SubscriptionInterval", tag = "2")]
    pub interval: i32,
    /// Outcome for this instrument.
    #[prost(enumeration = "SubscriptionStatus", tag = "3")]
    pub subscription_status: i32,
}

/// Ack for an order-book subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeOrderBookResponse {
    /// Server-assigned id of the request being acknowledged.
    #[prost(string, tag = "1")]
    pub tracking_id: String,
    /// Per-instrument results, in request order.
    #[prost(message, repeated, tag = "2")]
    pub order_book_subscriptions: Vec<OrderBookSubscription>,
}

/// Per-instrument result of an order-book subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderBookSubscription {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// Depth applied.
    #[prost(int32, tag = "2")]
    pub depth: i32,
    /// Outcome for this instrument.
    #[prost(enumeration = "SubscriptionStatus", tag = "3")]
    pub subscription_status: i32,
}

/// Ack for a trades subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeTradesResponse {
    /// Server-assigned id of the request being acknowledged.
    #[prost(string, tag = "1")]
    pub tracking_id: String,
    /// Per-instrument results, in request order.
    #[prost(message, repeated, tag = "2")]
    pub trade_subscriptions: Vec<TradeSubscription>,
}

/// Per-instrument result of a trades subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradeSubscription {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// Outcome for this instrument.
    #[prost(enumeration = "SubscriptionStatus", tag = "2")]
    pub subscription_status: i32,
}

/// Ack for an instrument-status subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeInfoResponse {
    /// Server-assigned id of the request being acknowledged.
    #[prost(string, tag = "1")]
    pub tracking_id: String,
    /// Per-instrument results, in request order.
    #[prost(message, repeated, tag = "2")]
    pub info_subscriptions: Vec<InfoSubscription>,
}

/// Per-instrument result of an instrument-status subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InfoSubscription {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// Outcome for this instrument.
    #[prost(enumeration = "SubscriptionStatus", tag = "2")]
    pub subscription_status: i32,
}

/// Ack for a last-price subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeLastPriceResponse {
    /// Server-assigned id of the request being acknowledged.
    #[prost(string, tag = "1")]
    pub tracking_id: String,
    /// Per-instrument results, in request order.
    #[prost(message, repeated, tag = "2")]
    pub last_price_subscriptions: Vec<LastPriceSubscription>,
}

/// Per-instrument result of a last-price subscription change.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LastPriceSubscription {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// Outcome for this instrument.
    #[prost(enumeration = "SubscriptionStatus", tag = "2")]
    pub subscription_status: i32,
}

/// OHLCV candle for one interval.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Candle {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// Aggregation interval.
    #[prost(enumeration = "SubscriptionInterval", tag = "2")]
    pub interval: i32,
    /// Open price.
    #[prost(message, optional, tag = "3")]
    pub open: Option<crate::common::Quotation>,
    /// High price.
    #[prost(message, optional, tag = "4")]
    pub high: Option<crate::common::Quotation>,
    /// Low price.
    #[prost(message, optional, tag = "5")]
    pub low: Option<crate::common::Quotation>,
    /// Close price.
    #[prost(message, optional, tag = "6")]
    pub close: Option<crate::common::Quotation>,
    /// Traded volume, in lots.
    #[prost(int64, tag = "7")]
    pub volume: i64,
    /// Start of the candle interval.
    #[prost(message, optional, tag = "8")]
    pub time: Option<::prost_types::Timestamp>,
}

/// One executed trade.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Trade {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// Aggressor side.
    #[prost(enumeration = "TradeDirection", tag = "2")]
    pub direction: i32,
    /// Execution price per unit.
    #[prost(message, optional, tag = "3")]
    pub price: Option<crate::common::Quotation>,
    /// Executed quantity, in lots.
    #[prost(int64, tag = "4")]
    pub quantity: i64,
    /// Execution time.
    #[prost(message, optional, tag = "5")]
    pub time: Option<::prost_types::Timestamp>,
}

/// Order-book state for one instrument.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderBook {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// Number of levels per side.
    #[prost(int32, tag = "2")]
    pub depth: i32,
    /// False while the book is being rebuilt after a gap.
    #[prost(bool, tag = "3")]
    pub is_consistent: bool,
    /// Bid levels, best first.
    #[prost(message, repeated, tag = "4")]
    pub bids: Vec<Order>,
    /// Ask levels, best first.
    #[prost(message, repeated, tag = "5")]
    pub asks: Vec<Order>,
    /// Book timestamp.
    #[prost(message, optional, tag = "6")]
    pub time: Option<::prost_types::Timestamp>,
}

/// One price level of an order book.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Order {
    /// Level price.
    #[prost(message, optional, tag = "1")]
    pub price: Option<crate::common::Quotation>,
    /// Resting quantity, in lots.
    #[prost(int64, tag = "2")]
    pub quantity: i64,
}

/// Trading-status change for one instrument.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradingStatus {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// New trading status.
    #[prost(enumeration = "SecurityTradingStatus", tag = "2")]
    pub trading_status: i32,
    /// Status change time.
    #[prost(message, optional, tag = "3")]
    pub time: Option<::prost_types::Timestamp>,
}

/// Latest trade price for one instrument.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LastPrice {
    /// Platform instrument identifier.
    #[prost(string, tag = "1")]
    pub instrument_id: String,
    /// Price per unit.
    #[prost(message, optional, tag = "2")]
    pub price: Option<crate::common::Quotation>,
    /// Price time.
    #[prost(message, optional, tag = "3")]
    pub time: Option<::prost_types::Timestamp>,
}

// =============================================================================
// Client
// =============================================================================

/// Client for the `marketgate.v1.MarketDataStreamService` service.
pub mod market_data_stream_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value
    )]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    /// Bidirectional market-data streaming client.
    #[derive(Debug, Clone)]
    pub struct MarketDataStreamServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl MarketDataStreamServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> MarketDataStreamServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> MarketDataStreamServiceClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                    http::Request<tonic::body::Body>,
                    Response = http::Response<
                        <T as tonic::client::GrpcService<tonic::body::Body>>::ResponseBody,
                    >,
                >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::Body>,
            >>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            MarketDataStreamServiceClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        /// Open the bidirectional market-data stream.
        pub async fn market_data_stream(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::MarketDataRequest>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::MarketDataResponse>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/marketgate.v1.MarketDataStreamService/MarketDataStream",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(GrpcMethod::new(
                    "marketgate.v1.MarketDataStreamService",
                    "MarketDataStream",
                ));
            self.inner.streaming(req, path, codec).await
        }
    }
}
