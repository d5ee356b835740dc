//! Transport Layer
//!
//! Port definition for the bidirectional market-data stream plus the
//! production gRPC adapter. Channel setup (TLS, auth metadata, keep-alive)
//! lives here; everything above this layer is transport-agnostic.

mod grpc;

pub use grpc::{AuthInterceptor, GrpcTransport};
pub(crate) use grpc::AuthedChannel;

use async_trait::async_trait;
use futures::stream::BoxStream;
use tokio::sync::mpsc;

use marketgate_contract::marketdata::{MarketDataRequest, MarketDataResponse};

use crate::error::SdkError;

/// Inbound half of an open market-data stream.
pub type InboundStream = BoxStream<'static, Result<MarketDataResponse, tonic::Status>>;

/// Something capable of opening the bidirectional market-data stream.
///
/// The caller hands over the receiving end of its outbound queue and gets
/// the inbound message stream back; the `mpsc::Sender` it kept is the write
/// handle for the stream's lifetime. Dropping either half tears the stream
/// down.
#[async_trait]
pub trait StreamTransport: Send + Sync {
    /// Open one bidirectional market-data stream.
    ///
    /// # Errors
    ///
    /// Returns an error when the stream cannot be established; no resources
    /// remain held in that case.
    async fn open_market_data_stream(
        &self,
        outbound: mpsc::Receiver<MarketDataRequest>,
    ) -> Result<InboundStream, SdkError>;
}
