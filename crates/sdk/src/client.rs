//! Client Facade
//!
//! One [`MarketGateClient`] per process is typical: it owns the gRPC
//! channel, the configuration, and the ambient cancellation scope every
//! streaming session forks from.

use tokio_util::sync::CancellationToken;

use crate::config::SdkConfig;
use crate::error::SdkError;
use crate::services::UsersService;
use crate::stream::session::MarketDataStreamSession;
use crate::stream::{ErrorCallback, StreamProcessor};
use crate::transport::GrpcTransport;

/// Entry point to the platform API.
pub struct MarketGateClient {
    transport: GrpcTransport,
    config: SdkConfig,
    scope: CancellationToken,
}

impl MarketGateClient {
    /// Connect to the platform described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the channel cannot be established.
    pub async fn connect(config: SdkConfig) -> Result<Self, SdkError> {
        let transport = GrpcTransport::connect(&config).await?;
        tracing::info!(
            endpoint = %config.endpoint,
            environment = config.environment.as_str(),
            "connected to platform"
        );
        Ok(Self {
            transport,
            config,
            scope: CancellationToken::new(),
        })
    }

    /// Users service wrappers.
    #[must_use]
    pub fn users(&self) -> UsersService {
        UsersService::new(
            self.transport.users_client(),
            self.config.environment.is_sandbox(),
        )
    }

    /// Open a market-data streaming session.
    ///
    /// The session's cancellation scope is a child of this client's scope;
    /// [`shutdown`](Self::shutdown) cancels every open session at once.
    ///
    /// # Errors
    ///
    /// Returns an error when the stream cannot be opened.
    pub async fn market_data_stream(
        &self,
        processor: impl StreamProcessor + 'static,
        on_error: Option<ErrorCallback>,
    ) -> Result<MarketDataStreamSession, SdkError> {
        MarketDataStreamSession::open(&self.transport, &self.scope, processor, on_error).await
    }

    /// Configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Cancel the ambient scope and, with it, every open streaming session.
    pub fn shutdown(&self) {
        tracing::info!("shutting down client scope");
        self.scope.cancel();
    }
}
