//! gRPC Transport Adapter
//!
//! Builds the tonic channel to the platform (TLS, keep-alive) and decorates
//! every outgoing call with authentication metadata.

use std::sync::OnceLock;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use marketgate_contract::marketdata::MarketDataRequest;
use marketgate_contract::marketdata::market_data_stream_service_client::MarketDataStreamServiceClient;
use marketgate_contract::users::users_service_client::UsersServiceClient;

use super::{InboundStream, StreamTransport};
use crate::config::SdkConfig;
use crate::error::SdkError;

/// Channel type shared by every service client.
pub(crate) type AuthedChannel = InterceptedService<Channel, AuthInterceptor>;

static CRYPTO_PROVIDER: OnceLock<()> = OnceLock::new();

// rustls wants a process-level crypto provider before the first TLS
// handshake; installing twice fails, so the install is guarded.
fn ensure_crypto_provider() {
    CRYPTO_PROVIDER.get_or_init(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Interceptor stamping auth and telemetry metadata onto every request.
#[derive(Clone)]
pub struct AuthInterceptor {
    authorization: MetadataValue<Ascii>,
    app_name: MetadataValue<Ascii>,
}

impl AuthInterceptor {
    pub(crate) fn new(config: &SdkConfig) -> Result<Self, SdkError> {
        let authorization = MetadataValue::try_from(format!("Bearer {}", config.token()))
            .map_err(|_| SdkError::InvalidMetadata {
                name: "authorization",
            })?;
        let app_name = MetadataValue::try_from(config.app_name.clone()).map_err(|_| {
            SdkError::InvalidMetadata { name: "x-app-name" }
        })?;
        Ok(Self {
            authorization,
            app_name,
        })
    }
}

impl Interceptor for AuthInterceptor {
    fn call(
        &mut self,
        mut request: tonic::Request<()>,
    ) -> Result<tonic::Request<()>, tonic::Status> {
        let metadata = request.metadata_mut();
        metadata.insert("authorization", self.authorization.clone());
        metadata.insert("x-app-name", self.app_name.clone());
        // One tracking id per outbound call.
        if let Ok(tracking_id) = MetadataValue::try_from(uuid::Uuid::new_v4().to_string()) {
            metadata.insert("x-tracking-id", tracking_id);
        }
        Ok(request)
    }
}

/// Production transport over a shared tonic channel.
#[derive(Clone)]
pub struct GrpcTransport {
    channel: Channel,
    interceptor: AuthInterceptor,
}

impl GrpcTransport {
    /// Connect to the platform endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URI is invalid, the token cannot
    /// be carried as metadata, or the connection cannot be established.
    pub async fn connect(config: &SdkConfig) -> Result<Self, SdkError> {
        ensure_crypto_provider();

        let mut endpoint = Endpoint::from_shared(config.endpoint.clone())?
            .connect_timeout(config.connect_timeout)
            .http2_keep_alive_interval(config.keepalive_interval)
            .keep_alive_while_idle(true)
            .user_agent(format!(
                "{}/{}",
                config.app_name,
                env!("CARGO_PKG_VERSION")
            ))?;
        if config.endpoint.starts_with("https://") {
            endpoint = endpoint.tls_config(ClientTlsConfig::new().with_native_roots())?;
        }

        let channel = endpoint.connect().await?;
        tracing::debug!(endpoint = %config.endpoint, "gRPC channel established");

        Ok(Self {
            channel,
            interceptor: AuthInterceptor::new(config)?,
        })
    }

    /// Build a transport over an already-established channel.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured token or app name cannot be
    /// carried as metadata.
    pub fn from_channel(channel: Channel, config: &SdkConfig) -> Result<Self, SdkError> {
        Ok(Self {
            channel,
            interceptor: AuthInterceptor::new(config)?,
        })
    }

    pub(crate) fn market_data_client(&self) -> MarketDataStreamServiceClient<AuthedChannel> {
        MarketDataStreamServiceClient::with_interceptor(
            self.channel.clone(),
            self.interceptor.clone(),
        )
    }

    pub(crate) fn users_client(&self) -> UsersServiceClient<AuthedChannel> {
        UsersServiceClient::with_interceptor(self.channel.clone(), self.interceptor.clone())
    }
}

#[async_trait]
impl StreamTransport for GrpcTransport {
    async fn open_market_data_stream(
        &self,
        outbound: mpsc::Receiver<MarketDataRequest>,
    ) -> Result<InboundStream, SdkError> {
        let mut client = self.market_data_client();
        let response = client
            .market_data_stream(ReceiverStream::new(outbound))
            .await?;
        Ok(Box::pin(response.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SdkConfig {
        SdkConfig::new("t.test-token").with_app_name("unit-tests")
    }

    #[test]
    fn interceptor_adds_auth_metadata() {
        let mut interceptor = AuthInterceptor::new(&test_config()).unwrap();
        let request = interceptor.call(tonic::Request::new(())).unwrap();
        let metadata = request.metadata();

        assert_eq!(
            metadata.get("authorization").unwrap(),
            "Bearer t.test-token"
        );
        assert_eq!(metadata.get("x-app-name").unwrap(), "unit-tests");
        assert!(metadata.get("x-tracking-id").is_some());
    }

    #[test]
    fn interceptor_tracking_ids_are_unique() {
        let mut interceptor = AuthInterceptor::new(&test_config()).unwrap();
        let first = interceptor.call(tonic::Request::new(())).unwrap();
        let second = interceptor.call(tonic::Request::new(())).unwrap();
        assert_ne!(
            first.metadata().get("x-tracking-id").unwrap(),
            second.metadata().get("x-tracking-id").unwrap()
        );
    }

    #[test]
    fn non_ascii_token_is_rejected() {
        let config = SdkConfig::new("токен");
        assert!(matches!(
            AuthInterceptor::new(&config),
            Err(SdkError::InvalidMetadata {
                name: "authorization"
            })
        ));
    }
}
