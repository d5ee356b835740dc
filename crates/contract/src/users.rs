//! Users service contract: accounts, margin attributes, tariff limits and
//! user info.

// =============================================================================
// Enums
// =============================================================================

/// Lifecycle state of a brokerage account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountStatus {
    /// Status not set.
    Unspecified = 0,
    /// Account is being opened.
    New = 1,
    /// Account is open and operational.
    Open = 2,
    /// Account is closed.
    Closed = 3,
}

/// What the current token may do with an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccessLevel {
    /// Access level not set.
    Unspecified = 0,
    /// Full trading access.
    FullAccess = 1,
    /// Read-only access.
    ReadOnly = 2,
    /// No access.
    NoAccess = 3,
}

// =============================================================================
// Messages
// =============================================================================

/// A brokerage account visible to the token.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    /// Account identifier.
    #[prost(string, tag = "1")]
    pub id: String,
    /// Display name.
    #[prost(string, tag = "2")]
    pub name: String,
    /// Lifecycle state.
    #[prost(enumeration = "AccountStatus", tag = "3")]
    pub status: i32,
    /// When the account was opened.
    #[prost(message, optional, tag = "4")]
    pub opened_date: Option<::prost_types::Timestamp>,
    /// Token's access level to this account.
    #[prost(enumeration = "AccessLevel", tag = "5")]
    pub access_level: i32,
}

/// Request for the account list.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetAccountsRequest {}

/// Account list response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountsResponse {
    /// Accounts visible to the token.
    #[prost(message, repeated, tag = "1")]
    pub accounts: Vec<Account>,
}

/// Request for one account's margin attributes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMarginAttributesRequest {
    /// Account identifier.
    #[prost(string, tag = "1")]
    pub account_id: String,
}

/// Margin attributes of one account.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMarginAttributesResponse {
    /// Liquid portfolio value.
    #[prost(message, optional, tag = "1")]
    pub liquid_portfolio: Option<crate::common::MoneyValue>,
    /// Initial margin requirement.
    #[prost(message, optional, tag = "2")]
    pub starting_margin: Option<crate::common::MoneyValue>,
    /// Minimal margin requirement.
    #[prost(message, optional, tag = "3")]
    pub minimal_margin: Option<crate::common::MoneyValue>,
    /// Funds sufficiency ratio.
    #[prost(message, optional, tag = "4")]
    pub funds_sufficiency_level: Option<crate::common::Quotation>,
    /// Shortfall to cover, if any.
    #[prost(message, optional, tag = "5")]
    pub amount_of_missing_funds: Option<crate::common::MoneyValue>,
}

/// Request for the token's tariff limits.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetUserTariffRequest {}

/// Per-minute limit shared by a group of unary methods.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnaryLimit {
    /// Requests per minute.
    #[prost(int32, tag = "1")]
    pub limit_per_minute: i32,
    /// Fully-qualified method names sharing this limit.
    #[prost(string, repeated, tag = "2")]
    pub methods: Vec<String>,
}

/// Concurrent-stream limit shared by a group of streaming methods.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StreamLimit {
    /// Maximum concurrent streams.
    #[prost(int32, tag = "1")]
    pub limit: i32,
    /// Fully-qualified method names sharing this limit.
    #[prost(string, repeated, tag = "2")]
    pub streams: Vec<String>,
}

/// Tariff limits response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserTariffResponse {
    /// Unary call limits.
    #[prost(message, repeated, tag = "1")]
    pub unary_limits: Vec<UnaryLimit>,
    /// Streaming limits.
    #[prost(message, repeated, tag = "2")]
    pub stream_limits: Vec<StreamLimit>,
}

/// Request for user flags and tariff.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetInfoRequest {}

/// User flags and tariff response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetInfoResponse {
    /// Premium-service flag.
    #[prost(bool, tag = "1")]
    pub prem_status: bool,
    /// Qualified-investor flag.
    #[prost(bool, tag = "2")]
    pub qual_status: bool,
    /// Instrument classes the user is qualified for.
    #[prost(string, repeated, tag = "3")]
    pub qualified_for_work_with: Vec<String>,
    /// Tariff name.
    #[prost(string, tag = "4")]
    pub tariff: String,
}

// =============================================================================
// Client
// =============================================================================

/// Client for the `marketgate.v1.UsersService` service.
pub mod users_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value
    )]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    /// Unary users-service client.
    #[derive(Debug, Clone)]
    pub struct UsersServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl UsersServiceClient<tonic::transport::Channel> {
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
    impl<T> UsersServiceClient<T>
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
        ) -> UsersServiceClient<InterceptedService<T, F>>
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
            UsersServiceClient::new(InterceptedService::new(inner, interceptor))
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
        /// List accounts available to the token.
        pub async fn get_accounts(
            &mut self,
            request: impl tonic::IntoRequest<super::GetAccountsRequest>,
        ) -> std::result::Result<tonic::Response<super::GetAccountsResponse>, tonic::Status>
        {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/marketgate.v1.UsersService/GetAccounts",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("marketgate.v1.UsersService", "GetAccounts"));
            self.inner.unary(req, path, codec).await
        }
        /// Margin attributes of one account.
        pub async fn get_margin_attributes(
            &mut self,
            request: impl tonic::IntoRequest<super::GetMarginAttributesRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetMarginAttributesResponse>,
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
                "/marketgate.v1.UsersService/GetMarginAttributes",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new(
                    "marketgate.v1.UsersService",
                    "GetMarginAttributes",
                ));
            self.inner.unary(req, path, codec).await
        }
        /// Request and stream limits of the token's tariff.
        pub async fn get_user_tariff(
            &mut self,
            request: impl tonic::IntoRequest<super::GetUserTariffRequest>,
        ) -> std::result::Result<tonic::Response<super::GetUserTariffResponse>, tonic::Status>
        {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/marketgate.v1.UsersService/GetUserTariff",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("marketgate.v1.UsersService", "GetUserTariff"));
            self.inner.unary(req, path, codec).await
        }
        /// User flags and tariff name.
        pub async fn get_info(
            &mut self,
            request: impl tonic::IntoRequest<super::GetInfoRequest>,
        ) -> std::result::Result<tonic::Response<super::GetInfoResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/marketgate.v1.UsersService/GetInfo",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("marketgate.v1.UsersService", "GetInfo"));
            self.inner.unary(req, path, codec).await
        }
    }
}
