#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::default_trait_access,
        clippy::needless_pass_by_value
    )
)]

//! MarketGate SDK - Brokerage Platform Client
//!
//! Client SDK for the MarketGate brokerage trading platform. Most of the
//! surface wraps the platform's unary gRPC calls; the interesting part is
//! the market-data streaming subscription manager, which multiplexes five
//! subscription kinds over one long-lived bidirectional stream and supports
//! idempotent cross-thread cancellation.
//!
//! # Layers (inside → outside)
//!
//! - `stream`: the streaming core - control-message builders, the inbound
//!   dispatcher, and the subscription session
//! - `services`: unary service wrappers
//! - `transport`: the stream-transport port and the tonic adapter (TLS,
//!   auth metadata)
//! - `client`: the facade tying channel, config and the ambient
//!   cancellation scope together
//! - `config` / `error` / `convert`: ambient concerns
//!
//! # Data Flow
//!
//! ```text
//! subscribe_*/unsubscribe_* ──► outbound queue ──► gRPC stream ──► platform
//!
//! platform ──► gRPC stream ──► inbound dispatcher ──► StreamProcessor
//!                                   │
//!                                   └──► error callback (abnormal close)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Client facade.
pub mod client;

/// Configuration loaded from the environment.
pub mod config;

/// Conversions between wire values and `rust_decimal`/`chrono` types.
pub mod convert;

/// Error taxonomy.
pub mod error;

/// Unary service wrappers.
pub mod services;

/// Market-data streaming core.
pub mod stream;

/// Stream-transport port and gRPC adapter.
pub mod transport;

// =============================================================================
// Re-exports
// =============================================================================

/// Wire contract types (`marketgate.v1`).
pub use marketgate_contract as contract;

pub use client::MarketGateClient;
pub use config::{ConfigError, Environment, SdkConfig};
pub use error::SdkError;
pub use services::UsersService;
pub use stream::session::MarketDataStreamSession;
pub use stream::{ErrorCallback, StreamProcessor, StreamState};
pub use transport::{GrpcTransport, InboundStream, StreamTransport};
