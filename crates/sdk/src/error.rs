//! Error Taxonomy
//!
//! One error enum for the whole SDK surface. Transport failures below this
//! crate are wrapped, never swallowed: a failed call surfaces its
//! [`tonic::Status`], a dead stream surfaces through the session's error
//! callback, and nothing is retried here.

use crate::config::ConfigError;

/// Any failure surfaced by the SDK.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The underlying channel could not be built or connected.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// A call or stream failed with a gRPC status.
    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A configured value cannot be carried as gRPC metadata.
    #[error("invalid metadata value for {name}")]
    InvalidMetadata {
        /// Metadata key the value was destined for.
        name: &'static str,
    },

    /// The method is not served by the sandbox environment.
    #[error("{method} is not available in the sandbox environment")]
    SandboxUnsupported {
        /// Fully-qualified method name.
        method: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_error_preserves_status() {
        let error = SdkError::from(tonic::Status::unavailable("endpoint down"));
        assert!(matches!(&error, SdkError::Rpc(status) if status.message() == "endpoint down"));
        assert!(error.to_string().contains("endpoint down"));
    }

    #[test]
    fn sandbox_error_names_method() {
        let error = SdkError::SandboxUnsupported {
            method: "GetMarginAttributes",
        };
        assert!(error.to_string().contains("GetMarginAttributes"));
    }
}
