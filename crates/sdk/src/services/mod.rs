//! Unary Service Wrappers
//!
//! Thin wrappers over the platform's unary gRPC services: marshal a request,
//! invoke the call, unwrap the response.

/// Users service (accounts, margin, tariff, info).
pub mod users;

pub use users::UsersService;
