//! Wire contract for the MarketGate API (proto package `marketgate.v1`).
//!
//! Hand-maintained [`prost`] message definitions and [`tonic`] service
//! clients, kept in lockstep with the platform's published schema. Field
//! tags are load-bearing and are never reused or renumbered; the framing
//! tests under `tests/` pin the encoding of everything consumers dispatch
//! on.

#![forbid(unsafe_code)]

/// Shared value types (quotations, money, ping).
pub mod common;

/// Market-data stream contract and streaming client.
pub mod marketdata;

/// Users service contract and unary client.
pub mod users;
