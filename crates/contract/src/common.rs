//! Shared value types used across the `marketgate.v1` services.

/// A decimal number split into integer units and fractional nanos.
///
/// `units` and `nano` always carry the same sign; `nano` is restricted to
/// `-999_999_999..=999_999_999`.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Quotation {
    /// Whole part of the number.
    #[prost(int64, tag = "1")]
    pub units: i64,
    /// Fractional part, in billionths.
    #[prost(int32, tag = "2")]
    pub nano: i32,
}

/// An amount of money in a specific currency.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoneyValue {
    /// ISO 4217 currency code, lower case.
    #[prost(string, tag = "1")]
    pub currency: String,
    /// Whole part of the amount.
    #[prost(int64, tag = "2")]
    pub units: i64,
    /// Fractional part, in billionths.
    #[prost(int32, tag = "3")]
    pub nano: i32,
}

/// Server keep-alive message on streaming connections.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Ping {
    /// Server time at which the ping was emitted.
    #[prost(message, optional, tag = "1")]
    pub time: Option<::prost_types::Timestamp>,
}
