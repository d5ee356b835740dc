//! Value Conversions
//!
//! Lossless conversions between the wire value types ([`Quotation`],
//! [`MoneyValue`], `google.protobuf.Timestamp`) and the `rust_decimal` /
//! `chrono` types application code works with.

use chrono::{DateTime, TimeZone, Utc};
use prost_types::Timestamp;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use marketgate_contract::common::{MoneyValue, Quotation};

const NANO_FACTOR: i64 = 1_000_000_000;

/// Convert a wire quotation into a decimal.
#[must_use]
pub fn quotation_to_decimal(quotation: Quotation) -> Decimal {
    Decimal::from(quotation.units) + Decimal::new(i64::from(quotation.nano), 9)
}

/// Convert a decimal into a wire quotation.
///
/// `units` and `nano` carry the sign of the input; values beyond the `i64`
/// unit range saturate.
#[must_use]
pub fn decimal_to_quotation(value: Decimal) -> Quotation {
    let units = value.trunc();
    let nano = ((value - units) * Decimal::from(NANO_FACTOR)).trunc();
    let saturated = if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    };
    Quotation {
        units: units.to_i64().unwrap_or(saturated),
        nano: nano.to_i32().unwrap_or_default(),
    }
}

/// Convert a wire money value into a decimal amount (currency dropped).
#[must_use]
pub fn money_to_decimal(money: &MoneyValue) -> Decimal {
    quotation_to_decimal(Quotation {
        units: money.units,
        nano: money.nano,
    })
}

/// Convert a decimal amount into a wire money value.
#[must_use]
pub fn decimal_to_money(value: Decimal, currency: impl Into<String>) -> MoneyValue {
    let quotation = decimal_to_quotation(value);
    MoneyValue {
        currency: currency.into(),
        units: quotation.units,
        nano: quotation.nano,
    }
}

/// Convert a protobuf timestamp into a UTC datetime.
///
/// Out-of-range timestamps collapse to the Unix epoch.
#[must_use]
pub fn timestamp_to_datetime(timestamp: Timestamp) -> DateTime<Utc> {
    Utc.timestamp_opt(
        timestamp.seconds,
        u32::try_from(timestamp.nanos).unwrap_or(0),
    )
    .single()
    .unwrap_or_default()
}

/// Convert a UTC datetime into a protobuf timestamp.
#[must_use]
pub fn datetime_to_timestamp(datetime: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: datetime.timestamp(),
        nanos: i32::try_from(datetime.timestamp_subsec_nanos()).unwrap_or(i32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotation_round_trip_positive() {
        let quotation = Quotation {
            units: 123,
            nano: 450_000_000,
        };
        let decimal = quotation_to_decimal(quotation);
        assert_eq!(decimal, Decimal::new(12345, 2));
        assert_eq!(decimal_to_quotation(decimal), quotation);
    }

    #[test]
    fn quotation_round_trip_negative() {
        // units and nano share the sign
        let quotation = Quotation {
            units: -1,
            nano: -500_000_000,
        };
        let decimal = quotation_to_decimal(quotation);
        assert_eq!(decimal, Decimal::new(-15, 1));
        assert_eq!(decimal_to_quotation(decimal), quotation);
    }

    #[test]
    fn quotation_round_trip_fraction_only() {
        let quotation = Quotation {
            units: 0,
            nano: 250_000_000,
        };
        assert_eq!(
            decimal_to_quotation(quotation_to_decimal(quotation)),
            quotation
        );
    }

    #[test]
    fn quotation_zero() {
        assert_eq!(quotation_to_decimal(Quotation::default()), Decimal::ZERO);
        assert_eq!(decimal_to_quotation(Decimal::ZERO), Quotation::default());
    }

    #[test]
    fn money_round_trip() {
        let money = MoneyValue {
            currency: "usd".to_string(),
            units: 10,
            nano: 990_000_000,
        };
        let decimal = money_to_decimal(&money);
        assert_eq!(decimal, Decimal::new(1099, 2));
        assert_eq!(decimal_to_money(decimal, "usd"), money);
    }

    #[test]
    fn timestamp_round_trip() {
        let datetime = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap();
        let timestamp = datetime_to_timestamp(datetime);
        assert_eq!(timestamp.seconds, datetime.timestamp());
        assert_eq!(timestamp_to_datetime(timestamp), datetime);
    }

    #[test]
    fn out_of_range_timestamp_collapses_to_epoch() {
        let timestamp = Timestamp {
            seconds: i64::MAX,
            nanos: 0,
        };
        assert_eq!(
            timestamp_to_datetime(timestamp),
            DateTime::<Utc>::default()
        );
    }
}
