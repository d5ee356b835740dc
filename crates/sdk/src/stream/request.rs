//! Control-Message Builders
//!
//! Pure constructors for the outbound control messages of the market-data
//! stream. Each builder produces one [`MarketDataRequest`] carrying exactly
//! one subscription-kind payload. Instrument order is preserved verbatim
//! (the platform may use position in its acks), duplicates are not
//! collapsed, and an empty instrument list is legal - the platform is the
//! final arbiter of validity.

use marketgate_contract::marketdata::{
    CandleInstrument, InfoInstrument, LastPriceInstrument, MarketDataRequest, OrderBookInstrument,
    SubscribeCandlesRequest, SubscribeInfoRequest, SubscribeLastPriceRequest,
    SubscribeOrderBookRequest, SubscribeTradesRequest, SubscriptionAction, SubscriptionInterval,
    TradeInstrument, market_data_request::Payload,
};

/// Candle interval used when the caller does not pick one.
pub const DEFAULT_CANDLE_INTERVAL: SubscriptionInterval = SubscriptionInterval::OneMinute;

/// Order-book depth used when the caller does not pick one.
pub const DEFAULT_ORDER_BOOK_DEPTH: i32 = 1;

/// Build a trades control message.
#[must_use]
pub fn trades_request(instrument_ids: &[String], action: SubscriptionAction) -> MarketDataRequest {
    let instruments = instrument_ids
        .iter()
        .map(|id| TradeInstrument {
            instrument_id: id.clone(),
        })
        .collect();
    MarketDataRequest {
        payload: Some(Payload::SubscribeTradesRequest(SubscribeTradesRequest {
            subscription_action: action as i32,
            instruments,
        })),
    }
}

/// Build an order-book control message.
#[must_use]
pub fn order_book_request(
    instrument_ids: &[String],
    action: SubscriptionAction,
    depth: i32,
) -> MarketDataRequest {
    let instruments = instrument_ids
        .iter()
        .map(|id| OrderBookInstrument {
            depth,
            instrument_id: id.clone(),
        })
        .collect();
    MarketDataRequest {
        payload: Some(Payload::SubscribeOrderBookRequest(
            SubscribeOrderBookRequest {
                subscription_action: action as i32,
                instruments,
            },
        )),
    }
}

/// Build a candles control message.
#[must_use]
pub fn candles_request(
    instrument_ids: &[String],
    action: SubscriptionAction,
    interval: SubscriptionInterval,
    waiting_close: bool,
) -> MarketDataRequest {
    let instruments = instrument_ids
        .iter()
        .map(|id| CandleInstrument {
            interval: interval as i32,
            instrument_id: id.clone(),
        })
        .collect();
    MarketDataRequest {
        payload: Some(Payload::SubscribeCandlesRequest(SubscribeCandlesRequest {
            subscription_action: action as i32,
            instruments,
            waiting_close,
        })),
    }
}

/// Build an instrument-status control message.
#[must_use]
pub fn info_request(instrument_ids: &[String], action: SubscriptionAction) -> MarketDataRequest {
    let instruments = instrument_ids
        .iter()
        .map(|id| InfoInstrument {
            instrument_id: id.clone(),
        })
        .collect();
    MarketDataRequest {
        payload: Some(Payload::SubscribeInfoRequest(SubscribeInfoRequest {
            subscription_action: action as i32,
            instruments,
        })),
    }
}

/// Build a last-price control message.
#[must_use]
pub fn last_price_request(
    instrument_ids: &[String],
    action: SubscriptionAction,
) -> MarketDataRequest {
    let instruments = instrument_ids
        .iter()
        .map(|id| LastPriceInstrument {
            instrument_id: id.clone(),
        })
        .collect();
    MarketDataRequest {
        payload: Some(Payload::SubscribeLastPriceRequest(
            SubscribeLastPriceRequest {
                subscription_action: action as i32,
                instruments,
            },
        )),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    enum Kind {
        Trades,
        OrderBook,
        Candles,
        Info,
        LastPrice,
    }

    fn build(kind: &Kind, instrument_ids: &[String], action: SubscriptionAction) -> MarketDataRequest {
        match kind {
            Kind::Trades => trades_request(instrument_ids, action),
            Kind::OrderBook => {
                order_book_request(instrument_ids, action, DEFAULT_ORDER_BOOK_DEPTH)
            }
            Kind::Candles => {
                candles_request(instrument_ids, action, DEFAULT_CANDLE_INTERVAL, false)
            }
            Kind::Info => info_request(instrument_ids, action),
            Kind::LastPrice => last_price_request(instrument_ids, action),
        }
    }

    fn action_and_instruments(message: MarketDataRequest) -> (SubscriptionAction, Vec<String>) {
        match message.payload.expect("payload must be set") {
            Payload::SubscribeTradesRequest(r) => (
                r.subscription_action(),
                r.instruments.into_iter().map(|i| i.instrument_id).collect(),
            ),
            Payload::SubscribeOrderBookRequest(r) => (
                r.subscription_action(),
                r.instruments.into_iter().map(|i| i.instrument_id).collect(),
            ),
            Payload::SubscribeCandlesRequest(r) => (
                r.subscription_action(),
                r.instruments.into_iter().map(|i| i.instrument_id).collect(),
            ),
            Payload::SubscribeInfoRequest(r) => (
                r.subscription_action(),
                r.instruments.into_iter().map(|i| i.instrument_id).collect(),
            ),
            Payload::SubscribeLastPriceRequest(r) => (
                r.subscription_action(),
                r.instruments.into_iter().map(|i| i.instrument_id).collect(),
            ),
        }
    }

    #[test_case(Kind::Trades; "trades")]
    #[test_case(Kind::OrderBook; "order book")]
    #[test_case(Kind::Candles; "candles")]
    #[test_case(Kind::Info; "info")]
    #[test_case(Kind::LastPrice; "last price")]
    fn subscribe_then_unsubscribe_differ_only_in_action(kind: Kind) {
        let instrument_ids = ids(&["FIGI1", "FIGI2"]);

        let subscribe = build(&kind, &instrument_ids, SubscriptionAction::Subscribe);
        let unsubscribe = build(&kind, &instrument_ids, SubscriptionAction::Unsubscribe);

        let (sub_action, sub_ids) = action_and_instruments(subscribe);
        let (unsub_action, unsub_ids) = action_and_instruments(unsubscribe);

        assert_eq!(sub_action, SubscriptionAction::Subscribe);
        assert_eq!(unsub_action, SubscriptionAction::Unsubscribe);
        assert_eq!(sub_ids, instrument_ids);
        assert_eq!(unsub_ids, instrument_ids);
    }

    #[test_case(Kind::Trades; "trades")]
    #[test_case(Kind::OrderBook; "order book")]
    #[test_case(Kind::Candles; "candles")]
    #[test_case(Kind::Info; "info")]
    #[test_case(Kind::LastPrice; "last price")]
    fn empty_instrument_list_is_legal(kind: Kind) {
        let message = build(&kind, &[], SubscriptionAction::Subscribe);
        let (_, instrument_ids) = action_and_instruments(message);
        assert!(instrument_ids.is_empty());
    }

    #[test]
    fn each_builder_selects_its_own_payload_variant() {
        let instrument_ids = ids(&["FIGI1"]);
        let action = SubscriptionAction::Subscribe;

        assert!(matches!(
            trades_request(&instrument_ids, action).payload,
            Some(Payload::SubscribeTradesRequest(_))
        ));
        assert!(matches!(
            order_book_request(&instrument_ids, action, 1).payload,
            Some(Payload::SubscribeOrderBookRequest(_))
        ));
        assert!(matches!(
            candles_request(&instrument_ids, action, DEFAULT_CANDLE_INTERVAL, false).payload,
            Some(Payload::SubscribeCandlesRequest(_))
        ));
        assert!(matches!(
            info_request(&instrument_ids, action).payload,
            Some(Payload::SubscribeInfoRequest(_))
        ));
        assert!(matches!(
            last_price_request(&instrument_ids, action).payload,
            Some(Payload::SubscribeLastPriceRequest(_))
        ));
    }

    #[test]
    fn order_book_depth_applies_to_every_entry() {
        let message = order_book_request(
            &ids(&["FIGI1", "FIGI2", "FIGI3"]),
            SubscriptionAction::Subscribe,
            25,
        );
        let Some(Payload::SubscribeOrderBookRequest(request)) = message.payload else {
            panic!("wrong payload variant");
        };
        assert!(request.instruments.iter().all(|i| i.depth == 25));
    }

    #[test]
    fn candle_defaults_resolve_to_one_minute_without_wait() {
        let message = candles_request(
            &ids(&["FIGI1"]),
            SubscriptionAction::Subscribe,
            DEFAULT_CANDLE_INTERVAL,
            false,
        );
        let Some(Payload::SubscribeCandlesRequest(request)) = message.payload else {
            panic!("wrong payload variant");
        };
        assert!(!request.waiting_close);
        assert_eq!(
            request.instruments[0].interval(),
            SubscriptionInterval::OneMinute
        );
    }

    #[test]
    fn duplicate_instruments_are_not_collapsed() {
        let instrument_ids = ids(&["FIGI1", "FIGI1", "FIGI2", "FIGI1"]);
        let (_, out) = action_and_instruments(trades_request(
            &instrument_ids,
            SubscriptionAction::Subscribe,
        ));
        assert_eq!(out, instrument_ids);
    }

    proptest! {
        #[test]
        fn instrument_order_is_preserved_for_any_input(
            instrument_ids in proptest::collection::vec("[A-Z0-9]{1,16}", 0..48)
        ) {
            let message = last_price_request(&instrument_ids, SubscriptionAction::Subscribe);
            let (_, out) = action_and_instruments(message);
            prop_assert_eq!(out, instrument_ids);
        }

        #[test]
        fn depth_is_carried_verbatim(depth in 1i32..=50) {
            let message = order_book_request(
                &ids(&["FIGI1"]),
                SubscriptionAction::Subscribe,
                depth,
            );
            let Some(Payload::SubscribeOrderBookRequest(request)) = message.payload else {
                panic!("wrong payload variant");
            };
            prop_assert_eq!(request.instruments[0].depth, depth);
        }
    }
}
