//! Subscribe to last prices and candles for a pair of instruments.
//!
//! ```bash
//! MARKETGATE_TOKEN=t.your-token cargo run -p marketgate-sdk --example stream_market_data
//! ```

use std::time::Duration;

use marketgate_sdk::contract::marketdata::{MarketDataResponse, market_data_response::Payload};
use marketgate_sdk::{MarketGateClient, SdkConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = SdkConfig::from_env()?;
    let client = MarketGateClient::connect(config).await?;

    let session = client
        .market_data_stream(
            |response: MarketDataResponse| match response.payload {
                Some(Payload::LastPrice(update)) => {
                    println!("last price {}: {:?}", update.instrument_id, update.price);
                }
                Some(Payload::Candle(candle)) => {
                    println!("candle {}: {:?}", candle.instrument_id, candle.close);
                }
                _ => {}
            },
            Some(Box::new(|error| eprintln!("stream failed: {error}"))),
        )
        .await?;

    let instruments = vec!["BBG004730N88".to_string(), "BBG0047315D0".to_string()];
    session.subscribe_last_prices(&instruments);
    session.subscribe_candles(&instruments);

    tokio::time::sleep(Duration::from_secs(30)).await;

    session.cancel();
    client.shutdown();
    Ok(())
}
