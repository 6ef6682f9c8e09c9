//! IEX REST Demo
//!
//! Fetches a handful of REST endpoints for one symbol and prints them.
//! The streaming feeds need a socket.io-compatible transport supplied by
//! the host application, so they are exercised by the test suite rather
//! than here.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin iex-demo -- AAPL
//! ```

use anyhow::Context;
use iex_client::{RestClient, attribution};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "SPY".to_string());
    let client = RestClient::new();

    let quote = client
        .quote(&symbol)
        .await
        .with_context(|| format!("fetching quote for {symbol}"))?;
    println!(
        "{} ({}): {} [{:?}]",
        quote.symbol, quote.company_name, quote.latest_price, quote.latest_source
    );

    let price = client
        .price(&symbol)
        .await
        .with_context(|| format!("fetching price for {symbol}"))?;
    println!("latest price: {price}");

    let tops = client
        .tops(&[symbol.as_str()])
        .await
        .with_context(|| format!("fetching TOPS snapshot for {symbol}"))?;
    for record in tops {
        println!(
            "TOPS {}: bid {} x {}, ask {} x {}",
            record.symbol, record.bid_price, record.bid_size, record.ask_price, record.ask_size
        );
    }

    let event = client
        .deep_system_event()
        .await
        .context("fetching system event")?;
    println!("system event: {:?} at {}", event.system_event, event.timestamp);

    println!();
    println!("{} {}", attribution::CITATION, attribution::LINK);

    Ok(())
}
