//! Look up an instrument and print its latest quote and recent daily bars.
//!
//! Run with: LEMON_API_KEY=... cargo run --example fetch_market_data

use chrono::{Duration, Utc};
use futures_util::StreamExt;
use tracing_subscriber::EnvFilter;

use lemon_markets_rs::api::{InstrumentsQuery, OhlcQuery, QuotesQuery};
use lemon_markets_rs::LemonClient;

#[tokio::main]
async fn main() -> lemon_markets_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = LemonClient::from_env()?;

    // 1. Search instruments
    println!("=== Instruments matching \"tesla\" ===");
    let mut instruments = client
        .instruments()
        .list_stream(Some(InstrumentsQuery::search("tesla")));
    let mut first = None;
    while let Some(instrument) = instruments.next().await {
        let instrument = instrument?;
        println!(
            "{}  {:<30} {:?}",
            instrument.isin,
            instrument.title.as_deref().unwrap_or("-"),
            instrument.instrument_type
        );
        first.get_or_insert(instrument.isin);
    }

    let Some(isin) = first else {
        println!("No instruments found");
        return Ok(());
    };
    println!();

    // 2. Latest quote
    println!("=== Latest quote for {isin} ===");
    let quotes = client
        .market_data()
        .quotes(QuotesQuery::isins([isin.as_str()]).with_mic("XMUN"))
        .try_collect_all()
        .await?;
    for quote in &quotes {
        println!("Bid:    {} ({} shares)", quote.bid, quote.bid_volume);
        println!("Ask:    {} ({} shares)", quote.ask, quote.ask_volume);
        println!("Spread: {}", quote.spread());
        println!("Time:   {}", quote.time);
    }
    println!();

    // 3. Daily bars for the last week
    println!("=== Daily bars ===");
    let now = Utc::now();
    let query = OhlcQuery::isins([isin.as_str()])
        .with_mic("XMUN")
        .with_range(now - Duration::days(7), now);
    let mut bars = client.market_data().ohlc_per_day(query);
    while let Some(bar) = bars.next().await {
        let bar = bar?;
        println!(
            "{}  O {}  H {}  L {}  C {}  V {}",
            bar.time.date_naive(),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        );
    }

    Ok(())
}
