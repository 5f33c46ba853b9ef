//! Place and activate a small paper-trading order, then list recent orders.
//!
//! Run with: LEMON_API_KEY=... cargo run --example place_order

use futures_util::StreamExt;
use tracing_subscriber::EnvFilter;

use lemon_markets_rs::api::OrdersQuery;
use lemon_markets_rs::models::{NewOrderBuilder, OrderSide};
use lemon_markets_rs::{Environment, LemonClient};

#[tokio::main]
async fn main() -> lemon_markets_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("LEMON_API_KEY").expect("LEMON_API_KEY required");
    let client = LemonClient::new(api_key, Environment::Paper)?;

    let account = client.account().get().await?;
    println!("Account:        {}", account.account_id);
    println!("Cash to invest: {:?}", account.cash_to_invest);
    println!();

    let order = NewOrderBuilder::new()
        .isin("US88160R1014")
        .side(OrderSide::Buy)
        .quantity(1)
        .venue("XMUN")
        .build()?;

    let placed = match client.orders().place(&order).await {
        Ok(placed) => placed,
        Err(e) if e.is_domain() => {
            println!("Order rejected: {e}");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    println!("Placed {} ({:?})", placed.id, placed.status);
    if let Some(price) = placed.estimated_price_total {
        println!("Estimated total: {:.2} EUR", price as f64 / 10_000.0);
    }

    client.orders().activate(&placed.id).await?;
    println!("Activated {}", placed.id);
    println!();

    println!("=== Recent orders ===");
    let query = OrdersQuery {
        limit: Some(10),
        ..Default::default()
    };
    let mut orders = client.orders().list_stream(Some(query)).take(10);
    while let Some(order) = orders.next().await {
        let order = order?;
        println!(
            "{}  {:?} {} x {}  {:?}",
            order.id, order.side, order.quantity, order.isin, order.status
        );
    }

    Ok(())
}
