//! Service-level tests.
//!
//! Each service is driven through `LemonClient::with_transports` with scripted
//! transports, asserting which API a call goes to and what it sends.

mod common;

use chrono::{TimeZone, Utc};
use futures_util::StreamExt;
use rust_decimal_macros::dec;
use serde_json::json;

use common::{client, locator, order, page, position, single, MockTransport, Reply};
use lemon_markets_rs::api::{
    BankStatementsQuery, OhlcQuery, OrdersQuery, QuotesQuery, StatementsQuery, TradesQuery,
};
use lemon_markets_rs::client::Method;
use lemon_markets_rs::models::{BankStatementType, NewWithdrawal, OrderStatus, Sorting};
use lemon_markets_rs::prelude::*;

mod account_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_account() {
        let trading = MockTransport::new()
            .with(
                "account",
                single(json!({
                    "account_id": "acc_pyNQNll66xbc9Mgm4xbCsJvRzYkqQ1Gy3j",
                    "deposit_id": "K2057263187",
                    "trading_plan": "basic",
                    "balance": 1000000000
                })),
            )
            .shared();
        let client = client(trading.clone(), MockTransport::new().shared(), MockTransport::new().shared());

        let account = client.account().get().await.unwrap();
        assert_eq!(account.trading_plan.as_deref(), Some("basic"));
        assert_eq!(account.deposit_id.as_deref(), Some("K2057263187"));

        let requests = trading.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
    }

    #[tokio::test]
    async fn test_create_withdrawal_posts_body() {
        let trading = MockTransport::new()
            .with("account/withdrawals", single(serde_json::Value::Null))
            .shared();
        let client = client(trading.clone(), MockTransport::new().shared(), MockTransport::new().shared());

        client
            .account()
            .create_withdrawal(&NewWithdrawal::new(1_000_000, "1234"))
            .await
            .unwrap();

        let request = &trading.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Some(json!({"amount": 1000000, "pin": "1234"})));
    }

    #[tokio::test]
    async fn test_withdrawals_and_documents_stream() {
        let trading = MockTransport::new()
            .with(
                "account/withdrawals",
                page(
                    json!([{"id": "wtd_1", "amount": 1000000, "date": "2021-12-01"}]),
                    None,
                    1,
                    1,
                ),
            )
            .with(
                "account/documents",
                page(json!([{"id": "doc_1", "name": "report.pdf"}]), None, 1, 1),
            )
            .shared();
        let client = client(trading.clone(), MockTransport::new().shared(), MockTransport::new().shared());

        let withdrawals = client.account().withdrawals().try_collect_all().await.unwrap();
        assert_eq!(withdrawals[0].amount, 1_000_000);

        let documents = client.account().documents().try_collect_all().await.unwrap();
        assert_eq!(documents[0].name, "report.pdf");
    }

    #[tokio::test]
    async fn test_bank_statements_query() {
        let trading = MockTransport::new()
            .with(
                "account/bankstatements?sorting=asc&type=pay_in",
                page(
                    json!([{"id": "bst_1", "type": "pay_in", "amount": 100000000}]),
                    None,
                    1,
                    1,
                ),
            )
            .shared();
        let client = client(trading.clone(), MockTransport::new().shared(), MockTransport::new().shared());

        let query = BankStatementsQuery {
            statement_type: Some(BankStatementType::PayIn),
            sorting: Some(Sorting::Asc),
            ..Default::default()
        };
        let statements = client
            .account()
            .bank_statements(Some(query))
            .try_collect_all()
            .await
            .unwrap();

        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].statement_type, BankStatementType::PayIn);
    }
}

mod orders_tests {
    use super::*;

    fn client_with(trading: std::sync::Arc<MockTransport>) -> LemonClient {
        client(trading, MockTransport::new().shared(), MockTransport::new().shared())
    }

    #[tokio::test]
    async fn test_place_then_activate() {
        let trading = MockTransport::new()
            .with("orders", single(order("ord_1", "inactive")))
            .with("orders/ord_1/activate", single(serde_json::Value::Null))
            .shared();
        let client = client_with(trading.clone());

        let new_order = NewOrderBuilder::new()
            .isin("US88160R1014")
            .side(OrderSide::Buy)
            .quantity(1)
            .venue("XMUN")
            .idempotency("place-1")
            .build()
            .unwrap();

        let placed = client.orders().place(&new_order).await.unwrap();
        assert_eq!(placed.status, OrderStatus::Inactive);
        client.orders().activate(&placed.id).await.unwrap();

        let requests = trading.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].target, "orders");
        assert_eq!(
            requests[0].body.as_ref().unwrap()["idempotency"],
            json!("place-1")
        );
        assert_eq!(requests[1].method, Method::POST);
        assert_eq!(requests[1].target, "orders/ord_1/activate");
        assert!(requests[1].body.is_none());
    }

    #[tokio::test]
    async fn test_get_and_cancel() {
        let trading = MockTransport::new()
            .with("orders/ord_1", single(order("ord_1", "open")))
            .shared();
        let client = client_with(trading.clone());

        let id = OrderId::new("ord_1");
        let fetched = client.orders().get(&id).await.unwrap();
        assert_eq!(fetched.status, OrderStatus::Open);
        client.orders().cancel(&id).await.unwrap();

        let requests = trading.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[1].method, Method::DELETE);
        assert_eq!(requests[1].target, "orders/ord_1");
    }

    #[tokio::test]
    async fn test_list_collects_every_page() {
        let trading = MockTransport::new()
            .with(
                "orders?status=executed",
                page(
                    json!([order("ord_1", "executed"), order("ord_2", "executed")]),
                    Some(&locator("orders?status=executed&page=2")),
                    1,
                    2,
                ),
            )
            .with(
                locator("orders?status=executed&page=2"),
                page(json!([order("ord_3", "executed")]), None, 2, 2),
            )
            .shared();
        let client = client_with(trading.clone());

        let query = OrdersQuery {
            status: Some(OrderStatus::Executed),
            ..Default::default()
        };
        let orders = client.orders().list(Some(query)).await.unwrap();

        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ord_1", "ord_2", "ord_3"]);
        assert!(orders.iter().all(|o| o.is_final()));
        assert_eq!(trading.calls(), 2);
    }

    #[tokio::test]
    async fn test_list_surfaces_domain_error() {
        let trading = MockTransport::new()
            .with(
                "orders",
                page(json!([order("ord_1", "open")]), Some(&locator("orders?page=2")), 1, 2),
            )
            .with(
                locator("orders?page=2"),
                Reply::Domain {
                    code: "plan_not_allowed",
                    message: "your plan does not allow this",
                },
            )
            .shared();
        let client = client_with(trading);

        let err = client.orders().list(None).await.unwrap_err();
        assert!(err.is_domain());
        assert_eq!(err.to_string(), "your plan does not allow this");
    }

    #[tokio::test]
    async fn test_invalid_order_sends_nothing() {
        let err = NewOrderBuilder::new()
            .isin("US88160R1014")
            .side(OrderSide::Sell)
            .quantity(-1)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Client);
    }
}

mod positions_tests {
    use super::*;

    #[tokio::test]
    async fn test_positions_and_statements() {
        let trading = MockTransport::new()
            .with(
                "positions",
                page(json!([position("US88160R1014", 2), position("DE0007664039", 5)]), None, 1, 1),
            )
            .with(
                "positions/statements?isin=US88160R1014&types=order_buy&types=split",
                page(
                    json!([{
                        "id": "pst_1",
                        "order_id": "ord_1",
                        "type": "order_buy",
                        "quantity": 2,
                        "isin": "US88160R1014",
                        "date": "2021-12-10"
                    }]),
                    None,
                    1,
                    1,
                ),
            )
            .shared();
        let client = client(trading.clone(), MockTransport::new().shared(), MockTransport::new().shared());

        let positions = client.positions().list_stream(None).try_collect_all().await.unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1].quantity, 5);
        assert_eq!(positions[1].estimated_price_total, Some(5000000));

        let query = StatementsQuery {
            isin: Some("US88160R1014".into()),
            types: vec!["order_buy".into(), "split".into()],
            ..Default::default()
        };
        let statements = client
            .positions()
            .statements(Some(query))
            .try_collect_all()
            .await
            .unwrap();
        assert_eq!(statements[0].order_id.as_deref(), Some("ord_1"));
    }
}

mod market_data_tests {
    use super::*;

    #[tokio::test]
    async fn test_instruments_use_market_data_api() {
        let market_data = MockTransport::new()
            .with(
                "instruments?search=tesla",
                page(
                    json!([{
                        "isin": "US88160R1014",
                        "wkn": "A1CX3T",
                        "title": "TESLA INC.",
                        "type": "stock",
                        "venues": [{"mic": "XMUN", "is_open": true, "tradable": true}]
                    }]),
                    None,
                    1,
                    1,
                ),
            )
            .with("venues", page(json!([{"mic": "XMUN", "title": "Gettex"}]), None, 1, 1))
            .shared();
        let trading = MockTransport::new().shared();
        let client = client(trading.clone(), market_data.clone(), MockTransport::new().shared());

        let instruments = client
            .instruments()
            .list_stream(Some(InstrumentsQuery::search("tesla")))
            .try_collect_all()
            .await
            .unwrap();
        assert_eq!(instruments[0].instrument_type, InstrumentType::Stock);
        assert!(instruments[0].venue("XMUN").is_some());

        let venues = client.instruments().venues(None).try_collect_all().await.unwrap();
        assert_eq!(venues[0].mic.as_str(), "XMUN");

        assert_eq!(trading.calls(), 0);
        assert_eq!(market_data.calls(), 2);
    }

    #[tokio::test]
    async fn test_quotes_query_and_decimals() {
        let market_data = MockTransport::new()
            .with(
                "quotes?isin=US88160R1014&mic=XMUN",
                page(
                    json!([{
                        "isin": "US88160R1014",
                        "b_v": 87,
                        "a_v": 87,
                        "b": 921.1,
                        "a": 924.3,
                        "t": "2021-10-28T09:09:04.440+00:00",
                        "mic": "XMUN"
                    }]),
                    None,
                    1,
                    1,
                ),
            )
            .shared();
        let client = client(MockTransport::new().shared(), market_data, MockTransport::new().shared());

        let mut quotes = client
            .market_data()
            .quotes(QuotesQuery::isins(["US88160R1014"]).with_mic("XMUN"));
        let quote = quotes.next().await.unwrap().unwrap();
        assert_eq!(quote.bid, dec!(921.1));
        assert_eq!(quote.ask_volume, 87);
        assert!(quotes.next().await.is_none());
    }

    #[tokio::test]
    async fn test_ohlc_period_paths() {
        let bar = json!([{
            "isin": "US88160R1014",
            "o": 921.1, "h": 930.0, "l": 919.5, "c": 925.2, "v": 1200,
            "t": "2021-11-05T00:00:00.000+00:00",
            "mic": "XMUN"
        }]);
        let from = Utc.with_ymd_and_hms(2021, 11, 5, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2021, 11, 6, 0, 0, 0).unwrap();
        let query_string = "from=2021-11-05T00%3A00%3A00Z&isin=US88160R1014&to=2021-11-06T00%3A00%3A00Z";

        let market_data = MockTransport::new()
            .with(format!("ohlc/m1?{query_string}"), page(bar.clone(), None, 1, 1))
            .with(format!("ohlc/h1?{query_string}"), page(bar.clone(), None, 1, 1))
            .with(format!("ohlc/d1?{query_string}"), page(bar, None, 1, 1))
            .shared();
        let client = client(MockTransport::new().shared(), market_data.clone(), MockTransport::new().shared());

        let query = OhlcQuery::isins(["US88160R1014"]).with_range(from, to);
        let minute = client.market_data().ohlc_per_minute(query.clone()).try_collect_all().await.unwrap();
        let hour = client.market_data().ohlc_per_hour(query.clone()).try_collect_all().await.unwrap();
        let day = client.market_data().ohlc(OhlcPeriod::Day, query).try_collect_all().await.unwrap();

        assert_eq!(minute[0].close, dec!(925.2));
        assert_eq!(hour.len(), 1);
        assert_eq!(day[0].volume, 1200);
        let targets: Vec<String> = market_data.requests().into_iter().map(|r| r.target).collect();
        assert_eq!(targets, vec!["ohlc/m1", "ohlc/h1", "ohlc/d1"]);
    }

    #[tokio::test]
    async fn test_trades() {
        let market_data = MockTransport::new()
            .with(
                "trades?isin=US88160R1014&sorting=desc",
                page(
                    json!([{"isin": "US88160R1014", "p": 921.5, "v": 10, "t": "2021-11-05T10:00:00.000+00:00", "mic": "XMUN"}]),
                    None,
                    1,
                    1,
                ),
            )
            .shared();
        let client = client(MockTransport::new().shared(), market_data, MockTransport::new().shared());

        let trades = client
            .market_data()
            .trades(TradesQuery::isins(["US88160R1014"]).with_sorting(Sorting::Desc))
            .try_collect_all()
            .await
            .unwrap();
        assert_eq!(trades[0].price, dec!(921.5));
    }
}

mod streaming_tests {
    use super::*;

    #[tokio::test]
    async fn test_token_uses_streaming_api() {
        let streaming = MockTransport::new()
            .with(
                "auth",
                Reply::Json(json!({"token": "tok", "user_id": "usr_1", "expires_at": 1640000000000i64})),
            )
            .shared();
        let client = client(MockTransport::new().shared(), MockTransport::new().shared(), streaming.clone());

        let token = client.streaming().token().await.unwrap();
        assert_eq!(token.token, "tok");
        assert_eq!(streaming.requests()[0].method, Method::POST);
    }

    #[tokio::test]
    async fn test_token_decode_error() {
        let streaming = MockTransport::new().with("auth", Reply::Raw("{}")).shared();
        let client = client(MockTransport::new().shared(), MockTransport::new().shared(), streaming);

        let err = client.streaming().token().await.unwrap_err();
        assert!(err.is_decode());
    }
}
