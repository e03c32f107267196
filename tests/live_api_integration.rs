//! Integration tests against the live BTC Markets API.
//!
//! All tests are `#[ignore]` because they require network access and real
//! credentials in `BTCMARKETS_API_KEY` / `BTCMARKETS_SECRET`.
//!
//! Run with:
//! ```bash
//! cargo test --test live_api_integration -- --ignored
//! ```

use btcmarkets_sdk::prelude::*;

fn live_client() -> BtcMarketsClient {
    let credentials = Credentials::from_env().expect("credentials must be set in the environment");
    BtcMarketsClient::new(credentials)
}

#[tokio::test]
#[ignore]
async fn tick_returns_plausible_prices() {
    let client = live_client();
    let tick = client.market().tick("btc", "aud").await.expect("tick");

    assert_eq!(tick.instrument, "BTC");
    assert_eq!(tick.currency, "AUD");
    assert!(tick.best_bid <= tick.best_ask);
}

#[tokio::test]
#[ignore]
async fn all_ticks_covers_known_instruments() {
    let client = live_client();
    let ticks = client.market().all_ticks("AUD").await.expect("all_ticks");
    assert_eq!(ticks.len(), KNOWN_INSTRUMENTS.len());
}

#[tokio::test]
#[ignore]
async fn orderbook_has_both_sides() {
    let client = live_client();
    let book = client.market().orderbook("BTC", "AUD").await.expect("orderbook");
    assert!(!book.bids.is_empty());
    assert!(!book.asks.is_empty());
}

#[tokio::test]
#[ignore]
async fn balance_decodes_and_converts() {
    let client = live_client();
    let balances = client.account().balance().await.expect("balance");
    // Every held currency appears once; amounts are already decimal.
    for entry in &balances {
        assert!(!entry.currency.is_empty());
    }
}

#[tokio::test]
#[ignore]
async fn open_orders_parses() {
    let client = live_client();
    let open = client
        .orders()
        .open("BTC", "AUD", 10, 1)
        .await
        .expect("open orders");
    assert!(open.get("success").is_some());
}
