use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shapeshift_api_client::types::CoinStatus;
use shapeshift_api_client::{ErrorEnvelope, ShapeShiftClient, ShapeShiftError};

fn build_client(server: &MockServer) -> ShapeShiftClient {
    ShapeShiftClient::builder().base_url(server.uri()).build()
}

fn coin(name: &str, symbol: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "symbol": symbol,
        "image": format!("https://shapeshift.io/images/coins/{}.png", name.to_lowercase()),
        "status": status,
    })
}

async fn mount_coins(server: &MockServer) {
    let response = serde_json::json!({
        "BTC": coin("Bitcoin", "BTC", "available"),
        "XMR": coin("Monero", "XMR", "unavailable"),
        "LTC": coin("Litecoin", "LTC", "available"),
        "ETH": coin("Ether", "ETH", "available"),
    });

    Mock::given(method("GET"))
        .and(path("/getcoins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_all_coins() {
    let server = MockServer::start().await;
    mount_coins(&server).await;

    let client = build_client(&server);
    let coins = client.get_all_coins().await.unwrap();

    let symbols: Vec<_> = coins.iter().map(|c| c.symbol.as_str()).collect();
    assert_eq!(symbols, ["BTC", "XMR", "LTC", "ETH"]);
    assert_eq!(coins[0].name, "Bitcoin");
    assert_eq!(coins[0].image_link, "https://shapeshift.io/images/coins/bitcoin.png");
    assert_eq!(coins[1].status, CoinStatus::Unavailable);
}

#[tokio::test]
async fn test_get_all_pairs_skips_unavailable_coins() {
    let server = MockServer::start().await;
    mount_coins(&server).await;

    let client = build_client(&server);
    let pairs = client.get_all_pairs().await.unwrap();

    let tokens: Vec<_> = pairs.iter().map(|p| p.pair.as_str()).collect();
    assert_eq!(
        tokens,
        ["BTC_LTC", "BTC_ETH", "LTC_BTC", "LTC_ETH", "ETH_BTC", "ETH_LTC"]
    );
}

#[tokio::test]
async fn test_get_market_info() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "pair": "btc_ltc",
        "rate": "70.1234",
        "limit": 2.5,
        "minimum": 0.0001,
        "min": 0.0002,
        "minerFee": 0.001,
    });

    Mock::given(method("GET"))
        .and(path("/marketinfo/btc_ltc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client.get_market_info_for("btc", "ltc").await.unwrap();

    assert_eq!(info.pair, "btc_ltc");
    assert_eq!(info.rate, 70.1234);
    assert_eq!(info.limit, 2.5);
    assert_eq!(info.min, 0.0002);
    assert_eq!(info.miner_fee, 0.001);
    assert!(!info.has_error());
}

#[tokio::test]
async fn test_service_error_is_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rate/btc_nope"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "Unknown pair"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rate = client.get_rate("btc_nope").await.unwrap();

    assert_eq!(rate.error.as_deref(), Some("Unknown pair"));
    assert_eq!(rate.rate, 0.0);
    assert!(matches!(rate.into_result(), Err(ShapeShiftError::Api(message)) if message == "Unknown pair"));
}

#[tokio::test]
async fn test_get_all_limits() {
    let server = MockServer::start().await;
    mount_coins(&server).await;

    for (pair, limit) in [
        ("BTC_LTC", "1.5"),
        ("BTC_ETH", "1.6"),
        ("LTC_BTC", "100"),
        ("LTC_ETH", "101"),
        ("ETH_BTC", "20"),
        ("ETH_LTC", "21"),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/limit/{pair}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"pair": pair, "limit": limit})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = build_client(&server);
    let limits = client.get_all_limits().await.unwrap();

    assert_eq!(limits.len(), 6);
    assert_eq!(limits[0].pair, "BTC_LTC");
    assert_eq!(limits[0].limit, 1.5);
    assert_eq!(limits[5].pair, "ETH_LTC");
    assert_eq!(limits[5].limit, 21.0);
}

#[tokio::test]
async fn test_aggregate_aborts_on_first_failure() {
    let server = MockServer::start().await;
    mount_coins(&server).await;

    for pair in ["BTC_LTC", "BTC_ETH", "LTC_BTC"] {
        Mock::given(method("GET"))
            .and(path(format!("/rate/{pair}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"pair": pair, "rate": "1.0"})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }
    // Fourth pair fails.
    Mock::given(method("GET"))
        .and(path("/rate/LTC_ETH"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;
    for pair in ["ETH_BTC", "ETH_LTC"] {
        Mock::given(method("GET"))
            .and(path(format!("/rate/{pair}")))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
    }

    let client = build_client(&server);
    let err = client.get_all_rates().await.unwrap_err();

    match err {
        ShapeShiftError::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
