use std::time::Duration;

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shapeshift_api_client::types::{SendAmountParams, ShiftParams};
use shapeshift_api_client::{AffiliateKeys, Cancellation, ShapeShiftClient, ShapeShiftError};

fn build_client(server: &MockServer) -> ShapeShiftClient {
    ShapeShiftClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_shift() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "deposit": "1depositAddress",
        "depositType": "BTC",
        "withdrawal": "LwithdrawalAddress",
        "withdrawalType": "LTC",
        "apiPubKey": "affiliate_pub",
    });

    Mock::given(method("POST"))
        .and(path("/shift"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "withdrawal": "LwithdrawalAddress",
            "pair": "btc_ltc",
            "returnAddress": "1returnAddress",
            "apiKey": "affiliate_pub",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = ShapeShiftClient::builder()
        .base_url(server.uri())
        .affiliate(AffiliateKeys::new("affiliate_pub", "affiliate_priv"))
        .build();
    let params = ShiftParams::new("LwithdrawalAddress", "btc_ltc").return_address("1returnAddress");
    let shift = client.shift(&params).await.unwrap();

    assert_eq!(shift.deposit_address, "1depositAddress");
    assert_eq!(shift.deposit_coin, "BTC");
    assert_eq!(shift.withdrawal_coin, "LTC");
    assert_eq!(shift.api_key, "affiliate_pub");
    assert!(shift.error.is_none());
}

#[tokio::test]
async fn test_send_amount() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": {
            "pair": "btc_ltc",
            "withdrawal": "LwithdrawalAddress",
            "withdrawalAmount": "7.5",
            "deposit": "1depositAddress",
            "depositAmount": "0.107",
            "expiration": 1_427_149_038_191u64,
            "quotedRate": "70.1",
            "maxLimit": 2.5,
            "minerFee": "0.001",
        }
    });

    Mock::given(method("POST"))
        .and(path("/sendamount"))
        .and(body_json(serde_json::json!({
            "amount": "7.5",
            "withdrawal": "LwithdrawalAddress",
            "pair": "btc_ltc",
            "destTag": "12345",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = SendAmountParams::new(7.5, "LwithdrawalAddress", "btc_ltc").ripple_tag("12345");
    let request = client.get_send_amount(&params).await.unwrap();

    assert_eq!(request.pair, "btc_ltc");
    assert_eq!(request.withdrawal_amount, 7.5);
    assert_eq!(request.deposit_amount, 0.107);
    assert_eq!(request.deposit_address, "1depositAddress");
}

#[tokio::test]
async fn test_quote() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": {
            "pair": "btc_ltc",
            "withdrawalAmount": "1",
            "depositAmount": "0.0143",
            "quotedRate": "70.1",
            "minerFee": "0.001",
        }
    });

    Mock::given(method("POST"))
        .and(path("/sendamount"))
        .and(body_json(serde_json::json!({"amount": "1", "pair": "btc_ltc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let quote = client.request_quote("btc_ltc", 1.0).await.unwrap();

    assert_eq!(quote.pair, "btc_ltc");
    assert_eq!(quote.withdrawal_amount, 1.0);
    assert_eq!(quote.deposit_amount, 0.0143);
}

#[tokio::test]
async fn test_cancel_pending() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cancelpending"))
        .and(body_json(serde_json::json!({"address": "1depositAddress"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": " Pending Transaction cancelled "})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.cancel_pending("1depositAddress").await.unwrap();

    assert!(result.success);
    assert_eq!(result.message, " Pending Transaction cancelled ");
    assert!(result.error.is_none());
}

#[tokio::test]
async fn test_cancel_pending_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cancelpending"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"error": "Unable to find pending transaction"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.cancel_pending("1unknown").await.unwrap();

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Unable to find pending transaction"));
}

#[tokio::test]
async fn test_cancellation_aborts_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mail"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"email": {"status": "success"}}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let token = Cancellation::new();
    let client = ShapeShiftClient::builder()
        .base_url(server.uri())
        .cancellation(token.clone())
        .build();

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = client
        .request_email_receipt("user@example.com", "tx1")
        .await
        .unwrap_err();
    assert!(matches!(err, ShapeShiftError::Cancelled));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cancelpending"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = ShapeShiftClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build();
    let err = client.cancel_pending("1depositAddress").await.unwrap_err();

    assert!(matches!(err, ShapeShiftError::Timeout));
}
