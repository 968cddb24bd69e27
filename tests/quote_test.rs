//! Deserialization tests for the CoinGecko simple-price wire shape.

use rust_decimal_macros::dec;

use pricelock::models::SimplePriceResponse;

#[test]
fn deserialize_simple_price_response() {
    let json = r#"{"bitcoin": {"usd": 60123.45}}"#;

    let response: SimplePriceResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.bitcoin.usd, dec!(60123.45));
}

#[test]
fn deserialize_integer_price() {
    let json = r#"{"bitcoin": {"usd": 60000}}"#;

    let response: SimplePriceResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.bitcoin.usd, dec!(60000));
}

#[test]
fn extra_assets_and_currencies_are_ignored() {
    let json = r#"{
        "bitcoin": {"usd": 61500.2, "eur": 56700.1},
        "ethereum": {"usd": 2250.0}
    }"#;

    let response: SimplePriceResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.bitcoin.usd, dec!(61500.2));
}

#[test]
fn missing_bitcoin_entry_fails() {
    let json = r#"{"ethereum": {"usd": 2250.0}}"#;

    let result: Result<SimplePriceResponse, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn missing_usd_field_fails() {
    let json = r#"{"bitcoin": {"eur": 56700.1}}"#;

    let result: Result<SimplePriceResponse, _> = serde_json::from_str(json);

    assert!(result.is_err());
}
