use auction_batch::domain::{Auction, Bid, Payment, User};
use auction_batch::money::{Amount, Currency};
use serde_json::{from_str, json, to_string, to_value};
use std::str::FromStr;
#[path="utils/mod.rs"] mod utils;
use utils::*;

fn sample_auction() -> Auction {
    let mut auction = Auction::new(7, "TV de Plasma", date(2017, 11, 1));
    auction.place_bid(Bid::new(jose(), brl(2000)).unwrap());
    auction
}

#[test]
fn test_amount_serialization() {
    let amount = brl(2500);

    // Can parse amount string
    let parsed = Amount::from_str("BRL2500").unwrap();
    assert_eq!(parsed, amount);

    // Can convert back to string
    assert_eq!(amount.to_string(), "BRL2500");

    let serialized = to_string(&amount).unwrap();
    assert_eq!(serialized, "\"BRL2500\"");
    let deserialized: Amount = from_str(&serialized).unwrap();
    assert_eq!(deserialized, amount);
}

#[test]
fn test_amount_parse_errors() {
    assert!(Amount::from_str("2500").is_err());
    assert!(Amount::from_str("XYZ10").is_err());
    assert!(Amount::from_str("SEKten").is_err());
    // Multi-byte letters in the currency part
    assert!(Amount::from_str("aÉ10").is_err());
    assert!(Amount::from_str("SEKÉ").is_err());
    assert!(Amount::from_str("É").is_err());
    assert_eq!(Currency::from_str("DKK"), Ok(Currency::DKK));
}

#[test]
fn test_user_serialization() {
    let user = User::new("maria", "Maria da Penha");
    assert_eq!(to_string(&user).unwrap(), "\"maria|Maria da Penha\"");

    let parsed: User = from_str("\"maria|Maria da Penha\"").unwrap();
    assert_eq!(parsed, user);

    assert!(from_str::<User>("\"no-separator\"").is_err());
}

#[test]
fn test_auction_serialization() {
    let auction = sample_auction();

    let value = to_value(&auction).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 7,
            "description": "TV de Plasma",
            "openedAt": "2017-11-01",
            "bids": [{ "bidder": "jose|José da Silva", "amount": "BRL2000" }],
            "closed": false
        })
    );

    let deserialized: Auction = serde_json::from_value(value).unwrap();
    assert_eq!(deserialized, auction);
}

#[test]
fn test_auction_defaults_to_open_without_bids() {
    let auction: Auction = from_str(r#"{"id": 3, "description": "Geladeira", "openedAt": "1999-02-20"}"#).unwrap();
    assert!(!auction.is_closed());
    assert!(auction.bids().is_empty());
    assert_eq!(auction.opened_at, a_long_time_ago());
}

#[test]
fn test_non_positive_bid_is_rejected() {
    let result = from_str::<Bid>(r#"{"bidder": "jose|José da Silva", "amount": "BRL0"}"#);
    assert!(result.is_err());
}

#[test]
fn test_malformed_amount_in_bid_is_a_parse_error() {
    let result = from_str::<Bid>(r#"{"bidder": "jose|José da Silva", "amount": "aÉ10"}"#);
    assert!(result.is_err());
}

#[test]
fn test_payment_serialization() {
    let payment = Payment {
        for_auction: 7,
        amount: brl(2500),
        due_date: date(2017, 11, 13),
    };

    let value = to_value(&payment).unwrap();
    assert_eq!(
        value,
        json!({ "auctionId": 7, "amount": "BRL2500", "dueDate": "2017-11-13" })
    );
}
