// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use mondoclip::amount::Amount;
use mondoclip::decode;
use mondoclip::error::Error;
use serde_json::json;

fn top_up() -> serde_json::Value {
    json!({
        "id": "tx_000096mpvjzID9HS0XDIEj",
        "created": "2016-04-02T11:13:07.71Z",
        "description": "Initial top up",
        "amount": 10000,
        "currency": "GBP",
        "merchant": null,
        "notes": "",
        "metadata": {},
        "account_balance": 10000,
        "attachments": [],
        "category": "mondo",
        "is_load": true,
        "settled": "2016-04-02T11:13:07.71Z",
        "local_amount": 10000,
        "local_currency": "GBP",
        "updated": "2016-04-03T15:56:18.139Z",
        "account_id": "my_awesome_account_id",
        "scheme": "gps_mastercard",
        "dedupe_id": "843431828101642148",
        "originator": false
    })
}

fn groceries() -> serde_json::Value {
    json!({
        "id": "tx_0001",
        "created": "2016-04-02T12:04:51.01Z",
        "description": "CO-OP GROUP FOOD RETAI LONDON        GBR",
        "amount": -650,
        "currency": "GBP",
        "merchant": {
            "id": "merch_000095xksYP6PjOgasZ12v",
            "group_id": "grp_000092JYq31L12hjBbeCxN",
            "created": "2016-03-08T19:46:15.645Z",
            "name": "The Co-operative Food",
            "logo": "https://mondo-logo-cache.appspot.com/twitter/cooperativefood/?size=large",
            "emoji": "🍏",
            "category": "groceries",
            "online": false,
            "atm": false,
            "address": {
                "short_formatted": "5 Nowhere Lane, London",
                "formatted": "5 Nowhere Lane, London",
                "address": "5 Nowhere Lane, London",
                "city": "London",
                "region": "Greater London",
                "country": "GBR",
                "postcode": "XXX",
                "latitude": 50,
                "longitude": -0.20,
                "zoom_level": 17,
                "approximate": false
            },
            "metadata": {
                "foursquare_category": "Grocery Store",
                "suggested_tags": "#groceries #food",
                "website": "http://www.co-operativebank.co.uk/"
            }
        },
        "notes": "Cigarettes",
        "metadata": { "notes": "Cigarettes" },
        "account_balance": 9350,
        "attachments": [],
        "category": "groceries",
        "is_load": false,
        "settled": "2016-04-03T23:00:00.5Z",
        "local_amount": -650,
        "local_currency": "GBP",
        "account_id": "my_awesome_account_id"
    })
}

#[test]
fn transaction_without_merchant_decodes_to_none() {
    let tx = decode::transaction(&top_up()).unwrap();
    assert!(tx.merchant.is_none());
    assert!(tx.emoji().is_none());
    assert_eq!(tx.amount, Amount::from_minor_units(10000, "GBP"));
    assert_eq!(tx.amount.to_string(), "100.00 GBP");
    assert!(tx.is_load);
    assert!(tx.metadata.is_empty());
    assert!(tx.attachments.is_empty());
    assert_eq!(tx.created.date_naive(), NaiveDate::from_ymd_opt(2016, 4, 2).unwrap());
    assert!(tx.settled.is_some());
}

#[test]
fn expanded_merchant_decodes_fully() {
    let tx = decode::transaction(&groceries()).unwrap();
    let merchant = tx.merchant.as_ref().unwrap();
    assert_eq!(merchant.name, "The Co-operative Food");
    assert_eq!(merchant.category, "groceries");
    assert_eq!(
        merchant.metadata.get("foursquare_category").map(String::as_str),
        Some("Grocery Store")
    );
    let address = merchant.address.as_ref().unwrap();
    assert_eq!(address.city, "London");
    assert_eq!(address.country, "GBR");
    assert_eq!(tx.emoji(), Some("🍏"));
    assert_eq!(tx.notes(), Some("Cigarettes"));
}

#[test]
fn account_balance_is_always_home_currency() {
    let mut raw = groceries();
    raw["currency"] = json!("USD");
    raw["local_currency"] = json!("USD");
    let tx = decode::transaction(&raw).unwrap();
    assert_eq!(tx.amount.currency(), "USD");
    assert_eq!(tx.local_amount.currency(), "USD");
    assert_eq!(tx.account_balance.currency(), "GBP");
    assert_eq!(tx.account_balance, Amount::from_minor_units(9350, "GBP"));
}

#[test]
fn local_amount_converts_without_precision_loss() {
    let mut raw = top_up();
    raw["local_amount"] = json!(12345);
    raw["local_currency"] = json!("EUR");
    let tx = decode::transaction(&raw).unwrap();
    assert_eq!(tx.local_amount, Amount::from_minor_units(12345, "EUR"));
    assert_eq!(tx.local_amount.to_string(), "123.45 EUR");
}

#[test]
fn missing_required_field_names_the_field() {
    let mut raw = top_up();
    raw.as_object_mut().unwrap().remove("id");
    match decode::transaction(&raw).unwrap_err() {
        Error::MissingField(name) => assert_eq!(name, "id"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn null_required_field_counts_as_missing() {
    let mut raw = top_up();
    raw["description"] = json!(null);
    match decode::transaction(&raw).unwrap_err() {
        Error::MissingField(name) => assert_eq!(name, "description"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn malformed_timestamp_fails_loudly() {
    let mut raw = top_up();
    raw["created"] = json!("last tuesday");
    match decode::transaction(&raw).unwrap_err() {
        Error::MalformedTimestamp { field, value } => {
            assert_eq!(field, "created");
            assert_eq!(value, "last tuesday");
        }
        other => panic!("expected MalformedTimestamp, got {other:?}"),
    }
}

#[test]
fn empty_settled_string_means_unsettled() {
    let mut raw = top_up();
    raw["settled"] = json!("");
    let tx = decode::transaction(&raw).unwrap();
    assert!(tx.settled.is_none());
}

#[test]
fn absent_attachments_decode_to_empty_vec() {
    let mut raw = top_up();
    raw.as_object_mut().unwrap().remove("attachments");
    let tx = decode::transaction(&raw).unwrap();
    assert!(tx.attachments.is_empty());
}

#[test]
fn unexpanded_merchant_id_string_decodes_to_none() {
    let mut raw = groceries();
    raw["merchant"] = json!("merch_000095xksYP6PjOgasZ12v");
    let tx = decode::transaction(&raw).unwrap();
    assert!(tx.merchant.is_none());
}

#[test]
fn account_requires_non_empty_id() {
    let raw = json!({
        "id": "",
        "created": "2016-04-01T10:23:52.509Z",
        "description": "Gabriele Alese"
    });
    assert!(matches!(
        decode::account(&raw).unwrap_err(),
        Error::MissingField(_)
    ));

    let raw = json!({
        "id": "my_awesome_account_id",
        "created": "2016-04-01T10:23:52.509Z",
        "description": "Gabriele Alese"
    });
    let account = decode::account(&raw).unwrap();
    assert_eq!(account.id, "my_awesome_account_id");
    assert_eq!(account.description, "Gabriele Alese");
}

#[test]
fn balance_takes_the_client_side_stamp() {
    let stamp = Utc::now();
    let raw = json!({ "balance": 1951, "currency": "GBP", "spend_today": -496 });
    let balance = decode::balance(&raw, stamp).unwrap();
    assert_eq!(balance.balance, Amount::from_minor_units(1951, "GBP"));
    assert_eq!(balance.spend_today, Amount::from_minor_units(-496, "GBP"));
    assert_eq!(balance.currency, "GBP");
    assert_eq!(balance.generated_at, stamp);
}

#[test]
fn webhook_decodes_active() {
    let raw = json!({
        "id": "webhook_000091yhhOmrXQaVZ1Irsv",
        "account_id": "acc_000091yf79yMwNaZHhHGzp",
        "url": "https://example.com/callback"
    });
    let mut webhook = decode::webhook(&raw).unwrap();
    assert!(webhook.active);
    webhook.mark_deleted();
    assert!(!webhook.active);
    assert!(webhook.url.is_empty());
}

#[test]
fn token_pair_refresh_token_is_optional() {
    let stamp = Utc::now();
    let raw = json!({
        "access_token": "at_1",
        "client_id": "oauthclient_0001",
        "expires_in": 21600,
        "token_type": "Bearer",
        "user_id": "user_0001"
    });
    let pair = decode::token_pair(&raw, stamp).unwrap();
    assert!(pair.refresh_token.is_none());
    assert_eq!(pair.expires_in, 21600);
    assert!(!pair.is_expired());
}
