// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One decode function per entity, applied to the JSON body of a
//! successful response. Required fields that are absent or null fail with
//! `MissingField`; unknown fields are ignored so additive API changes do
//! not break decoding. A failure anywhere aborts the decode of the whole
//! payload rather than skipping the offending element.

use crate::amount::Amount;
use crate::error::{Error, Result};
use crate::models::{
    Account, Address, Attachment, Balance, Merchant, TokenPair, Transaction, Webhook, WhoAmI,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

/// Accounts are UK-only; running balances always come back in pence of
/// the home currency, whatever currency the transaction itself was in.
const HOME_CURRENCY: &str = "GBP";

fn field<'a>(raw: &'a Value, name: &str) -> Result<&'a Value> {
    match raw.get(name) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(Error::MissingField(name.to_string())),
    }
}

fn str_field(raw: &Value, name: &str) -> Result<String> {
    field(raw, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::MissingField(name.to_string()))
}

fn i64_field(raw: &Value, name: &str) -> Result<i64> {
    field(raw, name)?
        .as_i64()
        .ok_or_else(|| Error::MissingField(name.to_string()))
}

fn bool_field(raw: &Value, name: &str) -> Result<bool> {
    field(raw, name)?
        .as_bool()
        .ok_or_else(|| Error::MissingField(name.to_string()))
}

fn opt_str(raw: &Value, name: &str) -> Option<String> {
    raw.get(name).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn parse_timestamp(name: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::MalformedTimestamp {
            field: name.to_string(),
            value: value.to_string(),
        })
}

fn datetime_field(raw: &Value, name: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(name, &str_field(raw, name)?)
}

fn amount_field(raw: &Value, name: &str, currency: &str) -> Result<Amount> {
    Ok(Amount::from_minor_units(i64_field(raw, name)?, currency))
}

/// Metadata objects map string keys to string values; anything else the
/// server might stuff in there is dropped.
fn string_map(raw: &Value, name: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    if let Some(Value::Object(entries)) = raw.get(name) {
        for (key, value) in entries {
            if let Value::String(s) = value {
                out.insert(key.clone(), s.clone());
            }
        }
    }
    out
}

pub fn account(raw: &Value) -> Result<Account> {
    let id = str_field(raw, "id")?;
    if id.is_empty() {
        return Err(Error::MissingField("id".to_string()));
    }
    Ok(Account {
        id,
        description: str_field(raw, "description")?,
        created: datetime_field(raw, "created")?,
    })
}

pub fn balance(raw: &Value, generated_at: DateTime<Utc>) -> Result<Balance> {
    let currency = str_field(raw, "currency")?;
    Ok(Balance {
        balance: amount_field(raw, "balance", &currency)?,
        spend_today: amount_field(raw, "spend_today", &currency)?,
        currency,
        generated_at,
    })
}

pub fn transaction(raw: &Value) -> Result<Transaction> {
    let currency = str_field(raw, "currency")?;
    let local_currency = str_field(raw, "local_currency")?;

    // Only decode the merchant when it was expanded into an object; an
    // unexpanded id string or null both mean "no merchant here".
    let merchant = match raw.get("merchant") {
        Some(value) if value.is_object() => Some(merchant(value)?),
        _ => None,
    };

    let attachments = match raw.get("attachments") {
        Some(Value::Array(items)) => items.iter().map(attachment).collect::<Result<Vec<_>>>()?,
        _ => Vec::new(),
    };

    // An unsettled transaction carries an empty `settled` string.
    let settled = match raw.get("settled") {
        Some(Value::String(s)) if !s.is_empty() => Some(parse_timestamp("settled", s)?),
        _ => None,
    };

    Ok(Transaction {
        id: str_field(raw, "id")?,
        description: str_field(raw, "description")?,
        amount: amount_field(raw, "amount", &currency)?,
        local_amount: amount_field(raw, "local_amount", &local_currency)?,
        account_balance: amount_field(raw, "account_balance", HOME_CURRENCY)?,
        created: datetime_field(raw, "created")?,
        is_load: bool_field(raw, "is_load")?,
        category: str_field(raw, "category")?,
        decline_reason: opt_str(raw, "decline_reason"),
        metadata: string_map(raw, "metadata"),
        merchant,
        attachments,
        settled,
        currency,
        local_currency,
    })
}

pub fn merchant(raw: &Value) -> Result<Merchant> {
    let address = match raw.get("address") {
        Some(value) if value.is_object() => Some(address(value)),
        _ => None,
    };
    Ok(Merchant {
        id: str_field(raw, "id")?,
        group_id: str_field(raw, "group_id")?,
        name: str_field(raw, "name")?,
        category: str_field(raw, "category")?,
        logo: opt_str(raw, "logo").unwrap_or_default(),
        emoji: opt_str(raw, "emoji").unwrap_or_default(),
        created: datetime_field(raw, "created")?,
        metadata: string_map(raw, "metadata"),
        address,
    })
}

fn address(raw: &Value) -> Address {
    Address {
        formatted: opt_str(raw, "formatted").unwrap_or_default(),
        short_formatted: opt_str(raw, "short_formatted").unwrap_or_default(),
        city: opt_str(raw, "city").unwrap_or_default(),
        region: opt_str(raw, "region").unwrap_or_default(),
        country: opt_str(raw, "country").unwrap_or_default(),
        postcode: opt_str(raw, "postcode").unwrap_or_default(),
        latitude: raw.get("latitude").and_then(Value::as_f64),
        longitude: raw.get("longitude").and_then(Value::as_f64),
    }
}

pub fn attachment(raw: &Value) -> Result<Attachment> {
    Ok(Attachment {
        id: str_field(raw, "id")?,
        user_id: str_field(raw, "user_id")?,
        external_id: str_field(raw, "external_id")?,
        file_url: str_field(raw, "file_url")?,
        file_type: str_field(raw, "file_type")?,
        created: datetime_field(raw, "created")?,
    })
}

pub fn webhook(raw: &Value) -> Result<Webhook> {
    Ok(Webhook {
        id: str_field(raw, "id")?,
        account_id: str_field(raw, "account_id")?,
        url: str_field(raw, "url")?,
        active: true,
    })
}

pub fn whoami(raw: &Value) -> Result<WhoAmI> {
    Ok(WhoAmI {
        authenticated: bool_field(raw, "authenticated")?,
        client_id: str_field(raw, "client_id")?,
        user_id: str_field(raw, "user_id")?,
    })
}

pub fn token_pair(raw: &Value, obtained_at: DateTime<Utc>) -> Result<TokenPair> {
    Ok(TokenPair {
        access_token: str_field(raw, "access_token")?,
        refresh_token: opt_str(raw, "refresh_token"),
        token_type: str_field(raw, "token_type")?,
        expires_in: i64_field(raw, "expires_in")?,
        user_id: str_field(raw, "user_id")?,
        client_id: str_field(raw, "client_id")?,
        obtained_at,
    })
}
