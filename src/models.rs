// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::amount::Amount;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Access/refresh token pair as returned by the OAuth token endpoint.
///
/// Replaced wholesale on refresh; `refresh_token` is absent for
/// non-confidential apps, which must re-authenticate instead.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: String,
    pub client_id: String,
    /// Client-side receipt time; the server only sends `expires_in`.
    pub obtained_at: DateTime<Utc>,
}

impl TokenPair {
    /// Wraps a bare access token obtained out of band (e.g. pasted from
    /// the developer console). Carries no refresh token and no expiry
    /// hint, so `is_expired` never reports it stale.
    pub fn from_access_token(token: impl Into<String>) -> TokenPair {
        TokenPair {
            access_token: token.into(),
            refresh_token: None,
            token_type: "Bearer".to_string(),
            expires_in: 0,
            user_id: String::new(),
            client_id: String::new(),
            obtained_at: Utc::now(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.obtained_at + Duration::seconds(self.expires_in)
    }

    pub fn is_expired(&self) -> bool {
        self.expires_in > 0 && Utc::now() >= self.expires_at()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: String,
    pub description: String,
    pub created: DateTime<Utc>,
}

/// Point-in-time balance snapshot. `generated_at` is stamped by the
/// client at receipt; the server does not date the payload.
#[derive(Debug, Clone, Serialize)]
pub struct Balance {
    pub balance: Amount,
    pub spend_today: Amount,
    pub currency: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Amount,
    pub currency: String,
    pub local_amount: Amount,
    pub local_currency: String,
    /// Running balance after this transaction, always in the home
    /// account currency regardless of where the card was used.
    pub account_balance: Amount,
    pub created: DateTime<Utc>,
    pub is_load: bool,
    pub settled: Option<DateTime<Utc>>,
    pub category: String,
    pub merchant: Option<Merchant>,
    pub decline_reason: Option<String>,
    pub metadata: BTreeMap<String, String>,
    pub attachments: Vec<Attachment>,
}

impl Transaction {
    pub fn notes(&self) -> Option<&str> {
        self.metadata.get("notes").map(String::as_str)
    }

    pub fn emoji(&self) -> Option<&str> {
        self.merchant.as_ref().map(|m| m.emoji.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Merchant {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub address: Option<Address>,
    pub category: String,
    pub logo: String,
    pub emoji: String,
    pub created: DateTime<Utc>,
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub formatted: String,
    pub short_formatted: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postcode: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub id: String,
    pub user_id: String,
    /// Id of the transaction the file is attached to.
    pub external_id: String,
    pub file_url: String,
    pub file_type: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Webhook {
    pub id: String,
    pub account_id: String,
    pub url: String,
    pub active: bool,
}

impl Webhook {
    /// Terminal transition after a successful delete call: the hook no
    /// longer points anywhere and will never fire again.
    pub fn mark_deleted(&mut self) {
        self.url.clear();
        self.active = false;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WhoAmI {
    pub authenticated: bool,
    pub client_id: String,
    pub user_id: String,
}
