// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Authenticated API client: one request primitive that attaches the
//! bearer token and maps non-success statuses to `Error::Api`, plus a
//! typed operation per documented endpoint. Responses come back decoded,
//! never as raw JSON, and no failure is swallowed or retried here.

use crate::auth;
use crate::decode;
use crate::error::{Error, Result};
use crate::models::{Account, Attachment, Balance, TokenPair, Transaction, Webhook, WhoAmI};
use crate::token::TokenStore;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Method, Url};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const BASE_API_URL: &str = "https://api.getmondo.co.uk";

/// Optional filters for `list_transactions`.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    pub since: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
}

pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    tokens: TokenStore,
    base_url: Url,
}

impl ApiClient {
    /// Client over the default reqwest transport, authenticated with a
    /// bare access token.
    pub fn new(access_token: &str) -> Result<ApiClient> {
        let transport = ReqwestTransport::new()?;
        Ok(ApiClient::with_transport(
            Arc::new(transport),
            TokenPair::from_access_token(access_token),
        ))
    }

    /// Client over a caller-supplied transport. This is also the seam the
    /// integration tests use to substitute a scripted transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>, pair: TokenPair) -> ApiClient {
        ApiClient {
            transport,
            tokens: TokenStore::new(pair),
            base_url: Url::parse(BASE_API_URL).expect("api base url is valid"),
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Rotates the held token pair through the OAuth refresh grant.
    /// Serialized against concurrent rotations by the store's gate;
    /// in-flight requests keep using the old token until the swap.
    pub fn refresh(&self, client_id: &str, client_secret: &str) -> Result<TokenPair> {
        self.tokens.rotate(|current| {
            let refresh_token = current.refresh_token.as_deref().ok_or_else(|| {
                Error::OAuth("no refresh token held; re-authenticate".to_string())
            })?;
            auth::refresh_access_token(
                self.transport.as_ref(),
                client_id,
                client_secret,
                refresh_token,
            )
        })
    }

    /// Checks the access token for validity.
    pub fn whoami(&self) -> Result<WhoAmI> {
        let raw = self.request(Method::GET, "/ping/whoami", &[], None)?;
        decode::whoami(&raw)
    }

    /// Lists the accounts linked to the user.
    pub fn list_accounts(&self) -> Result<Vec<Account>> {
        let raw = self.request(Method::GET, "/accounts", &[], None)?;
        array_field(&raw, "accounts")?
            .iter()
            .map(decode::account)
            .collect()
    }

    /// Current balance for an account, stamped with the receipt time.
    pub fn get_balance(&self, account_id: &str) -> Result<Balance> {
        let raw = self.request(
            Method::GET,
            "/balance",
            &[("account_id", account_id.to_string())],
            None,
        )?;
        decode::balance(&raw, Utc::now())
    }

    /// Recent transactions for an account, merchant always expanded.
    pub fn list_transactions(
        &self,
        account_id: &str,
        query: &TransactionQuery,
    ) -> Result<Vec<Transaction>> {
        let mut params = vec![
            ("account_id", account_id.to_string()),
            ("expand[]", "merchant".to_string()),
        ];
        if let Some(since) = query.since {
            params.push(("since", rfc3339(since)));
        }
        if let Some(before) = query.before {
            params.push(("before", rfc3339(before)));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        let raw = self.request(Method::GET, "/transactions", &params, None)?;
        array_field(&raw, "transactions")?
            .iter()
            .map(decode::transaction)
            .collect()
    }

    pub fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let raw = self.request(
            Method::GET,
            &format!("/transactions/{transaction_id}"),
            &[("expand[]", "merchant".to_string())],
            None,
        )?;
        decode::transaction(field(&raw, "transaction")?)
    }

    /// Attaches metadata to a transaction server-side. Setting a key to
    /// an empty value deletes it. Returns the updated transaction; the
    /// one the caller holds is not touched.
    pub fn annotate_transaction(
        &self,
        transaction_id: &str,
        metadata: &BTreeMap<String, String>,
    ) -> Result<Transaction> {
        let form = metadata
            .iter()
            .map(|(key, value)| (format!("metadata[{key}]"), value.clone()))
            .collect();
        let raw = self.request(
            Method::PATCH,
            &format!("/transactions/{transaction_id}"),
            &[],
            Some(form),
        )?;
        decode::transaction(field(&raw, "transaction")?)
    }

    pub fn list_webhooks(&self, account_id: &str) -> Result<Vec<Webhook>> {
        let raw = self.request(
            Method::GET,
            "/webhooks",
            &[("account_id", account_id.to_string())],
            None,
        )?;
        array_field(&raw, "webhooks")?
            .iter()
            .map(decode::webhook)
            .collect()
    }

    /// Registers a url to receive transaction events for the account.
    pub fn register_webhook(&self, account_id: &str, url: &str) -> Result<Webhook> {
        let raw = self.request(
            Method::POST,
            "/webhooks",
            &[],
            Some(vec![
                ("account_id".to_string(), account_id.to_string()),
                ("url".to_string(), url.to_string()),
            ]),
        )?;
        decode::webhook(field(&raw, "webhook")?)
    }

    /// Deletes a webhook. The server answers with no content; the caller
    /// discards (or `mark_deleted`s) their copy.
    pub fn delete_webhook(&self, webhook_id: &str) -> Result<()> {
        self.request(Method::DELETE, &format!("/webhooks/{webhook_id}"), &[], None)?;
        Ok(())
    }

    /// Registers a file url against a transaction.
    pub fn register_attachment(
        &self,
        transaction_id: &str,
        file_url: &str,
        file_type: &str,
    ) -> Result<Attachment> {
        let raw = self.request(
            Method::POST,
            "/attachment/register",
            &[],
            Some(vec![
                ("external_id".to_string(), transaction_id.to_string()),
                ("file_url".to_string(), file_url.to_string()),
                ("file_type".to_string(), file_type.to_string()),
            ]),
        )?;
        decode::attachment(field(&raw, "attachment")?)
    }

    pub fn deregister_attachment(&self, attachment_id: &str) -> Result<()> {
        self.request(
            Method::POST,
            "/attachment/deregister",
            &[],
            Some(vec![("id".to_string(), attachment_id.to_string())]),
        )?;
        Ok(())
    }

    /// The one authenticated request primitive everything above rides on.
    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        form: Option<Vec<(String, String)>>,
    ) -> Result<Value> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Transport(e.into()))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        let request = HttpRequest {
            method,
            url,
            headers: vec![(
                "Authorization".to_string(),
                format!("Bearer {}", self.tokens.access_token()),
            )],
            form,
        };
        let response = self.transport.send(request)?;
        if response.is_success() {
            if response.body.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&response.body)?);
        }
        Err(Error::Api {
            status: response.status,
            message: error_message(&response.body),
        })
    }
}

fn rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn field<'a>(raw: &'a Value, name: &str) -> Result<&'a Value> {
    raw.get(name)
        .filter(|v| !v.is_null())
        .ok_or_else(|| Error::MissingField(name.to_string()))
}

fn array_field<'a>(raw: &'a Value, name: &str) -> Result<&'a Vec<Value>> {
    field(raw, name)?
        .as_array()
        .ok_or_else(|| Error::MissingField(name.to_string()))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| "api call failed".to_string())
}
