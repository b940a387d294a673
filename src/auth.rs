// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! OAuth2 authorization-code flow against the Mondo token endpoint.
//! Neither exchange nor refresh retries on failure: authorization codes
//! are single use and retry policy belongs to the caller.

use crate::decode;
use crate::error::{Error, Result};
use crate::models::TokenPair;
use crate::transport::{HttpRequest, HttpTransport};
use chrono::Utc;
use reqwest::{Method, Url};
use serde_json::Value;

pub const AUTH_BASE_URL: &str = "https://auth.getmondo.co.uk/";
pub const TOKEN_URL: &str = "https://api.getmondo.co.uk/oauth2/token";

/// Builds the URL to send the user to for the first leg of the flow.
///
/// `state_token` is echoed back on the redirect so the callback can be
/// tied to this request. Passing `None` is supported but weaker: the
/// caller then owns CSRF protection by other means.
pub fn authorization_url(client_id: &str, redirect_uri: &str, state_token: Option<&str>) -> String {
    let mut params = vec![
        ("client_id", client_id),
        ("redirect_uri", redirect_uri),
        ("response_type", "code"),
    ];
    if let Some(state) = state_token {
        params.push(("state", state));
    }
    Url::parse_with_params(AUTH_BASE_URL, &params)
        .expect("authorize base url is valid")
        .to_string()
}

/// Exchanges the authorization code from the redirect for a token pair.
/// The refresh token only comes back for confidential apps.
pub fn exchange_code_for_token(
    transport: &dyn HttpTransport,
    client_id: &str,
    client_secret: &str,
    authorization_code: &str,
    redirect_uri: &str,
) -> Result<TokenPair> {
    token_request(
        transport,
        &[
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", redirect_uri),
            ("code", authorization_code),
        ],
    )
}

/// Trades a refresh token for a fresh pair. Fails with `OAuth` when the
/// API rejects the token (expired, revoked, or the app is not
/// confidential).
pub fn refresh_access_token(
    transport: &dyn HttpTransport,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<TokenPair> {
    token_request(
        transport,
        &[
            ("grant_type", "refresh_token"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("refresh_token", refresh_token),
        ],
    )
}

fn token_request(transport: &dyn HttpTransport, form: &[(&str, &str)]) -> Result<TokenPair> {
    let request = HttpRequest {
        method: Method::POST,
        url: Url::parse(TOKEN_URL).expect("token url is valid"),
        headers: Vec::new(),
        form: Some(
            form.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ),
    };
    let response = transport.send(request)?;
    let raw: Value = serde_json::from_str(&response.body)?;
    if raw.get("error").is_some() {
        let description = raw
            .get("error_description")
            .and_then(Value::as_str)
            .or_else(|| raw.get("error").and_then(Value::as_str))
            .unwrap_or("no description given");
        return Err(Error::OAuth(description.to_string()));
    }
    decode::token_pair(&raw, Utc::now())
}
