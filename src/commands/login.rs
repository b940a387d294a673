// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth;
use crate::models::TokenPair;
use crate::transport::ReqwestTransport;
use crate::utils::prompt;
use anyhow::Result;

fn arg_or_prompt(sub: &clap::ArgMatches, name: &str, label: &str) -> Result<String> {
    match sub.get_one::<String>(name) {
        Some(value) => Ok(value.clone()),
        None => prompt(label),
    }
}

/// Walks the authorization-code flow interactively: prints the URL to
/// open, waits for the pasted code, exchanges it and prints the pair.
/// Tokens are never written to disk.
pub fn login(sub: &clap::ArgMatches) -> Result<()> {
    let client_id = arg_or_prompt(sub, "client-id", "Client id")?;
    let client_secret = arg_or_prompt(sub, "client-secret", "Client secret")?;
    let redirect_uri = arg_or_prompt(sub, "redirect-uri", "Redirect URI")?;
    let state = sub.get_one::<String>("state").map(|s| s.to_string());

    let url = auth::authorization_url(&client_id, &redirect_uri, state.as_deref());
    println!("Open your browser here: {}", url);
    println!("Follow the login, then come back with the code from the redirect.");
    let code = prompt("Authorization code")?;

    let transport = ReqwestTransport::new()?;
    let pair = auth::exchange_code_for_token(
        &transport,
        &client_id,
        &client_secret,
        &code,
        &redirect_uri,
    )?;
    print_pair(&pair);
    Ok(())
}

/// Trades a refresh token for a fresh pair. Only confidential apps hold
/// refresh tokens; everyone else re-runs `login`.
pub fn refresh(sub: &clap::ArgMatches) -> Result<()> {
    let client_id = arg_or_prompt(sub, "client-id", "Client id")?;
    let client_secret = arg_or_prompt(sub, "client-secret", "Client secret")?;
    let refresh_token = arg_or_prompt(sub, "refresh-token", "Refresh token")?;

    let transport = ReqwestTransport::new()?;
    let pair =
        auth::refresh_access_token(&transport, &client_id, &client_secret, &refresh_token)?;
    print_pair(&pair);
    Ok(())
}

fn print_pair(pair: &TokenPair) {
    println!("Access token: {}", pair.access_token);
    match &pair.refresh_token {
        Some(token) => println!("Refresh token: {}", token),
        None => println!("No refresh token (app is not confidential)"),
    }
    println!(
        "Expires in {} seconds (around {})",
        pair.expires_in,
        pair.expires_at().format("%Y-%m-%d %H:%M UTC")
    );
    println!("export MONDO_ACCESS_TOKEN={}", pair.access_token);
}
