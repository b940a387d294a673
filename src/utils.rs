// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::collections::BTreeMap;
use std::io::{self, Write};

pub const TOKEN_ENV_VAR: &str = "MONDO_ACCESS_TOKEN";

/// Builds a client from the access token in the environment. All read
/// commands go through this; `login` prints the token to export.
pub fn client_from_env() -> Result<ApiClient> {
    let token = std::env::var(TOKEN_ENV_VAR)
        .with_context(|| format!("Set {} (run `mondoclip login` to obtain one)", TOKEN_ENV_VAR))?;
    Ok(ApiClient::new(&token)?)
}

pub fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Accepts either a full RFC3339 timestamp or a bare YYYY-MM-DD date
/// (taken as midnight UTC) for --since/--before flags.
pub fn parse_time(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid time '{}', expected RFC3339 or YYYY-MM-DD", s))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Parses `key=value` arguments for `tx annotate`. An empty value is
/// legal and deletes the key server-side.
pub fn parse_metadata_pairs(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Invalid metadata '{}', expected key=value", pair))?;
        out.insert(key.to_string(), value.to_string());
    }
    Ok(out)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
