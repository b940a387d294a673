// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let accounts = client.list_accounts()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &accounts)? {
                let rows = accounts
                    .iter()
                    .map(|a| {
                        vec![
                            a.id.clone(),
                            a.description.clone(),
                            a.created.format("%Y-%m-%d").to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Description", "Created"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn balance(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let account_id = sub.get_one::<String>("account").unwrap();
    let balance = client.get_balance(account_id)?;
    println!(
        "Balance: {} (spent today: {}, as of {})",
        balance.balance,
        balance.spend_today,
        balance.generated_at.format("%H:%M:%S UTC")
    );
    Ok(())
}

pub fn whoami(client: &ApiClient) -> Result<()> {
    let who = client.whoami()?;
    if who.authenticated {
        println!("Authenticated as {} (client {})", who.user_id, who.client_id);
    } else {
        println!("Token is not authenticated");
    }
    Ok(())
}
