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
            let account_id = sub.get_one::<String>("account").unwrap();
            let webhooks = client.list_webhooks(account_id)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &webhooks)? {
                let rows = webhooks
                    .iter()
                    .map(|w| {
                        vec![
                            w.id.clone(),
                            w.url.clone(),
                            if w.active { "yes" } else { "no" }.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Url", "Active"], rows));
            }
        }
        Some(("register", sub)) => {
            let account_id = sub.get_one::<String>("account").unwrap();
            let url = sub.get_one::<String>("url").unwrap();
            let webhook = client.register_webhook(account_id, url)?;
            println!("Registered webhook {} -> {}", webhook.id, webhook.url);
        }
        Some(("delete", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            client.delete_webhook(id)?;
            println!("Deleted webhook {}", id);
        }
        _ => {}
    }
    Ok(())
}
