// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use anyhow::Result;

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("register", sub)) => {
            let transaction_id = sub.get_one::<String>("tx").unwrap();
            let file_url = sub.get_one::<String>("file-url").unwrap();
            let file_type = sub.get_one::<String>("file-type").unwrap();
            let attachment = client.register_attachment(transaction_id, file_url, file_type)?;
            println!(
                "Registered attachment {} ({}) on {}",
                attachment.id, attachment.file_type, attachment.external_id
            );
        }
        Some(("deregister", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            client.deregister_attachment(id)?;
            println!("Deregistered attachment {}", id);
        }
        _ => {}
    }
    Ok(())
}
