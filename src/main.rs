// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use mondoclip::{cli, commands, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("login", sub)) => commands::login::login(sub)?,
        Some(("refresh", sub)) => commands::login::refresh(sub)?,
        Some(("whoami", _)) => commands::accounts::whoami(&utils::client_from_env()?)?,
        Some(("account", sub)) => commands::accounts::handle(&utils::client_from_env()?, sub)?,
        Some(("balance", sub)) => commands::accounts::balance(&utils::client_from_env()?, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&utils::client_from_env()?, sub)?,
        Some(("webhook", sub)) => commands::webhooks::handle(&utils::client_from_env()?, sub)?,
        Some(("attachment", sub)) => {
            commands::attachments::handle(&utils::client_from_env()?, sub)?
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
