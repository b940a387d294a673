// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("mondoclip")
        .about("Typed command line client for the Mondo banking API")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("login")
                .about("Walk the OAuth authorization flow and print the token pair")
                .arg(Arg::new("client-id").long("client-id"))
                .arg(Arg::new("client-secret").long("client-secret"))
                .arg(Arg::new("redirect-uri").long("redirect-uri"))
                .arg(
                    Arg::new("state")
                        .long("state")
                        .help("State token echoed back on the redirect (CSRF check)"),
                ),
        )
        .subcommand(
            Command::new("refresh")
                .about("Exchange a refresh token for a fresh token pair")
                .arg(Arg::new("client-id").long("client-id"))
                .arg(Arg::new("client-secret").long("client-secret"))
                .arg(Arg::new("refresh-token").long("refresh-token")),
        )
        .subcommand(Command::new("whoami").about("Check the access token against the API"))
        .subcommand(
            Command::new("account")
                .about("Linked accounts")
                .subcommand(json_flags(Command::new("list"))),
        )
        .subcommand(
            Command::new("balance")
                .about("Current balance for an account")
                .arg(Arg::new("account").long("account").required(true)),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("since").long("since"))
                        .arg(Arg::new("before").long("before"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(u32)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("get").arg(Arg::new("id").long("id").required(true)),
                ))
                .subcommand(
                    Command::new("annotate")
                        .about("Attach key=value metadata; an empty value deletes the key")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("pairs").num_args(1..).required(true)),
                )
                .subcommand(
                    Command::new("export")
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("webhook")
                .about("Webhooks on an account")
                .subcommand(json_flags(
                    Command::new("list").arg(Arg::new("account").long("account").required(true)),
                ))
                .subcommand(
                    Command::new("register")
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("url").long("url").required(true)),
                )
                .subcommand(
                    Command::new("delete").arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("attachment")
                .about("Attachments on transactions")
                .subcommand(
                    Command::new("register")
                        .arg(Arg::new("tx").long("tx").required(true))
                        .arg(Arg::new("file-url").long("file-url").required(true))
                        .arg(
                            Arg::new("file-type")
                                .long("file-type")
                                .required(true)
                                .help("MIME type, e.g. image/png"),
                        ),
                )
                .subcommand(
                    Command::new("deregister").arg(Arg::new("id").long("id").required(true)),
                ),
        )
}
