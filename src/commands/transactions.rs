// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{ApiClient, TransactionQuery};
use crate::models::Transaction;
use crate::utils::{maybe_print_json, parse_metadata_pairs, parse_time, pretty_table};
use anyhow::Result;

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub)?,
        Some(("get", sub)) => get(client, sub)?,
        Some(("annotate", sub)) => annotate(client, sub)?,
        Some(("export", sub)) => export(client, sub)?,
        _ => {}
    }
    Ok(())
}

fn query_from_args(sub: &clap::ArgMatches) -> Result<TransactionQuery> {
    let mut query = TransactionQuery::default();
    if let Some(since) = sub.get_one::<String>("since") {
        query.since = Some(parse_time(since)?);
    }
    if let Some(before) = sub.get_one::<String>("before") {
        query.before = Some(parse_time(before)?);
    }
    query.limit = sub.get_one::<u32>("limit").copied();
    Ok(query)
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let account_id = sub.get_one::<String>("account").unwrap();
    let transactions = client.list_transactions(account_id, &query_from_args(sub)?)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &transactions)? {
        let rows = transactions.iter().map(row).collect();
        println!(
            "{}",
            pretty_table(
                &["Created", "Id", "Description", "Amount", "Category", "Merchant", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}

fn get(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let tx = client.get_transaction(id)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &tx)? {
        println!("{}", pretty_table(
            &["Created", "Id", "Description", "Amount", "Category", "Merchant", "Notes"],
            vec![row(&tx)],
        ));
        if !tx.attachments.is_empty() {
            let rows = tx
                .attachments
                .iter()
                .map(|a| vec![a.id.clone(), a.file_type.clone(), a.file_url.clone()])
                .collect();
            println!("{}", pretty_table(&["Attachment", "Type", "Url"], rows));
        }
    }
    Ok(())
}

fn annotate(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let pairs: Vec<String> = sub
        .get_many::<String>("pairs")
        .unwrap()
        .cloned()
        .collect();
    let metadata = parse_metadata_pairs(&pairs)?;
    let tx = client.annotate_transaction(id, &metadata)?;
    println!("Annotated {} ({} metadata keys)", tx.id, tx.metadata.len());
    Ok(())
}

fn export(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let account_id = sub.get_one::<String>("account").unwrap();
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let transactions = client.list_transactions(account_id, &TransactionQuery::default())?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "created", "id", "description", "amount", "currency", "category", "merchant",
                "notes",
            ])?;
            for tx in &transactions {
                wtr.write_record([
                    tx.created.to_rfc3339(),
                    tx.id.clone(),
                    tx.description.clone(),
                    tx.amount.value().to_string(),
                    tx.currency.clone(),
                    tx.category.clone(),
                    merchant_name(tx),
                    tx.notes().unwrap_or_default().to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&transactions)?)?;
        }
        _ => {
            anyhow::bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}

fn merchant_name(tx: &Transaction) -> String {
    tx.merchant
        .as_ref()
        .map(|m| m.name.clone())
        .unwrap_or_default()
}

fn row(tx: &Transaction) -> Vec<String> {
    vec![
        tx.created.format("%Y-%m-%d %H:%M").to_string(),
        tx.id.clone(),
        tx.description.clone(),
        tx.amount.to_string(),
        tx.category.clone(),
        merchant_name(tx),
        tx.notes().unwrap_or_default().to_string(),
    ]
}
