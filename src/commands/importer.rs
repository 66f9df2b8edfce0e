// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{insert_transaction, next_id, replace_snapshot};
use crate::models::{Direction, Snapshot, TransactionRecord};
use crate::utils::{id_for_account, id_for_category, parse_amount_input, parse_date};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rusqlite::Connection;
use std::collections::{HashMap, hash_map::Entry};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("snapshot", sub)) => import_snapshot(conn, sub),
        Some(("transactions", sub)) => import_transactions(conn, sub),
        _ => Ok(()),
    }
}

/// Reads a snapshot as exported by the backend listing queries.
///
/// Records are stored as received; the dashboard tolerates malformed
/// amounts and dangling references, and `doctor` reports them.
pub fn read_snapshot(path: &str) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Open snapshot {}", path))?;
    let snapshot: Snapshot =
        serde_json::from_str(&text).with_context(|| format!("Parse snapshot {}", path))?;
    Ok(snapshot)
}

fn import_snapshot(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let snapshot = read_snapshot(path)?;
    replace_snapshot(conn, &snapshot)?;
    println!(
        "Imported {} accounts, {} categories, {} transactions from {}",
        snapshot.accounts.len(),
        snapshot.categories.len(),
        snapshot.transactions.len(),
        path
    );
    Ok(())
}

fn import_transactions(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let tx = conn.transaction()?;
    let mut account_cache: HashMap<String, String> = HashMap::new();
    let mut category_cache: HashMap<String, String> = HashMap::new();
    let mut next: u64 = next_id(&tx, "transactions")?.parse()?;
    let mut count = 0usize;

    for (line, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = line + 2;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let type_raw = rec.get(1).context("type missing")?.trim();
        let amount_raw = rec.get(2).context("amount missing")?.trim();
        let account = rec.get(3).context("account missing")?.trim().to_string();
        let category = rec.get(4).unwrap_or("").trim().to_string();
        let description = rec
            .get(5)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        let date = parse_date(date_raw).with_context(|| format!("CSV row {}", row))?;
        let direction: Direction = type_raw
            .parse()
            .with_context(|| format!("CSV row {}", row))?;
        let amount = parse_amount_input(amount_raw).with_context(|| format!("CSV row {}", row))?;

        let account_id = match account_cache.entry(account.clone()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => entry.insert(id_for_account(&tx, &account)?).clone(),
        };
        let category_id = if category.is_empty() {
            None
        } else {
            let id = match category_cache.entry(category.clone()) {
                Entry::Occupied(entry) => entry.get().clone(),
                Entry::Vacant(entry) => entry.insert(id_for_category(&tx, &category)?).clone(),
            };
            Some(id)
        };

        insert_transaction(
            &tx,
            &TransactionRecord {
                id: next.to_string(),
                amount,
                direction,
                date: date.to_string(),
                account_id,
                category_id,
                description,
                source: None,
                destination: None,
            },
        )?;
        next += 1;
        count += 1;
    }
    tx.commit()?;
    tracing::info!(count, path, "CSV import committed");
    println!("Imported {} transactions from {}", count, path);
    Ok(())
}
