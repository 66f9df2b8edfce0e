// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{insert_account, load_snapshot, next_id};
use crate::models::AccountRecord;
use crate::utils::{get_currency, id_for_account, parse_balance_input, pretty_table};
use anyhow::Result;
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let institution = sub.get_one::<String>("institution").unwrap();
            let balance = parse_balance_input(sub.get_one::<String>("balance").unwrap())?;
            let account = AccountRecord {
                id: next_id(conn, "accounts")?,
                name: name.clone(),
                balance,
                institution: institution.clone(),
                description: sub.get_one::<String>("description").cloned(),
            };
            insert_account(conn, &account)?;
            println!(
                "Added account '{}' ({}, balance {})",
                account.name, account.id, account.balance
            );
        }
        Some(("list", _)) => {
            let ccy = get_currency(conn)?;
            let data: Vec<Vec<String>> = load_snapshot(conn)?
                .accounts
                .into_iter()
                .map(|a| {
                    vec![
                        a.id,
                        a.name,
                        a.institution,
                        format!("{} {}", ccy, a.balance),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Id", "Name", "Institution", "Balance"], data)
            );
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            remove_account(conn, name)?;
            println!("Removed account '{}' and its transactions", name);
        }
        _ => {}
    }
    Ok(())
}

/// Deletes the account and its transactions together, or neither.
pub fn remove_account(conn: &Connection, name: &str) -> Result<()> {
    let id = id_for_account(conn, name)?;
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM transactions WHERE account_id=?1", params![id])?;
    tx.execute("DELETE FROM accounts WHERE id=?1", params![id])?;
    tx.commit()?;
    Ok(())
}
