// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{insert_transaction, next_id};
use crate::models::{Direction, TransactionRecord};
use crate::utils::{
    id_for_account, id_for_category, maybe_print_json, parse_amount_input, parse_date,
    parse_month, pretty_table,
};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let account_name = sub.get_one::<String>("account").unwrap();
    let amount = parse_amount_input(sub.get_one::<String>("amount").unwrap())?;
    let direction: Direction = sub.get_one::<String>("type").unwrap().parse()?;
    let category_id = match sub.get_one::<String>("category") {
        Some(cat) => Some(id_for_category(conn, cat)?),
        None => None,
    };

    let record = TransactionRecord {
        id: next_id(conn, "transactions")?,
        amount,
        direction,
        date: date.to_string(),
        account_id: id_for_account(conn, account_name)?,
        category_id,
        description: sub.get_one::<String>("description").cloned(),
        source: sub.get_one::<String>("source").cloned(),
        destination: sub.get_one::<String>("destination").cloned(),
    };
    insert_transaction(conn, &record)?;
    println!(
        "Recorded {} {} on {} (acct: {})",
        record.direction, record.amount, record.date, account_name
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.account.clone(),
                    r.direction.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Account", "Type", "Amount", "Category", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub account: String,
    #[serde(rename = "type")]
    pub direction: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT t.id, t.transaction_date, a.name, t.type, t.amount, c.name, t.description FROM transactions t LEFT JOIN accounts a ON t.account_id=a.id LEFT JOIN categories c ON t.category_id=c.id WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(t.transaction_date,1,7)=?");
        params_vec.push(parse_month(month)?);
    }
    if let Some(acct) = sub.get_one::<String>("account") {
        sql.push_str(" AND a.name=?");
        params_vec.push(acct.into());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND c.name=?");
        params_vec.push(cat.into());
    }
    if let Some(kind) = sub.get_one::<String>("type") {
        let direction: Direction = kind.parse()?;
        sql.push_str(" AND t.type=?");
        params_vec.push(direction.as_str().into());
    }
    sql.push_str(" ORDER BY t.transaction_date DESC, t.rowid DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(&format!(" LIMIT {}", limit));
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(rusqlite::params_from_iter(params_vec.iter()))?;

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let account: Option<String> = r.get(2)?;
        let category: Option<String> = r.get(5)?;
        let description: Option<String> = r.get(6)?;
        data.push(TransactionRow {
            id: r.get(0)?,
            date: r.get(1)?,
            account: account.unwrap_or_default(),
            direction: r.get(3)?,
            amount: r.get(4)?,
            category: category.unwrap_or_default(),
            description: description.unwrap_or_default(),
        });
    }
    Ok(data)
}
