// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::PathBuf;

use crate::models::{AccountRecord, CategoryRecord, Direction, Snapshot, TransactionRecord};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Cashboard", "cashboard"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("cashboard.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    tracing::debug!(path = %path.display(), "Snapshot store ready");
    Ok(conn)
}

/// Creates the snapshot tables if they are missing.
///
/// Category and account references are deliberately unconstrained: a
/// snapshot may point at records the backend did not return, and the
/// dashboard has to chart it anyway.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS accounts(
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        institution TEXT NOT NULL DEFAULT '',
        description TEXT,
        balance TEXT NOT NULL DEFAULT '0'
    );

    CREATE TABLE IF NOT EXISTS categories(
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id TEXT PRIMARY KEY,
        amount TEXT NOT NULL,
        type TEXT NOT NULL CHECK(type IN ('INFLOW','OUTFLOW')),
        transaction_date TEXT NOT NULL,
        account_id TEXT NOT NULL,
        category_id TEXT,
        description TEXT,
        source TEXT,
        destination TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(transaction_date);
    "#,
    )?;
    Ok(())
}

/// Reads the whole store back as one snapshot.
///
/// Accounts and categories keep insertion order; transactions come newest
/// first, the way the backend lists them.
pub fn load_snapshot(conn: &Connection) -> Result<Snapshot> {
    let mut stmt = conn.prepare(
        "SELECT id, name, balance, institution, description FROM accounts ORDER BY rowid",
    )?;
    let accounts = stmt
        .query_map([], |r| {
            Ok(AccountRecord {
                id: r.get(0)?,
                name: r.get(1)?,
                balance: r.get(2)?,
                institution: r.get(3)?,
                description: r.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY rowid")?;
    let categories = stmt
        .query_map([], |r| {
            Ok(CategoryRecord {
                id: r.get(0)?,
                name: r.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut stmt = conn.prepare(
        "SELECT id, amount, type, transaction_date, account_id, category_id, description, source, destination
         FROM transactions ORDER BY transaction_date DESC, rowid DESC",
    )?;
    let mut rows = stmt.query([])?;
    let mut transactions = Vec::new();
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let direction: String = r.get(2)?;
        transactions.push(TransactionRecord {
            direction: direction
                .parse::<Direction>()
                .with_context(|| format!("Stored transaction {}", id))?,
            id,
            amount: r.get(1)?,
            date: r.get(3)?,
            account_id: r.get(4)?,
            category_id: r.get(5)?,
            description: r.get(6)?,
            source: r.get(7)?,
            destination: r.get(8)?,
        });
    }

    Ok(Snapshot {
        accounts,
        categories,
        transactions,
    })
}

/// Swaps the stored records for `snapshot` in one SQL transaction.
pub fn replace_snapshot(conn: &mut Connection, snapshot: &Snapshot) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch("DELETE FROM transactions; DELETE FROM categories; DELETE FROM accounts;")?;
    for a in &snapshot.accounts {
        insert_account(&tx, a)?;
    }
    for c in &snapshot.categories {
        insert_category(&tx, c)?;
    }
    // oldest first, so the rowid tie-break in load_snapshot keeps the given order
    for t in snapshot.transactions.iter().rev() {
        insert_transaction(&tx, t)?;
    }
    tx.commit()?;
    tracing::info!(
        accounts = snapshot.accounts.len(),
        categories = snapshot.categories.len(),
        transactions = snapshot.transactions.len(),
        "Snapshot replaced"
    );
    Ok(())
}

pub fn insert_account(conn: &Connection, a: &AccountRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO accounts(id, name, institution, description, balance) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![a.id, a.name, a.institution, a.description, a.balance],
    )
    .with_context(|| format!("Insert account '{}'", a.name))?;
    Ok(())
}

pub fn insert_category(conn: &Connection, c: &CategoryRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO categories(id, name) VALUES (?1, ?2)",
        params![c.id, c.name],
    )
    .with_context(|| format!("Insert category '{}'", c.name))?;
    Ok(())
}

pub fn insert_transaction(conn: &Connection, t: &TransactionRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO transactions(id, amount, type, transaction_date, account_id, category_id, description, source, destination)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            t.id,
            t.amount,
            t.direction.as_str(),
            t.date,
            t.account_id,
            t.category_id,
            t.description,
            t.source,
            t.destination
        ],
    )
    .with_context(|| format!("Insert transaction '{}'", t.id))?;
    Ok(())
}

/// Next free numeric id for `table`, as the backend would hand out.
pub fn next_id(conn: &Connection, table: &str) -> Result<String> {
    let sql = format!("SELECT MAX(CAST(id AS INTEGER)) FROM {}", table);
    let max: Option<i64> = conn
        .query_row(&sql, [], |r| r.get::<_, Option<i64>>(0))
        .optional()?
        .flatten();
    Ok((max.unwrap_or(0) + 1).to_string())
}
