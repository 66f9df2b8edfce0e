// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

use crate::analytics::DEFAULT_RECENT_LIMIT;
use crate::errors::RecordError;

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber once.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between `debug` and
/// `info` for this crate.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let default = if verbose {
            "cashboard=debug"
        } else {
            "cashboard=info"
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    });
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| RecordError::InvalidDate(s.to_string()))?;
    Ok(date)
}

pub fn parse_month(s: &str) -> Result<String> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

/// Validates a user-entered amount: a non-negative decimal, normalised to
/// two places.
pub fn parse_amount_input(s: &str) -> Result<String> {
    let d = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_| RecordError::InvalidAmount(s.to_string()))?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(RecordError::InvalidAmount(s.to_string()).into());
    }
    Ok(format!("{:.2}", d))
}

/// Validates a signed balance (accounts may be overdrawn).
pub fn parse_balance_input(s: &str) -> Result<String> {
    let d = s
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid balance '{}'", s))?;
    Ok(format!("{:.2}", d))
}

pub fn fmt_money(value: f64, ccy: &str) -> String {
    format!("{} {:.2}", ccy, value)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn id_for_account(conn: &Connection, name: &str) -> Result<String> {
    let mut stmt = conn.prepare("SELECT id FROM accounts WHERE name=?1 ORDER BY rowid LIMIT 1")?;
    let id: Option<String> = stmt.query_row(params![name], |r| r.get(0)).optional()?;
    id.ok_or_else(|| RecordError::UnknownAccount(name.to_string()).into())
}

pub fn id_for_category(conn: &Connection, name: &str) -> Result<String> {
    let mut stmt =
        conn.prepare("SELECT id FROM categories WHERE name=?1 ORDER BY rowid LIMIT 1")?;
    let id: Option<String> = stmt.query_row(params![name], |r| r.get(0)).optional()?;
    id.ok_or_else(|| RecordError::UnknownCategory(name.to_string()).into())
}

pub const SETTING_KEYS: [&str; 2] = ["recent_limit", "currency"];

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    if !SETTING_KEYS.contains(&key) {
        anyhow::bail!(
            "Unknown setting '{}' (expected one of: {})",
            key,
            SETTING_KEYS.join(", ")
        );
    }
    if key == "recent_limit" {
        value
            .parse::<usize>()
            .with_context(|| format!("Invalid recent_limit '{}'", value))?;
    }
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_recent_limit(conn: &Connection) -> Result<usize> {
    match get_setting(conn, "recent_limit")? {
        Some(v) => v
            .parse()
            .with_context(|| format!("Invalid stored recent_limit '{}'", v)),
        None => Ok(DEFAULT_RECENT_LIMIT),
    }
}

pub fn get_currency(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "currency")?.unwrap_or_else(|| "BRL".to_string()))
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
