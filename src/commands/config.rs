// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{SETTING_KEYS, get_currency, get_recent_limit, pretty_table, set_setting};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", sub)) => {
            let key = sub.get_one::<String>("key").unwrap();
            println!("{}", effective_value(conn, key)?);
        }
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap();
            let value = sub.get_one::<String>("value").unwrap();
            set_setting(conn, key, value)?;
            println!("Set {} = {}", key, value);
        }
        Some(("list", _)) => {
            let mut data = Vec::new();
            for key in SETTING_KEYS {
                data.push(vec![key.to_string(), effective_value(conn, key)?]);
            }
            println!("{}", pretty_table(&["Key", "Value"], data));
        }
        _ => {}
    }
    Ok(())
}

/// The stored value, or the default in effect when nothing is stored.
pub fn effective_value(conn: &Connection, key: &str) -> Result<String> {
    match key {
        "recent_limit" => Ok(get_recent_limit(conn)?.to_string()),
        "currency" => get_currency(conn),
        _ => bail!(
            "Unknown setting '{}' (expected one of: {})",
            key,
            SETTING_KEYS.join(", ")
        ),
    }
}
