// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{insert_category, next_id};
use crate::models::CategoryRecord;
use crate::utils::{id_for_category, pretty_table};
use anyhow::Result;
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let category = CategoryRecord {
                id: next_id(conn, "categories")?,
                name: name.clone(),
            };
            insert_category(conn, &category)?;
            println!("Added category '{}'", name);
        }
        Some(("list", _)) => {
            let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY name")?;
            let rows = stmt.query_map([], |r| Ok(vec![r.get::<_, String>(0)?, r.get(1)?]))?;
            let mut data = Vec::new();
            for row in rows {
                data.push(row?);
            }
            println!("{}", pretty_table(&["Id", "Category"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let id = id_for_category(conn, name)?;
            // Transactions keep their reference and chart as uncategorized.
            conn.execute("DELETE FROM categories WHERE id=?1", params![id])?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
