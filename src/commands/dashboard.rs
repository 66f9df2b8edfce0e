// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{ChartKind, DashboardData};
use crate::commands::charts::{build_dashboard, resolve_as_of};
use crate::utils::{fmt_money, get_currency, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let as_of = resolve_as_of(sub)?;
    let data = build_dashboard(conn, as_of)?;
    if maybe_print_json(sub.get_flag("json"), false, &data)? {
        return Ok(());
    }

    let ccy = get_currency(conn)?;
    println!(
        "Total balance: {} ({:?})",
        fmt_money(data.total_balance, &ccy),
        data.balance_sign
    );
    println!("{}", pretty_table(&["Date", "Type", "Amount", "Description"], recent_rows(&data)));
    println!(
        "{}",
        pretty_table(&["Chart", "Has data", "Points"], availability_rows(&data))
    );
    Ok(())
}

pub fn recent_rows(data: &DashboardData) -> Vec<Vec<String>> {
    data.recent
        .iter()
        .map(|t| {
            vec![
                t.date.clone(),
                t.direction.to_string(),
                t.amount.clone(),
                t.description.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

pub fn availability_rows(data: &DashboardData) -> Vec<Vec<String>> {
    ChartKind::ALL
        .iter()
        .map(|kind| {
            let view = data.view(*kind);
            vec![
                kind.to_string(),
                if view.has_data { "yes" } else { "no" }.to_string(),
                view.labels.len().to_string(),
            ]
        })
        .collect()
}
