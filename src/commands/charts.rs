// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{ChartKind, ChartView, DashboardData};
use crate::db::load_snapshot;
use crate::utils::{get_recent_limit, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;

/// `--as-of` when given, today's local date otherwise.
pub fn resolve_as_of(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("as-of") {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn build_dashboard(conn: &Connection, as_of: NaiveDate) -> Result<DashboardData> {
    let snapshot = load_snapshot(conn)?;
    let recent_limit = get_recent_limit(conn)?;
    Ok(DashboardData::build(&snapshot, as_of, recent_limit))
}

pub fn chart_view(conn: &Connection, sub: &clap::ArgMatches) -> Result<ChartView> {
    let kind: ChartKind = sub.get_one::<String>("name").unwrap().parse()?;
    let as_of = resolve_as_of(sub)?;
    Ok(build_dashboard(conn, as_of)?.view(kind))
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let view = chart_view(conn, sub)?;

    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }
    if !view.has_data {
        println!("No data for {}", view.chart);
        return Ok(());
    }
    println!("{}", render_table(&view));
    if let Some(caption) = &view.caption {
        println!("{}", caption);
    }
    Ok(())
}

/// Rows of `label, value per dataset...`, plus the point color when the
/// chart has a single dataset.
pub fn table_rows(view: &ChartView) -> Vec<Vec<String>> {
    let single = view.datasets.len() == 1;
    view.labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut row = vec![label.clone()];
            row.extend(view.datasets.iter().map(|d| format!("{:.2}", d.values[i])));
            if single {
                row.push(view.datasets[0].colors.get(i).cloned().unwrap_or_default());
            }
            row
        })
        .collect()
}

pub fn render_table(view: &ChartView) -> comfy_table::Table {
    let mut headers = vec!["Label"];
    headers.extend(view.datasets.iter().map(|d| d.name.as_str()));
    if view.datasets.len() == 1 {
        headers.push("Color");
    }
    pretty_table(&headers, table_rows(view))
}
