// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::ChartView;
use crate::commands::charts::chart_view;
use crate::db::load_snapshot;
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("chart", sub)) => export_chart(conn, sub),
        Some(("snapshot", sub)) => export_snapshot(conn, sub),
        _ => Ok(()),
    }
}

fn export_chart(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let view = chart_view(conn, sub)?;
    match fmt.as_str() {
        "csv" => write_csv(&view, out)?,
        _ => std::fs::write(out, serde_json::to_string_pretty(&view)?)?,
    }
    println!("Exported {} to {}", view.chart, out);
    Ok(())
}

/// One row per label, one column per dataset.
fn write_csv(view: &ChartView, out: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    let mut header = vec!["label".to_string()];
    header.extend(view.datasets.iter().map(|d| d.name.clone()));
    wtr.write_record(&header)?;
    for (i, label) in view.labels.iter().enumerate() {
        let mut record = vec![label.clone()];
        record.extend(view.datasets.iter().map(|d| d.values[i].to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn export_snapshot(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let snapshot = load_snapshot(conn)?;
    std::fs::write(out, serde_json::to_string_pretty(&snapshot)?)?;
    println!("Exported snapshot to {}", out);
    Ok(())
}
