// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use crate::analytics::keys::calendar_date;
use crate::db::load_snapshot;
use crate::models::Snapshot;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: &'static str,
    pub record: String,
    pub detail: String,
}

impl Issue {
    fn new(kind: &'static str, record: &str, detail: impl Into<String>) -> Self {
        Issue {
            kind,
            record: record.to_string(),
            detail: detail.into(),
        }
    }
}

/// Problems the charts absorb silently: they render as NaN, vanish from
/// date buckets, or land in the uncategorized bucket.
pub fn find_issues(snapshot: &Snapshot) -> Vec<Issue> {
    let account_ids: HashSet<&str> = snapshot.accounts.iter().map(|a| a.id.as_str()).collect();
    let category_ids: HashSet<&str> = snapshot
        .categories
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    let mut issues = Vec::new();

    for a in &snapshot.accounts {
        if a.balance.trim().parse::<Decimal>().is_err() {
            issues.push(Issue::new("malformed_balance", &a.id, a.balance.clone()));
        }
    }

    for t in &snapshot.transactions {
        match t.amount.trim().parse::<Decimal>() {
            Err(_) => issues.push(Issue::new("malformed_amount", &t.id, t.amount.clone())),
            Ok(d) if d.is_sign_negative() && !d.is_zero() => {
                issues.push(Issue::new("negative_amount", &t.id, t.amount.clone()))
            }
            Ok(_) => {}
        }
        if calendar_date(&t.date).is_none() {
            issues.push(Issue::new("invalid_date", &t.id, t.date.clone()));
        }
        if !account_ids.contains(t.account_id.as_str()) {
            issues.push(Issue::new("unknown_account", &t.id, t.account_id.clone()));
        }
        if let Some(cat) = &t.category_id {
            if !category_ids.contains(cat.as_str()) {
                issues.push(Issue::new("unknown_category", &t.id, cat.clone()));
            }
        }
    }

    issues
}

pub fn handle(conn: &Connection) -> Result<()> {
    let issues = find_issues(&load_snapshot(conn)?);
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.record, i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Record", "Detail"], rows));
    }
    Ok(())
}
