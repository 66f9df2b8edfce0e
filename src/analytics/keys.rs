// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Bucket keys used to fold transactions into chart points.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{CategoryRecord, TransactionRecord};

pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Reads the leading `YYYY-MM-DD` of a date string.
///
/// Timestamps such as `2024-01-05T10:00:00Z` keep their calendar date; no
/// timezone shift is applied.
pub fn calendar_date(raw: &str) -> Option<NaiveDate> {
    raw.trim()
        .get(..10)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

pub fn day_key(tx: &TransactionRecord) -> &str {
    &tx.date
}

pub fn month_key_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn month_key(tx: &TransactionRecord) -> Option<String> {
    match calendar_date(&tx.date) {
        Some(date) => Some(month_key_of(date)),
        None => {
            tracing::warn!(id = %tx.id, date = %tx.date, "Undated transaction left out of monthly buckets");
            None
        }
    }
}

/// Sunday = 0 through Saturday = 6.
pub fn weekday_key(tx: &TransactionRecord) -> Option<usize> {
    match calendar_date(&tx.date) {
        Some(date) => Some(date.weekday().num_days_from_sunday() as usize),
        None => {
            tracing::warn!(id = %tx.id, date = %tx.date, "Undated transaction left out of weekday buckets");
            None
        }
    }
}

/// Category id to display name. The first record wins on duplicate ids.
pub fn category_index(categories: &[CategoryRecord]) -> HashMap<&str, &str> {
    let mut index = HashMap::with_capacity(categories.len());
    for c in categories {
        index.entry(c.id.as_str()).or_insert(c.name.as_str());
    }
    index
}

pub fn category_key<'a>(tx: &TransactionRecord, index: &HashMap<&'a str, &'a str>) -> &'a str {
    tx.category_id
        .as_deref()
        .and_then(|id| index.get(id).copied())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNCATEGORIZED_LABEL)
}

pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (y, m) = key.split_once('-')?;
    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// First day of the calendar month before `date`.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
