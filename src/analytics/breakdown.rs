// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reducers that split totals across accounts, categories and directions.

use std::collections::HashMap;

use serde::Serialize;

use crate::analytics::keys::{category_index, category_key};
use crate::analytics::money::parse_amount;
use crate::analytics::series::{ChartData, FlowTotals, LabeledSeries};
use crate::analytics::timeline::FLOW_LABELS;
use crate::models::{AccountRecord, CategoryRecord, Direction, TransactionRecord};

/// Stored balances, never recomputed from transactions.
pub fn balance_by_account(accounts: &[AccountRecord]) -> LabeledSeries {
    accounts
        .iter()
        .map(|a| (a.name.as_str(), parse_amount(&a.balance)))
        .collect()
}

pub fn total_balance(accounts: &[AccountRecord]) -> f64 {
    accounts.iter().map(|a| parse_amount(&a.balance)).sum()
}

pub fn expense_by_category(
    transactions: &[TransactionRecord],
    categories: &[CategoryRecord],
) -> LabeledSeries {
    totals_by_category(transactions, categories, Direction::Outflow)
}

pub fn income_by_category(
    transactions: &[TransactionRecord],
    categories: &[CategoryRecord],
) -> LabeledSeries {
    totals_by_category(transactions, categories, Direction::Inflow)
}

// First-seen order. Unknown ids land in the uncategorized bucket.
fn totals_by_category(
    transactions: &[TransactionRecord],
    categories: &[CategoryRecord],
    direction: Direction,
) -> LabeledSeries {
    let index = category_index(categories);
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut series = LabeledSeries::default();

    for tx in transactions.iter().filter(|t| t.direction == direction) {
        let name = category_key(tx, &index);
        let amount = parse_amount(&tx.amount);
        match positions.get(name) {
            Some(&i) => series.values[i] += amount,
            None => {
                positions.insert(name, series.len());
                series.push(name, amount);
            }
        }
    }

    series
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioTone {
    Inflow,
    Outflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioSummary {
    pub totals: FlowTotals,
}

impl RatioSummary {
    pub fn inflow_percent(&self) -> Option<f64> {
        let total = self.totals.inflow + self.totals.outflow;
        if total == 0.0 {
            return None;
        }
        Some(round1(self.totals.inflow / total * 100.0))
    }

    /// `"62.5% inflow · 37.5% outflow"`, empty when there is no volume.
    pub fn label(&self) -> String {
        match self.inflow_percent() {
            Some(p) => format!("{:.1}% inflow · {:.1}% outflow", p, 100.0 - p),
            None => String::new(),
        }
    }

    pub fn tone(&self) -> RatioTone {
        if self.totals.inflow >= self.totals.outflow {
            RatioTone::Inflow
        } else {
            RatioTone::Outflow
        }
    }

    pub fn to_series(&self) -> LabeledSeries {
        LabeledSeries {
            labels: FLOW_LABELS.iter().map(|l| l.to_string()).collect(),
            values: vec![self.totals.inflow, self.totals.outflow],
        }
    }
}

impl ChartData for RatioSummary {
    fn has_data(&self) -> bool {
        self.totals.has_flow()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn inflow_outflow_ratio(transactions: &[TransactionRecord]) -> RatioSummary {
    let mut totals = FlowTotals::default();
    for tx in transactions {
        totals.add(tx.direction, parse_amount(&tx.amount));
    }
    RatioSummary { totals }
}
