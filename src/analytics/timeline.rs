// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Time-bucketed reducers: daily, monthly and weekday views of the
//! transaction list.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::keys::{
    WEEKDAY_LABELS, day_key, days_in_month, month_key, month_key_of, parse_month_key,
    previous_month, weekday_key,
};
use crate::analytics::money::{parse_amount, round2, signed_amount};
use crate::analytics::series::{ChartData, Dataset, FlowTotals, LabeledSeries, MultiSeries};
use crate::models::{Direction, TransactionRecord};

pub const INCOME_DATASET: &str = "Income";
pub const EXPENSE_DATASET: &str = "Expenses";
pub const FLOW_LABELS: [&str; 2] = ["Inflow", "Outflow"];

/// Points are rounded; the running total is not.
pub fn balance_evolution(transactions: &[TransactionRecord]) -> LabeledSeries {
    let mut net_by_day: BTreeMap<&str, f64> = BTreeMap::new();
    for tx in transactions {
        *net_by_day.entry(day_key(tx)).or_insert(0.0) += signed_amount(tx);
    }

    let mut cumulative = 0.0;
    net_by_day
        .into_iter()
        .map(|(day, net)| {
            cumulative += net;
            (day, round2(cumulative))
        })
        .collect()
}

pub fn daily_average_spending(transactions: &[TransactionRecord]) -> LabeledSeries {
    monthly_outflow_totals(transactions)
        .into_iter()
        .map(|(month, total)| {
            let days = parse_month_key(&month)
                .map(|(y, m)| days_in_month(y, m))
                .unwrap_or(0);
            let avg = if days == 0 { f64::NAN } else { total / days as f64 };
            (month, round2(avg))
        })
        .collect()
}

fn monthly_outflow_totals(transactions: &[TransactionRecord]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for tx in transactions.iter().filter(|t| t.direction == Direction::Outflow) {
        if let Some(month) = month_key(tx) {
            *totals.entry(month).or_insert(0.0) += parse_amount(&tx.amount);
        }
    }
    totals
}

fn monthly_flows(transactions: &[TransactionRecord]) -> BTreeMap<String, FlowTotals> {
    let mut flows: BTreeMap<String, FlowTotals> = BTreeMap::new();
    for tx in transactions {
        if let Some(month) = month_key(tx) {
            flows
                .entry(month)
                .or_default()
                .add(tx.direction, parse_amount(&tx.amount));
        }
    }
    flows
}

pub fn income_vs_expense_by_month(transactions: &[TransactionRecord]) -> MultiSeries {
    let flows = monthly_flows(transactions);
    if flows.is_empty() {
        return MultiSeries::default();
    }

    let labels: Vec<String> = flows.keys().cloned().collect();
    let income = flows.values().map(|f| f.inflow).collect();
    let expenses = flows.values().map(|f| f.outflow).collect();

    MultiSeries {
        labels,
        datasets: vec![
            Dataset {
                name: INCOME_DATASET.to_string(),
                values: income,
            },
            Dataset {
                name: EXPENSE_DATASET.to_string(),
                values: expenses,
            },
        ],
    }
}

pub fn monthly_cash_flow(transactions: &[TransactionRecord]) -> LabeledSeries {
    monthly_flows(transactions)
        .into_iter()
        .map(|(month, flow)| (month, flow.net()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthComparison {
    pub previous_month: String,
    pub current_month: String,
    pub previous: FlowTotals,
    pub current: FlowTotals,
}

impl MonthComparison {
    /// Grouped bars: one dataset per month, each `[inflow, outflow]`.
    pub fn to_series(&self) -> MultiSeries {
        MultiSeries {
            labels: FLOW_LABELS.iter().map(|l| l.to_string()).collect(),
            datasets: vec![
                Dataset {
                    name: self.previous_month.clone(),
                    values: vec![self.previous.inflow, self.previous.outflow],
                },
                Dataset {
                    name: self.current_month.clone(),
                    values: vec![self.current.inflow, self.current.outflow],
                },
            ],
        }
    }
}

impl ChartData for MonthComparison {
    fn has_data(&self) -> bool {
        self.previous.has_flow() || self.current.has_flow()
    }
}

/// Compares the month containing `as_of` with the month before it.
pub fn month_over_month(transactions: &[TransactionRecord], as_of: NaiveDate) -> MonthComparison {
    let current_month = month_key_of(as_of);
    let previous_month = month_key_of(previous_month(as_of));

    let mut current = FlowTotals::default();
    let mut previous = FlowTotals::default();

    for tx in transactions {
        let Some(month) = month_key(tx) else {
            continue;
        };
        if month == current_month {
            current.add(tx.direction, parse_amount(&tx.amount));
        } else if month == previous_month {
            previous.add(tx.direction, parse_amount(&tx.amount));
        }
    }

    MonthComparison {
        previous_month,
        current_month,
        previous,
        current,
    }
}

/// Outflow totals for each day of the week, Sunday first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdaySpending {
    pub totals: [f64; 7],
    has_outflow: bool,
}

impl WeekdaySpending {
    pub fn to_series(&self) -> LabeledSeries {
        WEEKDAY_LABELS
            .iter()
            .zip(self.totals.iter().copied())
            .map(|(label, value)| (*label, value))
            .collect()
    }
}

impl ChartData for WeekdaySpending {
    fn has_data(&self) -> bool {
        self.has_outflow
    }
}

pub fn weekday_spending(transactions: &[TransactionRecord]) -> WeekdaySpending {
    let mut totals = [0.0; 7];
    let mut has_outflow = false;

    for tx in transactions.iter().filter(|t| t.direction == Direction::Outflow) {
        has_outflow = true;
        if let Some(day) = weekday_key(tx) {
            totals[day] += parse_amount(&tx.amount);
        }
    }

    WeekdaySpending {
        totals,
        has_outflow,
    }
}
