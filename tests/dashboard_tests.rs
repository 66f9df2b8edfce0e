// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use cashboard::analytics::palette::{
    EXPENSE_PALETTE, INFLOW_COLOR, OUTFLOW_COLOR, WEEKDAY_COLOR, WEEKEND_COLOR,
};
use cashboard::analytics::{
    BalanceSign, ChartKind, DashboardCache, DashboardData, DashboardInputs,
};
use cashboard::models::{AccountRecord, CategoryRecord, Direction, Snapshot, TransactionRecord};
use chrono::NaiveDate;

fn tx(id: &str, amount: &str, direction: Direction, date: &str, category: Option<&str>) -> TransactionRecord {
    TransactionRecord {
        id: id.into(),
        amount: amount.into(),
        direction,
        date: date.into(),
        account_id: "1".into(),
        category_id: category.map(|c| c.to_string()),
        description: Some(format!("tx {}", id)),
        source: None,
        destination: None,
    }
}

fn snapshot() -> Snapshot {
    Snapshot {
        accounts: vec![
            AccountRecord {
                id: "1".into(),
                name: "Checking".into(),
                balance: "250.00".into(),
                institution: "Bank".into(),
                description: None,
            },
            AccountRecord {
                id: "2".into(),
                name: "Card".into(),
                balance: "-75.50".into(),
                institution: "Bank".into(),
                description: None,
            },
        ],
        categories: vec![CategoryRecord {
            id: "1".into(),
            name: "Food".into(),
        }],
        // newest first, as the backend lists them
        transactions: vec![
            tx("7", "20.00", Direction::Outflow, "2024-02-01", Some("1")),
            tx("6", "5.00", Direction::Outflow, "2024-01-30", None),
            tx("5", "15.00", Direction::Outflow, "2024-01-20", Some("1")),
            tx("4", "40.00", Direction::Outflow, "2024-01-10", Some("1")),
            tx("3", "100.00", Direction::Inflow, "2024-01-05", None),
            tx("2", "1.00", Direction::Outflow, "2024-01-04", None),
        ],
    }
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
}

#[test]
fn build_runs_every_reducer() {
    let data = DashboardData::build(&snapshot(), as_of(), 5);

    assert_eq!(data.total_balance, 174.5);
    assert_eq!(data.balance_sign, BalanceSign::Positive);
    assert_eq!(data.recent.len(), 5);
    assert_eq!(data.recent[0].id, "7");
    assert_eq!(data.balance_by_account.labels, vec!["Checking", "Card"]);
    assert_eq!(data.balance_evolution.values.last().copied(), Some(19.0));
    assert_eq!(data.expense_by_category.labels, vec!["Food", "Uncategorized"]);
    assert_eq!(data.expense_by_category.values, vec![75.0, 6.0]);
    assert_eq!(data.month_over_month.current_month, "2024-02");
    assert_eq!(data.month_over_month.previous.inflow, 100.0);

    for kind in ChartKind::ALL {
        assert!(data.has_data(kind), "{} should have data", kind);
    }
}

#[test]
fn recent_limit_caps_the_recent_list() {
    let data = DashboardData::build(&snapshot(), as_of(), 2);
    let ids: Vec<&str> = data.recent.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["7", "6"]);
}

#[test]
fn empty_snapshot_has_no_data_but_seven_weekdays() {
    let data = DashboardData::build(&Snapshot::default(), as_of(), 5);
    for kind in ChartKind::ALL {
        assert!(!data.has_data(kind), "{} should be empty", kind);
    }
    assert_eq!(data.balance_sign, BalanceSign::Zero);
    let view = data.view(ChartKind::WeekdaySpending);
    assert!(!view.has_data);
    assert_eq!(view.labels.len(), 7);
    assert_eq!(view.datasets[0].values, vec![0.0; 7]);
}

#[test]
fn views_carry_presentation_colors() {
    let data = DashboardData::build(&snapshot(), as_of(), 5);

    let balances = data.view(ChartKind::BalanceByAccount);
    assert_eq!(balances.datasets[0].colors, vec![INFLOW_COLOR, OUTFLOW_COLOR]);

    let expenses = data.view(ChartKind::ExpenseByCategory);
    assert_eq!(expenses.datasets[0].colors, vec![EXPENSE_PALETTE[0], EXPENSE_PALETTE[1]]);

    let weekdays = data.view(ChartKind::WeekdaySpending);
    let colors = &weekdays.datasets[0].colors;
    assert_eq!(colors[0], WEEKEND_COLOR);
    assert_eq!(colors[3], WEEKDAY_COLOR);
    assert_eq!(colors[6], WEEKEND_COLOR);

    let monthly = data.view(ChartKind::IncomeVsExpense);
    assert_eq!(monthly.datasets.len(), 2);
    assert!(monthly.datasets[0].colors.iter().all(|c| c == INFLOW_COLOR));
    assert!(monthly.datasets[1].colors.iter().all(|c| c == OUTFLOW_COLOR));
}

#[test]
fn ratio_view_has_caption() {
    let data = DashboardData::build(&snapshot(), as_of(), 5);
    let view = data.view(ChartKind::InflowOutflowRatio);
    assert_eq!(view.labels, vec!["Inflow", "Outflow"]);
    assert_eq!(view.caption.as_deref(), Some("55.2% inflow · 44.8% outflow"));

    let empty = DashboardData::build(&Snapshot::default(), as_of(), 5);
    assert_eq!(empty.view(ChartKind::InflowOutflowRatio).caption, None);
}

#[test]
fn chart_kind_round_trips_names() {
    for kind in ChartKind::ALL {
        assert_eq!(kind.name().parse::<ChartKind>().unwrap(), kind);
    }
    assert!("pie-of-everything".parse::<ChartKind>().is_err());
    assert_eq!(DashboardData::build(&snapshot(), as_of(), 5).views().len(), ChartKind::ALL.len());
}

#[test]
fn cache_reuses_bundle_for_same_inputs() {
    let inputs = DashboardInputs::from_snapshot(snapshot());
    let mut cache = DashboardCache::new();

    let first = cache.get(&inputs, as_of(), 5);
    let second = cache.get(&inputs.clone(), as_of(), 5);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.recomputations(), 1);
}

#[test]
fn cache_recomputes_when_an_input_is_replaced() {
    let inputs = DashboardInputs::from_snapshot(snapshot());
    let mut cache = DashboardCache::new();
    let first = cache.get(&inputs, as_of(), 5);

    // equal contents, new reference
    let replaced = DashboardInputs {
        transactions: inputs.transactions.iter().cloned().collect(),
        ..inputs.clone()
    };
    let second = cache.get(&replaced, as_of(), 5);
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
    assert_eq!(cache.recomputations(), 2);

    cache.get(&replaced, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 5);
    assert_eq!(cache.recomputations(), 3);

    cache.invalidate();
    cache.get(&replaced, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 5);
    assert_eq!(cache.recomputations(), 4);
}
