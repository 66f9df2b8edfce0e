// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived analytics behind the dashboard charts.
//!
//! Every function here is a pure fold over the record lists it is given; no
//! state survives between calls.

pub mod breakdown;
pub mod dashboard;
pub mod keys;
pub mod money;
pub mod palette;
pub mod series;
pub mod timeline;

pub use breakdown::{
    RatioSummary, RatioTone, balance_by_account, expense_by_category, income_by_category,
    inflow_outflow_ratio, total_balance,
};
pub use dashboard::{
    BalanceSign, ChartDataset, ChartKind, ChartView, DEFAULT_RECENT_LIMIT, DashboardCache,
    DashboardData, DashboardInputs,
};
pub use series::{ChartData, Dataset, FlowTotals, LabeledSeries, MultiSeries};
pub use timeline::{
    MonthComparison, WeekdaySpending, balance_evolution, daily_average_spending,
    income_vs_expense_by_month, month_over_month, monthly_cash_flow, weekday_spending,
};
