// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Runs every reducer against one snapshot and bundles the results.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::breakdown::{
    RatioSummary, balance_by_account, expense_by_category, income_by_category,
    inflow_outflow_ratio, total_balance,
};
use crate::analytics::palette;
use crate::analytics::series::{ChartData, LabeledSeries, MultiSeries};
use crate::analytics::timeline::{
    MonthComparison, WeekdaySpending, balance_evolution, daily_average_spending,
    income_vs_expense_by_month, month_over_month, monthly_cash_flow, weekday_spending,
};
use crate::models::{AccountRecord, CategoryRecord, Snapshot, TransactionRecord};

pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    BalanceByAccount,
    BalanceEvolution,
    DailyAverageSpending,
    ExpenseByCategory,
    IncomeByCategory,
    IncomeVsExpense,
    MonthlyCashFlow,
    InflowOutflowRatio,
    MonthOverMonth,
    WeekdaySpending,
}

impl ChartKind {
    pub const ALL: [ChartKind; 10] = [
        ChartKind::BalanceByAccount,
        ChartKind::BalanceEvolution,
        ChartKind::DailyAverageSpending,
        ChartKind::ExpenseByCategory,
        ChartKind::IncomeByCategory,
        ChartKind::IncomeVsExpense,
        ChartKind::MonthlyCashFlow,
        ChartKind::InflowOutflowRatio,
        ChartKind::MonthOverMonth,
        ChartKind::WeekdaySpending,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::BalanceByAccount => "balance-by-account",
            ChartKind::BalanceEvolution => "balance-evolution",
            ChartKind::DailyAverageSpending => "daily-average-spending",
            ChartKind::ExpenseByCategory => "expense-by-category",
            ChartKind::IncomeByCategory => "income-by-category",
            ChartKind::IncomeVsExpense => "income-vs-expense",
            ChartKind::MonthlyCashFlow => "monthly-cash-flow",
            ChartKind::InflowOutflowRatio => "inflow-outflow-ratio",
            ChartKind::MonthOverMonth => "month-over-month",
            ChartKind::WeekdaySpending => "weekday-spending",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.name()).collect()
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown chart '{}' (expected one of: {})",
                    s,
                    Self::names().join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub name: String,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartDataset {
    fn new(name: &str, values: Vec<f64>, colors: Vec<String>) -> Self {
        ChartDataset {
            name: name.to_string(),
            values,
            colors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub chart: ChartKind,
    pub has_data: bool,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ChartView {
    fn single(chart: ChartKind, name: &str, series: &LabeledSeries, colors: Vec<String>) -> Self {
        ChartView {
            chart,
            has_data: series.has_data(),
            labels: series.labels.clone(),
            datasets: vec![ChartDataset::new(name, series.values.clone(), colors)],
            caption: None,
        }
    }

    /// Colors the i-th dataset entirely with `colors[i]`.
    fn multi(chart: ChartKind, series: &MultiSeries, colors: &[&str]) -> Self {
        ChartView {
            chart,
            has_data: series.has_data(),
            labels: series.labels.clone(),
            datasets: series
                .datasets
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let color = if colors.is_empty() {
                        ""
                    } else {
                        colors[i % colors.len()]
                    };
                    ChartDataset::new(&d.name, d.values.clone(), fill(d.values.len(), color))
                })
                .collect(),
            caption: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSign {
    Positive,
    Negative,
    Zero,
}

impl BalanceSign {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            BalanceSign::Positive
        } else if value < 0.0 {
            BalanceSign::Negative
        } else {
            BalanceSign::Zero
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub as_of: NaiveDate,
    pub total_balance: f64,
    pub balance_sign: BalanceSign,
    pub recent: Vec<TransactionRecord>,
    pub balance_by_account: LabeledSeries,
    pub balance_evolution: LabeledSeries,
    pub daily_average_spending: LabeledSeries,
    pub expense_by_category: LabeledSeries,
    pub income_by_category: LabeledSeries,
    pub income_vs_expense: MultiSeries,
    pub monthly_cash_flow: LabeledSeries,
    pub inflow_outflow_ratio: RatioSummary,
    pub month_over_month: MonthComparison,
    pub weekday_spending: WeekdaySpending,
}

impl DashboardData {
    pub fn build(snapshot: &Snapshot, as_of: NaiveDate, recent_limit: usize) -> Self {
        Self::from_parts(
            &snapshot.accounts,
            &snapshot.categories,
            &snapshot.transactions,
            as_of,
            recent_limit,
        )
    }

    /// `transactions` is expected newest first, as the backend lists them;
    /// the recent list is its first `recent_limit` entries.
    pub fn from_parts(
        accounts: &[AccountRecord],
        categories: &[CategoryRecord],
        transactions: &[TransactionRecord],
        as_of: NaiveDate,
        recent_limit: usize,
    ) -> Self {
        tracing::debug!(
            accounts = accounts.len(),
            categories = categories.len(),
            transactions = transactions.len(),
            %as_of,
            "Building dashboard"
        );

        let total = total_balance(accounts);
        DashboardData {
            as_of,
            total_balance: total,
            balance_sign: BalanceSign::of(total),
            recent: transactions.iter().take(recent_limit).cloned().collect(),
            balance_by_account: balance_by_account(accounts),
            balance_evolution: balance_evolution(transactions),
            daily_average_spending: daily_average_spending(transactions),
            expense_by_category: expense_by_category(transactions, categories),
            income_by_category: income_by_category(transactions, categories),
            income_vs_expense: income_vs_expense_by_month(transactions),
            monthly_cash_flow: monthly_cash_flow(transactions),
            inflow_outflow_ratio: inflow_outflow_ratio(transactions),
            month_over_month: month_over_month(transactions, as_of),
            weekday_spending: weekday_spending(transactions),
        }
    }

    pub fn has_data(&self, chart: ChartKind) -> bool {
        match chart {
            ChartKind::BalanceByAccount => self.balance_by_account.has_data(),
            ChartKind::BalanceEvolution => self.balance_evolution.has_data(),
            ChartKind::DailyAverageSpending => self.daily_average_spending.has_data(),
            ChartKind::ExpenseByCategory => self.expense_by_category.has_data(),
            ChartKind::IncomeByCategory => self.income_by_category.has_data(),
            ChartKind::IncomeVsExpense => self.income_vs_expense.has_data(),
            ChartKind::MonthlyCashFlow => self.monthly_cash_flow.has_data(),
            ChartKind::InflowOutflowRatio => self.inflow_outflow_ratio.has_data(),
            ChartKind::MonthOverMonth => self.month_over_month.has_data(),
            ChartKind::WeekdaySpending => self.weekday_spending.has_data(),
        }
    }

    pub fn view(&self, chart: ChartKind) -> ChartView {
        match chart {
            ChartKind::BalanceByAccount => {
                let s = &self.balance_by_account;
                let colors = s.values.iter().map(|v| palette::sign_color(*v).to_string()).collect();
                ChartView::single(chart, "Balance", s, colors)
            }
            ChartKind::BalanceEvolution => {
                let s = &self.balance_evolution;
                ChartView::single(chart, "Cumulative balance", s, fill(s.len(), palette::LINE_COLOR))
            }
            ChartKind::DailyAverageSpending => {
                let s = &self.daily_average_spending;
                ChartView::single(chart, "Daily average", s, fill(s.len(), palette::OUTFLOW_COLOR))
            }
            ChartKind::ExpenseByCategory => {
                let s = &self.expense_by_category;
                ChartView::single(chart, "Expenses", s, cycled(s.len(), &palette::EXPENSE_PALETTE))
            }
            ChartKind::IncomeByCategory => {
                let s = &self.income_by_category;
                ChartView::single(chart, "Income", s, cycled(s.len(), &palette::INCOME_PALETTE))
            }
            ChartKind::IncomeVsExpense => ChartView::multi(
                chart,
                &self.income_vs_expense,
                &[palette::INFLOW_COLOR, palette::OUTFLOW_COLOR],
            ),
            ChartKind::MonthlyCashFlow => {
                let s = &self.monthly_cash_flow;
                let colors = s.values.iter().map(|v| palette::sign_color(*v).to_string()).collect();
                ChartView::single(chart, "Net flow", s, colors)
            }
            ChartKind::InflowOutflowRatio => {
                let r = &self.inflow_outflow_ratio;
                let mut view = ChartView::single(
                    chart,
                    "Volume",
                    &r.to_series(),
                    flow_colors(),
                );
                view.has_data = r.has_data();
                view.caption = Some(r.label()).filter(|l| !l.is_empty());
                view
            }
            ChartKind::MonthOverMonth => {
                let m = &self.month_over_month;
                let mut view = ChartView::multi(chart, &m.to_series(), &[]);
                for dataset in &mut view.datasets {
                    dataset.colors = flow_colors();
                }
                view.has_data = m.has_data();
                view
            }
            ChartKind::WeekdaySpending => {
                let w = &self.weekday_spending;
                let colors = (0..7).map(|d| palette::weekday_color(d).to_string()).collect();
                let mut view = ChartView::single(chart, "Total spent", &w.to_series(), colors);
                view.has_data = w.has_data();
                view
            }
        }
    }

    pub fn views(&self) -> Vec<ChartView> {
        ChartKind::ALL.iter().map(|k| self.view(*k)).collect()
    }
}

fn flow_colors() -> Vec<String> {
    vec![palette::INFLOW_COLOR.to_string(), palette::OUTFLOW_COLOR.to_string()]
}

fn fill(len: usize, color: &str) -> Vec<String> {
    vec![color.to_string(); len]
}

fn cycled(len: usize, colors: &[&'static str]) -> Vec<String> {
    (0..len).map(|i| palette::cycle(colors, i).to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct DashboardInputs {
    pub accounts: Arc<[AccountRecord]>,
    pub categories: Arc<[CategoryRecord]>,
    pub transactions: Arc<[TransactionRecord]>,
}

impl DashboardInputs {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        DashboardInputs {
            accounts: snapshot.accounts.into(),
            categories: snapshot.categories.into(),
            transactions: snapshot.transactions.into(),
        }
    }

    fn same_as(&self, other: &DashboardInputs) -> bool {
        Arc::ptr_eq(&self.accounts, &other.accounts)
            && Arc::ptr_eq(&self.categories, &other.categories)
            && Arc::ptr_eq(&self.transactions, &other.transactions)
    }
}

struct CachedDashboard {
    inputs: DashboardInputs,
    as_of: NaiveDate,
    recent_limit: usize,
    data: Arc<DashboardData>,
}

/// Recomputes only when an input `Arc` is replaced, even by equal contents.
#[derive(Default)]
pub struct DashboardCache {
    last: Option<CachedDashboard>,
    recomputations: usize,
}

impl DashboardCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &mut self,
        inputs: &DashboardInputs,
        as_of: NaiveDate,
        recent_limit: usize,
    ) -> Arc<DashboardData> {
        if let Some(cached) = &self.last {
            if cached.inputs.same_as(inputs)
                && cached.as_of == as_of
                && cached.recent_limit == recent_limit
            {
                return Arc::clone(&cached.data);
            }
        }

        let data = Arc::new(DashboardData::from_parts(
            &inputs.accounts,
            &inputs.categories,
            &inputs.transactions,
            as_of,
            recent_limit,
        ));
        self.recomputations += 1;
        self.last = Some(CachedDashboard {
            inputs: inputs.clone(),
            as_of,
            recent_limit,
            data: Arc::clone(&data),
        });
        data
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
