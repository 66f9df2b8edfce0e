// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Output shapes handed to chart renderers.

use serde::Serialize;

use crate::models::Direction;

/// Lets a caller pick between a chart and an empty-state placeholder.
pub trait ChartData {
    fn has_data(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl LabeledSeries {
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.values[i])
    }
}

impl ChartData for LabeledSeries {
    fn has_data(&self) -> bool {
        !self.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for LabeledSeries {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        let mut series = LabeledSeries::default();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl MultiSeries {
    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.name == name)
    }
}

impl ChartData for MultiSeries {
    fn has_data(&self) -> bool {
        !self.labels.is_empty() && !self.datasets.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FlowTotals {
    pub inflow: f64,
    pub outflow: f64,
}

impl FlowTotals {
    pub fn add(&mut self, direction: Direction, amount: f64) {
        match direction {
            Direction::Inflow => self.inflow += amount,
            Direction::Outflow => self.outflow += amount,
        }
    }

    pub fn net(&self) -> f64 {
        self.inflow - self.outflow
    }

    pub fn has_flow(&self) -> bool {
        self.inflow > 0.0 || self.outflow > 0.0
    }
}
