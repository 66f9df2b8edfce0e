// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Chart colors. Purely presentational; nothing here feeds aggregation.

pub const EXPENSE_PALETTE: [&str; 25] = [
    "#238636", "#1f6feb", "#cf222e", "#9a6700", "#8b949e", "#6e40c9", "#0969da", "#bf8700",
    "#57606a", "#da3633", "#3fb950", "#2ea043", "#58a6ff", "#1f6feb", "#ff7b72", "#f85149",
    "#ffa657", "#d29922", "#d2a8ff", "#bc8cff", "#a371f7", "#79c0ff", "#56d364", "#fa7970",
    "#e3b341",
];

pub const INCOME_PALETTE: [&str; 20] = [
    "#238636", "#1f6feb", "#cf222e", "#d29922", "#6e40c9", "#0969da", "#bf8700", "#da3633",
    "#3fb950", "#58a6ff", "#a371f7", "#ffa657", "#56d364", "#79c0ff", "#d2a8ff", "#e3b341",
    "#f85149", "#2ea043", "#bc8cff", "#8b949e",
];

pub const INFLOW_COLOR: &str = "rgba(35, 134, 54, 0.7)";
pub const OUTFLOW_COLOR: &str = "rgba(207, 34, 46, 0.7)";
pub const LINE_COLOR: &str = "rgba(31, 111, 235, 1)";
pub const WEEKDAY_COLOR: &str = "rgba(31, 111, 235, 0.7)";
pub const WEEKEND_COLOR: &str = "rgba(107, 76, 201, 0.7)";

/// Picks the color at `index`, wrapping around the palette.
pub fn cycle(palette: &[&'static str], index: usize) -> &'static str {
    palette[index % palette.len()]
}

pub fn sign_color(value: f64) -> &'static str {
    if value >= 0.0 {
        INFLOW_COLOR
    } else {
        OUTFLOW_COLOR
    }
}

/// Sunday and Saturday stand out from the working days.
pub fn weekday_color(weekday: usize) -> &'static str {
    if weekday == 0 || weekday == 6 {
        WEEKEND_COLOR
    } else {
        WEEKDAY_COLOR
    }
}
