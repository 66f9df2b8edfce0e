// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Conversion of decimal-string amounts into chartable numbers.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Direction, TransactionRecord};

/// Malformed input becomes `NaN`, not an error.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<Decimal>() {
        Ok(d) => d.to_f64().unwrap_or(f64::NAN),
        Err(_) => {
            tracing::warn!(amount = raw, "Malformed amount, charting as NaN");
            f64::NAN
        }
    }
}

pub fn signed_amount(tx: &TransactionRecord) -> f64 {
    let amount = parse_amount(&tx.amount);
    match tx.direction {
        Direction::Inflow => amount,
        Direction::Outflow => -amount,
    }
}

/// Half away from zero at two decimals. Non-finite values pass through.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    match Decimal::from_f64(value) {
        Some(d) => {
            let r = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            // mantissa / 10^scale keeps the nearest f64 to the rounded decimal
            r.mantissa() as f64 / 10f64.powi(r.scale() as i32)
        }
        None => value,
    }
}
