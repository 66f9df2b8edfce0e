// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Validation failures raised while records enter the local store.
///
/// The analytics core never produces these; it absorbs bad data instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Invalid direction '{0}', expected INFLOW or OUTFLOW")]
    InvalidDirection(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid amount '{0}', expected a non-negative decimal")]
    InvalidAmount(String),
    #[error("Account '{0}' not found")]
    UnknownAccount(String),
    #[error("Category '{0}' not found")]
    UnknownCategory(String),
}
