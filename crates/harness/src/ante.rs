// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ante numbers, the key shared by raw and summary maps.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// An ante number exactly as it was written (a run of digits).
///
/// Kept as text so `"01"` and `"1"` stay distinct keys. Ordering is numeric
/// for digit strings without leading zeros: shorter strings sort first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnteNumber(String);

impl AnteNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnteNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AnteNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for AnteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for AnteNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for AnteNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[path = "ante_tests.rs"]
mod tests;
