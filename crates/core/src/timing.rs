// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timing samples and elapsed-time formatting.

use crate::node::ExecutionNode;
use serde::{Deserialize, Serialize};

/// One `(label, seconds)` measurement for performance graphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    pub label: String,
    pub seconds: f64,
}

impl TimingSample {
    pub fn new(label: impl Into<String>, seconds: f64) -> Self {
        Self { label: label.into(), seconds }
    }

    pub fn of(node: &ExecutionNode) -> Self {
        Self::new(node.name(), ms_to_seconds(node.elapsed_ms()))
    }
}

pub fn ms_to_seconds(elapsed_ms: u64) -> f64 {
    elapsed_ms as f64 / 1000.0
}

/// Format milliseconds as seconds with at least one decimal and no trailing
/// zeros beyond it: `500` → `"0.5"`, `2000` → `"2.0"`, `1234` → `"1.234"`.
pub fn format_seconds(elapsed_ms: u64) -> String {
    let whole = elapsed_ms / 1000;
    let frac = elapsed_ms % 1000;
    if frac == 0 {
        return format!("{whole}.0");
    }
    let digits = format!("{frac:03}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
