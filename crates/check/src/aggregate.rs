// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worst-case status roll-up over a discovered unit.

use crate::flatten::DEFAULT_MAX_DEPTH;
use crate::threshold::{NoThresholds, RuntimeThreshold};
use rmk_core::{
    format_seconds, Error, ExecutionNode, MalformedTree, Severity, StatusTable, TimingSample,
};
use serde::Serialize;

/// Result of evaluating one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Worst severity over the unit root and all of its descendants.
    pub severity: Severity,
    /// Heading line followed by the hierarchically labelled messages.
    pub report: String,
    /// One sample per leaf, in tree order.
    pub timings: Vec<TimingSample>,
}

impl Evaluation {
    /// First line of the report.
    pub fn headline(&self) -> &str {
        self.report.lines().next().unwrap_or("")
    }
}

/// Evaluate `node` against `table` without runtime thresholds.
pub fn evaluate(node: &ExecutionNode, table: &StatusTable) -> Result<Evaluation, Error> {
    Aggregator::new(table).evaluate(node)
}

pub struct Aggregator<'a> {
    table: &'a StatusTable,
    thresholds: &'a dyn RuntimeThreshold,
    /// 0 = unlimited.
    max_depth: usize,
}

/// Messages and samples collected below one node.
struct Rollup {
    severity: Severity,
    messages: Vec<String>,
    timings: Vec<TimingSample>,
}

impl<'a> Aggregator<'a> {
    pub fn new(table: &'a StatusTable) -> Self {
        Self { table, thresholds: &NoThresholds, max_depth: DEFAULT_MAX_DEPTH }
    }

    rmk_core::setters! {
        set { max_depth: usize }
    }

    pub fn thresholds(mut self, thresholds: &'a dyn RuntimeThreshold) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn evaluate(&self, node: &ExecutionNode) -> Result<Evaluation, Error> {
        let rollup = self.collect(node, 0)?;
        let report = format!(
            "{} {} ran in {} seconds\n{}",
            node.kind().report_label(),
            node.name(),
            format_seconds(node.elapsed_ms()),
            rollup.messages.join(", ")
        );
        tracing::debug!(
            unit = %node.name(),
            severity = %rollup.severity,
            samples = rollup.timings.len(),
            "evaluated unit"
        );
        Ok(Evaluation { severity: rollup.severity, report, timings: rollup.timings })
    }

    fn collect(&self, node: &ExecutionNode, depth: usize) -> Result<Rollup, Error> {
        if self.max_depth > 0 && depth > self.max_depth {
            return Err(MalformedTree::ExcessiveDepth {
                node: node.name().to_string(),
                depth,
                max: self.max_depth,
            }
            .into());
        }

        let entry = self.table.lookup(node.status(), node.name())?;
        let own = match self.thresholds.escalate(node) {
            Some(escalated) => entry.severity.max(escalated),
            None => entry.severity,
        };

        if node.is_leaf() {
            return Ok(Rollup {
                severity: own,
                messages: vec![format!("{}: {}", node.name(), entry.label())],
                timings: vec![TimingSample::of(node)],
            });
        }

        let mut rollup = Rollup { severity: own, messages: Vec::new(), timings: Vec::new() };
        for child in node.children() {
            let sub = self.collect(child, depth + 1)?;
            rollup.severity = rollup.severity.max(sub.severity);
            rollup.messages.extend(sub.messages);
            rollup.timings.extend(sub.timings);
        }

        // The unit root composes the report itself; everything below it is
        // folded into one labelled message.
        if depth > 0 {
            rollup.messages = vec![format!("Suite {}: {}\n", node.name(), rollup.messages.join(", "))];
        }
        Ok(rollup)
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
