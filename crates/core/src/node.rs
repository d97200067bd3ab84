// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution tree model.
//!
//! Suites, tests and keywords share one node type tagged with a [`NodeKind`].
//! Trees arrive already parsed; as JSON they look like:
//!
//! ```json
//! {"kind": "suite", "name": "Testsuite", "status": "PASS",
//!  "start_ms": 0, "end_ms": 500, "children": [ ... ]}
//! ```

use crate::error::MalformedTree;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What an execution tree entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Suite,
    Test,
    Keyword,
}

impl NodeKind {
    /// Heading used when a node of this kind is the root of a check report.
    pub fn report_label(self) -> &'static str {
        match self {
            NodeKind::Suite => "Robot Suite",
            NodeKind::Test => "Robot Test",
            NodeKind::Keyword => "Robot Keyword",
        }
    }
}

crate::simple_display! {
    NodeKind {
        Suite => "suite",
        Test => "test",
        Keyword => "keyword",
    }
}

/// One suite, test or keyword of an execution report.
///
/// The node's own `status` is whatever the test runner assigned to it and is
/// independent of its children. Elapsed time always matches the timestamps
/// when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct ExecutionNode {
    kind: NodeKind,
    name: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_ms: Option<u64>,
    elapsed_ms: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ExecutionNode>,
}

impl ExecutionNode {
    pub fn new(kind: NodeKind, name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            status: status.into(),
            start_ms: None,
            end_ms: None,
            elapsed_ms: 0,
            children: Vec::new(),
        }
    }

    pub fn suite(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self::new(NodeKind::Suite, name, status)
    }

    pub fn test(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self::new(NodeKind::Test, name, status)
    }

    pub fn keyword(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self::new(NodeKind::Keyword, name, status)
    }

    /// Set the elapsed time without timestamps.
    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.start_ms = None;
        self.end_ms = None;
        self.elapsed_ms = elapsed_ms;
        self
    }

    /// Set both timestamps; elapsed time is derived from them.
    pub fn with_times(mut self, start_ms: u64, end_ms: u64) -> Result<Self, MalformedTree> {
        self.elapsed_ms = span(&self.name, start_ms, end_ms)?;
        self.start_ms = Some(start_ms);
        self.end_ms = Some(end_ms);
        Ok(self)
    }

    pub fn with_child(mut self, child: ExecutionNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ExecutionNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Copy of this node's own fields carrying `children` instead of the
    /// original child list.
    pub fn reshaped(&self, children: Vec<ExecutionNode>) -> Self {
        Self {
            kind: self.kind,
            name: self.name.clone(),
            status: self.status.clone(),
            start_ms: self.start_ms,
            end_ms: self.end_ms,
            elapsed_ms: self.elapsed_ms,
            children,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw status string as reported by the test runner.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn start_ms(&self) -> Option<u64> {
        self.start_ms
    }

    pub fn end_ms(&self) -> Option<u64> {
        self.end_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    pub fn children(&self) -> &[ExecutionNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children of one kind, in order.
    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &ExecutionNode> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    pub fn has_children_of(&self, kind: NodeKind) -> bool {
        self.children.iter().any(|c| c.kind == kind)
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        self.children.iter().map(|c| c.depth() + 1).max().unwrap_or(0)
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &ExecutionNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

fn span(node: &str, start_ms: u64, end_ms: u64) -> Result<u64, MalformedTree> {
    end_ms.checked_sub(start_ms).ok_or_else(|| MalformedTree::TimeReversed {
        node: node.to_string(),
        start_ms,
        end_ms,
    })
}

/// Wire shape of a node before its timing is validated.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNode {
    kind: NodeKind,
    name: String,
    status: String,
    #[serde(default)]
    start_ms: Option<u64>,
    #[serde(default)]
    end_ms: Option<u64>,
    #[serde(default)]
    elapsed_ms: Option<u64>,
    #[serde(default)]
    children: Vec<ExecutionNode>,
}

impl TryFrom<RawNode> for ExecutionNode {
    type Error = MalformedTree;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let elapsed_ms = match (raw.start_ms, raw.end_ms) {
            (Some(start_ms), Some(end_ms)) => {
                let span_ms = span(&raw.name, start_ms, end_ms)?;
                match raw.elapsed_ms {
                    Some(elapsed_ms) if elapsed_ms != span_ms => {
                        return Err(MalformedTree::InconsistentTiming {
                            node: raw.name,
                            elapsed_ms,
                            span_ms,
                        });
                    }
                    _ => span_ms,
                }
            }
            _ => raw.elapsed_ms.unwrap_or(0),
        };
        Ok(Self {
            kind: raw.kind,
            name: raw.name,
            status: raw.status,
            start_ms: raw.start_ms,
            end_ms: raw.end_ms,
            elapsed_ms,
            children: raw.children,
        })
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
