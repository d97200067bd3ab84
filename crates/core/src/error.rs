// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types shared by discovery and evaluation.

use crate::node::NodeKind;
use thiserror::Error;

/// Errors raised while discovering or evaluating an execution tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A node carries a status that the status table does not know.
    #[error("unknown status '{status}' on '{node}'")]
    UnknownStatus { status: String, node: String },

    /// The requested item is not part of the current discovery pass.
    #[error("item '{item}' vanished from the execution report")]
    ItemNotFound { item: String },

    #[error("malformed execution tree: {0}")]
    MalformedTree(#[from] MalformedTree),
}

impl Error {
    pub fn unknown_status(status: impl Into<String>, node: impl Into<String>) -> Self {
        Self::UnknownStatus { status: status.into(), node: node.into() }
    }

    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound { item: item.into() }
    }

    /// Whether the error means the item disappeared between discovery and check.
    pub fn is_item_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. })
    }
}

/// Structural problems in an execution tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedTree {
    #[error("{parent_kind} '{parent}' cannot contain {child_kind} '{child}'")]
    UnexpectedChild { parent_kind: NodeKind, parent: String, child_kind: NodeKind, child: String },

    #[error("excessive nesting depth at '{node}' ({depth} levels, max {max})")]
    ExcessiveDepth { node: String, depth: usize, max: usize },

    #[error("'{node}' ends before it starts ({start_ms}ms > {end_ms}ms)")]
    TimeReversed { node: String, start_ms: u64, end_ms: u64 },

    #[error("'{node}' reports {elapsed_ms}ms elapsed but its timestamps span {span_ms}ms")]
    InconsistentTiming { node: String, elapsed_ms: u64, span_ms: u64 },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
