// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hook for escalating a node's severity from its runtime.
//!
//! No concrete threshold rules ship with the crate. An implementation sees
//! every evaluated node and may return a severity that joins the node's own
//! status severity in the roll-up.

use rmk_core::{ExecutionNode, Severity};

pub trait RuntimeThreshold: Send + Sync {
    /// Severity demanded by this node's runtime, if any.
    fn escalate(&self, node: &ExecutionNode) -> Option<Severity>;
}

/// Never escalates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThresholds;

impl RuntimeThreshold for NoThresholds {
    fn escalate(&self, _node: &ExecutionNode) -> Option<Severity> {
        None
    }
}

impl<F> RuntimeThreshold for F
where
    F: Fn(&ExecutionNode) -> Option<Severity> + Send + Sync,
{
    fn escalate(&self, node: &ExecutionNode) -> Option<Severity> {
        self(node)
    }
}
