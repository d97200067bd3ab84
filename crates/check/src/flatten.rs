// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery: cut an execution tree into independently checked units.
//!
//! Expansion follows the node kind. A suite with sub-suites expands into
//! them, a suite without sub-suites expands into its tests, and tests and
//! keywords expand into keywords. A node sitting exactly at the discovery
//! level is emitted together with everything reconstructed below it;
//! every other node is handed back to its parent.

use rmk_core::{Error, ExecutionNode, MalformedTree, NodeKind};

/// Default limit on traversal depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// A named subtree produced by flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredUnit {
    node: ExecutionNode,
}

impl DiscoveredUnit {
    pub fn name(&self) -> &str {
        self.node.name()
    }

    pub fn node(&self) -> &ExecutionNode {
        &self.node
    }

    pub fn into_node(self) -> ExecutionNode {
        self.node
    }
}

/// Flatten `root` at `level` with the default depth limit.
pub fn flatten(root: &ExecutionNode, level: usize) -> Result<Vec<DiscoveredUnit>, Error> {
    Flattener::new(level).flatten(root)
}

#[derive(Debug, Clone)]
pub struct Flattener {
    level: usize,
    /// 0 = unlimited.
    max_depth: usize,
}

impl Flattener {
    pub fn new(level: usize) -> Self {
        Self { level, max_depth: DEFAULT_MAX_DEPTH }
    }

    rmk_core::setters! {
        set { max_depth: usize }
    }

    pub fn flatten(&self, root: &ExecutionNode) -> Result<Vec<DiscoveredUnit>, Error> {
        let mut units = Vec::new();
        self.visit(root, 0, &mut units)?;
        Ok(units)
    }

    /// Returns the reconstructed node, or `None` when it was emitted.
    fn visit(
        &self,
        node: &ExecutionNode,
        depth: usize,
        units: &mut Vec<DiscoveredUnit>,
    ) -> Result<Option<ExecutionNode>, Error> {
        if self.max_depth > 0 && depth > self.max_depth {
            return Err(MalformedTree::ExcessiveDepth {
                node: node.name().to_string(),
                depth,
                max: self.max_depth,
            }
            .into());
        }

        let next = expansion(node)?;
        let mut children = Vec::new();
        for child in node.children_of(next) {
            if let Some(kept) = self.visit(child, depth + 1, units)? {
                children.push(kept);
            }
        }
        let rebuilt = node.reshaped(children);

        if depth == self.level {
            tracing::debug!(
                unit = %rebuilt.name(),
                kind = %rebuilt.kind(),
                level = self.level,
                "discovered unit"
            );
            units.push(DiscoveredUnit { node: rebuilt });
            Ok(None)
        } else {
            Ok(Some(rebuilt))
        }
    }
}

/// Which child kind `node` expands into.
fn expansion(node: &ExecutionNode) -> Result<NodeKind, MalformedTree> {
    match node.kind() {
        NodeKind::Suite if node.has_children_of(NodeKind::Suite) => {
            if node.has_children_of(NodeKind::Test) {
                tracing::trace!(suite = %node.name(), "ignoring tests next to sub-suites");
            }
            Ok(NodeKind::Suite)
        }
        NodeKind::Suite => Ok(NodeKind::Test),
        NodeKind::Test | NodeKind::Keyword => {
            if let Some(child) = node.children().iter().find(|c| c.kind() != NodeKind::Keyword) {
                return Err(MalformedTree::UnexpectedChild {
                    parent_kind: node.kind(),
                    parent: node.name().to_string(),
                    child_kind: child.kind(),
                    child: child.name().to_string(),
                });
            }
            Ok(NodeKind::Keyword)
        }
    }
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod tests;
