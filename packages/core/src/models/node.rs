//! Tree Node Data Structures
//!
//! This module defines the core `TreeNode` struct and the tagged enums that
//! classify nodes within a move tree.
//!
//! # Architecture
//!
//! - **Tagged kinds**: containers and leaves are an explicit enum checked
//!   exhaustively, never inferred from naming conventions
//! - **Immutable origin**: `original_id` is captured when the node is
//!   materialized from the backend listing and never changes
//! - **Cached movement state**: `moved` and `provenance` are caches over
//!   `effective_id(node) != original_id`, refreshed only by the movement
//!   tracker in the service layer

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for tree structure operations
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Handle does not belong to this tree
    #[error("Unknown node handle {0} for this tree")]
    UnknownNode(NodeId),

    /// Leaves cannot own children
    #[error("Leaf node '{id}' cannot have children")]
    LeafCannotHaveChildren { id: String },
}

/// Entity kind of a tree node
///
/// Collision validation is kind-scoped: a leaf and a container may legally
/// share a name within the same parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A namespace that may own zero or more children
    Container,
    /// A page or media file; never owns children
    Leaf,
}

/// Domain a tree is scoped to
///
/// Moves are never validated or merged across domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Wiki pages
    Document,
    /// Media files
    Media,
}

/// Materialization state of a container's children
///
/// Containers start `Unloaded`; the expand collaborator moves them through
/// `Loading` to `Loaded`. A failed or abandoned expand request leaves the
/// container `Unloaded`, which is unrealized state rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
}

/// Handle to a node within its owning [`Tree`](crate::models::Tree)
///
/// Handles are only meaningful for the tree that issued them; lookups with a
/// foreign handle fail rather than alias another tree's node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node in a move tree
///
/// The parent link is a non-owning back-reference used only for traversal;
/// children are owned exclusively by their parent's ordered child list.
/// Child order is display order and carries no meaning for identifier
/// computation.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) kind: NodeKind,
    /// Canonical local segment; changes on rename, unaffected by moves.
    pub(crate) name: String,
    /// Fully-qualified identifier captured at load time; immutable.
    pub(crate) original_id: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) moved: bool,
    /// Human-readable origin, `"old -> new"`, present iff `moved`.
    pub(crate) provenance: Option<String>,
    pub(crate) load_state: LoadState,
}

impl TreeNode {
    pub(crate) fn new(
        kind: NodeKind,
        name: impl Into<String>,
        original_id: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            original_id: original_id.into(),
            parent: None,
            children: Vec::new(),
            moved: false,
            provenance: None,
            // A leaf has nothing to materialize.
            load_state: match kind {
                NodeKind::Container => LoadState::Unloaded,
                NodeKind::Leaf => LoadState::Loaded,
            },
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Canonical local name segment
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier the node was loaded under; never changes
    pub fn original_id(&self) -> &str {
        &self.original_id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ordered child handles (display order)
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node's effective identifier currently differs from its
    /// original identifier. Cache maintained by the movement tracker.
    pub fn is_moved(&self) -> bool {
        self.moved
    }

    /// `"old -> new"` provenance text, present iff the node is moved
    pub fn provenance(&self) -> Option<&str> {
        self.provenance.as_deref()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaf_is_loaded() {
        let node = TreeNode::new(NodeKind::Leaf, "start", "wiki:start");
        assert_eq!(node.load_state(), LoadState::Loaded);
        assert!(!node.is_moved());
        assert!(node.provenance().is_none());
    }

    #[test]
    fn test_new_container_is_unloaded() {
        let node = TreeNode::new(NodeKind::Container, "wiki", "wiki");
        assert_eq!(node.load_state(), LoadState::Unloaded);
        assert!(node.children().is_empty());
    }
}
