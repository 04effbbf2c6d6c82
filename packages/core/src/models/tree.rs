//! Move Tree
//!
//! A `Tree` owns all nodes of one domain in an arena and exposes the pure
//! structural queries the service layer builds on: effective identifier
//! resolution, ancestry checks, kind-scoped collision validation, and
//! pre-order traversal.
//!
//! Structural mutation (detaching and splicing sibling lists) is
//! crate-internal; external callers go through the service-layer protocols
//! so that the collision validator remains the sole gate.

use crate::models::node::{Domain, NodeId, NodeKind, TreeNode, ValidationError};
use crate::utils::ID_SEPARATOR;

/// One domain's move tree
///
/// Nodes are arena-owned and addressed by [`NodeId`] handles. Root-level
/// nodes form their own ordered sibling list, so collision validation and
/// sibling insertion treat "no parent" uniformly with any container.
#[derive(Debug, Clone)]
pub struct Tree {
    domain: Domain,
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
}

impl Tree {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of nodes materialized in this tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ordered root-level node handles
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Look up a node, failing on handles this tree never issued
    pub fn try_node(&self, id: NodeId) -> Result<&TreeNode, ValidationError> {
        self.get(id).ok_or(ValidationError::UnknownNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id.0)
    }

    /// Append a new root-level node
    pub fn insert_root(
        &mut self,
        kind: NodeKind,
        name: impl Into<String>,
        original_id: impl Into<String>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(kind, name, original_id));
        self.roots.push(id);
        id
    }

    /// Append a new node as the last child of `parent`
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        name: impl Into<String>,
        original_id: impl Into<String>,
    ) -> Result<NodeId, ValidationError> {
        let parent_node = self.try_node(parent)?;
        if parent_node.kind() == NodeKind::Leaf {
            return Err(ValidationError::LeafCannotHaveChildren {
                id: parent_node.original_id().to_string(),
            });
        }
        let id = NodeId(self.nodes.len());
        let mut node = TreeNode::new(kind, name, original_id);
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Compute the node's current effective identifier
    ///
    /// Walks the parent links and joins canonical name segments root-first
    /// with the structural separator; top-level nodes carry no leading
    /// separator. Pure over current tree shape and independent of load
    /// state. A foreign handle yields the empty string.
    pub fn effective_id(&self, id: NodeId) -> String {
        let mut segments: Vec<&str> = Vec::new();
        let mut cursor = self.get(id);
        while let Some(node) = cursor {
            segments.push(node.name());
            cursor = node.parent().and_then(|p| self.get(p));
        }
        segments.reverse();
        segments.join(ID_SEPARATOR)
    }

    /// Whether `node` is `ancestor` itself or lies inside its subtree
    pub fn is_self_or_descendant(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.get(id).and_then(|n| n.parent());
        }
        false
    }

    /// Check whether `node` may carry `name` under `candidate_parent`
    ///
    /// Scans the candidate sibling list (`None` means the root level),
    /// skipping `node` itself. Only siblings of the same kind collide; a
    /// leaf and a container may share a name within the same parent.
    pub fn is_name_allowed(
        &self,
        node: NodeId,
        candidate_parent: Option<NodeId>,
        name: &str,
    ) -> bool {
        let Some(kind) = self.get(node).map(|n| n.kind()) else {
            return false;
        };
        !self.siblings(candidate_parent).iter().any(|&sibling| {
            sibling != node
                && self
                    .get(sibling)
                    .is_some_and(|s| s.kind() == kind && s.name() == name)
        })
    }

    /// Pre-order traversal over every node handle in the tree
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            if let Some(node) = self.get(id) {
                stack.extend(node.children().iter().rev().copied());
            }
            Some(id)
        })
    }

    fn siblings(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            Some(p) => self.get(p).map_or(&[], |n| n.children()),
            None => &self.roots,
        }
    }

    fn siblings_mut(&mut self, parent: Option<NodeId>) -> &mut Vec<NodeId> {
        match parent {
            Some(p) => &mut self.nodes[p.0].children,
            None => &mut self.roots,
        }
    }

    /// Remove a node from its current sibling list, leaving it unparented
    pub(crate) fn detach(&mut self, id: NodeId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let parent = node.parent.take();
        let siblings = self.siblings_mut(parent);
        if let Some(pos) = siblings.iter().position(|&sibling| sibling == id) {
            siblings.remove(pos);
        }
    }

    /// Splice detached nodes immediately after `anchor`, preserving order
    pub(crate) fn insert_after(&mut self, anchor: NodeId, ids: &[NodeId]) {
        let parent = self.get(anchor).and_then(|n| n.parent());
        let siblings = self.siblings(parent);
        let pos = siblings
            .iter()
            .position(|&sibling| sibling == anchor)
            .map_or(siblings.len(), |i| i + 1);
        for (offset, &id) in ids.iter().enumerate() {
            if let Some(node) = self.node_mut(id) {
                node.parent = parent;
            }
            self.siblings_mut(parent).insert(pos + offset, id);
        }
    }

    /// Splice detached nodes as the first children of `parent`, preserving order
    pub(crate) fn insert_front(&mut self, parent: NodeId, ids: &[NodeId]) {
        for (offset, &id) in ids.iter().enumerate() {
            if let Some(node) = self.node_mut(id) {
                node.parent = Some(parent);
            }
            if let Some(parent_node) = self.node_mut(parent) {
                parent_node.children.insert(offset, id);
            }
        }
    }
}
