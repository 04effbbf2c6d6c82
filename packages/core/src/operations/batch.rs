//! Move batch collection
//!
//! Scans the forest for moved nodes and emits the ordered list of move
//! directives ready for submission. The wire format is fixed by the backend
//! executor:
//!
//! ```json
//! { "class": "ns", "type": "page", "src": "wiki:old", "dst": "wiki:new" }
//! ```
//!
//! Emission order is the pre-order traversal of each tree, trees in forest
//! order; consumers must not depend on ordering for correctness.

use crate::models::{Domain, Forest, NodeKind, Tree};
use serde::{Deserialize, Serialize};

/// Entity class discriminator of the submission wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityClass {
    /// A container namespace
    #[serde(rename = "ns")]
    Namespace,
    /// A page or media file
    #[serde(rename = "doc")]
    Document,
}

impl From<NodeKind> for EntityClass {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Container => Self::Namespace,
            NodeKind::Leaf => Self::Document,
        }
    }
}

/// Domain discriminator of the submission wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveType {
    #[serde(rename = "page")]
    Page,
    #[serde(rename = "media")]
    Media,
}

impl From<Domain> for MoveType {
    fn from(domain: Domain) -> Self {
        match domain {
            Domain::Document => Self::Page,
            Domain::Media => Self::Media,
        }
    }
}

/// A single entry of the submitted move batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDirective {
    #[serde(rename = "class")]
    pub entity_class: EntityClass,
    #[serde(rename = "type")]
    pub move_type: MoveType,
    /// Identifier the node was loaded under
    pub src: String,
    /// Current effective identifier
    pub dst: String,
}

/// Collect every pending move across all domains into a batch
///
/// Emits exactly one directive per node whose cached `moved` flag is set;
/// children of moved containers that individually resolved back to their
/// original identifier are not included. Idempotent and side-effect free.
pub fn collect_moves(forest: &Forest) -> Vec<MoveDirective> {
    let mut batch = Vec::new();
    for tree in forest.trees() {
        collect_tree_moves(tree, &mut batch);
    }
    tracing::debug!("collected {} move directive(s)", batch.len());
    batch
}

fn collect_tree_moves(tree: &Tree, batch: &mut Vec<MoveDirective>) {
    for id in tree.iter() {
        let Some(node) = tree.get(id) else { continue };
        if !node.is_moved() {
            continue;
        }
        batch.push(MoveDirective {
            entity_class: node.kind().into(),
            move_type: tree.domain().into(),
            src: node.original_id().to_string(),
            dst: tree.effective_id(id),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discriminator_mapping() {
        assert_eq!(EntityClass::from(NodeKind::Container), EntityClass::Namespace);
        assert_eq!(EntityClass::from(NodeKind::Leaf), EntityClass::Document);
        assert_eq!(MoveType::from(Domain::Document), MoveType::Page);
        assert_eq!(MoveType::from(Domain::Media), MoveType::Media);
    }

    #[test]
    fn test_directive_wire_format() {
        let directive = MoveDirective {
            entity_class: EntityClass::Namespace,
            move_type: MoveType::Page,
            src: "wiki:old".to_string(),
            dst: "wiki:new".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&directive).unwrap(),
            json!({ "class": "ns", "type": "page", "src": "wiki:old", "dst": "wiki:new" })
        );
    }
}
