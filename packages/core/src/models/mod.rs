//! Data Models
//!
//! This module contains the core data structures for the move trees:
//!
//! - `TreeNode` - a single page, media file, or namespace in a tree
//! - `Tree` - arena-owned, domain-scoped tree with pure structural queries
//! - `Forest` - the owned store of all independent trees
//!
//! Movement state (`moved`, provenance) is cached on nodes but is always a
//! pure function of tree shape and names; only the service layer refreshes
//! it.

mod forest;
mod node;
mod tree;

pub use forest::Forest;
pub use node::{Domain, LoadState, NodeId, NodeKind, TreeNode, ValidationError};
pub use tree::Tree;
