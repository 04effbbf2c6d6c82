//! Forest of Move Trees
//!
//! The forest is the explicitly owned store of all independent move trees.
//! Each tree is scoped to one domain; nothing is validated or merged across
//! domains. Holding the forest by value (or handing out references) keeps
//! multiple tree instances testable in isolation, with no ambient state.

use crate::models::node::Domain;
use crate::models::tree::Tree;

/// Owned collection of independent, domain-scoped move trees
#[derive(Debug, Clone, Default)]
pub struct Forest {
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tree to the forest; insertion order is scan order at
    /// batch-collection time
    pub fn push(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// First tree scoped to the given domain
    pub fn tree(&self, domain: Domain) -> Option<&Tree> {
        self.trees.iter().find(|t| t.domain() == domain)
    }

    pub fn tree_mut(&mut self, domain: Domain) -> Option<&mut Tree> {
        self.trees.iter_mut().find(|t| t.domain() == domain)
    }
}
