//! PageMove Core Business Logic Layer
//!
//! This crate provides the in-memory tree model, move tracking, and batch
//! collection behind the PageMove reorganization interface. Users rearrange
//! pages and namespaces by dragging nodes within a tree; the core computes
//! each node's post-move identifier, tracks which nodes actually moved, and
//! assembles the final move batch for the backend executor.
//!
//! # Architecture
//!
//! - **Derived movement state**: `moved` is always recomputable from tree
//!   shape and names; the movement tracker only refreshes a cache
//! - **Validate before mutate**: the collision validator is the sole gate,
//!   so there is never partial-mutation state to roll back
//! - **Explicit forest ownership**: trees are passed by reference with an
//!   explicit lifecycle, never held as ambient global state
//! - **Lazy materialization**: container children arrive through the
//!   [`source::TreeSource`] boundary with observable load states
//!
//! # Modules
//!
//! - [`models`] - Data structures (TreeNode, Tree, Forest)
//! - [`services`] - Mutation protocols (drop, rename, movement refresh)
//! - [`operations`] - Move batch collection for submission
//! - [`source`] - Expand-container collaborator boundary
//! - [`utils`] - Identifier canonicalization

pub mod models;
pub mod operations;
pub mod services;
pub mod source;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use operations::*;
pub use services::*;
