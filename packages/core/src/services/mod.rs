//! Tree Mutation Services
//!
//! This module contains the mutation protocols driven by external events:
//!
//! - `apply_drop` - reparent one or more dragged nodes relative to a target
//! - `rename` - canonicalize and apply a proposed name
//! - `refresh_movement_state` - recompute the cached movement flags
//! - `materialize_children` - load a container's children on demand
//!
//! All validation happens synchronously before any mutation; errors leave
//! the tree exactly as it was.

pub mod error;
pub mod tree_service;

pub use error::TreeServiceError;
pub use tree_service::{
    apply_drop, materialize_children, refresh_movement_state, rename, DropOutcome,
};
