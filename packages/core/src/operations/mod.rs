//! Move Batch Operations
//!
//! This module assembles the final move batch submitted to the backend
//! executor. Collection is a read-only scan over the forest; the payload is
//! the only externally persisted artifact this core produces.

pub mod batch;

// Re-export types for convenience
pub use batch::{collect_moves, EntityClass, MoveDirective, MoveType};
