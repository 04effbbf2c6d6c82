//! Service Layer Error Types
//!
//! Error taxonomy for the tree mutation protocols. Every failure here is
//! raised before any mutation, so there is never partial state to roll
//! back: the tree is left exactly as it was before the attempted operation.
//!
//! An illegal drop target (a node dropped into its own subtree) is not an
//! error at all; it is reported as a cancelled gesture through
//! [`DropOutcome::Ignored`](crate::services::DropOutcome).

use crate::models::ValidationError;
use thiserror::Error;

/// Tree mutation errors
#[derive(Error, Debug)]
pub enum TreeServiceError {
    /// A proposed name canonicalizes to the empty string
    #[error("Invalid name: '{input}' normalizes to an empty identifier")]
    InvalidName { input: String },

    /// A same-kind sibling already occupies the name at the target location
    #[error("Duplicate name: '{name}' already exists among its prospective siblings")]
    DuplicateName { name: String },

    /// Structural validation failed
    #[error("Tree validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// Materialization was requested for a leaf
    #[error("Node '{id}' is not a container")]
    NotAContainer { id: String },

    /// The expand collaborator failed to deliver children; the container
    /// remains unloaded and a later expand request may retry
    #[error("Failed to materialize children of container '{container}'")]
    MaterializationFailed {
        container: String,
        #[source]
        source: anyhow::Error,
    },
}

impl TreeServiceError {
    /// Create an invalid name error
    pub fn invalid_name(input: impl Into<String>) -> Self {
        Self::InvalidName {
            input: input.into(),
        }
    }

    /// Create a duplicate name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a not-a-container error
    pub fn not_a_container(id: impl Into<String>) -> Self {
        Self::NotAContainer { id: id.into() }
    }

    /// Create a materialization failure wrapping the collaborator's error
    pub fn materialization_failed(container: impl Into<String>, source: anyhow::Error) -> Self {
        Self::MaterializationFailed {
            container: container.into(),
            source,
        }
    }
}
