//! Expand-Container Collaborator Boundary
//!
//! This module defines the `TreeSource` trait that abstracts the backend
//! listing service behind lazy container expansion. The trait is the only
//! asynchronous boundary in the crate: core mutation runs synchronously, and
//! a container's children are mutated only after a source call resolves.
//!
//! # Contract
//!
//! - A response carries the container's immediate children in display order;
//!   deeper containers arrive unloaded and can be expanded later
//! - Failure leaves the container unloaded; the core never retries on its
//!   own, a later expand request simply asks again

mod memory;

pub use memory::MemoryTreeSource;

use crate::models::{Domain, NodeKind};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Immediate-child listing entry delivered by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildDescriptor {
    pub entity_kind: NodeKind,
    /// Canonical local name segment
    pub name: String,
    /// Fully-qualified identifier at the backend's current state
    pub original_id: String,
}

/// Abstraction over the backend service that lists container children
///
/// Implementations must be `Send + Sync` so the pending request can be
/// driven from whatever task delivers the response.
#[async_trait]
pub trait TreeSource: Send + Sync {
    /// List the immediate children of `container_id` within `domain`
    async fn fetch_children(
        &self,
        container_id: &str,
        domain: Domain,
    ) -> anyhow::Result<Vec<ChildDescriptor>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_wire_format_is_camel_case() {
        let descriptor: ChildDescriptor = serde_json::from_value(json!({
            "entityKind": "container",
            "name": "sub",
            "originalId": "wiki:sub",
        }))
        .unwrap();
        assert_eq!(descriptor.entity_kind, NodeKind::Container);
        assert_eq!(descriptor.original_id, "wiki:sub");

        let round_tripped = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(round_tripped["entityKind"], "container");
    }
}
