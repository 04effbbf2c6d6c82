//! In-memory `TreeSource` backed by pre-registered listings
//!
//! Used by tests and local tooling in place of the real backend listing
//! service.

use crate::models::Domain;
use crate::source::{ChildDescriptor, TreeSource};
use async_trait::async_trait;
use std::collections::HashMap;

/// `TreeSource` that answers from a fixed map of listings
///
/// Containers without a registered listing fail to materialize, which makes
/// the failure path testable as well.
#[derive(Debug, Default)]
pub struct MemoryTreeSource {
    listings: HashMap<(String, Domain), Vec<ChildDescriptor>>,
}

impl MemoryTreeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the immediate children served for a container
    pub fn insert_listing(
        &mut self,
        container_id: impl Into<String>,
        domain: Domain,
        children: Vec<ChildDescriptor>,
    ) {
        self.listings.insert((container_id.into(), domain), children);
    }
}

#[async_trait]
impl TreeSource for MemoryTreeSource {
    async fn fetch_children(
        &self,
        container_id: &str,
        domain: Domain,
    ) -> anyhow::Result<Vec<ChildDescriptor>> {
        self.listings
            .get(&(container_id.to_string(), domain))
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!("no listing registered for container '{container_id}' in {domain:?}")
            })
    }
}
