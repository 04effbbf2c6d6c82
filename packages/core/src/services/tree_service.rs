//! Tree Mutation Protocols
//!
//! This module implements the event-driven mutation protocols the UI
//! collaborators feed into the core: drop gestures, rename prompts, and
//! lazy container expansion. All validation runs synchronously before any
//! mutation, and every successful mutation refreshes the movement cache of
//! the affected subtree.
//!
//! The forest is passed by reference; the service holds no state of its
//! own, consistent with the single-threaded cooperative model (no locking,
//! no re-entrancy).

use crate::models::{LoadState, NodeId, NodeKind, Tree};
use crate::services::TreeServiceError;
use crate::source::TreeSource;
use crate::utils::canonicalize;

/// Outcome of a drop gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Sources were reparented and their movement state refreshed
    Applied,
    /// The target lay inside the moved selection; treated as a cancelled
    /// gesture, not an error
    Ignored,
}

/// Refresh the movement cache of `node` and its already-moved descendants
///
/// A moved subtree carries its moved descendants with it, so their cached
/// state is recomputed too; untouched descendants resolve unchanged and are
/// skipped. For each affected node the effective identifier is recomputed:
/// if it differs from the original identifier the node is flagged `moved`
/// with provenance `"old -> new"`, otherwise flag and provenance are
/// cleared. A node moved back to its original position is thus
/// automatically un-flagged.
pub fn refresh_movement_state(tree: &mut Tree, node: NodeId) -> Result<(), TreeServiceError> {
    let root = tree.try_node(node)?;

    let mut affected = vec![node];
    let mut stack: Vec<NodeId> = root.children().to_vec();
    while let Some(id) = stack.pop() {
        let Some(n) = tree.get(id) else { continue };
        stack.extend(n.children().iter().copied());
        if n.is_moved() {
            affected.push(id);
        }
    }

    for id in affected {
        let effective = tree.effective_id(id);
        let Some(original) = tree.get(id).map(|n| n.original_id().to_string()) else {
            continue;
        };
        let provenance = (effective != original).then(|| format!("{original} -> {effective}"));
        if let Some(n) = tree.node_mut(id) {
            n.moved = provenance.is_some();
            n.provenance = provenance;
        }
    }
    Ok(())
}

/// Apply a drop gesture moving `sources` relative to `target`
///
/// Placement follows the target: a leaf or a collapsed container places the
/// sources immediately after it among its own siblings; an expanded
/// container receives them as its first children. The whole operation is
/// all-or-nothing: every source is validated against the candidate parent
/// before anything is reparented.
///
/// Dropping into the moved selection's own subtree (target identical to or
/// descending from a source) returns [`DropOutcome::Ignored`] without
/// touching the tree.
pub fn apply_drop(
    tree: &mut Tree,
    sources: &[NodeId],
    target: NodeId,
    target_expanded: bool,
) -> Result<DropOutcome, TreeServiceError> {
    let target_node = tree.try_node(target)?;
    let target_kind = target_node.kind();
    let target_parent = target_node.parent();
    for &source in sources {
        tree.try_node(source)?;
    }

    if sources.is_empty() {
        return Ok(DropOutcome::Ignored);
    }
    if sources
        .iter()
        .any(|&source| tree.is_self_or_descendant(source, target))
    {
        tracing::debug!(
            "drop target '{}' lies inside the moved selection; ignoring",
            tree.effective_id(target)
        );
        return Ok(DropOutcome::Ignored);
    }

    let into_container = target_kind == NodeKind::Container && target_expanded;
    let candidate_parent = if into_container {
        Some(target)
    } else {
        target_parent
    };

    // All-or-nothing: every source must keep its own name under the new
    // parent, and the dragged nodes must not collide with each other either.
    for (idx, &source) in sources.iter().enumerate() {
        let node = tree.try_node(source)?;
        let kind = node.kind();
        let name = node.name().to_string();
        if !tree.is_name_allowed(source, candidate_parent, &name) {
            return Err(TreeServiceError::duplicate_name(name));
        }
        let clashes_within_selection = sources[..idx].iter().any(|&earlier| {
            tree.get(earlier)
                .is_some_and(|e| e.kind() == kind && e.name() == name)
        });
        if clashes_within_selection {
            return Err(TreeServiceError::duplicate_name(name));
        }
    }

    for &source in sources {
        tree.detach(source);
    }
    if into_container {
        tree.insert_front(target, sources);
    } else {
        tree.insert_after(target, sources);
    }
    for &source in sources {
        refresh_movement_state(tree, source)?;
    }

    tracing::info!(
        "moved {} node(s) relative to '{}'",
        sources.len(),
        tree.effective_id(target)
    );
    Ok(DropOutcome::Applied)
}

/// Rename a node from a raw user-proposed name
///
/// The proposal is canonicalized first; an empty canonical form is rejected
/// as invalid, a collision against the node's current parent as a
/// duplicate. On success the accepted canonical name is returned and the
/// node's movement state refreshed.
pub fn rename(
    tree: &mut Tree,
    node: NodeId,
    proposed: &str,
) -> Result<String, TreeServiceError> {
    let current = tree.try_node(node)?;
    let parent = current.parent();

    let name = canonicalize(proposed);
    if name.is_empty() {
        return Err(TreeServiceError::invalid_name(proposed));
    }
    if !tree.is_name_allowed(node, parent, &name) {
        return Err(TreeServiceError::duplicate_name(name));
    }

    if let Some(n) = tree.node_mut(node) {
        n.name = name.clone();
    }
    refresh_movement_state(tree, node)?;

    tracing::info!("renamed node to '{}'", tree.effective_id(node));
    Ok(name)
}

/// Materialize a container's children through the expand collaborator
///
/// The request is keyed by the container's original identifier, since the
/// backend has not executed any pending moves yet. A container that is
/// already loaded, or whose request is still in flight, is a no-op
/// returning 0. On failure the container reverts to unloaded and stays
/// retryable; the core never retries by itself.
pub async fn materialize_children(
    tree: &mut Tree,
    container: NodeId,
    source: &dyn TreeSource,
) -> Result<usize, TreeServiceError> {
    let node = tree.try_node(container)?;
    if node.kind() != NodeKind::Container {
        return Err(TreeServiceError::not_a_container(
            node.original_id().to_string(),
        ));
    }
    // Loaded has nothing to do; Loading means a request is already in
    // flight and a duplicate fetch would append its children twice.
    if node.load_state() != LoadState::Unloaded {
        return Ok(0);
    }
    let request_id = node.original_id().to_string();
    let domain = tree.domain();

    if let Some(n) = tree.node_mut(container) {
        n.load_state = LoadState::Loading;
    }

    let children = match source.fetch_children(&request_id, domain).await {
        Ok(children) => children,
        Err(err) => {
            if let Some(n) = tree.node_mut(container) {
                n.load_state = LoadState::Unloaded;
            }
            tracing::warn!(
                "failed to materialize children of container '{}': {}",
                request_id,
                err
            );
            return Err(TreeServiceError::materialization_failed(request_id, err));
        }
    };

    let count = children.len();
    for child in children {
        tree.insert_child(container, child.entity_kind, child.name, child.original_id)?;
    }
    if let Some(n) = tree.node_mut(container) {
        n.load_state = LoadState::Loaded;
    }

    tracing::debug!(
        "materialized {} child(ren) under container '{}'",
        count,
        request_id
    );
    Ok(count)
}
