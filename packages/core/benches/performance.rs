//! Performance benchmarks for PageMove core operations
//!
//! Run with: `cargo bench -p pagemove-core`
//!
//! These benchmarks measure the critical paths behind interactive drags:
//! - Effective identifier resolution on deep ancestries
//! - Drop application (validation + reparent + movement refresh)
//! - Full-forest batch collection

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagemove_core::models::{Domain, Forest, NodeId, NodeKind, Tree};
use pagemove_core::operations::collect_moves;
use pagemove_core::services::{apply_drop, rename};

/// Build a tree with `width` containers per level, `depth` levels, and one
/// leaf per container
fn build_tree(width: usize, depth: usize) -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new(Domain::Document);
    let mut level: Vec<NodeId> = (0..width)
        .map(|i| tree.insert_root(NodeKind::Container, format!("ns{i}"), format!("ns{i}")))
        .collect();
    let mut leaves = Vec::new();

    for d in 1..depth {
        let mut next = Vec::new();
        for &parent in &level {
            let prefix = tree.effective_id(parent);
            let leaf = tree
                .insert_child(parent, NodeKind::Leaf, "page", format!("{prefix}:page"))
                .unwrap();
            leaves.push(leaf);
            let child = tree
                .insert_child(
                    parent,
                    NodeKind::Container,
                    format!("d{d}"),
                    format!("{prefix}:d{d}"),
                )
                .unwrap();
            next.push(child);
        }
        level = next;
    }
    (tree, leaves)
}

fn bench_effective_id(c: &mut Criterion) {
    let (tree, _) = build_tree(4, 24);
    let deepest = tree.iter().last().unwrap();

    c.bench_function("effective_id_depth_24", |b| {
        b.iter(|| black_box(tree.effective_id(black_box(deepest))))
    });
}

fn bench_apply_drop(c: &mut Criterion) {
    let (mut tree, leaves) = build_tree(8, 8);
    let target = tree.roots()[0];
    let source = *leaves.last().unwrap();
    // Give the dragged leaf a unique name so the drop validates cleanly.
    rename(&mut tree, source, "dragged").unwrap();

    c.bench_function("apply_drop_single_leaf", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| apply_drop(&mut tree, &[source], target, true).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_collect_moves(c: &mut Criterion) {
    let (mut tree, leaves) = build_tree(8, 8);
    // Flag a quarter of the leaves by renaming them.
    for (i, &leaf) in leaves.iter().enumerate() {
        if i % 4 == 0 {
            rename(&mut tree, leaf, &format!("renamed{i}")).unwrap();
        }
    }
    let mut forest = Forest::new();
    forest.push(tree);

    c.bench_function("collect_moves_quarter_flagged", |b| {
        b.iter(|| black_box(collect_moves(black_box(&forest))))
    });
}

criterion_group!(
    benches,
    bench_effective_id,
    bench_apply_drop,
    bench_collect_moves
);
criterion_main!(benches);
