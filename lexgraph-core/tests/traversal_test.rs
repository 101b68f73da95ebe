//! Traversal behavior over larger generated graphs.

use std::collections::HashMap;
use std::sync::Arc;

use lexgraph_core::{
    LexicalNode, Lexicon, RelationStore, RelationStoreBuilder, TraversalDirection,
    TraversalEngine, TraversalLimits,
};

fn n(i: usize) -> LexicalNode {
    LexicalNode::new("x", format!("w{i}"))
}

/// Layered DAG: every node in layer k points at two nodes of layer k + 1
fn layered_dag(layers: usize, width: usize) -> HashMap<LexicalNode, Vec<LexicalNode>> {
    let mut edges = HashMap::new();
    for layer in 0..layers - 1 {
        for i in 0..width {
            let from = n(layer * width + i);
            let next = (layer + 1) * width;
            edges.insert(from, vec![n(next + i), n(next + (i + 1) % width)]);
        }
    }
    edges
}

fn store_with_parents(edges: &HashMap<LexicalNode, Vec<LexicalNode>>) -> RelationStore {
    edges
        .iter()
        .fold(RelationStoreBuilder::new(), |b, (node, parents)| {
            b.with_parents(node.clone(), parents.iter().cloned())
        })
        .build()
}

/// Frontiers by repeated direct-edge expansion, counting every path
fn expansion_frontiers(
    edges: &HashMap<LexicalNode, Vec<LexicalNode>>,
    root: &LexicalNode,
) -> Vec<Vec<LexicalNode>> {
    let mut frontiers = Vec::new();
    let mut frontier = vec![root.clone()];
    loop {
        let next: Vec<LexicalNode> = frontier
            .iter()
            .flat_map(|node| edges.get(node).cloned().unwrap_or_default())
            .collect();
        if next.is_empty() {
            return frontiers;
        }
        frontiers.push(next.clone());
        frontier = next;
    }
}

#[test]
fn test_acyclic_tree_matches_frontier_expansion() {
    let edges = layered_dag(5, 3);
    let store = Arc::new(store_with_parents(&edges));
    let engine = TraversalEngine::new(store, TraversalLimits::default());
    let root = n(0);

    let tree = engine.ancestors(&root);
    let expected = expansion_frontiers(&edges, &root);

    let levels = tree.levels();
    assert_eq!(levels.len(), expected.len());
    for (level, frontier) in levels.iter().zip(&expected) {
        let mut got: Vec<&LexicalNode> = level.clone();
        let mut want: Vec<&LexicalNode> = frontier.iter().collect();
        got.sort();
        want.sort();
        assert_eq!(got, want);
    }
    // 2 + 4 + 8 + 16 paths
    assert_eq!(tree.len(), 30);
    assert!(!tree.truncated);
}

#[test]
fn test_complete_cyclic_graph_terminates() {
    // Every node lists every node (itself included) as a parent
    let size = 4;
    let all: Vec<LexicalNode> = (0..size).map(n).collect();
    let store = all
        .iter()
        .fold(RelationStoreBuilder::new(), |b, node| {
            b.with_parents(node.clone(), all.iter().cloned())
        })
        .build();

    let engine = TraversalEngine::new(Arc::new(store), TraversalLimits::default());
    let tree = engine.ancestors(&n(0));

    assert!(!tree.truncated);
    // Each path extends through unseen nodes; the last hop on every path
    // re-enters and is reported unexpanded.
    let levels = tree.levels();
    assert_eq!(levels.len(), size);
    assert_eq!(levels[0].len(), size);
    for branch in &tree.branches {
        if branch.node == n(0) {
            assert!(branch.branches.is_empty());
        }
    }
}

#[test]
fn test_descendant_cycle_terminates() {
    // cattus -> cat -> kitten -> cattus, plus a self-loop on kitten
    let store = RelationStore::builder()
        .with_word_languages("cattus", ["lat"])
        .with_children(("lat", "cattus"), [("eng", "cat")])
        .with_children(("eng", "cat"), [("eng", "kitten")])
        .with_children(("eng", "kitten"), [("lat", "cattus"), ("eng", "kitten")])
        .build();
    let lexicon = Lexicon::new(Arc::new(store), TraversalLimits::default());

    let tree = lexicon.descendants_for("lat", "cattus");

    assert!(!tree.truncated);
    let levels = tree.levels();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[0], vec![&LexicalNode::new("eng", "cat")]);
    assert_eq!(levels[1], vec![&LexicalNode::new("eng", "kitten")]);
    assert_eq!(
        levels[2],
        vec![
            &LexicalNode::new("lat", "cattus"),
            &LexicalNode::new("eng", "kitten")
        ]
    );
    // Both re-entering entries are reported unexpanded
    let kitten = &tree.branches[0].branches[0];
    assert!(kitten.branches.iter().all(|b| b.branches.is_empty()));
}

#[test]
fn test_long_chain_is_depth_bounded() {
    let length = 500;
    let store = (0..length)
        .fold(RelationStoreBuilder::new(), |b, i| {
            b.with_children(n(i), [n(i + 1)])
        })
        .build();
    let limits = TraversalLimits {
        max_depth: 100,
        max_nodes: 10_000,
    };

    let tree = TraversalEngine::new(Arc::new(store), limits)
        .traverse(&n(0), TraversalDirection::Descendants);

    assert_eq!(tree.levels().len(), 100);
    assert!(tree.truncated);
}

#[test]
fn test_wide_diamond_lattice_is_size_bounded() {
    // 20 layers of 2 nodes, fully connected between layers: 2^20 paths
    let edges = layered_dag(20, 2);
    let store = Arc::new(store_with_parents(&edges));
    let limits = TraversalLimits {
        max_depth: 64,
        max_nodes: 1_000,
    };

    let tree = TraversalEngine::new(store, limits).ancestors(&n(0));
    assert_eq!(tree.len(), 1_000);
    assert!(tree.truncated);
}

#[test]
fn test_concurrent_queries_share_store() {
    let store = RelationStore::builder()
        .with_word_languages("cat", ["eng"])
        .with_parents(("eng", "cat"), [("lat", "cattus")])
        .with_parents(("lat", "cattus"), [("eng", "cat")])
        .build();
    let lexicon = Lexicon::new(Arc::new(store), TraversalLimits::default());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let lexicon = lexicon.clone();
            std::thread::spawn(move || lexicon.ancestry_for("eng", "cat").len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
