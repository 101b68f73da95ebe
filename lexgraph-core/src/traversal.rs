//! Traversal Engine - ancestry and descendant trees
//!
//! Expands the parent (or child) relation from a root node into a nested
//! tree holding every path through the reachable subgraph.
//!
//! # Cycle handling
//!
//! Visited state is tracked per path, not globally: a node reachable along
//! two independent paths (a diamond) appears once under each. An edge that
//! leads back to a node already on the current path is still reported, but
//! with an empty sub-tree, and the path stops there. A self-loop therefore
//! shows up once, unexpanded.
//!
//! # Implementation
//!
//! The traversal runs on an explicit stack over an arena of slots. Each slot
//! records its parent slot, so "is this node already on my path" is a walk up
//! the parent chain and no visited set is ever cloned. Stack depth stays
//! constant whatever the shape of the data. [`TraversalLimits`] bounds path
//! length and total output size for adversarial graphs; hitting either bound
//! marks the tree as `truncated`.
//!
//! The on-path check costs one step per ancestor slot, so a traversal is
//! O(max_nodes * max_depth) in the worst case. The result tree itself is
//! nested one level per step and is serialized and dropped recursively, so
//! `max_depth` never exceeds [`MAX_DEPTH_CEILING`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::node_id::LexicalNode;
use crate::store::RelationStore;

/// Which direct-edge relation to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalDirection {
    /// Follow parent edges (etymological ancestors)
    Ancestors,
    /// Follow child edges (descendants)
    Descendants,
}

/// Largest accepted `max_depth`. Config above it is rejected at load and
/// engines clamp to it.
pub const MAX_DEPTH_CEILING: usize = 256;

/// Bounds applied to a single traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalLimits {
    /// Longest path expanded from the root; entries at this depth are
    /// reported without sub-trees
    pub max_depth: usize,
    /// Maximum number of entries in one tree
    pub max_nodes: usize,
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_nodes: 10_000,
        }
    }
}

/// One reported edge and everything reachable beyond it on this path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationBranch {
    #[serde(flatten)]
    pub node: LexicalNode,
    pub branches: Vec<RelationBranch>,
}

/// Result of a traversal from `root`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationTree {
    pub root: LexicalNode,
    pub branches: Vec<RelationBranch>,
    /// A depth or size bound cut the tree short (cycles never set this)
    pub truncated: bool,
}

impl RelationTree {
    /// Nodes grouped by distance from the root; `levels()[0]` holds the
    /// direct edges
    pub fn levels(&self) -> Vec<Vec<&LexicalNode>> {
        let mut levels = Vec::new();
        let mut frontier: Vec<&RelationBranch> = self.branches.iter().collect();

        while !frontier.is_empty() {
            levels.push(frontier.iter().map(|b| &b.node).collect());
            frontier = frontier.iter().flat_map(|b| b.branches.iter()).collect();
        }

        levels
    }

    /// Total number of entries in the tree
    pub fn len(&self) -> usize {
        self.levels().iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

/// Arena slot: one reported entry plus its position in the tree
struct Slot {
    node: LexicalNode,
    parent: Option<usize>,
    depth: usize,
    children: Vec<usize>,
}

/// Computes ancestry / descendant trees over a shared store
#[derive(Debug, Clone)]
pub struct TraversalEngine {
    store: Arc<RelationStore>,
    limits: TraversalLimits,
}

impl TraversalEngine {
    /// Create an engine; `limits.max_depth` is clamped to [`MAX_DEPTH_CEILING`]
    pub fn new(store: Arc<RelationStore>, mut limits: TraversalLimits) -> Self {
        if limits.max_depth > MAX_DEPTH_CEILING {
            warn!(
                requested = limits.max_depth,
                ceiling = MAX_DEPTH_CEILING,
                "Clamping traversal max_depth"
            );
            limits.max_depth = MAX_DEPTH_CEILING;
        }
        Self { store, limits }
    }

    pub fn limits(&self) -> TraversalLimits {
        self.limits
    }

    pub fn ancestors(&self, root: &LexicalNode) -> RelationTree {
        self.traverse(root, TraversalDirection::Ancestors)
    }

    pub fn descendants(&self, root: &LexicalNode) -> RelationTree {
        self.traverse(root, TraversalDirection::Descendants)
    }

    /// Expand `root` along `direction`
    pub fn traverse(&self, root: &LexicalNode, direction: TraversalDirection) -> RelationTree {
        let mut arena = vec![Slot {
            node: root.clone(),
            parent: None,
            depth: 0,
            children: Vec::new(),
        }];
        let mut stack = vec![0usize];
        let mut truncated = false;

        while let Some(idx) = stack.pop() {
            if on_own_path(&arena, idx) {
                continue;
            }

            let edges = self.edges(&arena[idx].node, direction);
            if edges.is_empty() {
                continue;
            }

            let depth = arena[idx].depth;
            if depth >= self.limits.max_depth {
                truncated = true;
                continue;
            }

            let first_child = arena.len();
            for edge in edges {
                // Slot 0 is the root, not a reported entry
                if arena.len() > self.limits.max_nodes {
                    truncated = true;
                    break;
                }
                let child = arena.len();
                arena.push(Slot {
                    node: edge.clone(),
                    parent: Some(idx),
                    depth: depth + 1,
                    children: Vec::new(),
                });
                arena[idx].children.push(child);
            }

            // Reverse so the first edge is expanded first
            stack.extend((first_child..arena.len()).rev());
        }

        if truncated {
            warn!(
                root = %root,
                ?direction,
                entries = arena.len() - 1,
                max_depth = self.limits.max_depth,
                max_nodes = self.limits.max_nodes,
                "Traversal truncated by limits"
            );
        } else {
            debug!(root = %root, ?direction, entries = arena.len() - 1, "Traversal complete");
        }

        RelationTree {
            root: root.clone(),
            branches: assemble(arena),
            truncated,
        }
    }

    fn edges(&self, node: &LexicalNode, direction: TraversalDirection) -> &[LexicalNode] {
        match direction {
            TraversalDirection::Ancestors => self.store.parent_edges_of(node),
            TraversalDirection::Descendants => self.store.child_edges_of(node),
        }
    }
}

/// Whether the node in `idx` already occurs among its own ancestors slots
fn on_own_path(arena: &[Slot], idx: usize) -> bool {
    let node = &arena[idx].node;
    let mut current = arena[idx].parent;
    while let Some(p) = current {
        if &arena[p].node == node {
            return true;
        }
        current = arena[p].parent;
    }
    false
}

/// Fold the arena into nested branches. Children always sit at higher
/// indices than their parent, so a reverse sweep sees every child first.
fn assemble(arena: Vec<Slot>) -> Vec<RelationBranch> {
    let mut built: Vec<Option<RelationBranch>> = vec![None; arena.len()];

    for (idx, slot) in arena.into_iter().enumerate().rev() {
        let branches = slot
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[idx] = Some(RelationBranch {
            node: slot.node,
            branches,
        });
    }

    built
        .into_iter()
        .next()
        .flatten()
        .map(|root| root.branches)
        .unwrap_or_default()
}
