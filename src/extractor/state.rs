//! Scoring state tracking.
//!
//! `GravityScores` is the per-run scratch overlay holding each node's
//! accumulated gravity score and contributor count. It is keyed by `NodeId`
//! and never written back into the document's attributes, so nothing leaks
//! into serialized output or into a later run over the same tree.

use std::collections::{HashMap, HashSet};

use dom_query::{NodeId, NodeRef};

/// Accumulated score of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GravityScore {
    /// Sum of all score contributions.
    pub score: i64,
    /// Number of candidates that contributed.
    pub node_count: u32,
}

/// Score overlay plus the ordered set of nodes that received a contribution.
#[derive(Default)]
pub struct GravityScores<'a> {
    scores: HashMap<NodeId, GravityScore>,
    /// Nodes in first-contribution order; deduplicated through `seen`.
    parents: Vec<NodeRef<'a>>,
    seen: HashSet<NodeId>,
}

impl<'a> GravityScores<'a> {
    /// Create an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to a node's score and count one more contributor.
    pub fn update(&mut self, node: &NodeRef<'a>, amount: i64) {
        let entry = self.scores.entry(node.id).or_default();
        entry.score += amount;
        entry.node_count += 1;

        if self.seen.insert(node.id) {
            self.parents.push(*node);
        }
    }

    /// Accumulated score of a node; absent nodes score 0.
    #[must_use]
    pub fn score(&self, node_id: NodeId) -> i64 {
        self.scores.get(&node_id).map_or(0, |s| s.score)
    }

    /// Number of candidates that contributed to a node.
    #[must_use]
    pub fn node_count(&self, node_id: NodeId) -> u32 {
        self.scores.get(&node_id).map_or(0, |s| s.node_count)
    }

    /// Full entry for a node, if it was ever updated.
    #[must_use]
    pub fn get(&self, node_id: NodeId) -> Option<GravityScore> {
        self.scores.get(&node_id).copied()
    }

    /// Every node that received a contribution, in first-contribution order.
    #[must_use]
    pub fn parent_nodes(&self) -> &[NodeRef<'a>] {
        &self.parents
    }

    /// True when no node was scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of scored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }
}
