//! Route artifacts and the key-balance feasibility rule.
//!
//! A route is a visiting order over every item node. Only its constrained
//! prefix (all keys plus one chest per key, see
//! [`ItemGraph::prefix_len`](crate::graph::ItemGraph::prefix_len)) carries a
//! feasibility requirement: scanning left to right, a key adds one held key
//! and a chest spends one, and the held count may never go negative. Chests
//! past the prefix have no key left for them and do not count towards cost.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::{ItemGraph, NodeKind};
use crate::NodeId;

/// A visiting order over all item nodes together with its scored cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    /// Every item node exactly once, constrained prefix first.
    pub order: Vec<NodeId>,
    /// Total step distance over the constrained prefix.
    pub distance: u32,
}

impl Route {
    /// Wraps `order` into a route, scoring its constrained prefix.
    pub fn scored(order: Vec<NodeId>, graph: &ItemGraph) -> Self {
        let end = graph.prefix_len().min(order.len());
        let distance = route_distance(&order[..end], graph);
        Self { order, distance }
    }

    /// The constrained prefix of the order.
    pub fn prefix<'a>(&'a self, graph: &ItemGraph) -> &'a [NodeId] {
        let end = graph.prefix_len().min(self.order.len());
        &self.order[..end]
    }
}

/// Sum of matrix distances over consecutive pairs of `nodes`.
pub fn route_distance(nodes: &[NodeId], graph: &ItemGraph) -> u32 {
    nodes.windows(2).map(|w| graph.distance(w[0], w[1])).sum()
}

/// Whether `nodes` respects the key balance: every chest visit is covered by
/// an earlier unspent key. Pure scan, O(len).
///
/// Candidate orderings that fail this check are discarded before they are
/// ever scored.
pub fn is_valid_prefix(nodes: &[NodeId], graph: &ItemGraph) -> bool {
    let mut held: usize = 0;
    for &node in nodes {
        match graph.kind(node) {
            NodeKind::Key => held += 1,
            NodeKind::Chest => {
                if held == 0 {
                    return false;
                }
                held -= 1;
            }
        }
    }
    true
}
