//! Directed edge type.

use serde::{Deserialize, Serialize};

/// Handle of an edge inside a [`Graph`](super::Graph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

/// A directed edge between two nodes.
///
/// Edges are created once by the graph and never mutated. Each edge knows
/// the handle of its inverse (same endpoints, reversed), which is what route
/// reversal and savings-list bookkeeping rely on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Handle of this edge.
    pub id: EdgeId,
    /// Origin node ID.
    pub origin: usize,
    /// End node ID.
    pub end: usize,
    /// Travel cost.
    pub cost: f64,
    /// Clarke-Wright savings; zero for depot edges.
    pub savings: f64,
    /// Handle of the inverse edge.
    pub inverse: EdgeId,
}

impl Edge {
    /// Returns `true` if the edge joins `node` and `other` in either direction.
    pub fn connects(&self, node: usize, other: usize) -> bool {
        (self.origin == node && self.end == other) || (self.origin == other && self.end == node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects() {
        let e = Edge {
            id: EdgeId(0),
            origin: 0,
            end: 3,
            cost: 1.0,
            savings: 0.0,
            inverse: EdgeId(1),
        };
        assert!(e.connects(0, 3));
        assert!(e.connects(3, 0));
        assert!(!e.connects(0, 2));
    }
}
