//! Savings list: inter-customer edges ranked by decreasing savings.

use crate::models::{EdgeId, Graph};

/// Candidate edges in descending savings order.
///
/// Holds handles into a [`Graph`]. The list only ever shrinks during a merge
/// pass; [`insert`](Self::insert) keeps the order for callers that need it.
/// Ties keep construction order (pair `i < j`, then `i → j` before `j → i`).
///
/// # Examples
///
/// ```
/// use u_savings::models::{Graph, Instance, Node};
/// use u_savings::distance::DistanceMatrix;
/// use u_savings::constructive::SavingsList;
///
/// let nodes = vec![
///     Node::depot(),
///     Node::new(1, 1.0).at(3.0, 0.0),
///     Node::new(2, 1.0).at(4.0, 0.0),
///     Node::new(3, 1.0).at(0.0, 5.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let instance = Instance::new(nodes, dm, 10.0).unwrap();
/// let graph = Graph::new(&instance);
///
/// let list = SavingsList::build(&graph);
/// assert_eq!(list.len(), 6);
/// let top = graph.edge(list.get(0).unwrap());
/// assert!((top.savings - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SavingsList {
    edges: Vec<EdgeId>,
}

impl SavingsList {
    /// Collects both directions of every customer pair and sorts them.
    pub fn build(graph: &Graph<'_>) -> Self {
        let mut edges: Vec<EdgeId> = graph.savings_edges().map(|e| e.id).collect();
        // stable: equal savings keep construction order
        edges.sort_by(|a, b| graph.edge(*b).savings.total_cmp(&graph.edge(*a).savings));
        Self { edges }
    }

    /// Number of remaining candidates.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no candidate is left.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Candidate at `index` without removing it.
    pub fn get(&self, index: usize) -> Option<EdgeId> {
        self.edges.get(index).copied()
    }

    /// Removes and returns the candidate at `index`.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn take(&mut self, index: usize) -> Option<EdgeId> {
        if index < self.edges.len() {
            Some(self.edges.remove(index))
        } else {
            None
        }
    }

    /// Removes `edge` if present. Returns whether it was found.
    pub fn remove(&mut self, edge: EdgeId) -> bool {
        match self.edges.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `edge` is still a candidate.
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    /// Inserts `edge` after every candidate with greater or equal savings.
    pub fn insert(&mut self, edge: EdgeId, graph: &Graph<'_>) {
        let savings = graph.edge(edge).savings;
        let pos = self
            .edges
            .partition_point(|&e| graph.edge(e).savings >= savings);
        self.edges.insert(pos, edge);
    }

    /// Iterates over candidates from highest to lowest savings.
    pub fn iter(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().copied()
    }
}
