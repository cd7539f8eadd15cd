//! Route type.

use serde::Serialize;

use super::node::DEPOT;
use super::{Edge, Graph};

/// A depot-to-depot path stored as an ordered sequence of edges.
///
/// `cost` and `demand` are cached aggregates; every mutation goes through
/// methods that update them together with the edge list.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Graph, Instance, Node, Route};
/// use u_savings::distance::DistanceMatrix;
///
/// let nodes = vec![Node::depot(), Node::new(1, 4.0).at(3.0, 4.0)];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let instance = Instance::new(nodes, dm, 10.0).unwrap();
/// let graph = Graph::new(&instance);
///
/// let route = Route::round_trip(&graph, 1);
/// assert_eq!(route.customer_ids(), vec![1]);
/// assert!((route.cost() - 10.0).abs() < 1e-10);
/// assert_eq!(route.demand(), 4.0);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Route {
    edges: Vec<Edge>,
    cost: f64,
    demand: f64,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the route `depot → customer → depot`.
    pub fn round_trip(graph: &Graph<'_>, customer: usize) -> Self {
        let mut route = Self::new();
        route.push_edge(*graph.depot_out(customer), graph.demand(customer));
        route.push_edge(*graph.depot_in(customer), 0.0);
        route
    }

    /// Appends an edge, adding its cost and the demand served at its end.
    pub fn push_edge(&mut self, edge: Edge, end_demand: f64) {
        self.cost += edge.cost;
        self.demand += end_demand;
        self.edges.push(edge);
    }

    /// Removes the edge at `index`, subtracting its cost.
    ///
    /// Demand is left untouched: dropping a depot edge does not unserve
    /// the customer it touched.
    pub(crate) fn remove_edge(&mut self, index: usize) -> Edge {
        let edge = self.edges.remove(index);
        self.cost -= edge.cost;
        edge
    }

    /// Position of the depot edge touching `node`: the first edge if it
    /// joins `node` and the depot, otherwise the last one.
    pub(crate) fn depot_edge_position(&self, node: usize) -> usize {
        match self.edges.first() {
            Some(first) if first.connects(node, DEPOT) => 0,
            _ => self.edges.len().saturating_sub(1),
        }
    }

    /// Returns the same path traversed backwards, built from inverse edges.
    ///
    /// Costs and demand carry over unchanged since edge costs are symmetric.
    pub fn reversed(&self, graph: &Graph<'_>) -> Self {
        Self {
            edges: self
                .edges
                .iter()
                .rev()
                .map(|e| *graph.edge(e.inverse))
                .collect(),
            cost: self.cost,
            demand: self.demand,
        }
    }

    /// Ordered edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// First edge, if any.
    pub fn first_edge(&self) -> Option<&Edge> {
        self.edges.first()
    }

    /// Last edge, if any.
    pub fn last_edge(&self) -> Option<&Edge> {
        self.edges.last()
    }

    /// Customer IDs in visit order (depot implicit at both ends).
    pub fn customer_ids(&self) -> Vec<usize> {
        self.edges
            .iter()
            .map(|e| e.end)
            .filter(|&id| id != DEPOT)
            .collect()
    }

    /// Number of customers visited.
    pub fn len(&self) -> usize {
        self.edges.iter().filter(|e| e.end != DEPOT).count()
    }

    /// Returns `true` if no customer is visited.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of edge costs.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Sum of served demand.
    pub fn demand(&self) -> f64 {
        self.demand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Instance, Node};

    fn instance() -> Instance {
        let nodes = vec![
            Node::depot(),
            Node::new(1, 2.0).at(3.0, 0.0),
            Node::new(2, 3.0).at(3.0, 4.0),
        ];
        let dm = DistanceMatrix::from_nodes(&nodes);
        Instance::new(nodes, dm, 10.0).expect("valid")
    }

    fn edge_between(graph: &Graph<'_>, a: usize, b: usize) -> Edge {
        *graph
            .savings_edges()
            .find(|e| e.origin == a && e.end == b)
            .expect("edge exists")
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.cost(), 0.0);
        assert_eq!(r.demand(), 0.0);
        assert!(r.first_edge().is_none());
    }

    #[test]
    fn test_round_trip() {
        let inst = instance();
        let g = Graph::new(&inst);
        let r = Route::round_trip(&g, 2);
        assert_eq!(r.edges().len(), 2);
        assert_eq!(r.customer_ids(), vec![2]);
        assert!((r.cost() - 10.0).abs() < 1e-10);
        assert_eq!(r.demand(), 3.0);
    }

    #[test]
    fn test_reversed() {
        let inst = instance();
        let g = Graph::new(&inst);
        let mut r = Route::new();
        r.push_edge(*g.depot_out(1), 2.0);
        r.push_edge(edge_between(&g, 1, 2), 3.0);
        r.push_edge(*g.depot_in(2), 0.0);
        // 3 + 4 + 5
        assert!((r.cost() - 12.0).abs() < 1e-10);

        let rev = r.reversed(&g);
        assert_eq!(rev.customer_ids(), vec![2, 1]);
        assert_eq!(rev.first_edge().map(|e| e.origin), Some(DEPOT));
        assert_eq!(rev.last_edge().map(|e| e.end), Some(DEPOT));
        assert!((rev.cost() - r.cost()).abs() < 1e-10);
        assert_eq!(rev.demand(), r.demand());
        // original untouched
        assert_eq!(r.customer_ids(), vec![1, 2]);
    }

    #[test]
    fn test_depot_edge_position() {
        let inst = instance();
        let g = Graph::new(&inst);
        let mut r = Route::new();
        r.push_edge(*g.depot_out(1), 2.0);
        r.push_edge(edge_between(&g, 1, 2), 3.0);
        r.push_edge(*g.depot_in(2), 0.0);
        assert_eq!(r.depot_edge_position(1), 0);
        assert_eq!(r.depot_edge_position(2), 2);

        let removed = r.remove_edge(2);
        assert_eq!(removed.id, g.depot_in(2).id);
        assert!((r.cost() - 7.0).abs() < 1e-10);
        assert_eq!(r.demand(), 5.0);
    }
}
