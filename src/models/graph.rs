//! Edge arena built once per instance.

use super::node::DEPOT;
use super::{Edge, EdgeId, Instance};

/// Immutable arena of every edge a savings run can use.
///
/// Layout: for customer `k` (1-based) the depot edges `depot → k` and
/// `k → depot` sit at `2(k-1)` and `2(k-1) + 1`; the inter-customer edges
/// follow, one inverse pair per unordered customer pair `i < j`.
///
/// The arena is shared read-only by all passes. Everything a pass mutates
/// (savings list, routes, node membership) is held elsewhere and refers to
/// edges by [`EdgeId`].
///
/// # Examples
///
/// ```
/// use u_savings::models::{Graph, Instance, Node};
/// use u_savings::distance::DistanceMatrix;
///
/// let nodes = vec![
///     Node::depot(),
///     Node::new(1, 1.0).at(3.0, 0.0),
///     Node::new(2, 1.0).at(4.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let instance = Instance::new(nodes, dm, 10.0).unwrap();
/// let graph = Graph::new(&instance);
///
/// // s(1,2) = 3 + 4 - 1
/// let best = graph.savings_edges().next().unwrap();
/// assert!((best.savings - 6.0).abs() < 1e-10);
/// assert_eq!(graph.edge(best.inverse).origin, best.end);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<'a> {
    instance: &'a Instance,
    edges: Vec<Edge>,
}

impl<'a> Graph<'a> {
    /// Builds depot edges and savings edges for the instance.
    pub fn new(instance: &'a Instance) -> Self {
        let n = instance.num_customers();
        let mut edges = Vec::with_capacity(2 * n + n * n.saturating_sub(1));

        for k in 1..=n {
            push_pair(&mut edges, DEPOT, k, instance.cost(DEPOT, k), 0.0, 0.0);
        }

        for i in 1..=n {
            for j in (i + 1)..=n {
                let ij = instance.cost(DEPOT, i) + instance.cost(j, DEPOT) - instance.cost(i, j);
                let ji = instance.cost(DEPOT, j) + instance.cost(i, DEPOT) - instance.cost(j, i);
                push_pair(&mut edges, i, j, instance.cost(i, j), ij, ji);
            }
        }

        Self { instance, edges }
    }

    /// The instance this graph was built from.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Edge behind a handle.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Inverse of the given edge.
    pub fn inverse(&self, id: EdgeId) -> &Edge {
        &self.edges[self.edges[id.0].inverse.0]
    }

    /// Edge `depot → customer`.
    ///
    /// # Panics
    ///
    /// Panics if `customer` is the depot or not a customer of the instance.
    pub fn depot_out(&self, customer: usize) -> &Edge {
        &self.edges[self.depot_slot(customer)]
    }

    /// Edge `customer → depot`.
    ///
    /// # Panics
    ///
    /// Panics if `customer` is the depot or not a customer of the instance.
    pub fn depot_in(&self, customer: usize) -> &Edge {
        &self.edges[self.depot_slot(customer) + 1]
    }

    fn depot_slot(&self, customer: usize) -> usize {
        assert!(
            customer != DEPOT && customer <= self.instance.num_customers(),
            "node {customer} is not a customer"
        );
        2 * (customer - 1)
    }

    /// Inter-customer edges, both directions of every pair.
    pub fn savings_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges[2 * self.instance.num_customers()..].iter()
    }

    /// Total number of edges in the arena.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Demand of a node.
    pub fn demand(&self, node: usize) -> f64 {
        self.instance.node(node).demand()
    }
}

fn push_pair(edges: &mut Vec<Edge>, a: usize, b: usize, cost: f64, ab_savings: f64, ba_savings: f64) {
    let ab = EdgeId(edges.len());
    let ba = EdgeId(edges.len() + 1);
    edges.push(Edge {
        id: ab,
        origin: a,
        end: b,
        cost,
        savings: ab_savings,
        inverse: ba,
    });
    edges.push(Edge {
        id: ba,
        origin: b,
        end: a,
        cost,
        savings: ba_savings,
        inverse: ab,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::Node;

    fn instance() -> Instance {
        let nodes = vec![
            Node::depot(),
            Node::new(1, 1.0).at(3.0, 0.0),
            Node::new(2, 1.0).at(0.0, 4.0),
            Node::new(3, 1.0).at(-2.0, 0.0),
        ];
        let dm = DistanceMatrix::from_nodes(&nodes);
        Instance::new(nodes, dm, 10.0).expect("valid")
    }

    #[test]
    fn test_edge_count() {
        let inst = instance();
        let g = Graph::new(&inst);
        // 3 customers: 6 depot edges + 3 pairs * 2 directions
        assert_eq!(g.num_edges(), 12);
        assert_eq!(g.savings_edges().count(), 6);
    }

    #[test]
    fn test_depot_edges() {
        let inst = instance();
        let g = Graph::new(&inst);
        for k in 1..=3 {
            let out = g.depot_out(k);
            let back = g.depot_in(k);
            assert_eq!((out.origin, out.end), (DEPOT, k));
            assert_eq!((back.origin, back.end), (k, DEPOT));
            assert_eq!(out.inverse, back.id);
            assert_eq!(back.inverse, out.id);
            assert!((out.cost - inst.cost(0, k)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_savings_values() {
        let inst = instance();
        let g = Graph::new(&inst);
        for e in g.savings_edges() {
            let expected = inst.cost(0, e.origin) + inst.cost(e.end, 0) - inst.cost(e.origin, e.end);
            assert!((e.savings - expected).abs() < 1e-10);
            let inv = g.inverse(e.id);
            assert_eq!((inv.origin, inv.end), (e.end, e.origin));
            assert!((inv.cost - e.cost).abs() < 1e-10);
        }
    }

    #[test]
    #[should_panic(expected = "not a customer")]
    fn test_depot_out_rejects_depot() {
        let inst = instance();
        let g = Graph::new(&inst);
        g.depot_out(DEPOT);
    }

    #[test]
    #[should_panic(expected = "not a customer")]
    fn test_depot_in_rejects_unknown_node() {
        let inst = instance();
        let g = Graph::new(&inst);
        g.depot_in(4);
    }

    #[test]
    fn test_empty_graph() {
        let inst = Instance::new(vec![Node::depot()], DistanceMatrix::new(1), 1.0).expect("valid");
        let g = Graph::new(&inst);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.savings_edges().count(), 0);
    }
}
