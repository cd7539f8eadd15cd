//! Dummy solution: one round trip per customer.

use crate::models::{Graph, Route, Solution};

/// Builds the starting solution of the savings heuristic.
///
/// Every customer gets its own `depot → customer → depot` route, in customer
/// order. The result is always capacity-feasible for a validated instance
/// and involves no randomness.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Graph, Instance, Node};
/// use u_savings::distance::DistanceMatrix;
/// use u_savings::constructive::dummy_solution;
///
/// let nodes = vec![
///     Node::depot(),
///     Node::new(1, 2.0).at(3.0, 4.0),
///     Node::new(2, 3.0).at(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let instance = Instance::new(nodes, dm, 5.0).unwrap();
/// let graph = Graph::new(&instance);
///
/// let sol = dummy_solution(&graph);
/// assert_eq!(sol.num_routes(), 2);
/// assert!((sol.cost() - 12.0).abs() < 1e-10);
/// assert_eq!(sol.demand(), 5.0);
/// ```
pub fn dummy_solution(graph: &Graph<'_>) -> Solution {
    let mut solution = Solution::new();
    for node in graph.instance().customers() {
        solution.add_route(Route::round_trip(graph, node.id()));
    }
    solution
}
