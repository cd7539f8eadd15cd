//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each customer
//! on its own route (depot → customer → depot). It then merges routes by
//! linking the end of one route to the start of another through edge
//! `i → j`, which saves
//!
//! ```text
//! s(i, j) = c(0, i) + c(j, 0) - c(i, j)
//! ```
//!
//! Candidate edges are consumed in decreasing order of savings, subject to
//! capacity and to both endpoints still touching the depot. The biased
//! variant draws the next candidate from a geometric distribution over the
//! ranked list instead of always taking the top one.
//!
//! # Complexity
//!
//! O(n² log n) to build the savings list; the merge loop is O(n⁴) in the
//! worst case because list removal and route splicing are linear.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.
//!
//! Juan, A.A. et al. (2010). "The SR-GCWS hybrid algorithm for solving the
//! capacitated vehicle routing problem", *Applied Soft Computing* 10(1), 215-224.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{dummy_solution, EdgeSelector, MergeState, SavingsList};
use crate::models::{Graph, Instance, Solution};

/// Constructs a solution using the deterministic Clarke-Wright savings algorithm.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Instance, Node};
/// use u_savings::distance::DistanceMatrix;
/// use u_savings::constructive::clarke_wright_savings;
///
/// let nodes = vec![
///     Node::depot(),
///     Node::new(1, 10.0).at(1.0, 0.0),
///     Node::new(2, 10.0).at(2.0, 0.0),
///     Node::new(3, 10.0).at(3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let instance = Instance::new(nodes, dm, 30.0).unwrap();
///
/// let solution = clarke_wright_savings(&instance);
/// assert_eq!(solution.num_routes(), 1);
/// assert!((solution.cost() - 6.0).abs() < 1e-10);
/// ```
pub fn clarke_wright_savings(instance: &Instance) -> Solution {
    let graph = Graph::new(instance);
    let list = SavingsList::build(&graph);
    // the greedy selector never draws
    let mut rng = StdRng::seed_from_u64(0);
    savings_pass(&graph, &list, EdgeSelector::Greedy, &mut rng)
}

/// Constructs a solution with the biased-randomized savings algorithm.
///
/// `beta1` and `beta2` bound the geometric parameter; values near 1 behave
/// almost greedily, values near 0 spread picks across the whole list.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Instance, Node};
/// use u_savings::distance::DistanceMatrix;
/// use u_savings::constructive::biased_clarke_wright;
/// use rand::SeedableRng;
///
/// let nodes = vec![
///     Node::depot(),
///     Node::new(1, 4.0).at(1.0, 0.0),
///     Node::new(2, 4.0).at(0.0, 1.0),
///     Node::new(3, 4.0).at(-1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let instance = Instance::new(nodes, dm, 8.0).unwrap();
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let solution = biased_clarke_wright(&instance, 0.1, 0.3, &mut rng);
/// assert_eq!(solution.num_served(), 3);
/// assert!(solution.routes().iter().all(|r| r.demand() <= 8.0));
/// ```
pub fn biased_clarke_wright<R: Rng>(
    instance: &Instance,
    beta1: f64,
    beta2: f64,
    rng: &mut R,
) -> Solution {
    let graph = Graph::new(instance);
    let list = SavingsList::build(&graph);
    savings_pass(&graph, &list, EdgeSelector::biased(beta1, beta2), rng)
}

/// Runs one full pass on a prebuilt graph.
///
/// The pass works on its own copy of `template` and a fresh dummy solution,
/// so repeated calls are independent of each other.
pub fn savings_pass<R: Rng>(
    graph: &Graph<'_>,
    template: &SavingsList,
    selector: EdgeSelector,
    rng: &mut R,
) -> Solution {
    let mut list = template.clone();
    let mut state = MergeState::new(graph, dummy_solution(graph));
    state.merge_all(&mut list, selector, rng);
    state.into_solution()
}
