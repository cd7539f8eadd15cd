//! Independent solution checker.

use crate::models::{Instance, Route, Solution, Violation, ViolationType, DEPOT};

/// Absolute tolerance for comparing cached and recomputed aggregates.
const TOLERANCE: f64 = 1e-6;

/// Recomputes every route of a solution from the instance data and reports
/// anything that disagrees with the cached aggregates or the constraints.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Instance, Node};
/// use u_savings::distance::DistanceMatrix;
/// use u_savings::constructive::clarke_wright_savings;
/// use u_savings::evaluation::SolutionChecker;
///
/// let nodes = vec![
///     Node::depot(),
///     Node::new(1, 3.0).at(3.0, 4.0),
///     Node::new(2, 5.0).at(6.0, 8.0),
///     Node::new(3, 4.0).at(0.0, 10.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let instance = Instance::new(nodes, dm, 9.0).unwrap();
///
/// let solution = clarke_wright_savings(&instance);
/// let checker = SolutionChecker::new(&instance);
/// assert!(checker.check(&solution).is_empty());
/// ```
pub struct SolutionChecker<'a> {
    instance: &'a Instance,
}

impl<'a> SolutionChecker<'a> {
    /// Creates a checker for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Path cost and served demand of a customer sequence, depot at both ends.
    pub fn path_metrics(&self, customer_ids: &[usize]) -> (f64, f64) {
        let mut cost = 0.0;
        let mut demand = 0.0;
        let mut prev = DEPOT;
        for &cid in customer_ids {
            cost += self.instance.cost(prev, cid);
            demand += self.instance.node(cid).demand();
            prev = cid;
        }
        cost += self.instance.cost(prev, DEPOT);
        (cost, demand)
    }

    /// Checks a single route, tagging violations with `route_index`.
    pub fn check_route(&self, route_index: usize, route: &Route) -> Vec<Violation> {
        let mut violations = Vec::new();

        let edges = route.edges();
        let anchored = edges.first().is_some_and(|e| e.origin == DEPOT)
            && edges.last().is_some_and(|e| e.end == DEPOT)
            && edges.windows(2).all(|w| w[0].end == w[1].origin);
        if !anchored {
            violations.push(Violation::new(ViolationType::NotDepotAnchored { route_index }));
        }

        let (cost, demand) = self.path_metrics(&route.customer_ids());
        if (cost - route.cost()).abs() > TOLERANCE {
            violations.push(Violation::new(ViolationType::CostMismatch {
                route_index,
                cached: route.cost(),
                actual: cost,
            }));
        }
        if (demand - route.demand()).abs() > TOLERANCE {
            violations.push(Violation::new(ViolationType::DemandMismatch {
                route_index,
                cached: route.demand(),
                actual: demand,
            }));
        }
        if demand > self.instance.capacity() + TOLERANCE {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                route_index,
                load: demand,
                capacity: self.instance.capacity(),
            }));
        }

        violations
    }

    /// Checks all routes plus the customer partition.
    ///
    /// An empty result means every customer is served exactly once and all
    /// cached costs and demands match the instance.
    pub fn check(&self, solution: &Solution) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut visits = vec![0usize; self.instance.nodes().len()];

        for (idx, route) in solution.routes().iter().enumerate() {
            violations.append(&mut self.check_route(idx, route));
            for cid in route.customer_ids() {
                if let Some(count) = visits.get_mut(cid) {
                    *count += 1;
                }
            }
        }

        for (cid, &count) in visits.iter().enumerate().skip(1) {
            match count {
                0 => violations.push(Violation::new(ViolationType::CustomerMissing {
                    customer_id: cid,
                })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::CustomerRepeated {
                    customer_id: cid,
                })),
            }
        }

        violations
    }

    /// Sum of recomputed route costs.
    pub fn total_cost(&self, solution: &Solution) -> f64 {
        solution
            .routes()
            .iter()
            .map(|r| self.path_metrics(&r.customer_ids()).0)
            .sum()
    }
}
