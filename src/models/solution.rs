//! Solution and violation types.

use serde::Serialize;

use super::Route;

/// A type of inconsistency found when checking a solution against its instance.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route demand exceeds vehicle capacity.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Demand carried by the route.
        load: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// Cached route cost differs from the recomputed path cost.
    CostMismatch {
        /// Route index.
        route_index: usize,
        /// Cached cost.
        cached: f64,
        /// Cost recomputed from the distance matrix.
        actual: f64,
    },
    /// Cached route demand differs from the sum of visited demands.
    DemandMismatch {
        /// Route index.
        route_index: usize,
        /// Cached demand.
        cached: f64,
        /// Demand recomputed from the visited customers.
        actual: f64,
    },
    /// Route is not a connected path starting and ending at the depot.
    NotDepotAnchored {
        /// Route index.
        route_index: usize,
    },
    /// Customer is not served by any route.
    CustomerMissing {
        /// Customer ID.
        customer_id: usize,
    },
    /// Customer is served more than once.
    CustomerRepeated {
        /// Customer ID.
        customer_id: usize,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A set of disjoint depot-anchored routes with aggregate cost and demand.
///
/// # Examples
///
/// ```
/// use u_savings::models::Solution;
///
/// let sol = Solution::new();
/// assert_eq!(sol.num_routes(), 0);
/// assert_eq!(sol.cost(), 0.0);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Solution {
    routes: Vec<Route>,
    cost: f64,
    demand: f64,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a solution whose aggregates were maintained incrementally.
    pub(crate) fn from_parts(routes: Vec<Route>, cost: f64, demand: f64) -> Self {
        Self {
            routes,
            cost,
            demand,
        }
    }

    /// Adds a route, accumulating its cost and demand.
    pub fn add_route(&mut self, route: Route) {
        self.cost += route.cost();
        self.demand += route.demand();
        self.routes.push(route);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Consumes the solution, yielding its routes.
    pub(crate) fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    /// Returns the number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total cost of this solution.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Total demand served.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Total number of customers served (across all routes).
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}
