//! Node (depot or customer) type.

use serde::{Deserialize, Serialize};

/// Identifier of the depot node.
pub const DEPOT: usize = 0;

/// A location in a savings instance.
///
/// Node 0 is the depot. Customers have a non-negative demand and optional
/// coordinates, which are only used to build a Euclidean distance matrix.
/// Route membership is per-pass state and lives in the merge engine, not here.
///
/// # Examples
///
/// ```
/// use u_savings::models::Node;
///
/// let depot = Node::depot();
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.demand(), 0.0);
///
/// let c = Node::new(1, 4.5).at(3.0, 4.0);
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 4.5);
/// assert!((depot.distance_to(&c) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    demand: f64,
    x: f64,
    y: f64,
}

impl Node {
    /// Creates a node at the origin with the given demand.
    pub fn new(id: usize, demand: f64) -> Self {
        Self {
            id,
            demand,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Creates the depot (id = 0, demand = 0).
    pub fn depot() -> Self {
        Self::new(DEPOT, 0.0)
    }

    /// Places this node at the given coordinates.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Node ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Demand served when this node is visited.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.id == DEPOT
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
