//! Validated problem instance.

use super::node::DEPOT;
use super::Node;
use crate::distance::DistanceMatrix;
use crate::error::{SavingsError, SavingsResult};

/// Tolerance used when checking that the distance matrix is symmetric.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A capacitated routing instance: depot, customers, costs, and capacity.
///
/// Construction validates everything once, so the savings machinery
/// downstream can trust the data: node IDs match matrix indices, demands
/// are finite and non-negative, the matrix is square, symmetric,
/// non-negative with a zero diagonal, and every customer fits in a vehicle.
///
/// # Examples
///
/// ```
/// use u_savings::models::{Instance, Node};
/// use u_savings::distance::DistanceMatrix;
///
/// let nodes = vec![
///     Node::depot(),
///     Node::new(1, 3.0).at(1.0, 0.0),
///     Node::new(2, 5.0).at(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let instance = Instance::new(nodes, dm, 8.0).unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.total_demand(), 8.0);
///
/// let nodes = vec![Node::depot(), Node::new(1, 9.0)];
/// let dm = DistanceMatrix::new(2);
/// assert!(Instance::new(nodes, dm, 8.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    nodes: Vec<Node>,
    distances: DistanceMatrix,
    capacity: f64,
}

impl Instance {
    /// Validates and builds an instance.
    ///
    /// # Errors
    ///
    /// [`SavingsError::MalformedInput`] for structural problems and
    /// [`SavingsError::InfeasibleCapacity`] when a customer alone exceeds
    /// `capacity`.
    pub fn new(nodes: Vec<Node>, distances: DistanceMatrix, capacity: f64) -> SavingsResult<Self> {
        if nodes.is_empty() {
            return Err(SavingsError::MalformedInput(
                "node list must contain the depot".into(),
            ));
        }
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(SavingsError::MalformedInput(format!(
                "vehicle capacity must be positive, got {capacity}"
            )));
        }
        if let Some((index, node)) = nodes.iter().enumerate().find(|(i, n)| n.id() != *i) {
            return Err(SavingsError::MalformedInput(format!(
                "node at position {index} has id {}",
                node.id()
            )));
        }
        if nodes[DEPOT].demand() != 0.0 {
            return Err(SavingsError::MalformedInput(
                "depot demand must be zero".into(),
            ));
        }
        if let Some(node) = nodes
            .iter()
            .find(|n| !n.demand().is_finite() || n.demand() < 0.0)
        {
            return Err(SavingsError::MalformedInput(format!(
                "node {} has invalid demand {}",
                node.id(),
                node.demand()
            )));
        }
        if distances.size() != nodes.len() {
            return Err(SavingsError::MalformedInput(format!(
                "distance matrix is {0}x{0} but there are {1} nodes",
                distances.size(),
                nodes.len()
            )));
        }
        if !distances.is_well_formed() {
            return Err(SavingsError::MalformedInput(
                "distances must be finite, non-negative, with a zero diagonal".into(),
            ));
        }
        if !distances.is_symmetric(SYMMETRY_TOLERANCE) {
            return Err(SavingsError::MalformedInput(
                "distance matrix must be symmetric".into(),
            ));
        }
        if let Some(node) = nodes.iter().find(|n| n.demand() > capacity) {
            return Err(SavingsError::InfeasibleCapacity {
                customer_id: node.id(),
                demand: node.demand(),
                capacity,
            });
        }

        Ok(Self {
            nodes,
            distances,
            capacity,
        })
    }

    /// All nodes, depot first.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Customer nodes (everything but the depot).
    pub fn customers(&self) -> &[Node] {
        &self.nodes[1..]
    }

    /// Node with the given ID.
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id]
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Travel cost from `from` to `to`.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> f64 {
        self.customers().iter().map(|n| n.demand()).sum()
    }
}
