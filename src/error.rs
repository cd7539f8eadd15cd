//! Error types for instance construction and configuration.

use std::fmt;

/// Errors surfaced while setting up a savings run.
///
/// Merge-time feasibility failures are never errors: an edge that cannot
/// be applied is simply discarded by the merge loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SavingsError {
    /// Distance matrix, node list, or capacity cannot describe a valid instance.
    MalformedInput(String),
    /// A single customer's demand exceeds the vehicle capacity.
    InfeasibleCapacity {
        /// Offending customer.
        customer_id: usize,
        /// Its demand.
        demand: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// Multi-start configuration is out of range.
    InvalidConfig(String),
}

/// A type alias for results with [`SavingsError`].
pub type SavingsResult<T> = Result<T, SavingsError>;

impl fmt::Display for SavingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SavingsError::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
            SavingsError::InfeasibleCapacity {
                customer_id,
                demand,
                capacity,
            } => write!(
                f,
                "customer {customer_id} has demand {demand} exceeding vehicle capacity {capacity}"
            ),
            SavingsError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for SavingsError {}
