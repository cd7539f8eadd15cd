//! Domain model types for the savings heuristic.
//!
//! Provides the instance data (nodes with demand, costs, capacity), the
//! edge arena every pass shares, and the routes and solutions a pass builds.

mod edge;
mod graph;
mod instance;
mod node;
mod route;
mod solution;

pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use instance::Instance;
pub use node::{Node, DEPOT};
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
