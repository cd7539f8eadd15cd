//! Savings-based route construction.
//!
//! - [`SavingsList`] — inter-customer edges ranked by decreasing savings
//! - [`dummy_solution`] — one depot round trip per customer
//! - [`EdgeSelector`] — greedy or biased-randomized candidate choice
//! - [`MergeState`] — the merge loop with its feasibility checks
//! - [`clarke_wright_savings`] / [`biased_clarke_wright`] — single-pass entry points

mod clarke_wright;
mod dummy;
mod merge;
mod savings_list;
mod selector;

pub use clarke_wright::{biased_clarke_wright, clarke_wright_savings, savings_pass};
pub use dummy::dummy_solution;
pub use merge::MergeState;
pub use savings_list::SavingsList;
pub use selector::{geometric_index, EdgeSelector};
