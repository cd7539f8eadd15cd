//! Solution verification against the instance data.

mod checker;

pub use checker::SolutionChecker;
