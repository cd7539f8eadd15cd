//! # u-savings
//!
//! Clarke-Wright savings heuristic for the capacitated vehicle routing
//! problem, with a biased-randomized multi-start variant.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Edge arena, Route, Solution, Instance)
//! - [`distance`] — Distance matrix
//! - [`constructive`] — Savings list, dummy solution, edge selection, merge loop
//! - [`multistart`] — Time-budgeted greedy + randomized multi-start driver
//! - [`evaluation`] — Independent solution checking
//! - [`error`] — Setup errors

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod multistart;
