//! Biased-randomized multi-start driver.
//!
//! - [`MultiStartConfig`] — betas, stopping rules, seed, parallelism
//! - [`MultiStartRunner`] — one greedy pass, then randomized passes until
//!   the budget is spent, keeping the cheapest solution

mod best;
mod config;
mod runner;

pub use config::MultiStartConfig;
pub use runner::{MultiStartResult, MultiStartRunner};
