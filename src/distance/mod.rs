//! Distance matrices.
//!
//! Provides the dense cost matrix a savings instance is built from.

mod matrix;

pub use matrix::DistanceMatrix;
