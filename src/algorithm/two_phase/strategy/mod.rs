//! # Strategies
//!
//! Interchangeable pieces of the simplex algorithm.
pub mod pivot_rule;
