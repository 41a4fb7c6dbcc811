//! # Linear programs
//!
//! Describing a linear program before solving and representing its solution afterwards.
pub mod canonical_form;
pub mod solution;
