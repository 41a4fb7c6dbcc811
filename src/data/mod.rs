//! # Data structures
//!
//! Representations of linear programs and the linear algebra and number types they are built on.
pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
