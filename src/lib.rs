//! redeem-matrix: a small dense matrix for numeric prototyping.
//!
//! Everything is derived from two primitives on [`Matrix`]: `map`, which
//! transforms each cell of one matrix, and `fusion`, which builds a matrix of
//! any shape from two input matrices. Elementwise arithmetic, the matrix
//! product, transposition and randomized initialization are thin
//! specializations of those.
//!
//! Shape problems are reported through [`MatrixError`] rather than panics,
//! except for the `std::ops` operators which assert matching shapes.
pub mod config;
pub mod error;
pub mod math;

pub use config::{InitConfig, InitType};
pub use error::MatrixError;
pub use math::{InitCell, Matrix};
