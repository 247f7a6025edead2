//! Dense matrix type and the operations derived from its `map` and `fusion`
//! primitives.
//!
//! `matrix` holds storage, accessors, arithmetic, product and transpose;
//! `parallel` adds rayon-backed variants; `random` adds randomized
//! initialization.
pub mod matrix;
pub mod parallel;
pub mod random;

pub use matrix::Matrix;
pub use random::InitCell;
