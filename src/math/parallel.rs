//! rayon-backed variants of `map`, `fusion` and `product`.
//!
//! Every output cell is computed by exactly one task from shared, read-only
//! inputs, so no synchronization beyond rayon's final join is needed. Results
//! match the sequential forms exactly.

use std::ops::{Add, Mul};

use num_traits::Zero;
use rayon::prelude::*;

use crate::error::MatrixError;
use crate::math::matrix::{check_shape, dot_cell, shape_mismatch, Matrix};

impl<T> Matrix<T>
where
    T: Sync,
{
    pub fn par_map<U, F>(&self, f: F) -> Matrix<U>
    where
        U: Send,
        F: Fn(&T, usize, usize) -> U + Sync + Send,
    {
        let width = self.width();
        let data = self
            .as_slice()
            .par_iter()
            .enumerate()
            .map(|(i, v)| f(v, i % width, i / width))
            .collect();
        Matrix::from_parts(data, width, self.height())
    }
}

impl<T> Matrix<T>
where
    T: Send,
{
    pub fn par_fusion_with_shape<A, B, F>(
        m1: &Matrix<A>,
        m2: &Matrix<B>,
        shape: (usize, usize),
        f: F,
    ) -> Result<Self, MatrixError>
    where
        A: Sync,
        B: Sync,
        F: Fn(&Matrix<A>, &Matrix<B>, usize, usize) -> T + Sync + Send,
    {
        let (width, height) = shape;
        let cells = check_shape(width, height)?;
        let data = (0..cells)
            .into_par_iter()
            .map(|i| f(m1, m2, i % width, i / width))
            .collect();
        Ok(Matrix::from_parts(data, width, height))
    }
}

impl<T> Matrix<T>
where
    T: Copy + Send + Sync + Zero + Add<Output = T> + Mul<Output = T>,
{
    /// Parallel [`Matrix::product`]; each cell keeps the ascending summation order.
    pub fn par_product(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        log::trace!("par_product {:?} x {:?}", self.shape(), other.shape());
        if self.width() != other.height() {
            return Err(shape_mismatch("par_product", self.shape(), other.shape()));
        }
        Matrix::par_fusion_with_shape(self, other, (other.width(), self.height()), dot_cell)
    }
}
