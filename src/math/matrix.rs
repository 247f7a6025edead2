use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::error::MatrixError;

/// Dense `width x height` matrix stored row-major in one contiguous buffer.
///
/// Cells are addressed as `(x, y)` where `x` is the column and `y` the row,
/// so the cell lives at `y * width + x`. Every producing operation returns a
/// freshly allocated matrix and leaves its inputs untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

/// Validate a `(width, height)` shape and return its cell count.
pub(crate) fn check_shape(width: usize, height: usize) -> Result<usize, MatrixError> {
    if width == 0 || height == 0 {
        log::debug!("Rejecting matrix shape {}x{}", width, height);
        return Err(MatrixError::InvalidShape { width, height });
    }
    // A Vec never holds more than isize::MAX elements.
    match width.checked_mul(height) {
        Some(cells) if cells <= isize::MAX as usize => Ok(cells),
        _ => {
            log::debug!("Matrix shape {}x{} overflows the cell count", width, height);
            Err(MatrixError::ShapeOverflow { width, height })
        }
    }
}

pub(crate) fn shape_mismatch(
    op: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> MatrixError {
    log::debug!(
        "{}: incompatible shapes {:?} and {:?} (width, height)",
        op,
        left,
        right
    );
    MatrixError::ShapeMismatch { op, left, right }
}

// Shapes are never zero-sized, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl<T> Matrix<T> {
    /// Adopt a row-major buffer. `shape` is `(width, height)`.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, MatrixError> {
        let (width, height) = shape;
        let cells = check_shape(width, height)?;
        if data.len() != cells {
            return Err(MatrixError::LengthMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self::from_parts(data, width, height))
    }

    /// Build from nested rows; every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_shape(width, height)?;

        if rows.iter().any(|row| row.len() != width) {
            return Err(MatrixError::LengthMismatch {
                width,
                height,
                len: rows.iter().map(Vec::len).sum(),
            });
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self::from_parts(data, width, height))
    }

    /// Caller guarantees `data.len() == width * height` and a non-zero shape.
    pub(crate) fn from_parts(data: Vec<T>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Evaluate `f(x, y)` for every cell of a (pre-validated) shape, row-major.
    pub(crate) fn generate<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let data = (0..width * height)
            .map(|i| f(i % width, i / width))
            .collect();
        Self::from_parts(data, width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) out of bounds for {}x{} matrix",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn row(&self, y: usize) -> &[T] {
        let start = self.offset(0, y);
        &self.data[start..start + self.width]
    }

    pub fn try_get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.data.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Overwrite one cell. Panics when `(x, y)` is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let offset = self.offset(x, y);
        self.data[offset] = value;
    }

    /// New matrix of the same shape with cell `(x, y)` = `f(&self[(x, y)], x, y)`.
    pub fn map<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T, usize, usize) -> U,
    {
        let width = self.width;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, v)| f(v, i % width, i / width))
            .collect();
        Matrix::from_parts(data, self.width, self.height)
    }

    /// Combine two matrices into one shaped like `m1`.
    ///
    /// `f` receives both whole matrices plus the output coordinates, so it may
    /// read any number of cells from either input.
    pub fn fusion<A, B, F>(m1: &Matrix<A>, m2: &Matrix<B>, mut f: F) -> Self
    where
        F: FnMut(&Matrix<A>, &Matrix<B>, usize, usize) -> T,
    {
        Self::generate(m1.width, m1.height, |x, y| f(m1, m2, x, y))
    }

    /// Like [`Matrix::fusion`] with an explicit `(width, height)` result shape.
    pub fn fusion_with_shape<A, B, F>(
        m1: &Matrix<A>,
        m2: &Matrix<B>,
        shape: (usize, usize),
        mut f: F,
    ) -> Result<Self, MatrixError>
    where
        F: FnMut(&Matrix<A>, &Matrix<B>, usize, usize) -> T,
    {
        let (width, height) = shape;
        check_shape(width, height)?;
        Ok(Self::generate(width, height, |x, y| f(m1, m2, x, y)))
    }

    /// Cellwise combine: output `(x, y)` = `f(&m1[(x, y)], &m2[(x, y)])`.
    pub fn simple_fusion<A, B, F>(m1: &Matrix<A>, m2: &Matrix<B>, f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(&A, &B) -> T,
    {
        Self::zip_cells("simple_fusion", m1, m2, f)
    }

    fn zip_cells<A, B, F>(
        op: &'static str,
        m1: &Matrix<A>,
        m2: &Matrix<B>,
        mut f: F,
    ) -> Result<Self, MatrixError>
    where
        F: FnMut(&A, &B) -> T,
    {
        if m1.shape() != m2.shape() {
            return Err(shape_mismatch(op, m1.shape(), m2.shape()));
        }
        Ok(Self::fusion(m1, m2, |a, b, x, y| {
            let offset = a.offset(x, y);
            f(&a.data[offset], &b.data[offset])
        }))
    }
}

impl<T> Matrix<T>
where
    T: Zero + Clone,
{
    /// Zero-filled `width x height` matrix.
    pub fn new(width: usize, height: usize) -> Result<Self, MatrixError> {
        let cells = check_shape(width, height)?;
        Ok(Self::from_parts(vec![T::zero(); cells], width, height))
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    /// Single-column matrix: row `y` holds `values[y]`.
    pub fn from_array(values: &[T]) -> Result<Self, MatrixError> {
        check_shape(1, values.len())?;
        Ok(Self::from_parts(values.to_vec(), 1, values.len()))
    }

    /// Cells in row-major order.
    pub fn to_array(&self) -> Vec<T> {
        self.data.clone()
    }

    pub fn fill(&self, value: T) -> Matrix<T> {
        self.map(|_, _, _| value.clone())
    }
}

impl<T> Matrix<T>
where
    T: Copy,
{
    /// Value at column `x`, row `y`. Panics when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.offset(x, y)]
    }

    pub fn transpose(&self) -> Matrix<T> {
        // shape-only carrier: `()` cells take no storage
        let swapped: Matrix<()> = Matrix::generate(self.height, self.width, |_, _| ());
        swapped.map(|_, x, y| self.get(y, x))
    }

    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
    where
        T: Add<Output = T>,
    {
        Matrix::zip_cells("add", self, other, |&a, &b| a + b)
    }

    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
    where
        T: Sub<Output = T>,
    {
        Matrix::zip_cells("subtract", self, other, |&a, &b| a - b)
    }

    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
    where
        T: Mul<Output = T>,
    {
        Matrix::zip_cells("multiply", self, other, |&a, &b| a * b)
    }

    pub fn divide(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
    where
        T: Div<Output = T>,
    {
        Matrix::zip_cells("divide", self, other, |&a, &b| a / b)
    }

    pub fn add_scalar(&self, scalar: T) -> Matrix<T>
    where
        T: Add<Output = T>,
    {
        self.map(|&v, _, _| v + scalar)
    }

    pub fn subtract_scalar(&self, scalar: T) -> Matrix<T>
    where
        T: Sub<Output = T>,
    {
        self.map(|&v, _, _| v - scalar)
    }

    pub fn multiply_scalar(&self, scalar: T) -> Matrix<T>
    where
        T: Mul<Output = T>,
    {
        self.map(|&v, _, _| v * scalar)
    }

    /// No zero check: floats yield inf/NaN, integer division by zero panics.
    pub fn divide_scalar(&self, scalar: T) -> Matrix<T>
    where
        T: Div<Output = T>,
    {
        self.map(|&v, _, _| v / scalar)
    }

    /// Matrix product `self x other`.
    ///
    /// Requires `self.width() == other.height()`; the result is
    /// `other.width() x self.height()` and each cell sums
    /// `self(i, y) * other(x, i)` over ascending `i`.
    pub fn product(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
    where
        T: Zero + Add<Output = T> + Mul<Output = T>,
    {
        log::trace!("product {:?} x {:?}", self.shape(), other.shape());
        if self.width != other.height {
            return Err(shape_mismatch("product", self.shape(), other.shape()));
        }
        Matrix::fusion_with_shape(self, other, (other.width, self.height), dot_cell)
    }
}

/// Row `y` of `m1` dotted with column `x` of `m2`, summed in ascending order.
pub(crate) fn dot_cell<T>(m1: &Matrix<T>, m2: &Matrix<T>, x: usize, y: usize) -> T
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    (0..m1.width).fold(T::zero(), |acc, i| acc + m1.get(i, y) * m2.get(x, i))
}

impl<T: fmt::Display> Matrix<T> {
    /// Print the grid to stdout.
    pub fn display(&self) {
        println!("{}", self);
    }
}

impl<T> From<Matrix<T>> for Vec<T> {
    fn from(value: Matrix<T>) -> Self {
        value.data
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            write!(f, "[")?;
            for (x, value) in self.row(y).iter().enumerate() {
                write!(f, "{}", value)?;
                if x + 1 != self.width {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if y + 1 != self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Matrix-matrix operators are elementwise and panic on a shape mismatch.
macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $name:literal, $op:tt) => {
        impl<'a, 'b, T> $trait<&'b Matrix<T>> for &'a Matrix<T>
        where
            T: Copy + $trait<Output = T>,
        {
            type Output = Matrix<T>;

            fn $method(self, rhs: &'b Matrix<T>) -> Matrix<T> {
                Matrix::zip_cells($name, self, rhs, |&a, &b| a $op b)
                    .unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

impl_elementwise_op!(Add, add, "add", +);
impl_elementwise_op!(Sub, sub, "subtract", -);
impl_elementwise_op!(Mul, mul, "multiply", *);
impl_elementwise_op!(Div, div, "divide", /);

macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {
        $(
            impl Add<$scalar> for &Matrix<$scalar> {
                type Output = Matrix<$scalar>;

                fn add(self, rhs: $scalar) -> Matrix<$scalar> {
                    self.add_scalar(rhs)
                }
            }

            impl Sub<$scalar> for &Matrix<$scalar> {
                type Output = Matrix<$scalar>;

                fn sub(self, rhs: $scalar) -> Matrix<$scalar> {
                    self.subtract_scalar(rhs)
                }
            }

            impl Mul<$scalar> for &Matrix<$scalar> {
                type Output = Matrix<$scalar>;

                fn mul(self, rhs: $scalar) -> Matrix<$scalar> {
                    self.multiply_scalar(rhs)
                }
            }

            impl Div<$scalar> for &Matrix<$scalar> {
                type Output = Matrix<$scalar>;

                fn div(self, rhs: $scalar) -> Matrix<$scalar> {
                    self.divide_scalar(rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
