use std::error::Error;
use std::fmt;

/// Errors raised by matrix construction and by binary operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for `op`. Shapes are `(width, height)`.
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A dimension was zero.
    InvalidShape { width: usize, height: usize },
    /// `width * height` does not fit in a buffer.
    ShapeOverflow { width: usize, height: usize },
    /// Buffer length does not match `width * height`.
    LengthMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// Sampling range contains no values.
    EmptyRange { min: String, max: String },
    /// A sampled value is not representable in the cell type.
    Cast { value: String },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::ShapeMismatch { op, left, right } => write!(
                f,
                "shape mismatch in {}: left matrix is {}x{}, right matrix is {}x{} (width x height)",
                op, left.0, left.1, right.0, right.1
            ),
            MatrixError::InvalidShape { width, height } => write!(
                f,
                "invalid shape {}x{}: width and height must be at least 1",
                width, height
            ),
            MatrixError::ShapeOverflow { width, height } => write!(
                f,
                "invalid shape {}x{}: cell count overflows",
                width, height
            ),
            MatrixError::LengthMismatch { width, height, len } => write!(
                f,
                "invalid shape {}x{} for buffer of length {}",
                width, height, len
            ),
            MatrixError::EmptyRange { min, max } => {
                write!(f, "empty sampling range [{}, {}]", min, max)
            }
            MatrixError::Cast { value } => {
                write!(f, "value {} is not representable in the cell type", value)
            }
        }
    }
}

impl Error for MatrixError {}
