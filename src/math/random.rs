//! Randomized initialization on top of `Matrix::map`.
//!
//! Bound policy: `randomize_int` samples the closed range `[min, max]`,
//! `randomize_float` samples the half-open range `[min, max)`.

use std::fmt;

use num_traits::{Float, NumCast};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{InitConfig, InitType};
use crate::error::MatrixError;
use crate::math::Matrix;

impl<T> Matrix<T> {
    /// Same-shaped matrix with every cell drawn from `dist`.
    pub fn randomize<D, R>(&self, dist: &D, rng: &mut R) -> Matrix<T>
    where
        D: Distribution<T>,
        R: Rng + ?Sized,
    {
        self.map(|_, _, _| dist.sample(&mut *rng))
    }

    /// Integers uniform over `[min, max]`, converted to the cell type.
    pub fn randomize_int<R>(&self, min: i64, max: i64, rng: &mut R) -> Result<Matrix<T>, MatrixError>
    where
        T: NumCast,
        R: Rng + ?Sized,
    {
        if min > max {
            return Err(MatrixError::EmptyRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        let dist = Uniform::new_inclusive(min, max);
        let samples = self.map(|_, _, _| dist.sample(&mut *rng));
        let (width, height) = samples.shape();

        let data = Vec::from(samples)
            .into_iter()
            .map(|v| {
                <T as NumCast>::from(v).ok_or_else(|| MatrixError::Cast {
                    value: v.to_string(),
                })
            })
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Matrix::from_parts(data, width, height))
    }

    /// Floats uniform over `[min, max)`.
    pub fn randomize_float<R>(&self, min: T, max: T, rng: &mut R) -> Result<Matrix<T>, MatrixError>
    where
        T: Float + SampleUniform + fmt::Display,
        R: Rng + ?Sized,
    {
        // Uniform::new panics on these, so reject them up front.
        if min >= max || !(max - min).is_finite() {
            return Err(MatrixError::EmptyRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(self.randomize(&Uniform::new(min, max), rng))
    }

    /// Randomize according to `config`, seeding `StdRng` from `config.seed` when set.
    pub fn randomize_from_config(&self, config: &InitConfig) -> Result<Matrix<T>, MatrixError>
    where
        T: InitCell,
    {
        let mut rng = match config.seed {
            Some(seed) => {
                log::debug!("Seeding StdRng with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                log::debug!("Seeding StdRng from OS entropy");
                StdRng::from_entropy()
            }
        };

        match config.init_type {
            InitType::Int { min, max } => self.randomize_int(min, max, &mut rng),
            InitType::Float { min, max } => T::randomize_float_range(self, min, max, &mut rng),
        }
    }
}

/// Cell types that can be filled from an [`InitConfig`].
///
/// Every cell type accepts `InitType::Int`. For `InitType::Float`, float cells
/// sample `[min, max)` directly while integer cells draw the integers `n`
/// with `min <= n < max`.
pub trait InitCell: NumCast + Sized {
    fn randomize_float_range<R>(
        m: &Matrix<Self>,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Result<Matrix<Self>, MatrixError>
    where
        R: Rng + ?Sized;
}

macro_rules! impl_init_cell_float {
    ($($float:ty),*) => {
        $(
            impl InitCell for $float {
                fn randomize_float_range<R>(
                    m: &Matrix<Self>,
                    min: f64,
                    max: f64,
                    rng: &mut R,
                ) -> Result<Matrix<Self>, MatrixError>
                where
                    R: Rng + ?Sized,
                {
                    m.randomize_float(float_bound(min)?, float_bound(max)?, rng)
                }
            }
        )*
    };
}

macro_rules! impl_init_cell_int {
    ($($int:ty),*) => {
        $(
            impl InitCell for $int {
                fn randomize_float_range<R>(
                    m: &Matrix<Self>,
                    min: f64,
                    max: f64,
                    rng: &mut R,
                ) -> Result<Matrix<Self>, MatrixError>
                where
                    R: Rng + ?Sized,
                {
                    let (lo, hi) = (min.ceil(), max.ceil());
                    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
                        return Err(MatrixError::EmptyRange {
                            min: min.to_string(),
                            max: max.to_string(),
                        });
                    }
                    let lo: i64 = float_bound(lo)?;
                    let hi: i64 = float_bound(hi)?;
                    m.randomize_int(lo, hi - 1, rng)
                }
            }
        )*
    };
}

impl_init_cell_float!(f32, f64);
impl_init_cell_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn float_bound<T: NumCast>(value: f64) -> Result<T, MatrixError> {
    <T as NumCast>::from(value).ok_or_else(|| MatrixError::Cast {
        value: value.to_string(),
    })
}
