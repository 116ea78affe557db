//! Settings for numerical integrators

use std::ops::Index;

use bon::Builder;

use crate::{Float, error::InputError};

/// Settings for the numerical integrators.
///
/// Every field is optional; `None` selects the method's default.
#[derive(Builder, Clone, Debug, Default)]
pub struct Settings {
    /// The rounding unit, typically machine epsilon. Default `2.3e-16`.
    pub uround: Option<Float>,
    /// Safety factor in step-size prediction. Default `0.9`.
    pub safety_factor: Option<Float>,
    /// Lower bound on `hnew / hold`. Default `0.2`.
    pub scale_min: Option<Float>,
    /// Upper bound on `hnew / hold`. Default `10.0`.
    pub scale_max: Option<Float>,
    /// Beta factor for Lund-stabilized step size control. Positive values
    /// (<= 0.04) make the step size control more stable. Default `0.0`,
    /// which reduces to the plain `err^(-1/5)` controller.
    pub beta: Option<Float>,
    /// Maximal step size. Default `|xend - x|`.
    pub hmax: Option<Float>,
    /// Minimal step size. Default `1e-12 * |xend - x|`.
    pub hmin: Option<Float>,
    /// Initial step size. `None` will result in an initial guess
    /// provided by [`hinit`](crate::methods::hinit::hinit).
    pub h0: Option<Float>,
    /// Maximum number of allowed steps. Default `100_000`.
    pub nmax: Option<usize>,
}

/// Tolerance enum to allow scalar or vector tolerances.
///
/// Using the [`Into`] trait for easy conversion from `Float`, `[Float; N]`,
/// `&[Float]` or `Vec<Float>`, so callers can pass either form.
#[derive(Clone, Debug, PartialEq)]
pub enum Tolerance {
    Scalar(Float),
    Vector(Vec<Float>),
}

impl Tolerance {
    /// Check that every entry is positive and finite and, for vectors, that
    /// the length matches the state dimension `n`.
    pub fn validate(&self, name: &'static str, n: usize) -> Result<(), InputError> {
        let values: &[Float] = match self {
            Tolerance::Scalar(v) => std::slice::from_ref(v),
            Tolerance::Vector(vs) => {
                if vs.len() != n {
                    return Err(InputError::DimensionMismatch {
                        name,
                        len: vs.len(),
                        expected: n,
                    });
                }
                vs
            }
        };
        for &value in values {
            if !value.is_finite() {
                return Err(InputError::NonFinite { name, value });
            }
            if value <= 0.0 {
                return Err(InputError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}

impl From<Float> for Tolerance {
    fn from(val: Float) -> Self {
        Tolerance::Scalar(val)
    }
}

impl From<&[Float]> for Tolerance {
    fn from(val: &[Float]) -> Self {
        Tolerance::Vector(val.to_vec())
    }
}

impl<const N: usize> From<[Float; N]> for Tolerance {
    fn from(val: [Float; N]) -> Self {
        Tolerance::Vector(val.to_vec())
    }
}

impl From<Vec<Float>> for Tolerance {
    fn from(val: Vec<Float>) -> Self {
        Tolerance::Vector(val)
    }
}

impl Index<usize> for Tolerance {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Tolerance::Scalar(v) => v,
            Tolerance::Vector(vs) => &vs[index],
        }
    }
}
