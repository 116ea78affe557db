//! Interpolation trait for dense output inside an accepted step.

use crate::Float;

/// Continuous extension of the solution over the last accepted step.
pub trait Interpolate {
    /// Interpolate the solution at the given abscissa `xi`, writing into `yi`.
    fn interpolate(&self, xi: Float, yi: &mut [Float]);

    /// Snapshot of the step's dense coefficients as `(cont, xold, h)`.
    fn get_cont(&self) -> (Vec<Float>, Float, Float);
}
