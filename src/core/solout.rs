//! User defined callback hook executed after each accepted step.

use crate::{Float, core::interpolate::Interpolate};

/// Return flags for [`SolOut`].
///
/// - `Continue`: proceed with integration as normal.
/// - `Interrupt`: stop integration and return control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback hook executed after each accepted step.
///
/// The callback is invoked once before the main loop with `xold == x` and no
/// interpolator, then after every accepted step with:
/// - `xold`: left end of the accepted step,
/// - `x`: right end of the accepted step,
/// - `y`: the solution at `x`,
/// - `interpolator`: the continuous extension over `[xold, x]`, present when
///   the integrator was asked for dense output.
///
/// # Example
///
/// ```
/// use lotka_volterra::prelude::*;
///
/// /// Records the state at equidistant points.
/// struct Printer {
///     xout: f64,
///     dx: f64,
///     rows: Vec<(f64, Vec<f64>)>,
/// }
///
/// impl SolOut for Printer {
///     fn solout<I: Interpolate>(
///         &mut self,
///         _xold: f64,
///         x: f64,
///         y: &[f64],
///         interpolator: Option<&I>,
///     ) -> ControlFlag {
///         let Some(interpolator) = interpolator else {
///             self.rows.push((x, y.to_vec()));
///             self.xout = x + self.dx;
///             return ControlFlag::Continue;
///         };
///         while self.xout <= x {
///             let mut yi = vec![0.0; y.len()];
///             interpolator.interpolate(self.xout, &mut yi);
///             self.rows.push((self.xout, yi));
///             self.xout += self.dx;
///         }
///         ControlFlag::Continue
///     }
/// }
/// ```
pub trait SolOut {
    fn solout<I: Interpolate>(
        &mut self,
        xold: Float,
        x: Float,
        y: &[Float],
        interpolator: Option<&I>,
    ) -> ControlFlag;
}
