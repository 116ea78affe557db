//! User-supplied ODE system.

use crate::Float;

/// Right-hand side of the system `y' = f(x, y)`.
///
/// The integrator calls `ode` several times per step, including at trial
/// states of steps that end up rejected, so implementations must not depend
/// on call order or keep state between calls. `x` is passed even when the
/// system is autonomous.
///
/// # Example
///
/// ```
/// use lotka_volterra::prelude::*;
///
/// struct Decay {
///     k: f64,
/// }
///
/// impl ODE for Decay {
///     fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
///         dydx[0] = -self.k * y[0];
///     }
/// }
///
/// let mut dydx = [0.0];
/// Decay { k: 2.0 }.ode(0.0, &[3.0], &mut dydx);
/// assert_eq!(dydx[0], -6.0);
/// ```
pub trait ODE {
    fn ode(&self, x: Float, y: &[Float], dydx: &mut [Float]);

    /// Fixed state dimension, if the system has one. Integrators reject an
    /// initial state of any other length before calling [`ODE::ode`].
    fn dimension(&self) -> Option<usize> {
        None
    }
}
