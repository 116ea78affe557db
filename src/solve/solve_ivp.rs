//! SciPy-like solve_ivp entry point implementation

use log::{debug, warn};

use crate::{
    Float,
    core::{ode::ODE, status::Status},
    error::{Error, Failure, InputError},
    methods::dp::dopri5,
};

use super::{
    cont::ContinuousOutput, options::IVPOptions, solout::DefaultSolOut, solution::IVPSolution,
};

/// Solve an initial value problem with the Dormand–Prince 5(4) method.
///
/// Integrates `y' = f(x, y)` from `x0` to `xend` starting at `y0`. Inputs are
/// validated before the first evaluation of `f`. On success the returned
/// solution holds either the samples at `options.t_eval` (in the same order)
/// or every accepted step endpoint. With `t_eval` and without `dense_output`,
/// stepping stops at the first accepted step past the last requested time. A run that stops before `xend` is
/// reported as [`Error::IntegrationFailure`] with the furthest time reached;
/// no partial trajectory is returned.
///
/// ```
/// use lotka_volterra::prelude::*;
///
/// struct Decay;
///
/// impl ODE for Decay {
///     fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
///         dydx[0] = -y[0];
///     }
/// }
///
/// let options = IVPOptions::builder()
///     .rtol(1e-9)
///     .atol(1e-12)
///     .t_eval(vec![0.0, 1.0, 2.0])
///     .build();
/// let sol = solve_ivp(&Decay, 0.0, 2.0, &[1.0], options).unwrap();
/// assert_eq!(sol.t, vec![0.0, 1.0, 2.0]);
/// assert!((sol.y[2][0] - (-2.0f64).exp()).abs() < 1e-8);
/// ```
pub fn solve_ivp<F>(
    f: &F,
    x0: Float,
    xend: Float,
    y0: &[Float],
    options: IVPOptions,
) -> Result<IVPSolution, Error>
where
    F: ODE + ?Sized,
{
    validate_problem(x0, xend, y0)?;
    if let Some(te) = options.t_eval.as_deref() {
        validate_t_eval(te, x0, xend)?;
    }

    let settings = options.settings();
    let posneg: Float = if xend < x0 { -1.0 } else { 1.0 };
    let dense = options.dense_output || options.t_eval.is_some();
    let mut default_solout =
        DefaultSolOut::new(options.t_eval.as_deref(), posneg, options.dense_output);
    let mut y = y0.to_vec();

    debug!(
        "solve_ivp: n = {}, span = [{x0}, {xend}], rtol = {:?}, atol = {:?}, samples = {:?}",
        y.len(),
        options.rtol,
        options.atol,
        options.t_eval.as_ref().map(Vec::len),
    );

    let result = dopri5(
        f,
        x0,
        xend,
        &mut y,
        &options.rtol,
        &options.atol,
        Some(&mut default_solout),
        dense,
        &settings,
    )?;

    // The default output only interrupts once every requested time is filled.
    let reason = match result.status {
        Status::Success | Status::Interrupted => None,
        Status::NeedLargerNMax => Some(Failure::TooManySteps {
            nmax: options.nmax,
        }),
        Status::StepSizeTooSmall => Some(Failure::StepSizeTooSmall { h: result.h }),
    };
    if let Some(reason) = reason {
        warn!(
            "solve_ivp: stopped at t = {} after {} steps: {reason}",
            result.x, result.steps.total
        );
        return Err(Error::IntegrationFailure {
            t: result.x,
            reason,
        });
    }

    debug!(
        "solve_ivp: done, nfev = {}, nstep = {}, accepted = {}, rejected = {}",
        result.evals.ode, result.steps.total, result.steps.accepted, result.steps.rejected
    );

    let (t, ys, segments) = default_solout.into_data();
    if let Some(te) = options.t_eval.as_deref() {
        debug_assert_eq!(t.len(), te.len());
    }

    Ok(IVPSolution {
        t,
        y: ys,
        nfev: result.evals.ode,
        nstep: result.steps.total,
        naccpt: result.steps.accepted,
        nrejct: result.steps.rejected,
        dense_output: segments.map(|segs| ContinuousOutput::new(segs, y)),
    })
}

fn validate_problem(x0: Float, xend: Float, y0: &[Float]) -> Result<(), InputError> {
    if !x0.is_finite() {
        return Err(InputError::NonFinite {
            name: "x0",
            value: x0,
        });
    }
    if !xend.is_finite() {
        return Err(InputError::NonFinite {
            name: "xend",
            value: xend,
        });
    }
    if y0.is_empty() {
        return Err(InputError::EmptyState);
    }
    if let Some(&value) = y0.iter().find(|v| !v.is_finite()) {
        return Err(InputError::NonFinite { name: "y0", value });
    }
    Ok(())
}

/// Requested times must be finite, lie within the span and be monotonic in
/// the direction of integration. Repeated times are allowed.
fn validate_t_eval(te: &[Float], x0: Float, xend: Float) -> Result<(), InputError> {
    if te.is_empty() {
        return Err(InputError::EmptyTEval);
    }
    let (lo, hi) = if xend < x0 { (xend, x0) } else { (x0, xend) };
    let dir: Float = if xend < x0 { -1.0 } else { 1.0 };
    for (index, &t) in te.iter().enumerate() {
        if !t.is_finite() {
            return Err(InputError::NonFinite {
                name: "t_eval",
                value: t,
            });
        }
        if t < lo || t > hi {
            return Err(InputError::TEvalOutOfSpan { index, t, lo, hi });
        }
        if index > 0 && (t - te[index - 1]) * dir < 0.0 {
            return Err(InputError::NonMonotonicTEval { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_eval_checks() {
        assert_eq!(validate_t_eval(&[], 0.0, 1.0), Err(InputError::EmptyTEval));
        assert!(validate_t_eval(&[0.0, 0.5, 0.5, 1.0], 0.0, 1.0).is_ok());
        assert!(validate_t_eval(&[1.0, 0.2, 0.0], 1.0, 0.0).is_ok());
        assert_eq!(
            validate_t_eval(&[0.0, 0.6, 0.4], 0.0, 1.0),
            Err(InputError::NonMonotonicTEval { index: 2 })
        );
        assert_eq!(
            validate_t_eval(&[0.0, 1.5], 0.0, 1.0),
            Err(InputError::TEvalOutOfSpan {
                index: 1,
                t: 1.5,
                lo: 0.0,
                hi: 1.0
            })
        );
        assert!(matches!(
            validate_t_eval(&[Float::NAN], 0.0, 1.0),
            Err(InputError::NonFinite { name: "t_eval", .. })
        ));
    }

    #[test]
    fn problem_checks() {
        assert_eq!(validate_problem(0.0, 1.0, &[]), Err(InputError::EmptyState));
        assert!(matches!(
            validate_problem(0.0, Float::INFINITY, &[1.0]),
            Err(InputError::NonFinite { name: "xend", .. })
        ));
        assert!(matches!(
            validate_problem(0.0, 1.0, &[1.0, Float::NAN]),
            Err(InputError::NonFinite { name: "y0", .. })
        ));
    }
}
