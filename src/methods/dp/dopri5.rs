//! DOPRI5 - Dormand–Prince 5(4) explicit Runge–Kutta integrator
//!
//! Reference
//! - E. Hairer, S. P. Nørsett, and G. Wanner, "Solving Ordinary Differential
//!   Equations I. Nonstiff Problems", 2nd ed., Springer (1993).
//! - J. R. Dormand and P. J. Prince, "A family of embedded Runge-Kutta
//!   formulae", J. Comp. Appl. Math. 6 (1980).

use log::trace;

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        ode::ODE,
        result::{Evals, IntegrationResult, Steps},
        solout::{ControlFlag, SolOut},
        status::Status,
    },
    error::{Error, InputError, SettingsError},
    methods::{
        hinit::hinit,
        settings::{Settings, Tolerance},
    },
};

/// Dormand–Prince DOPRI5: explicit embedded Runge–Kutta 5(4) solver with
/// adaptive step-size control and optional dense output.
///
/// Integrates `y' = f(x, y)` from `x` to `xend`, advancing the provided state
/// buffer `y` in-place. The 5th-order solution is propagated and the embedded
/// 4th-order solution provides the local error estimate.
///
/// # Arguments
///
/// ## Defining the Problem
/// - `f`: Right‑hand side implementing `ODE`.
/// - `x`: Initial independent variable value.
/// - `xend`: Final independent variable value. May be smaller than `x`.
/// - `y`: Mutable slice containing the initial state; on return contains the
///   state at the furthest point reached.
/// - `rtol`, `atol`: Relative and absolute tolerances (see [`Tolerance`]).
///
/// ## Output Control
/// - `solout`: Optional callback invoked once at `x` and after every accepted
///   step.
/// - `dense_output`: If `true`, dense‑output coefficients are computed every
///   accepted step and an interpolant is handed to `solout`.
///
/// ## Settings
/// See [`Settings`]; `None` fields select:
///
/// - `uround` `2.3e-16`
/// - `safety_factor` `0.9`
/// - `scale_min` `0.2`, `scale_max` `10.0`
/// - `beta` `0.0`
/// - `hmax` `|xend - x|`, `hmin` `1e-12 * |xend - x|`
/// - `h0` heuristic from [`hinit`]
/// - `nmax` `100_000`
///
/// # Returns
/// `IntegrationResult` whose `status` tells whether `xend` was reached. Invalid
/// settings, tolerances or a state length that contradicts
/// [`ODE::dimension`] are reported as [`Error::InvalidInput`] before the first
/// evaluation of `f`.
pub fn dopri5<F, S>(
    f: &F,
    mut x: Float,
    xend: Float,
    y: &mut [Float],
    rtol: &Tolerance,
    atol: &Tolerance,
    mut solout: Option<&mut S>,
    dense_output: bool,
    settings: &Settings,
) -> Result<IntegrationResult, Error>
where
    F: ODE + ?Sized,
    S: SolOut,
{
    let n = y.len();
    if n == 0 {
        return Err(InputError::EmptyState.into());
    }
    if let Some(expected) = f.dimension().filter(|&d| d != n) {
        return Err(InputError::DimensionMismatch {
            name: "y0",
            len: n,
            expected,
        }
        .into());
    }
    rtol.validate("rtol", n)?;
    atol.validate("atol", n)?;

    // --- Settings validation ---
    let mut errors: Vec<SettingsError> = Vec::new();

    // Rounding Unit
    let uround = match settings.uround {
        Some(u) => {
            if !(u > 1e-35 && u < 1.0) {
                errors.push(SettingsError::URoundOutOfRange(u));
            }
            u
        }
        None => 2.3e-16,
    };

    // Safety Factor
    let safety_factor = match settings.safety_factor {
        Some(s) => {
            if !(s > 1e-4 && s < 1.0) {
                errors.push(SettingsError::SafetyFactorOutOfRange(s));
            }
            s
        }
        None => 0.9,
    };

    // Parameters for step size selection, stored as inverse factors
    let facc1 = match settings.scale_min {
        Some(s) => {
            if !(s > 0.0 && s <= 1.0) {
                errors.push(SettingsError::ScaleMinOutOfRange(s));
            }
            1.0 / s
        }
        None => 5.0,
    };
    let facc2 = match settings.scale_max {
        Some(s) => {
            if !(s >= 1.0 && s.is_finite()) {
                errors.push(SettingsError::ScaleMaxOutOfRange(s));
            }
            1.0 / s
        }
        None => 0.1,
    };

    // Beta for step control stabilization
    let beta = match settings.beta {
        Some(b) => {
            if !(0.0..=0.2).contains(&b) {
                errors.push(SettingsError::BetaOutOfRange(b));
            }
            b
        }
        None => 0.0,
    };

    let span = (xend - x).abs();

    // Step size bounds
    let hmax = match settings.hmax {
        Some(h) => {
            if !(h > 0.0 && h.is_finite()) {
                errors.push(SettingsError::InvalidStepSize(h));
            }
            h.abs()
        }
        None => span,
    };
    let hmin = match settings.hmin {
        Some(h) => {
            if !(h >= 0.0 && h.is_finite()) {
                errors.push(SettingsError::InvalidStepSize(h));
            }
            h.abs()
        }
        None => 1e-12 * span,
    };
    if let Some(h0) = settings.h0 {
        if !(h0 != 0.0 && h0.is_finite()) {
            errors.push(SettingsError::InvalidStepSize(h0));
        }
    }

    // Maximum Number of Steps
    let nmax = match settings.nmax {
        Some(0) => {
            errors.push(SettingsError::NMaxMustBePositive(0));
            0
        }
        Some(n) => n,
        None => 100_000,
    };

    if !errors.is_empty() {
        return Err(InputError::Settings(errors).into());
    }

    // --- Declarations ---
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut k5 = vec![0.0; n];
    let mut k6 = vec![0.0; n];
    let mut y1 = vec![0.0; n];
    let mut cont = vec![0.0; n * 5];
    let mut facold: Float = 1e-4;
    let mut last = false;
    let mut reject = false;
    let mut fac11;
    let mut fac;
    let mut hnew;
    let mut xph;
    let mut evals = Evals::new();
    let mut steps = Steps::new();
    let mut xold = x;
    let expo1 = 0.2 - beta * 0.75;
    let posneg: Float = if xend < x { -1.0 } else { 1.0 };

    // Initial SolOut call
    if let Some(solout) = solout.as_mut() {
        if solout.solout::<DenseOutput<'_>>(xold, x, y, None) == ControlFlag::Interrupt {
            return Ok(IntegrationResult::new(x, 0.0, Status::Interrupted, evals, steps));
        }
    }

    // Nothing to integrate over
    if span == 0.0 {
        return Ok(IntegrationResult::new(x, 0.0, Status::Success, evals, steps));
    }

    // --- Initializations ---
    f.ode(x, y, &mut k1);
    evals.ode += 1;
    let mut h = match settings.h0 {
        Some(h0) => h0.abs().min(hmax) * posneg,
        None => {
            evals.ode += 1;
            hinit(
                f, x, y, posneg, &k1, &mut k2, &mut y1, 5, hmax, atol, rtol,
            )
        }
    };

    // --- Main integration loop ---
    let status = loop {
        // Check for maximum number of steps
        if steps.total >= nmax {
            break Status::NeedLargerNMax;
        }

        // Check for step size underflow
        if h.abs() < hmin || 0.1 * h.abs() <= x.abs() * uround {
            break Status::StepSizeTooSmall;
        }

        // Adjust last step to land on xend
        if (x + 1.01 * h - xend) * posneg > 0.0 {
            h = xend - x;
            last = true;
        }

        steps.total += 1;

        // Stage 2
        for i in 0..n {
            y1[i] = y[i] + h * A21 * k1[i];
        }
        f.ode(x + C2 * h, &y1, &mut k2);

        // Stage 3
        for i in 0..n {
            y1[i] = y[i] + h * (A31 * k1[i] + A32 * k2[i]);
        }
        f.ode(x + C3 * h, &y1, &mut k3);

        // Stage 4
        for i in 0..n {
            y1[i] = y[i] + h * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]);
        }
        f.ode(x + C4 * h, &y1, &mut k4);

        // Stage 5
        for i in 0..n {
            y1[i] = y[i] + h * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]);
        }
        f.ode(x + C5 * h, &y1, &mut k5);

        // Stage 6
        for i in 0..n {
            y1[i] =
                y[i] + h * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]);
        }
        xph = if last { xend } else { x + h };
        f.ode(xph, &y1, &mut k6);

        // Final stage, 5th-order solution; k2 becomes k7 (FSAL)
        for i in 0..n {
            y1[i] =
                y[i] + h * (A71 * k1[i] + A73 * k3[i] + A74 * k4[i] + A75 * k5[i] + A76 * k6[i]);
        }
        f.ode(xph, &y1, &mut k2);
        evals.ode += 6;

        // Prepare last segment of dense output before k4 is overwritten
        if dense_output {
            for i in 0..n {
                cont[4 * n + i] = h
                    * (D1 * k1[i] + D3 * k3[i] + D4 * k4[i] + D5 * k5[i] + D6 * k6[i] + D7 * k2[i]);
            }
        }

        // Difference of the embedded solutions, stored in k4
        for i in 0..n {
            k4[i] =
                (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k2[i]) * h;
        }

        // Error estimation
        let mut err: Float = 0.0;
        for i in 0..n {
            let sk = atol[i] + rtol[i] * y[i].abs().max(y1[i].abs());
            err += (k4[i] / sk) * (k4[i] / sk);
        }
        err = (err / n as Float).sqrt();

        // Computation of hnew
        fac11 = err.powf(expo1);
        // Lund-Stabilization
        fac = fac11 / facold.powf(beta);
        // We require scale_min <= hnew/h <= scale_max
        fac = facc2.max(facc1.min(fac / safety_factor));
        hnew = h / fac;

        if err <= 1.0 {
            // Step accepted
            facold = err.max(1.0e-4);
            steps.accepted += 1;

            // Prepare dense output
            if dense_output {
                for i in 0..n {
                    let ydiff = y1[i] - y[i];
                    let bspl = h * k1[i] - ydiff;
                    cont[i] = y[i];
                    cont[n + i] = ydiff;
                    cont[2 * n + i] = bspl;
                    cont[3 * n + i] = -h * k2[i] + ydiff - bspl;
                }
            }

            // Update state variables
            k1.copy_from_slice(&k2);
            y.copy_from_slice(&y1);
            xold = x;
            x = xph;

            if let Some(solout) = solout.as_mut() {
                let interpolator = DenseOutput::new(&cont, xold, h);
                let interpolator = dense_output.then_some(&interpolator);
                if solout.solout(xold, x, y, interpolator) == ControlFlag::Interrupt {
                    break Status::Interrupted;
                }
            }

            // Normal exit
            if last {
                h = hnew;
                break Status::Success;
            }

            // Check for step size limits
            if hnew.abs() > hmax {
                hnew = posneg * hmax;
            }

            // Prevent oscillations due to previous rejected step
            if reject {
                hnew = posneg * hnew.abs().min(h.abs());
                reject = false;
            }
        } else {
            // Step rejected
            hnew = h / facc1.min(fac11 / safety_factor);
            trace!("dopri5: rejected step at x = {x}, h = {h}, err = {err}, hnew = {hnew}");
            reject = true;
            steps.rejected += 1;
            last = false;
        }
        h = hnew;
    };

    Ok(IntegrationResult::new(x, h, status, evals, steps))
}

/// Continuous output function for DOPRI5.
///
/// `cont` holds the five coefficient vectors of one accepted step starting at
/// `xold` with size `h`; `yi` receives the solution at `xi`.
pub fn contdp5(xi: Float, yi: &mut [Float], cont: &[Float], xold: Float, h: Float) {
    let n = cont.len() / 5;
    let theta = (xi - xold) / h;
    let theta1 = 1.0 - theta;
    for i in 0..n {
        yi[i] = cont[i]
            + theta
                * (cont[n + i]
                    + theta1
                        * (cont[2 * n + i] + theta * (cont[3 * n + i] + theta1 * cont[4 * n + i])));
    }
}

/// Dense output interpolator for the last accepted DOPRI5 step
struct DenseOutput<'a> {
    cont: &'a [Float],
    xold: Float,
    h: Float,
}

impl<'a> DenseOutput<'a> {
    fn new(cont: &'a [Float], xold: Float, h: Float) -> Self {
        Self { cont, xold, h }
    }
}

impl Interpolate for DenseOutput<'_> {
    fn interpolate(&self, xi: Float, yi: &mut [Float]) {
        contdp5(xi, yi, self.cont, self.xold, self.h);
    }

    fn get_cont(&self) -> (Vec<Float>, Float, Float) {
        (self.cont.to_vec(), self.xold, self.h)
    }
}

// DOPRI5 Butcher tableau coefficients
const C2: Float = 0.2;
const C3: Float = 0.3;
const C4: Float = 0.8;
const C5: Float = 8.0 / 9.0;

const A21: Float = 0.2;
const A31: Float = 3.0 / 40.0;
const A32: Float = 9.0 / 40.0;
const A41: Float = 44.0 / 45.0;
const A42: Float = -56.0 / 15.0;
const A43: Float = 32.0 / 9.0;
const A51: Float = 19372.0 / 6561.0;
const A52: Float = -25360.0 / 2187.0;
const A53: Float = 64448.0 / 6561.0;
const A54: Float = -212.0 / 729.0;
const A61: Float = 9017.0 / 3168.0;
const A62: Float = -355.0 / 33.0;
const A63: Float = 46732.0 / 5247.0;
const A64: Float = 49.0 / 176.0;
const A65: Float = -5103.0 / 18656.0;
const A71: Float = 35.0 / 384.0;
const A73: Float = 500.0 / 1113.0;
const A74: Float = 125.0 / 192.0;
const A75: Float = -2187.0 / 6784.0;
const A76: Float = 11.0 / 84.0;

// Error weights: 5th-order minus embedded 4th-order
const E1: Float = 71.0 / 57600.0;
const E3: Float = -71.0 / 16695.0;
const E4: Float = 71.0 / 1920.0;
const E5: Float = -17253.0 / 339200.0;
const E6: Float = 22.0 / 525.0;
const E7: Float = -1.0 / 40.0;

// Dense output
const D1: Float = -12715105075.0 / 11282082432.0;
const D3: Float = 87487479700.0 / 32700410799.0;
const D4: Float = -10690763975.0 / 1880347072.0;
const D5: Float = 701980252875.0 / 199316789632.0;
const D6: Float = -1453857185.0 / 822651844.0;
const D7: Float = 69997945.0 / 29380423.0;
