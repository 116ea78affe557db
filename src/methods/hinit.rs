//! Compute an initial step size guess

use crate::{Float, core::ode::ODE, methods::settings::Tolerance};

/// Compute an initial step size guess for an explicit method of order `iord`.
///
/// Takes one explicit Euler step of size `h0 = 0.01 * ||y0|| / ||f0||` to
/// estimate the second derivative, then picks `h` such that
/// `h^iord * max(||f0||, ||f''||) = 0.01`. Norms are RMS norms weighted by
/// `atol + rtol * |y|`. The result carries the sign of `posneg` and never
/// exceeds `hmax`. Costs one evaluation of `f`.
pub fn hinit<F>(
    f: &F,
    x: Float,
    y: &[Float],
    posneg: Float,
    f0: &[Float],
    f1: &mut [Float],
    y1: &mut [Float],
    iord: usize,
    hmax: Float,
    atol: &Tolerance,
    rtol: &Tolerance,
) -> Float
where
    F: ODE + ?Sized,
{
    let n = y.len();
    let mut dnf: Float = 0.0;
    let mut dny: Float = 0.0;

    for i in 0..n {
        let sk = atol[i] + rtol[i] * y[i].abs();
        dnf += (f0[i] / sk) * (f0[i] / sk);
        dny += (y[i] / sk) * (y[i] / sk);
    }
    dnf = (dnf / n as Float).sqrt();
    dny = (dny / n as Float).sqrt();

    let mut h: Float = if dnf <= 1e-5 || dny <= 1e-5 {
        1.0e-6
    } else {
        0.01 * dny / dnf
    };
    h = h.min(hmax.abs()) * posneg.signum();

    // Explicit Euler step: y1 = y + h * f0
    for i in 0..n {
        y1[i] = y[i] + h * f0[i];
    }
    f.ode(x + h, y1, f1);

    // Estimate second derivative
    let mut der2: Float = 0.0;
    for i in 0..n {
        let sk = atol[i] + rtol[i] * y[i].abs();
        let df = (f1[i] - f0[i]) / sk;
        der2 += df * df;
    }
    der2 = (der2 / n as Float).sqrt() / h.abs();

    let der12 = der2.max(dnf);
    let h1 = if der12 <= 1.0e-15 {
        (1.0e-6 as Float).max(h.abs() * 1.0e-3)
    } else {
        (0.01 / der12).powf(1.0 / iord as Float)
    };

    (100.0 * h.abs()).min(h1).min(hmax.abs()) * posneg.signum()
}
