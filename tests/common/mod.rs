#![allow(dead_code)]

use std::cell::Cell;

use lotka_volterra::prelude::*;

/// Simple harmonic oscillator y0'' = -y0 with solution (cos t, -sin t).
pub struct SHO;

impl ODE for SHO {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
        dydx[0] = y[1];
        dydx[1] = -y[0];
    }
}

/// Wraps a system and counts right-hand side evaluations.
pub struct Counting<F> {
    pub inner: F,
    pub calls: Cell<usize>,
}

impl<F> Counting<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }
}

impl<F: ODE> ODE for Counting<F> {
    fn ode(&self, x: f64, y: &[f64], dydx: &mut [f64]) {
        self.calls.set(self.calls.get() + 1);
        self.inner.ode(x, y, dydx);
    }

    fn dimension(&self) -> Option<usize> {
        self.inner.dimension()
    }
}

pub fn default_opts_dense() -> IVPOptions {
    IVPOptions::builder()
        .rtol(1e-9)
        .atol(1e-9)
        .dense_output(true)
        .build()
}

pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
