//! Lotka–Volterra predator-prey dynamics.
//!
//! ```text
//! dx/dt =  α·x − β·x·y
//! dy/dt = −γ·y + δ·x·y
//! ```
//!
//! `x` is the prey population and `y` the predator population, both treated
//! as continuous quantities.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Float, core::ode::ODE, error::InputError};

/// Model parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Params {
    /// Prey growth rate without predators.
    pub alpha: Float,
    /// Predation rate.
    pub beta: Float,
    /// Predator death rate without prey.
    pub gamma: Float,
    /// Conversion efficiency of consumed prey into predators.
    pub delta: Float,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            alpha: 1.1,
            beta: 0.4,
            gamma: 0.4,
            delta: 0.1,
        }
    }
}

impl Params {
    pub fn new(alpha: Float, beta: Float, gamma: Float, delta: Float) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            delta,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
            ("delta", self.delta),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { name, value });
            }
        }
        Ok(())
    }

    /// Non-trivial fixed point `(γ/δ, α/β)` where both derivatives vanish.
    pub fn equilibrium(&self) -> (Float, Float) {
        (self.gamma / self.delta, self.alpha / self.beta)
    }

    /// First integral `V(x, y) = δ·x − γ·ln x + β·y − α·ln y`.
    ///
    /// Constant along every exact trajectory with positive populations, so
    /// its drift measures the integration error. Undefined (NaN or infinite)
    /// for non-positive populations.
    pub fn conserved_quantity(&self, x: Float, y: Float) -> Float {
        self.delta * x - self.gamma * x.ln() + self.beta * y - self.alpha * y.ln()
    }
}

/// Right-hand side of the predator-prey system.
///
/// The state is `[prey, predator]`; integrators reject states of any other
/// length up front.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LotkaVolterra {
    pub params: Params,
}

impl LotkaVolterra {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Derivative `(dx/dt, dy/dt)` at `state = (prey, predator)`.
    pub fn derivative(&self, state: [Float; 2]) -> [Float; 2] {
        let mut dydt = [0.0; 2];
        self.ode(0.0, &state, &mut dydt);
        dydt
    }
}

impl From<Params> for LotkaVolterra {
    fn from(params: Params) -> Self {
        Self::new(params)
    }
}

impl ODE for LotkaVolterra {
    fn ode(&self, _t: Float, y: &[Float], dydt: &mut [Float]) {
        let Params {
            alpha,
            beta,
            gamma,
            delta,
        } = self.params;
        let (prey, predator) = (y[0], y[1]);
        dydt[0] = alpha * prey - beta * prey * predator;
        dydt[1] = -gamma * predator + delta * prey * predator;
    }

    fn dimension(&self) -> Option<usize> {
        Some(2)
    }
}
