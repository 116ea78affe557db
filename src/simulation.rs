//! Simulation entry point: sample the predator-prey system on a uniform grid.

use bon::Builder;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Float,
    error::{Error, InputError},
    lotka_volterra::{LotkaVolterra, Params},
    solve::{IVPOptions, solve_ivp},
};

/// Everything needed for one simulation run.
///
/// ```
/// use lotka_volterra::prelude::*;
///
/// let config = SimulationConfig::builder()
///     .params(Params::new(1.0, 0.5, 0.5, 0.2))
///     .t_max(20.0)
///     .n_points(201)
///     .build();
/// assert_eq!(config.prey0, 10.0);
/// let trajectory = simulate(&config).unwrap();
/// assert_eq!(trajectory.len(), 201);
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Model parameters. Default `α = 1.1, β = 0.4, γ = 0.4, δ = 0.1`.
    #[builder(default)]
    pub params: Params,
    /// Initial prey population.
    #[builder(default = 10.0)]
    pub prey0: Float,
    /// Initial predator population.
    #[builder(default = 5.0)]
    pub predator0: Float,
    /// End of the simulated interval `[0, t_max]`.
    #[builder(default = 100.0)]
    pub t_max: Float,
    /// Number of uniformly spaced output samples, both ends included.
    #[builder(default = 1000)]
    pub n_points: usize,
    /// Relative tolerance of the integrator.
    #[builder(default = 1e-6)]
    pub rtol: Float,
    /// Absolute tolerance of the integrator.
    #[builder(default = 1e-6)]
    pub atol: Float,
    /// Step budget of the integrator.
    #[builder(default = 100_000)]
    pub max_steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), InputError> {
        self.params.validate()?;
        for (name, value) in [
            ("prey0", self.prey0),
            ("predator0", self.predator0),
            ("t_max", self.t_max),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { name, value });
            }
        }
        if self.t_max < 0.0 {
            return Err(InputError::Negative {
                name: "t_max",
                value: self.t_max,
            });
        }
        if self.n_points == 0 {
            return Err(InputError::ZeroSamples);
        }
        Ok(())
    }
}

/// Integrator work for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stats {
    pub nfev: usize,
    pub nstep: usize,
    pub naccpt: usize,
    pub nrejct: usize,
}

/// Sampled populations; the three vectors have equal length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trajectory {
    pub t: Vec<Float>,
    pub prey: Vec<Float>,
    pub predator: Vec<Float>,
    pub stats: Stats,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// `(prey, predator)` pairs in time order, for phase portraits.
    pub fn phase(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.prey.iter().copied().zip(self.predator.iter().copied())
    }

    /// `(t, prey, predator)` rows in time order.
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float, Float)> + '_ {
        self.t.iter().copied().zip(self.phase()).map(|(t, (x, y))| (t, x, y))
    }
}

/// Run the predator-prey model over `[0, t_max]`, sampled at
/// `linspace(0, t_max, n_points)`.
pub fn simulate(config: &SimulationConfig) -> Result<Trajectory, Error> {
    config.validate()?;

    let t_eval = linspace(0.0, config.t_max, config.n_points);
    let model = LotkaVolterra::new(config.params);
    let options = IVPOptions::builder()
        .rtol(config.rtol)
        .atol(config.atol)
        .nmax(config.max_steps)
        .t_eval(t_eval)
        .build();

    debug!(
        "simulate: {:?}, x0 = {}, y0 = {}, t_max = {}, n_points = {}",
        config.params, config.prey0, config.predator0, config.t_max, config.n_points
    );

    let sol = solve_ivp(
        &model,
        0.0,
        config.t_max,
        &[config.prey0, config.predator0],
        options,
    )?;

    let stats = Stats {
        nfev: sol.nfev,
        nstep: sol.nstep,
        naccpt: sol.naccpt,
        nrejct: sol.nrejct,
    };
    let (prey, predator) = sol.y.iter().map(|state| (state[0], state[1])).unzip();

    Ok(Trajectory {
        t: sol.t,
        prey,
        predator,
        stats,
    })
}

/// `n` evenly spaced points from `start` to `end`, both included exactly.
///
/// `n == 1` yields `[start]` and `n == 0` an empty vector.
pub fn linspace(start: Float, end: Float, n: usize) -> Vec<Float> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Float;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + i as Float * step
                    }
                })
                .collect()
        }
    }
}
