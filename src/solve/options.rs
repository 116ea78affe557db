//! Options for solve_ivp

use bon::Builder;

use crate::{
    Float,
    methods::settings::{Settings, Tolerance},
};

/// Options for [`solve_ivp`](crate::solve::solve_ivp), similar to SciPy.
///
/// ```
/// use lotka_volterra::prelude::*;
///
/// let options = IVPOptions::builder()
///     .rtol(1e-8)
///     .atol([1e-10, 1e-10])
///     .t_eval(vec![0.0, 0.5, 1.0])
///     .build();
/// assert_eq!(options.nmax, 100_000);
/// assert!(!options.dense_output);
/// ```
#[derive(Builder, Clone, Debug)]
pub struct IVPOptions {
    /// Relative tolerance for error estimation.
    #[builder(default = Tolerance::Scalar(1e-6), into)]
    pub rtol: Tolerance,
    /// Absolute tolerance for error estimation.
    #[builder(default = Tolerance::Scalar(1e-6), into)]
    pub atol: Tolerance,
    /// Maximum number of allowed steps.
    #[builder(default = 100_000)]
    pub nmax: usize,
    /// Points where the solution is requested, monotonic in the direction of
    /// integration. The default SolOut samples them with dense output. When
    /// absent, every accepted step endpoint is recorded instead.
    pub t_eval: Option<Vec<Float>>,
    /// Keep the dense output of every step so the solution can be evaluated
    /// anywhere with [`IVPSolution::sol`](crate::solve::IVPSolution::sol).
    #[builder(default)]
    pub dense_output: bool,
    /// Initial step suggestion (maps to `settings.h0`).
    pub first_step: Option<Float>,
    /// Maximum step size (maps to `settings.hmax`).
    pub max_step: Option<Float>,
    /// Minimum step size (maps to `settings.hmin`).
    pub min_step: Option<Float>,
    /// Safety factor in step-size prediction (maps to `settings.safety_factor`).
    pub safety_factor: Option<Float>,
    /// Lower bound on the step shrink ratio (maps to `settings.scale_min`).
    pub scale_min: Option<Float>,
    /// Upper bound on the step growth ratio (maps to `settings.scale_max`).
    pub scale_max: Option<Float>,
    /// Lund stabilization exponent (maps to `settings.beta`).
    pub beta: Option<Float>,
}

impl Default for IVPOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl IVPOptions {
    pub(crate) fn settings(&self) -> Settings {
        Settings::builder()
            .nmax(self.nmax)
            .maybe_h0(self.first_step)
            .maybe_hmax(self.max_step)
            .maybe_hmin(self.min_step)
            .maybe_safety_factor(self.safety_factor)
            .maybe_scale_min(self.scale_min)
            .maybe_scale_max(self.scale_max)
            .maybe_beta(self.beta)
            .build()
    }
}
