//! Errors for integration and simulation entry points

use thiserror::Error;

use crate::Float;

/// Errors returned by [`solve_ivp`](crate::solve::solve_ivp) and
/// [`simulate`](crate::simulation::simulate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The request was rejected before any right-hand side evaluation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Adaptive stepping stopped before reaching the end of the span.
    #[error("integration failed at t = {t}: {reason}")]
    IntegrationFailure { t: Float, reason: Failure },
}

/// Reasons a request is rejected up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("t_eval must be non-empty when provided")]
    EmptyTEval,

    #[error("sample count must be positive")]
    ZeroSamples,

    #[error("t_eval must be monotonic in the integration direction (index {index})")]
    NonMonotonicTEval { index: usize },

    #[error("t_eval[{index}] = {t} lies outside [{lo}, {hi}]")]
    TEvalOutOfSpan {
        index: usize,
        t: Float,
        lo: Float,
        hi: Float,
    },

    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: Float },

    #[error("{name} must be non-negative (got {value})")]
    Negative { name: &'static str, value: Float },

    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: Float },

    #[error("{name} has length {len}, expected {expected}")]
    DimensionMismatch {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("initial state must be non-empty")]
    EmptyState,

    #[error("invalid solver settings: {}", join(.0))]
    Settings(Vec<SettingsError>),
}

/// Validation errors for step-control settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("nmax must be positive (got {0})")]
    NMaxMustBePositive(usize),

    #[error("uround must be in (1e-35, 1.0) (got {0})")]
    URoundOutOfRange(Float),

    #[error("safety_factor must be in (1e-4, 1.0) (got {0})")]
    SafetyFactorOutOfRange(Float),

    #[error("beta must be in [0, 0.2] (got {0})")]
    BetaOutOfRange(Float),

    #[error("scale_min must be in (0, 1] (got {0})")]
    ScaleMinOutOfRange(Float),

    #[error("scale_max must be >= 1 (got {0})")]
    ScaleMaxOutOfRange(Float),

    #[error("step size must be positive and finite (got {0})")]
    InvalidStepSize(Float),
}

/// Why adaptive stepping gave up.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Failure {
    #[error("step size {h} fell below the minimum allowed step")]
    StepSizeTooSmall { h: Float },

    #[error("maximum number of steps ({nmax}) exceeded")]
    TooManySteps { nmax: usize },
}

fn join(errors: &[SettingsError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
