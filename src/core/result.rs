//! Data structure for holding the result of integrations

use crate::{Float, core::status::Status};

/// Counters for right-hand side evaluations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evals {
    pub ode: usize,
}

impl Evals {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Step counters. `total` includes rejected steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steps {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl Steps {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The output of a numerical integrator
#[derive(Clone, Debug)]
pub struct IntegrationResult {
    /// Furthest value of the independent variable reached
    pub x: Float,
    /// Step size proposed for the next step
    pub h: Float,
    /// Why the integration stopped
    pub status: Status,
    pub evals: Evals,
    pub steps: Steps,
}

impl IntegrationResult {
    pub fn new(x: Float, h: Float, status: Status, evals: Evals, steps: Steps) -> Self {
        Self {
            x,
            h,
            status,
            evals,
            steps,
        }
    }
}
