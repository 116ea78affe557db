//! Lotka–Volterra predator-prey simulation on an adaptive Dormand–Prince 5(4)
//! integrator with dense output.
//!
//! The integrator ([`solve_ivp`](solve::solve_ivp), [`dopri5`](methods::dp::dopri5))
//! works for any system implementing [`ODE`](crate::core::ode::ODE); the
//! [`lotka_volterra`] module supplies the predator-prey right-hand side and
//! [`simulation`] the uniformly sampled run.
//!
//! ```
//! use lotka_volterra::prelude::*;
//!
//! let trajectory = simulate(&SimulationConfig::default()).unwrap();
//! assert_eq!(trajectory.t.first(), Some(&0.0));
//! assert_eq!(trajectory.t.last(), Some(&100.0));
//! assert_eq!(trajectory.prey.len(), trajectory.predator.len());
//! ```

pub mod core;
pub mod error;
pub mod lotka_volterra;
pub mod methods;
pub mod prelude;
pub mod simulation;
pub mod solve;

pub use error::Error;

/// Floating point type used throughout the crate.
pub type Float = f64;
