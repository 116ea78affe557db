//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use lotka_volterra::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Interpolate`, `SolOut`, `ControlFlag`, `Status`.
//! - High-level API: `solve_ivp`, `IVPOptions`, `IVPSolution`.
//! - Errors: `Error`, `InputError`, `Failure`.
//! - Model and simulation: `Params`, `LotkaVolterra`, `SimulationConfig`,
//!   `Trajectory`, `simulate`, `linspace`.

pub use crate::core::{
    interpolate::Interpolate,
    ode::ODE,
    solout::{ControlFlag, SolOut},
    status::Status,
};
pub use crate::error::{Error, Failure, InputError};
pub use crate::lotka_volterra::{LotkaVolterra, Params};
pub use crate::methods::settings::Tolerance;
pub use crate::simulation::{SimulationConfig, Trajectory, linspace, simulate};
pub use crate::solve::{IVPOptions, IVPSolution, solve_ivp};
