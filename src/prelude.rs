//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use ivp_fixed::prelude::*;
//! ```
//!
//! Re-exports included:
//! - The `Float` precision alias.
//! - Core traits and types: `ODE`, `SecondDerivative`, `Exact`, `SolOut`,
//!   `ControlFlag`, `Solution`, `Status`, `Sample`, `Trajectory`.
//! - Methods: `Euler`, `Taylor2`, `RK6`, their entry points and `integrate`.
//! - Driver: `compare`, `Comparison`, `Method` and the convergence study.
//! - The model problem `ExpGrowth` and its `exact` solution.

pub use crate::Float;
pub use crate::core::{
    ode::{Exact, ODE, SecondDerivative},
    solout::{ControlFlag, DummySolOut, SolOut},
    solution::Solution,
    status::Status,
    trajectory::{Sample, Trajectory},
};
pub use crate::error::Error;
pub use crate::methods::{
    Euler, NMAX, Parameters, RK6, Stepper, Taylor2, euler, integrate, rk6, taylor2,
};
pub use crate::problem::{ExpGrowth, exact};
pub use crate::solve::{
    Comparison, ConvergenceOptions, ConvergenceStudy, Method, compare, convergence,
};
