//! Fixed-step explicit integrators for the scalar initial value problem
//! `dy/dx = 3 e^(2x) y`, compared against its closed-form solution.
//!
//! Three methods of increasing order share one fixed-step loop:
//! forward Euler, a second-order Taylor series method and a six-stage
//! explicit Runge-Kutta method. [`solve::compare`] runs all three together
//! with the exact solution over the same grid.

mod error;

pub mod core;
pub mod methods;
pub mod prelude;
pub mod problem;
pub mod solve;

#[cfg(feature = "python")]
mod python;

pub use error::Error;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f128, f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
