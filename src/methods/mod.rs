//! Fixed-step explicit methods (Euler, Taylor-2, RK6)

mod euler;
mod fixed;
mod parameters;
mod rk6;
mod taylor;

pub use euler::{Euler, euler};
pub use fixed::integrate;
pub use parameters::{NMAX, Parameters};
pub use rk6::{RK6, rk6};
pub use taylor::{Taylor2, taylor2};

use crate::Float;

/// Per-step update rule of a fixed-step method.
///
/// The shared loop in [`integrate`] owns the running `(x, y)`, records the
/// samples and advances `x`; a `Stepper` only maps `y(x)` to `y(x + h)`.
pub trait Stepper<F: ?Sized> {
    /// Short label used in tables and plots.
    fn name(&self) -> &'static str;

    /// Order of accuracy of the global error.
    fn order(&self) -> usize;

    /// Right-hand side evaluations per step.
    fn nfev(&self) -> usize;

    /// Advance the solution from `(x, y)` by one step of size `h`.
    fn step(&self, f: &F, x: Float, y: Float, h: Float) -> Float;
}
