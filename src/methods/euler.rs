//! Forward Euler fixed-step integrator.

use crate::{
    Float,
    core::{ode::ODE, solout::DummySolOut, solution::Solution},
    error::Error,
    methods::{Parameters, Stepper, integrate},
};

/// Forward (explicit) Euler method, first order.
///
/// ```text
/// y(x+h) = y(x) + h * f(x, y(x))
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Euler;

impl<F: ODE + ?Sized> Stepper<F> for Euler {
    fn name(&self) -> &'static str {
        "Euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn nfev(&self) -> usize {
        1
    }

    fn step(&self, f: &F, x: Float, y: Float, h: Float) -> Float {
        y + h * f.ode(x, y)
    }
}

/// Integrate `f` with the forward Euler method.
pub fn euler<F: ODE + ?Sized>(f: &F, params: &Parameters) -> Result<Solution, Vec<Error>> {
    integrate(f, &Euler, params, None::<&mut DummySolOut>)
}
