//! The model problem `dy/dx = 3 e^(2x) y` and its closed-form solution.

use crate::{
    Float,
    core::ode::{Exact, ODE, SecondDerivative},
};

/// Super-exponential growth, `dy/dx = 3 e^(2x) y`.
///
/// Separating variables gives
/// `y(x) = y0 * exp(3/2 * (e^(2x) - e^(2x0)))`.
/// Large `x` overflows to infinity; this is not trapped.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpGrowth;

impl ODE for ExpGrowth {
    fn ode(&self, x: Float, y: Float) -> Float {
        3.0 * (2.0 * x).exp() * y
    }
}

impl SecondDerivative for ExpGrowth {
    /// `y'' = 6 e^(2x) y + 9 e^(4x) y`
    fn d2ydx2(&self, x: Float, y: Float) -> Float {
        6.0 * (2.0 * x).exp() * y + 9.0 * (4.0 * x).exp() * y
    }
}

impl Exact for ExpGrowth {
    fn exact(&self, x: Float, y_start: Float, x_start: Float) -> Float {
        exact(x, y_start, x_start)
    }
}

/// Exact solution of [`ExpGrowth`] through `(x_start, y_start)`.
pub fn exact(x: Float, y_start: Float, x_start: Float) -> Float {
    y_start * (1.5 * ((2.0 * x).exp() - (2.0 * x_start).exp())).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_satisfies_initial_condition() {
        assert_eq!(exact(0.3, 2.0, 0.3), 2.0);
    }

    #[test]
    fn exact_at_one() {
        // 0.5 * exp(1.5 * (e^2 - 1))
        let y = exact(1.0, 0.5, 0.0);
        assert!((y - 7262.191834521742).abs() / y < 1e-5);
    }

    #[cfg(feature = "f64")]
    #[test]
    fn exact_satisfies_ode() {
        let f = ExpGrowth;
        let d = 1e-6;
        for &x in &[0.0, 0.25, 0.5, 0.75] {
            let y = exact(x, 0.5, 0.0);
            let slope = (exact(x + d, 0.5, 0.0) - exact(x - d, 0.5, 0.0)) / (2.0 * d);
            assert!((slope - f.ode(x, y)).abs() / f.ode(x, y) < 1e-8);
        }
    }

    #[cfg(feature = "f64")]
    #[test]
    fn second_derivative_matches_finite_difference() {
        let f = ExpGrowth;
        let d = 1e-4;
        for &x in &[0.0, 0.4, 0.8] {
            let y = |x: Float| exact(x, 0.5, 0.0);
            let fd = (y(x + d) - 2.0 * y(x) + y(x - d)) / (d * d);
            let an = f.d2ydx2(x, y(x));
            assert!((fd - an).abs() / an < 1e-6);
        }
    }
}
