//! Second-order Taylor series fixed-step integrator.

use crate::{
    Float,
    core::{ode::SecondDerivative, solout::DummySolOut, solution::Solution},
    error::Error,
    methods::{Parameters, Stepper, integrate},
};

/// Taylor series method truncated after the second derivative.
///
/// ```text
/// y(x+h) = y + h * y' + h^2 / 2 * y''
/// ```
///
/// `y'` comes from [`ODE::ode`](crate::core::ode::ODE::ode) and `y''` from
/// the equation's [`SecondDerivative`], so the method itself works for any
/// equation that can supply both.
#[derive(Clone, Copy, Debug, Default)]
pub struct Taylor2;

impl<F: SecondDerivative + ?Sized> Stepper<F> for Taylor2 {
    fn name(&self) -> &'static str {
        "Taylor"
    }

    fn order(&self) -> usize {
        2
    }

    fn nfev(&self) -> usize {
        1
    }

    fn step(&self, f: &F, x: Float, y: Float, h: Float) -> Float {
        let dydx = f.ode(x, y);
        let d2ydx2 = f.d2ydx2(x, y);
        y + h * dydx + (h * h / 2.0) * d2ydx2
    }
}

/// Integrate `f` with the second-order Taylor series method.
pub fn taylor2<F: SecondDerivative + ?Sized>(
    f: &F,
    params: &Parameters,
) -> Result<Solution, Vec<Error>> {
    integrate(f, &Taylor2, params, None::<&mut DummySolOut>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ode::ODE;

    /// y' = 2x, y'' = 2: the truncated series is exact.
    struct Parabola;

    impl ODE for Parabola {
        fn ode(&self, x: Float, _y: Float) -> Float {
            2.0 * x
        }
    }

    impl SecondDerivative for Parabola {
        fn d2ydx2(&self, _x: Float, _y: Float) -> Float {
            2.0
        }
    }

    #[test]
    fn exact_for_quadratics() {
        let params = Parameters::builder().y_start(0.0).step_size(0.25).steps(8).build();
        let sol = taylor2(&Parabola, &params).unwrap();
        for s in &sol.trajectory {
            assert!((s.y - s.x * s.x).abs() < 1e3 * Float::EPSILON);
        }
        assert_eq!(sol.nfev, 8);
    }
}
