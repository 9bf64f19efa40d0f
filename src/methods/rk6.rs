//! Six-stage explicit Runge-Kutta fixed-step integrator.

use crate::{
    Float,
    core::{ode::ODE, solout::DummySolOut, solution::Solution},
    error::Error,
    methods::{Parameters, Stepper, integrate},
};

/// Six-stage explicit Runge-Kutta method (Butcher's tableau with
/// Boole quadrature weights 7, 32, 12, 32, 7 / 90).
///
/// The tableau satisfies the order conditions up to fifth order, so the
/// global error behaves as O(h^5).
#[derive(Clone, Copy, Debug, Default)]
pub struct RK6;

impl<F: ODE + ?Sized> Stepper<F> for RK6 {
    fn name(&self) -> &'static str {
        "RK6"
    }

    fn order(&self) -> usize {
        5
    }

    fn nfev(&self) -> usize {
        6
    }

    fn step(&self, f: &F, x: Float, y: Float, h: Float) -> Float {
        // Stage computations
        let k1 = f.ode(x, y);
        let k2 = f.ode(x + C2 * h, y + h * (A21 * k1));
        let k3 = f.ode(x + C3 * h, y + h * (A31 * k1 + A32 * k2));
        let k4 = f.ode(x + C4 * h, y + h * (A42 * k2 + A43 * k3));
        let k5 = f.ode(x + C5 * h, y + h * (A51 * k1 + A54 * k4));
        let k6 = f.ode(
            x + C6 * h,
            y + h * (A61 * k1 + A62 * k2 + A63 * k3 + A64 * k4 + A65 * k5),
        );

        y + h * (B1 * k1 + B3 * k3 + B4 * k4 + B5 * k5 + B6 * k6)
    }
}

/// Integrate `f` with the six-stage Runge-Kutta method.
pub fn rk6<F: ODE + ?Sized>(f: &F, params: &Parameters) -> Result<Solution, Vec<Error>> {
    integrate(f, &RK6, params, None::<&mut DummySolOut>)
}

// Butcher tableau coefficients
const C2: Float = 1.0 / 4.0;
const C3: Float = 1.0 / 4.0;
const C4: Float = 1.0 / 2.0;
const C5: Float = 3.0 / 4.0;
const C6: Float = 1.0;

const A21: Float = 1.0 / 4.0;
const A31: Float = 1.0 / 8.0;
const A32: Float = 1.0 / 8.0;
const A42: Float = -1.0 / 2.0;
const A43: Float = 1.0;
const A51: Float = 3.0 / 16.0;
const A54: Float = 9.0 / 16.0;
const A61: Float = -3.0 / 7.0;
const A62: Float = 2.0 / 7.0;
const A63: Float = 12.0 / 7.0;
const A64: Float = -12.0 / 7.0;
const A65: Float = 8.0 / 7.0;

const B1: Float = 7.0 / 90.0;
const B3: Float = 32.0 / 90.0;
const B4: Float = 12.0 / 90.0;
const B5: Float = 32.0 / 90.0;
const B6: Float = 7.0 / 90.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tableau_is_consistent() {
        // Row sums equal the nodes
        let tol = 8.0 * Float::EPSILON;
        assert!((A21 - C2).abs() < tol);
        assert!((A31 + A32 - C3).abs() < tol);
        assert!((A42 + A43 - C4).abs() < tol);
        assert!((A51 + A54 - C5).abs() < tol);
        assert!((A61 + A62 + A63 + A64 + A65 - C6).abs() < tol);
        // Weights sum to one
        assert!((B1 + B3 + B4 + B5 + B6 - 1.0).abs() < tol);
    }

    struct Quartic;

    impl ODE for Quartic {
        fn ode(&self, x: Float, _y: Float) -> Float {
            5.0 * x.powi(4)
        }
    }

    #[test]
    fn integrates_quartic_exactly() {
        // Boole's rule is exact for polynomials up to degree five
        let params = Parameters::builder().y_start(0.0).step_size(0.5).steps(4).build();
        let sol = rk6(&Quartic, &params).unwrap();
        assert!((sol.y() - 32.0).abs() < 1e3 * Float::EPSILON);
        assert_eq!(sol.nfev, 24);
    }
}
