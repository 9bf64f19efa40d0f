//! User-supplied scalar ODE.

use crate::Float;

/// User-supplied scalar ODE.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(x, y). The integrators call `ode` with the current
/// abscissa `x` and state `y` and use the returned slope.
///
/// # Example
///
/// ```
/// use ivp_fixed::prelude::*;
///
/// struct Decay;
/// impl ODE for Decay {
///     fn ode(&self, _x: Float, y: Float) -> Float {
///         -y
///     }
/// }
///
/// assert_eq!(Decay.ode(0.0, 2.0), -2.0);
/// ```
pub trait ODE {
    fn ode(&self, x: Float, y: Float) -> Float;
}

/// Second derivative of the solution, y'' = d/dx f(x, y(x)).
///
/// The Taylor series method needs y'' in closed form. It is found by
/// differentiating f along the solution curve, i.e.
/// `y'' = ∂f/∂x + ∂f/∂y · f`, and is specific to each equation.
pub trait SecondDerivative: ODE {
    fn d2ydx2(&self, x: Float, y: Float) -> Float;
}

/// Closed-form solution through the initial point `(x_start, y_start)`.
pub trait Exact {
    fn exact(&self, x: Float, y_start: Float, x_start: Float) -> Float;
}
