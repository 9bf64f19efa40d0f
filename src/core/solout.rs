//! User defined callback hook executed after each step.

use crate::Float;

/// Return flags for [`SolOut`].
///
/// - `Continue`: proceed with integration as normal.
/// - `Interrupt`: stop integration and return control to the caller. The
///   trajectory collected so far is returned with
///   [`Status::Interrupted`](crate::core::status::Status::Interrupted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback hook executed once for the initial value and after every step.
///
/// The arguments are:
/// - `nstep`: number of steps taken so far (0 for the initial call),
/// - `xold`: the previous abscissa (equal to `x` on the initial call),
/// - `x`: the abscissa after the step,
/// - `y`: the integrator's current solution at `x`.
///
/// Typical uses are printing progress or stopping once the solution leaves
/// a region of interest.
///
/// # Example
///
/// ```
/// use ivp_fixed::prelude::*;
///
/// struct Printer;
/// impl SolOut for Printer {
///     fn solout(&mut self, nstep: usize, _xold: Float, x: Float, y: Float) -> ControlFlag {
///         println!("{nstep:>3}: x = {x:.2}, y = {y:.6}");
///         ControlFlag::Continue
///     }
/// }
/// ```
pub trait SolOut {
    fn solout(&mut self, nstep: usize, xold: Float, x: Float, y: Float) -> ControlFlag;
}

/// Closures can be used directly as callbacks.
impl<C> SolOut for C
where
    C: FnMut(usize, Float, Float, Float) -> ControlFlag,
{
    fn solout(&mut self, nstep: usize, xold: Float, x: Float, y: Float) -> ControlFlag {
        self(nstep, xold, x, y)
    }
}

/// Callback that never interrupts. Used when no callback is requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummySolOut;

impl SolOut for DummySolOut {
    fn solout(&mut self, _nstep: usize, _xold: Float, _x: Float, _y: Float) -> ControlFlag {
        ControlFlag::Continue
    }
}
