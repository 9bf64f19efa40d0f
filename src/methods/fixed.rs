//! Shared fixed-step integration loop.

use crate::{
    core::{
        solout::{ControlFlag, SolOut},
        solution::Solution,
        status::Status,
        trajectory::{Sample, Trajectory},
    },
    error::Error,
    methods::{Parameters, Stepper},
};

/// Largest number of samples reserved before the loop starts.
const MAX_RESERVE: usize = 1 << 16;

/// Integrate `f` from `params.x_start` with `params.steps` steps of the
/// given method.
///
/// The abscissa is advanced by repeated addition `x += h`, so every method
/// run with the same parameters produces bit-identical x values.
///
/// An optional `solout` callback is invoked with the initial value and after
/// every step; returning [`ControlFlag::Interrupt`] ends the run early.
pub fn integrate<F, M, S>(
    f: &F,
    method: &M,
    params: &Parameters,
    mut solout: Option<&mut S>,
) -> Result<Solution, Vec<Error>>
where
    F: ?Sized,
    M: Stepper<F>,
    S: SolOut,
{
    // --- Input Validation ---
    params.validate()?;

    // --- Declarations ---
    let h = params.step_size;
    let mut x = params.x_start;
    let mut y = params.y_start;
    let mut trajectory = Trajectory::with_capacity(params.steps.saturating_add(1).min(MAX_RESERVE));
    let mut nfev = 0;
    let mut nstep = 0;
    let mut status = Status::Success;

    // --- Initializations ---
    trajectory.push(Sample::new(x, y));
    if let Some(s) = solout.as_deref_mut() {
        if s.solout(nstep, x, x, y) == ControlFlag::Interrupt {
            status = Status::Interrupted;
        }
    }

    // --- Main integration loop ---
    while status == Status::Success && nstep < params.steps {
        let xold = x;

        y = method.step(f, x, y, h);
        x += h;

        nfev += method.nfev();
        nstep += 1;
        trajectory.push(Sample::new(x, y));

        // Optional Callback function
        match solout
            .as_deref_mut()
            .map_or(ControlFlag::Continue, |s| s.solout(nstep, xold, x, y))
        {
            ControlFlag::Interrupt => status = Status::Interrupted,
            ControlFlag::Continue => {}
        }
    }

    Ok(Solution {
        trajectory,
        h,
        nfev,
        nstep,
        status,
    })
}
