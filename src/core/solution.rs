//! A struct representing the outputted result of a fixed-step integrator.

use crate::{
    Float,
    core::{status::Status, trajectory::Trajectory},
};

/// The output of a fixed-step integrator
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Every sample from the initial value to the last step
    pub trajectory: Trajectory,
    /// The step size used
    pub h: Float,
    /// The number of right-hand side evaluations
    pub nfev: usize,
    /// The number of steps taken
    pub nstep: usize,
    /// The status of the integration process
    pub status: Status,
}

impl Solution {
    /// Final abscissa reached.
    pub fn x(&self) -> Float {
        self.trajectory.last().map_or(Float::NAN, |s| s.x)
    }

    /// Solution value at the final abscissa.
    pub fn y(&self) -> Float {
        self.trajectory.last().map_or(Float::NAN, |s| s.y)
    }
}
