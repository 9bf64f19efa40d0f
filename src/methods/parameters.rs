//! Integration parameters for fixed-step runs

use bon::Builder;

use crate::{Float, error::Error};

/// Default upper bound on the number of steps of one run.
pub const NMAX: usize = 100_000;

#[derive(Builder, Clone, Copy, Debug, PartialEq)]
/// Initial condition, step size and step count of one fixed-step run.
///
/// The defaults reproduce the reference run: `y(0) = 0.5` integrated with
/// 20 steps of `h = 0.05` up to `x = 1`.
///
/// ```
/// use ivp_fixed::prelude::*;
///
/// let params = Parameters::builder().step_size(0.025).steps(40).build();
/// assert_eq!(params.y_start, 0.5);
/// assert_eq!(params.x_end(), 1.0);
/// ```
pub struct Parameters {
    /// Initial abscissa.
    #[builder(default = 0.0)]
    pub x_start: Float,
    /// Initial value y(x_start).
    #[builder(default = 0.5)]
    pub y_start: Float,
    /// Fixed step size. Zero gives a constant trajectory.
    #[builder(default = 0.05)]
    pub step_size: Float,
    /// Number of steps. The trajectory holds `steps + 1` samples.
    #[builder(default = 20)]
    pub steps: usize,
    /// Maximum number of allowed steps. Default is 100,000.
    #[builder(default = NMAX)]
    pub nmax: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Parameters {
    /// Build parameters from a signed step count, as received from callers
    /// that cannot express `usize`.
    pub fn with_signed_steps(
        x_start: Float,
        y_start: Float,
        step_size: Float,
        steps: i64,
    ) -> Result<Self, Vec<Error>> {
        let mut errors = Vec::new();
        if steps < 0 {
            errors.push(Error::NegativeStepCount(steps));
        }

        let params = Self::builder()
            .x_start(x_start)
            .y_start(y_start)
            .step_size(step_size)
            .steps(usize::try_from(steps.max(0)).unwrap_or(usize::MAX))
            .build();
        if let Err(mut e) = params.validate() {
            errors.append(&mut e);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(params)
    }

    /// Check every parameter and report all problems at once.
    pub fn validate(&self) -> Result<(), Vec<Error>> {
        let mut errors = Vec::new();

        if !self.x_start.is_finite() || !self.y_start.is_finite() {
            errors.push(Error::NonFiniteInitialValue(self.x_start, self.y_start));
        }

        // h = 0 is allowed and leaves the solution at its initial value
        if !self.step_size.is_finite() || self.step_size < 0.0 {
            errors.push(Error::InvalidStepSize(self.step_size));
        }

        if self.nmax == 0 {
            errors.push(Error::NMaxMustBePositive(self.nmax));
        }
        if self.steps > self.nmax {
            errors.push(Error::StepCountExceedsNmax(self.steps, self.nmax));
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(())
    }

    /// Nominal end of the interval, `x_start + steps * step_size`.
    pub fn x_end(&self) -> Float {
        self.x_start + self.steps as Float * self.step_size
    }
}
