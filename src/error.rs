//! Errors for integration methods

use crate::Float;

/// Validation errors returned by the integrator entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidStepSize(Float),
    NonFiniteInitialValue(Float, Float),
    NegativeStepCount(i64),
    InvalidInterval(Float, Float),
    StepCountMustBePositive(usize),
    NMaxMustBePositive(usize),
    StepCountExceedsNmax(usize, usize),
    StepCountOverflow(usize, usize),
    UnknownMethod(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepSize(v) => {
                write!(f, "step size must be finite and non-negative (got {})", v)
            }
            Error::NonFiniteInitialValue(x, y) => {
                write!(f, "initial value must be finite (got x = {}, y = {})", x, y)
            }
            Error::NegativeStepCount(v) => write!(f, "step count must be non-negative (got {})", v),
            Error::InvalidInterval(a, b) => {
                write!(f, "interval end must lie after its start (got [{}, {}])", a, b)
            }
            Error::StepCountMustBePositive(v) => write!(f, "step count must be positive (got {})", v),
            Error::NMaxMustBePositive(v) => write!(f, "nmax must be positive (got {})", v),
            Error::StepCountExceedsNmax(steps, nmax) => {
                write!(f, "step count {} exceeds nmax = {}", steps, nmax)
            }
            Error::StepCountOverflow(base, runs) => write!(
                f,
                "step count overflows usize (base_steps = {}, runs = {})",
                base, runs
            ),
            Error::UnknownMethod(v) => {
                write!(f, "unknown method '{}', expected one of Euler, Taylor, RK6", v)
            }
        }
    }
}

impl std::error::Error for Error {}

/// All messages of a failed validation on one line.
#[cfg_attr(not(feature = "python"), allow(dead_code))]
pub(crate) fn join(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_every_message() {
        let errors = vec![Error::NegativeStepCount(-2), Error::InvalidStepSize(-1.0)];
        assert_eq!(
            join(&errors),
            "step count must be non-negative (got -2); \
             step size must be finite and non-negative (got -1)"
        );
        assert_eq!(join(&[]), "");
    }
}
