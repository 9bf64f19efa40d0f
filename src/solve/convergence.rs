//! Empirical order of accuracy by successive step halving.

use bon::Builder;

use crate::{
    Float,
    core::{
        ode::{Exact, SecondDerivative},
        solout::DummySolOut,
    },
    error::Error,
    methods::{Euler, NMAX, Parameters, RK6, Stepper, Taylor2, integrate},
};

use super::compare::Method;

#[derive(Builder, Clone, Copy, Debug)]
/// Options for a convergence study over the fixed interval `[x_start, x_end]`.
pub struct ConvergenceOptions {
    /// Initial abscissa.
    #[builder(default = 0.0)]
    pub x_start: Float,
    /// Initial value y(x_start).
    #[builder(default = 0.5)]
    pub y_start: Float,
    /// End of the interval where the global error is measured.
    #[builder(default = 1.0)]
    pub x_end: Float,
    /// Step count of the coarsest run.
    #[builder(default = 10)]
    pub base_steps: usize,
    /// Number of runs; run `k` uses `base_steps * 2^k` steps.
    #[builder(default = 4)]
    pub runs: usize,
    /// Maximum number of steps allowed in the finest run.
    #[builder(default = NMAX)]
    pub nmax: usize,
}

/// Result of one run in a [`ConvergenceStudy`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvergenceRow {
    pub step_size: Float,
    pub steps: usize,
    /// Approximation at the end of the interval.
    pub y: Float,
    /// `|y - y_exact|` at the end of the interval.
    pub error: Float,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceStudy {
    pub method: &'static str,
    /// Order the method is designed for.
    pub order: usize,
    pub rows: Vec<ConvergenceRow>,
}

impl ConvergenceStudy {
    /// Observed order `log2(e_k / e_{k+1})` between consecutive runs.
    pub fn observed_orders(&self) -> Vec<Float> {
        self.rows
            .windows(2)
            .map(|w| (w[0].error / w[1].error).log2())
            .collect()
    }

    pub fn step_sizes(&self) -> Vec<Float> {
        self.rows.iter().map(|r| r.step_size).collect()
    }

    pub fn errors(&self) -> Vec<Float> {
        self.rows.iter().map(|r| r.error).collect()
    }
}

/// Integrate `f` with `method` at successively halved step sizes and
/// measure the global error against the exact solution.
pub fn convergence<F, M>(
    f: &F,
    method: &M,
    options: &ConvergenceOptions,
) -> Result<ConvergenceStudy, Vec<Error>>
where
    F: Exact,
    M: Stepper<F>,
{
    // --- Input Validation ---
    let mut errors = Vec::new();
    if !(options.x_end > options.x_start) {
        errors.push(Error::InvalidInterval(options.x_start, options.x_end));
    }
    if options.base_steps == 0 {
        errors.push(Error::StepCountMustBePositive(options.base_steps));
    }

    // Stops at the first run whose step count does not fit in usize
    let schedule: Option<Vec<usize>> = (0..options.runs)
        .map(|k| steps_for_run(options.base_steps, k))
        .collect();
    match &schedule {
        None => errors.push(Error::StepCountOverflow(options.base_steps, options.runs)),
        Some(schedule) => {
            if let Some(&finest) = schedule.last() {
                if finest > options.nmax {
                    errors.push(Error::StepCountExceedsNmax(finest, options.nmax));
                }
            }
        }
    }

    let schedule = match schedule {
        Some(schedule) if errors.is_empty() => schedule,
        _ => return Err(errors),
    };

    let mut rows = Vec::with_capacity(schedule.len());
    for steps in schedule {
        let params = Parameters::builder()
            .x_start(options.x_start)
            .y_start(options.y_start)
            .step_size((options.x_end - options.x_start) / steps as Float)
            .steps(steps)
            .nmax(options.nmax)
            .build();

        let sol = integrate(f, method, &params, None::<&mut DummySolOut>)?;
        // Measure at the abscissa actually reached by the accumulated steps
        let y_exact = f.exact(sol.x(), options.y_start, options.x_start);
        rows.push(ConvergenceRow {
            step_size: params.step_size,
            steps,
            y: sol.y(),
            error: (sol.y() - y_exact).abs(),
        });
    }

    Ok(ConvergenceStudy {
        method: method.name(),
        order: method.order(),
        rows,
    })
}

/// `base_steps * 2^k`, or `None` on overflow.
fn steps_for_run(base_steps: usize, k: usize) -> Option<usize> {
    let k = u32::try_from(k).ok()?;
    base_steps.checked_mul(1usize.checked_shl(k)?)
}

/// [`convergence`] for a method chosen at runtime.
pub fn convergence_for<F>(
    f: &F,
    method: Method,
    options: &ConvergenceOptions,
) -> Result<ConvergenceStudy, Vec<Error>>
where
    F: SecondDerivative + Exact,
{
    match method {
        Method::Euler => convergence(f, &Euler, options),
        Method::Taylor => convergence(f, &Taylor2, options),
        Method::RK6 => convergence(f, &RK6, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ExpGrowth;

    #[test]
    fn rejects_empty_interval() {
        let options = ConvergenceOptions::builder().x_end(0.0).base_steps(0).build();
        let errors = convergence(&ExpGrowth, &Euler, &options).unwrap_err();
        assert_eq!(
            errors,
            vec![Error::InvalidInterval(0.0, 0.0), Error::StepCountMustBePositive(0)]
        );
    }

    #[test]
    fn halves_step_size_each_run() {
        let options = ConvergenceOptions::builder().x_end(0.5).runs(3).build();
        let study = convergence(&ExpGrowth, &Euler, &options).unwrap();
        let steps: Vec<usize> = study.rows.iter().map(|r| r.steps).collect();
        assert_eq!(steps, vec![10, 20, 40]);
        assert_eq!(study.rows[2].step_size, 0.0125);
        assert_eq!(study.observed_orders().len(), 2);
        assert_eq!(study.method, "Euler");
    }

    #[test]
    fn shift_overflow_is_an_error() {
        let options = ConvergenceOptions::builder()
            .x_end(1e-30)
            .base_steps(1)
            .runs(65)
            .build();
        let errors = convergence(&ExpGrowth, &Euler, &options).unwrap_err();
        assert_eq!(errors, vec![Error::StepCountOverflow(1, 65)]);

        let options = ConvergenceOptions::builder().base_steps(usize::MAX).runs(2).build();
        let errors = convergence(&ExpGrowth, &Euler, &options).unwrap_err();
        assert_eq!(errors, vec![Error::StepCountOverflow(usize::MAX, 2)]);
    }

    #[test]
    fn huge_run_count_fails_fast() {
        let options = ConvergenceOptions::builder().runs(usize::MAX).build();
        let errors = convergence(&ExpGrowth, &Euler, &options).unwrap_err();
        assert_eq!(errors, vec![Error::StepCountOverflow(10, usize::MAX)]);
    }

    #[test]
    fn finest_run_limited_by_nmax() {
        let options = ConvergenceOptions::builder().base_steps(1).runs(20).build();
        let errors = convergence(&ExpGrowth, &Euler, &options).unwrap_err();
        assert_eq!(errors, vec![Error::StepCountExceedsNmax(1 << 19, NMAX)]);
    }

    #[test]
    fn no_runs_gives_empty_study() {
        let options = ConvergenceOptions::builder().runs(0).build();
        let study = convergence(&ExpGrowth, &Euler, &options).unwrap();
        assert!(study.rows.is_empty());
        assert!(study.observed_orders().is_empty());
    }

    #[test]
    fn runtime_method_selection() {
        let options = ConvergenceOptions::builder().x_end(0.5).runs(2).build();
        for method in Method::ALL {
            let study = convergence_for(&ExpGrowth, method, &options).unwrap();
            assert_eq!(study.method, method.name());
            assert_eq!(study.rows.len(), 2);
        }
    }
}
