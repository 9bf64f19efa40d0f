//! Driver that runs all methods with the same parameters.

use crate::{
    Float,
    core::{
        ode::{Exact, SecondDerivative},
        solution::Solution,
        trajectory::Trajectory,
    },
    error::Error,
    methods::{Parameters, euler, rk6, taylor2},
};

/// Method selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Forward Euler, first order
    Euler,
    /// Taylor series truncated after y'', second order
    Taylor,
    /// Six-stage explicit Runge-Kutta
    RK6,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Euler, Method::Taylor, Method::RK6];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Euler => "Euler",
            Method::Taylor => "Taylor",
            Method::RK6 => "RK6",
        }
    }
}

impl std::str::FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "taylor" | "taylor2" => Ok(Method::Taylor),
            "rk6" => Ok(Method::RK6),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

/// Four trajectories aligned by index: three approximations and the exact
/// solution, all on the same abscissae.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub params: Parameters,
    pub euler: Solution,
    pub taylor: Solution,
    pub rk6: Solution,
    pub exact: Trajectory,
}

/// One row of a [`Comparison`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row {
    pub x: Float,
    pub euler: Float,
    pub taylor: Float,
    pub rk6: Float,
    pub exact: Float,
}

/// Run Euler, Taylor and RK6 with `params` and tabulate the exact solution
/// on the resulting grid.
///
/// Every method advances x by the same repeated addition, so the four
/// trajectories share bit-identical abscissae.
pub fn compare<F>(f: &F, params: &Parameters) -> Result<Comparison, Vec<Error>>
where
    F: SecondDerivative + Exact,
{
    let euler = euler(f, params)?;
    let taylor = taylor2(f, params)?;
    let rk6 = rk6(f, params)?;
    let exact = euler
        .trajectory
        .resample(|x| f.exact(x, params.y_start, params.x_start));

    Ok(Comparison {
        params: *params,
        euler,
        taylor,
        rk6,
        exact,
    })
}

impl Comparison {
    pub fn trajectory(&self, method: Method) -> &Trajectory {
        match method {
            Method::Euler => &self.euler.trajectory,
            Method::Taylor => &self.taylor.trajectory,
            Method::RK6 => &self.rk6.trajectory,
        }
    }

    pub fn solution(&self, method: Method) -> &Solution {
        match method {
            Method::Euler => &self.euler,
            Method::Taylor => &self.taylor,
            Method::RK6 => &self.rk6,
        }
    }

    /// Number of rows, `steps + 1`.
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Iterate over rows `(x, euler, taylor, rk6, exact)`.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.exact
            .iter()
            .zip(self.euler.trajectory.iter())
            .zip(self.taylor.trajectory.iter())
            .zip(self.rk6.trajectory.iter())
            .map(|(((e, eu), ta), rk)| Row {
                x: e.x,
                euler: eu.y,
                taylor: ta.y,
                rk6: rk.y,
                exact: e.y,
            })
    }

    /// Absolute error `|y_method - y_exact|` at every sample.
    pub fn errors(&self, method: Method) -> Vec<Float> {
        self.trajectory(method)
            .iter()
            .zip(self.exact.iter())
            .map(|(a, e)| (a.y - e.y).abs())
            .collect()
    }

    /// Named columns `x`, `euler`, `taylor`, `rk6`, `exact`, each of length
    /// `steps + 1`, ready to hand to a plotting library.
    pub fn columns(&self) -> Vec<(&'static str, Vec<Float>)> {
        vec![
            ("x", self.exact.x()),
            ("euler", self.euler.trajectory.y()),
            ("taylor", self.taylor.trajectory.y()),
            ("rk6", self.rk6.trajectory.y()),
            ("exact", self.exact.y()),
        ]
    }

    /// Absolute error at the last sample.
    pub fn final_error(&self, method: Method) -> Float {
        (self.solution(method).y() - self.exact.last().map_or(Float::NAN, |s| s.y)).abs()
    }
}
