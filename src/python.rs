//! Python bindings: hand the aligned series to NumPy for plotting.

use numpy::PyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::{
    Float,
    error::{self, Error},
    methods::Parameters,
    problem::{self, ExpGrowth},
    solve::{self, ConvergenceOptions, Method},
};

fn value_error(errors: Vec<Error>) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(error::join(&errors))
}

/// Integrate dy/dx = 3 e^(2x) y with Euler, Taylor and RK6.
///
/// Returns a dict of 1D arrays ``x``, ``euler``, ``taylor``, ``rk6`` and
/// ``exact``, all of length ``steps + 1`` and aligned by index.
#[pyfunction]
#[pyo3(name = "compare", signature = (x_start=0.0, y_start=0.5, step_size=0.05, steps=20))]
fn compare_py<'py>(
    py: Python<'py>,
    x_start: Float,
    y_start: Float,
    step_size: Float,
    steps: i64,
) -> PyResult<Bound<'py, PyDict>> {
    let params =
        Parameters::with_signed_steps(x_start, y_start, step_size, steps).map_err(value_error)?;
    let cmp = solve::compare(&ExpGrowth, &params).map_err(value_error)?;

    let dict = PyDict::new(py);
    for (key, column) in cmp.columns() {
        dict.set_item(key, PyArray1::from_vec(py, column))?;
    }
    Ok(dict)
}

/// Exact solution through ``(x_start, y_start)`` evaluated at ``x``.
#[pyfunction]
#[pyo3(name = "exact", signature = (x, y_start=0.5, x_start=0.0))]
fn exact_py(x: Float, y_start: Float, x_start: Float) -> Float {
    problem::exact(x, y_start, x_start)
}

/// Global error at ``x_end`` for successively halved step sizes.
///
/// Returns a dict with arrays ``step_size``, ``error`` and ``order`` (the
/// observed order between consecutive runs). Raises ``ValueError`` when the
/// finest run would need more than ``nmax`` steps.
#[pyfunction]
#[pyo3(
    name = "convergence",
    signature = (method, x_start=0.0, y_start=0.5, x_end=1.0, base_steps=10, runs=4)
)]
fn convergence_py<'py>(
    py: Python<'py>,
    method: &str,
    x_start: Float,
    y_start: Float,
    x_end: Float,
    base_steps: usize,
    runs: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let method: Method = method.parse().map_err(|e| value_error(vec![e]))?;
    let options = ConvergenceOptions::builder()
        .x_start(x_start)
        .y_start(y_start)
        .x_end(x_end)
        .base_steps(base_steps)
        .runs(runs)
        .build();

    let study = solve::convergence_for(&ExpGrowth, method, &options).map_err(value_error)?;

    let dict = PyDict::new(py);
    dict.set_item("step_size", PyArray1::from_vec(py, study.step_sizes()))?;
    dict.set_item("error", PyArray1::from_vec(py, study.errors()))?;
    dict.set_item("order", PyArray1::from_vec(py, study.observed_orders()))?;
    Ok(dict)
}

#[pymodule]
fn ivp_fixed(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compare_py, m)?)?;
    m.add_function(wrap_pyfunction!(exact_py, m)?)?;
    m.add_function(wrap_pyfunction!(convergence_py, m)?)?;

    let doc = "Fixed-step Euler, Taylor and RK6 integrators for dy/dx = 3 e^(2x) y.\n\n\
               `compare` returns the aligned series as NumPy arrays ready for\n\
               plotting against the exact solution.";
    m.setattr("__doc__", doc)?;

    Ok(())
}
