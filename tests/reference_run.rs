// Reference values and error bounds below are double precision.
#![cfg(feature = "f64")]

use ivp_fixed::prelude::*;

mod common;
use common::rel_err;

#[test]
fn exact_value_at_end_of_reference_run() {
    // 0.5 * exp(1.5 * (e^2 - 1))
    let y = exact(1.0, 0.5, 0.0);
    assert!(rel_err(y, 7262.19) < 1e-5);
}

#[test]
fn reference_run_endpoints() {
    let cmp = compare(&ExpGrowth, &Parameters::default()).unwrap();
    assert_eq!(cmp.len(), 21);

    let y_exact = cmp.exact[20].y;
    let y_euler = cmp.euler.trajectory[20].y;
    let y_taylor = cmp.taylor.trajectory[20].y;
    let y_rk6 = cmp.rk6.trajectory[20].y;

    // Growing convex solution: low order methods fall behind
    assert!(y_euler < y_taylor);
    assert!(y_taylor < y_rk6);
    assert!(y_rk6 < y_exact);

    assert!(rel_err(y_euler, 681.677339) < 1e-6);
    assert!(rel_err(y_taylor, 4055.797120) < 1e-6);
    assert!(rel_err(y_rk6, 7260.443999) < 1e-6);
    assert!(rel_err(y_rk6, y_exact) < 5e-4);
}

#[test]
fn errors_grow_along_reference_run() {
    let cmp = compare(&ExpGrowth, &Parameters::default()).unwrap();
    for method in Method::ALL {
        let errors = cmp.errors(method);
        assert_eq!(errors[0], 0.0);
        assert!(errors.windows(2).all(|w| w[1] >= w[0]), "{}", method.name());
        assert_eq!(*errors.last().unwrap(), cmp.final_error(method));
    }
    assert!(cmp.final_error(Method::RK6) < cmp.final_error(Method::Taylor));
    assert!(cmp.final_error(Method::Taylor) < cmp.final_error(Method::Euler));
}

#[test]
fn function_evaluation_counts() {
    let cmp = compare(&ExpGrowth, &Parameters::default()).unwrap();
    assert_eq!(cmp.euler.nfev, 20);
    assert_eq!(cmp.taylor.nfev, 20);
    assert_eq!(cmp.rk6.nfev, 120);
    for method in Method::ALL {
        assert_eq!(cmp.solution(method).nstep, 20);
        assert_eq!(cmp.solution(method).status, Status::Success);
    }
}

#[test]
fn rows_line_up_with_trajectories() {
    let cmp = compare(&ExpGrowth, &Parameters::default()).unwrap();
    let rows: Vec<_> = cmp.rows().collect();
    assert_eq!(rows.len(), 21);
    assert_eq!(rows[0].x, 0.0);
    assert_eq!(rows[0].euler, 0.5);
    assert_eq!(rows[7].taylor, cmp.taylor.trajectory[7].y);
    assert_eq!(rows[20].exact, cmp.exact[20].y);
}
