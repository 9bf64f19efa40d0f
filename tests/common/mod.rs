#![allow(dead_code)]

use ivp_fixed::prelude::*;

/// Runs every method with `params`, in the order Euler, Taylor, RK6.
pub fn run_all(params: &Parameters) -> Vec<Solution> {
    vec![
        euler(&ExpGrowth, params).unwrap(),
        taylor2(&ExpGrowth, params).unwrap(),
        rk6(&ExpGrowth, params).unwrap(),
    ]
}

pub fn rel_err(a: Float, b: Float) -> Float {
    (a - b).abs() / b.abs()
}
