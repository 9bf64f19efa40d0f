//! High-level driver: run every method on one grid and compare.

pub mod compare;
pub mod convergence;
pub mod table;

pub use compare::{Comparison, Method, Row, compare};
pub use convergence::{
    ConvergenceOptions, ConvergenceRow, ConvergenceStudy, convergence, convergence_for,
};
pub use table::MethodTable;
