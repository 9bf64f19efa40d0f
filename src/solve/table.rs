//! Plain-text tables of a [`Comparison`].

use std::fmt;

use super::compare::{Comparison, Method};

const RULE_WIDTH: usize = 60;

/// All methods side by side with the exact solution.
impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} | {:>10} | {:>10} | {:>10} | {:>10}",
            "x", "Euler", "Taylor", "RK6", "Exact"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for row in self.rows() {
            writeln!(
                f,
                "{:6.2} | {:10.6} | {:10.6} | {:10.6} | {:10.6}",
                row.x, row.euler, row.taylor, row.rk6, row.exact
            )?;
        }
        Ok(())
    }
}

/// Table of a single method, see [`Comparison::method_table`].
pub struct MethodTable<'a> {
    comparison: &'a Comparison,
    method: Method,
}

impl Comparison {
    /// Two-column `x | y` table for one method.
    pub fn method_table(&self, method: Method) -> MethodTable<'_> {
        MethodTable {
            comparison: self,
            method,
        }
    }
}

impl fmt::Display for MethodTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.method.name();
        writeln!(f, "{:>6} | {:>10}", "x", name)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for s in self.comparison.trajectory(self.method) {
            writeln!(f, "{:6.2} | {:10.6}", s.x, s.y)?;
        }
        Ok(())
    }
}
