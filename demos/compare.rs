//! # Example: Euler, Taylor and RK6 against the exact solution
//!
//! Equation:
//! dy/dx = 3 e^(2x) y
//!
//! Initial condition: y(0) = 0.5, 20 steps of h = 0.05.
//!

use ivp_fixed::prelude::*;

fn main() {
    let params = Parameters::default();

    match compare(&ExpGrowth, &params) {
        Ok(cmp) => {
            println!("{}", cmp);

            for (i, method) in Method::ALL.into_iter().enumerate() {
                println!("Table {}: {}", i + 1, method.name());
                println!("{}", cmp.method_table(method));
            }

            for method in Method::ALL {
                let sol = cmp.solution(method);
                println!(
                    "{:>6}: y({:.2}) = {:.6}, error = {:.3e}, nfev = {}",
                    method.name(),
                    sol.x(),
                    sol.y(),
                    cmp.final_error(method),
                    sol.nfev
                );
            }
        }
        Err(e) => eprintln!("Integration failed: {:?}", e),
    }

    println!();
    let options = ConvergenceOptions::builder().x_end(0.5).build();
    let studies = [
        convergence(&ExpGrowth, &Euler, &options),
        convergence(&ExpGrowth, &Taylor2, &options),
        convergence(&ExpGrowth, &RK6, &options),
    ];
    for study in studies {
        match study {
            Ok(s) => {
                println!("{} (order {})", s.method, s.order);
                for row in &s.rows {
                    println!("  h = {:.6}  error = {:.3e}", row.step_size, row.error);
                }
                println!("  observed orders: {:?}", s.observed_orders());
            }
            Err(e) => eprintln!("Convergence study failed: {:?}", e),
        }
    }
}
