//! Example: Dense output interpolation on a predator-prey orbit

use lotka_volterra::prelude::*;

fn main() {
    let params = Params::default();
    let model = LotkaVolterra::new(params);
    let x0 = 0.0;
    let xend = 20.0;
    let y0 = [10.0, 5.0];

    let options = IVPOptions::builder()
        .rtol(1e-9)
        .atol(1e-9)
        .dense_output(true)
        .build();

    let sol = solve_ivp(&model, x0, xend, &y0, options).expect("solve_ivp failed");
    println!(
        "Steps: {} (accepted {} / rejected {})",
        sol.nstep, sol.naccpt, sol.nrejct
    );

    // Use continuous solution via sol() to evaluate on a fine grid
    let v0 = params.conserved_quantity(y0[0], y0[1]);
    if let Some((t0, t1)) = sol.sol_span() {
        let ts = linspace(t0, t1, 41);
        let ys = sol.sol_many(&ts);
        for (i, (t, y_opt)) in ts.iter().zip(ys.iter()).enumerate() {
            if i % 4 == 0 {
                if let Some(y) = y_opt {
                    let drift = params.conserved_quantity(y[0], y[1]) - v0;
                    println!(
                        "t = {:>7.3}, prey = {:>9.5}, predator = {:>9.5}, V drift = {:>10.3e}",
                        t, y[0], y[1], drift
                    );
                }
            }
        }
    } else {
        println!("dense output was not enabled");
    }
}
