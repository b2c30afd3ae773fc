use lorenz_sim::{solve, ExponentialDecay, TimeGrid};

/// Halving the step of forward Euler should roughly halve the global error.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{:>8}  {:>12}  {:>12}  {:>6}", "N", "tau", "max error", "ratio");

    let mut previous: Option<f64> = None;
    for n in [50, 100, 200, 400, 800, 1600] {
        let grid = TimeGrid::linspace(0.0, 2.0, n + 1)?;
        let tau = grid.tau();
        let ivp = ExponentialDecay::new(grid, 1.0, 1.5)?;
        let error = solve(&ivp)?.max_error(&ivp)?;
        let ratio = previous.map_or(String::from("-"), |p| format!("{:.3}", p / error));
        println!("{:>8}  {:>12.6}  {:>12.3e}  {:>6}", n, tau, error, ratio);
        previous = Some(error);
    }
    Ok(())
}
