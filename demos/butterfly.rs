use lorenz_sim::io::csv;
use lorenz_sim::io::json::{self, TrajectorySummary};
use lorenz_sim::systems::{presets, LorenzParams};
use lorenz_sim::{solve, Ivp, TimeGrid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let grid = TimeGrid::linspace(0.0, 30.0, 16_001)?;
    let member = &presets::butterfly()[0];
    let sys = member.system(grid, LorenzParams::default())?;

    println!("{} ...", sys.title());
    let trajectory = solve(&sys)?;

    let summary = TrajectorySummary::new(&sys, &trajectory);
    println!("Final state: {:?}", summary.final_state);
    for (axis, (lo, hi)) in ["x", "y", "z"].iter().zip(&summary.bounds) {
        println!("  {} in [{:>8.3}, {:>8.3}]", axis, lo, hi);
    }

    csv::write_trajectory_file("butterfly_trajectory.csv", &trajectory)?;
    json::write_summary_file("butterfly_summary.json", &summary)?;
    println!("Exported: butterfly_trajectory.csv, butterfly_summary.json");
    Ok(())
}
