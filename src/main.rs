use std::error::Error;

use log::info;

use lorenz_sim::io::json::{self, TrajectorySummary};
use lorenz_sim::io::{csv, ensure_data_dir};
use lorenz_sim::systems::{presets, LorenzParams};
use lorenz_sim::{solve_ensemble, Ivp, RunConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // -----------------------------------------------------------------------
    // Problem setup: four nearby starts on the classic attractor
    // -----------------------------------------------------------------------
    let config = RunConfig::from_env();
    let params = LorenzParams::default();
    let grid = config.grid()?;
    let members = presets::butterfly();

    let systems = members
        .iter()
        .map(|m| m.system(grid.clone(), params))
        .collect::<Result<Vec<_>, _>>()?;

    // -----------------------------------------------------------------------
    // Integrate
    // -----------------------------------------------------------------------
    let trajectories = solve_ensemble(&systems)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    // -----------------------------------------------------------------------
    // Report
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  {}", systems[0].title());
    println!("====================================================================");
    println!();
    println!(
        "  sigma = {:.4}   rho = {:.4}   beta = {:.4}",
        params.sigma, params.rho, params.beta
    );
    println!(
        "  t in [{}, {}]   N = {}   tau = {:.6}",
        grid.start(),
        grid.end(),
        grid.n_steps(),
        grid.tau()
    );
    println!();
    println!(
        "  {:<14} {:>24}   {:>30}",
        "member", "u0", "u(t_end)"
    );
    println!("  {}", "─".repeat(72));

    for (member, traj) in members.iter().zip(&trajectories) {
        let last = traj.last().map(|u| (u[0], u[1], u[2])).unwrap_or_default();
        println!(
            "  {:<14} [{:>6.2}, {:>6.2}, {:>6.2}]   [{:>8.3}, {:>8.3}, {:>8.3}]",
            member.label, member.u0[0], member.u0[1], member.u0[2], last.0, last.1, last.2
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------
    ensure_data_dir(&config.output_dir)?;
    for ((member, sys), traj) in members.iter().zip(&systems).zip(&trajectories) {
        let csv_path = config.output_dir.join(format!("lorenz_{}.csv", member.label));
        let json_path = config.output_dir.join(format!("lorenz_{}.json", member.label));
        csv::write_trajectory_file(&csv_path, traj)?;
        json::write_summary_file(&json_path, &TrajectorySummary::new(sys, traj))?;
        info!("wrote {} and {}", csv_path.display(), json_path.display());
    }

    println!("  Exported {} trajectories to {}", trajectories.len(), config.output_dir.display());
    println!("====================================================================");
    println!();
    Ok(())
}
