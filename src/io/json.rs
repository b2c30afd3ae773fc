use std::io::{self, Write};
use std::path::Path;

use crate::ivp::Ivp;
use crate::solver::Trajectory;

/// Summary statistics computed from a trajectory.
#[derive(Debug, Clone)]
pub struct TrajectorySummary {
    pub name: String,
    pub title: String,
    pub dim: usize,
    pub steps: usize,
    pub tau: f64,
    pub t_end: f64,
    pub final_state: Vec<f64>,
    pub bounds: Vec<(f64, f64)>,
}

impl TrajectorySummary {
    /// Compute summary from the problem and its solution.
    pub fn new<P: Ivp + ?Sized>(ivp: &P, trajectory: &Trajectory) -> Self {
        Self {
            name: ivp.name().to_string(),
            title: ivp.title(),
            dim: trajectory.dim(),
            steps: trajectory.len().saturating_sub(1),
            tau: ivp.grid().tau(),
            t_end: trajectory.times().last().copied().unwrap_or(0.0),
            final_state: trajectory
                .last()
                .map(|u| u.iter().copied().collect())
                .unwrap_or_default(),
            bounds: trajectory.bounds(),
        }
    }
}

fn json_number(v: f64) -> String {
    // JSON has no NaN/inf
    if v.is_finite() {
        format!("{:.6}", v)
    } else {
        "null".to_string()
    }
}

fn json_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Write trajectory summary as JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, summary: &TrajectorySummary) -> io::Result<()> {
    let final_state: Vec<String> = summary.final_state.iter().map(|&v| json_number(v)).collect();
    let bounds: Vec<String> = summary
        .bounds
        .iter()
        .map(|&(lo, hi)| format!("[{}, {}]", json_number(lo), json_number(hi)))
        .collect();

    writeln!(writer, "{{")?;
    writeln!(writer, "  \"system\": {{")?;
    writeln!(writer, "    \"name\": {},", json_string(&summary.name))?;
    writeln!(writer, "    \"title\": {},", json_string(&summary.title))?;
    writeln!(writer, "    \"dim\": {}", summary.dim)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"grid\": {{")?;
    writeln!(writer, "    \"steps\": {},", summary.steps)?;
    writeln!(writer, "    \"tau\": {},", json_number(summary.tau))?;
    writeln!(writer, "    \"t_end\": {}", json_number(summary.t_end))?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"final_state\": [{}],", final_state.join(", "))?;
    writeln!(writer, "  \"bounds\": [{}]", bounds.join(", "))?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write trajectory summary JSON to a file.
pub fn write_summary_file<P: AsRef<Path>>(path: P, summary: &TrajectorySummary) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ivp::TimeGrid;
    use crate::solver::solve;
    use crate::systems::LorenzSystem;

    fn lorenz_summary() -> TrajectorySummary {
        let grid = TimeGrid::linspace(0.0, 1.0, 201).unwrap();
        let sys = LorenzSystem::new(grid);
        let traj = solve(&sys).unwrap();
        TrajectorySummary::new(&sys, &traj)
    }

    #[test]
    fn summary_reports_grid() {
        let s = lorenz_summary();
        assert_eq!(s.steps, 200);
        assert_eq!(s.dim, 3);
        assert_eq!(s.final_state.len(), 3);
        assert!((s.tau - 0.005).abs() < 1e-15);
        assert_eq!(s.title, "Solution of Lorenz System, N = 200");
    }

    #[test]
    fn json_output_is_valid() {
        let summary = lorenz_summary();
        let mut buf = Vec::new();
        write_summary(&mut buf, &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"name\": \"Lorenz System\""));
        assert!(json.contains("\"steps\": 200"));
        assert!(json.contains("\"bounds\": [["));
    }

    #[test]
    fn non_finite_becomes_null() {
        assert_eq!(json_number(f64::NAN), "null");
        assert_eq!(json_string("a\"b"), "\"a\\\"b\"");
    }
}
