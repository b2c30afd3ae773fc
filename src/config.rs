use std::path::PathBuf;
use std::str::FromStr;

use log::warn;

use crate::error::{GridError, Result};
use crate::ivp::TimeGrid;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub t_min: f64,
    pub t_max: f64,
    pub steps: usize,           // N; the grid has N + 1 points
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            t_min: 0.0,
            t_max: 30.0,
            steps: 16_000, // tau = 1.875 ms
            output_dir: PathBuf::from("./data"),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, value: Option<String>) -> Option<T> {
    let raw = value?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

impl RunConfig {
    /// Defaults overlaid with `LORENZ_T_MAX`, `LORENZ_STEPS` and `LORENZ_OUTPUT_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`RunConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Self::default();
        if let Some(t_max) = parse_var("LORENZ_T_MAX", lookup("LORENZ_T_MAX")) {
            config.t_max = t_max;
        }
        if let Some(steps) = parse_var("LORENZ_STEPS", lookup("LORENZ_STEPS")) {
            config.steps = steps;
        }
        if let Some(dir) = lookup("LORENZ_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }

    /// Uniform grid with `steps + 1` points over `[t_min, t_max]`.
    pub fn grid(&self) -> Result<TimeGrid> {
        let n_points = self
            .steps
            .checked_add(1)
            .ok_or(GridError::TooManySteps { steps: self.steps })?;
        TimeGrid::linspace(self.t_min, self.t_max, n_points)
    }
}
