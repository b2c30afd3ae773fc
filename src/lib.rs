pub mod config;
pub mod error;
pub mod io;
pub mod ivp;
pub mod solver;
pub mod systems;

pub use config::RunConfig;
pub use error::{Error, GridError, Result};
pub use ivp::{Ivp, Problem, TimeGrid};
pub use solver::{solve, solve_ensemble, Trajectory};
pub use systems::{ExponentialDecay, LorenzParams, LorenzSystem};
