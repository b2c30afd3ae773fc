pub mod grid;
pub mod problem;

pub use grid::TimeGrid;
pub use problem::{Ivp, Problem};
