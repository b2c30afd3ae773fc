pub mod ensemble;
pub mod euler;
pub mod trajectory;

pub use ensemble::solve_ensemble;
pub use euler::{
    euler_step, explicit_euler, explicit_euler_scalar, integrate, solve, solve_problem,
    try_integrate,
};
pub use trajectory::Trajectory;
