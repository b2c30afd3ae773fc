use log::{debug, warn};
use nalgebra::DVector;

use crate::error::{Error, Result};
use crate::ivp::{Ivp, Problem, TimeGrid};
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Explicit (forward) Euler
// ---------------------------------------------------------------------------

/// Single forward Euler step: `u + tau * du`.
pub fn euler_step(u: &DVector<f64>, du: &DVector<f64>, tau: f64) -> DVector<f64> {
    u + du * tau
}

fn check_dim(expected: usize, du: &DVector<f64>) -> Result<()> {
    if du.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            found: du.len(),
        });
    }
    Ok(())
}

/// Integrate `u' = f(t, u)` over `grid` with a fallible right-hand side.
///
/// `u[0] = u0` and `u[n] = u[n-1] + tau * f(t[n-1], u[n-1])`. The first
/// derivative is evaluated and checked before the trajectory is allocated,
/// so a wrong-sized or missing right-hand side fails without partial output.
pub fn try_integrate<F>(grid: &TimeGrid, u0: &DVector<f64>, mut f: F) -> Result<Trajectory>
where
    F: FnMut(f64, &DVector<f64>) -> Result<DVector<f64>>,
{
    let dim = u0.len();
    if dim == 0 {
        return Err(Error::EmptyState);
    }

    let t = grid.points();
    let tau = grid.tau();

    let first = f(t[0], u0)?;
    check_dim(dim, &first)?;

    debug!(
        "explicit Euler: {} steps, tau={}, dim={}",
        grid.n_steps(),
        tau,
        dim
    );

    let mut states = Vec::with_capacity(t.len());
    states.push(u0.clone());
    states.push(euler_step(u0, &first, tau));

    for n in 2..t.len() {
        let prev = &states[n - 1];
        let du = f(t[n - 1], prev)?;
        check_dim(dim, &du)?;
        let next = euler_step(prev, &du, tau);
        states.push(next);
    }

    let trajectory = Trajectory::from_parts(t.to_vec(), states, dim);
    if !trajectory.is_finite() {
        warn!("explicit Euler: trajectory contains non-finite values (tau={})", tau);
    }
    Ok(trajectory)
}

/// Integrate with an infallible right-hand side.
pub fn integrate<F>(grid: &TimeGrid, u0: &DVector<f64>, mut f: F) -> Result<Trajectory>
where
    F: FnMut(f64, &DVector<f64>) -> DVector<f64>,
{
    try_integrate(grid, u0, |t, u| Ok(f(t, u)))
}

/// Integrate over raw time points, validating them as a uniform grid first.
pub fn explicit_euler<F>(t: &[f64], u0: &DVector<f64>, f: F) -> Result<Trajectory>
where
    F: FnMut(f64, &DVector<f64>) -> DVector<f64>,
{
    let grid = TimeGrid::new(t.to_vec())?;
    integrate(&grid, u0, f)
}

/// Scalar convenience wrapper: returns one value per grid point.
pub fn explicit_euler_scalar<F>(t: &[f64], u0: f64, mut f: F) -> Result<Vec<f64>>
where
    F: FnMut(f64, f64) -> f64,
{
    let u0 = DVector::from_element(1, u0);
    let traj = explicit_euler(t, &u0, |t, u| DVector::from_element(1, f(t, u[0])))?;
    Ok(traj.states().iter().map(|u| u[0]).collect())
}

/// Solve an IVP on its own grid from its own initial state.
pub fn solve<P: Ivp + ?Sized>(ivp: &P) -> Result<Trajectory> {
    debug!("solving {}", ivp.name());
    integrate(ivp.grid(), ivp.initial_state(), |t, u| ivp.rhs(t, u))
}

/// Solve a runtime-assembled problem; fails with `Unimplemented` if it has no right-hand side.
pub fn solve_problem(problem: &Problem) -> Result<Trajectory> {
    debug!("solving {}", problem.name());
    try_integrate(problem.grid(), problem.initial_state(), |t, u| problem.rhs(t, u))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{ExponentialDecay, LorenzSystem};

    #[test]
    fn zero_rhs_keeps_state() {
        let t: Vec<f64> = (0..=10).map(|i| i as f64 * 0.5).collect();
        let u = explicit_euler_scalar(&t, 3.5, |_, _| 0.0).unwrap();
        assert_eq!(u.len(), 11);
        assert!(u.iter().all(|&v| v == 3.5));
    }

    #[test]
    fn constant_rhs_is_linear() {
        let grid = TimeGrid::linspace(0.0, 2.0, 41).unwrap();
        let k = -1.5;
        let u = explicit_euler_scalar(grid.points(), 1.0, |_, _| k).unwrap();
        for (n, v) in u.iter().enumerate() {
            let expected = 1.0 + n as f64 * grid.tau() * k;
            assert!((v - expected).abs() < 1e-12, "n={} got {} want {}", n, v, expected);
        }
    }

    #[test]
    fn lorenz_first_step() {
        let grid = TimeGrid::linspace(0.0, 30.0, 16_001).unwrap();
        let sys = LorenzSystem::new(grid);
        let traj = solve(&sys).unwrap();
        assert_eq!(traj.shape(), (16_001, 3));
        let u1 = traj.state(1).unwrap();
        assert!((u1[0] - 0.98125).abs() < 1e-12);
        assert!((u1[1] - 0.0525).abs() < 1e-12);
        assert_eq!(u1[2], 0.0);
    }

    #[test]
    fn single_point_grid_rejected() {
        let u0 = DVector::from_element(3, 1.0);
        let err = explicit_euler(&[0.0], &u0, |_, u| u.clone()).unwrap_err();
        assert!(matches!(err, Error::InvalidGrid(_)));
    }

    #[test]
    fn wrong_rhs_dimension_rejected() {
        let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
        let u0 = DVector::from_row_slice(&[1.0, 0.0, 0.0]);
        let err = integrate(&grid, &u0, |_, _| DVector::zeros(2)).unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 3, found: 2 });
    }

    #[test]
    fn late_dimension_change_rejected() {
        let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
        let u0 = DVector::from_element(1, 1.0);
        let err = integrate(&grid, &u0, |t, _| {
            if t > 0.3 {
                DVector::zeros(2)
            } else {
                DVector::zeros(1)
            }
        })
        .unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 1, found: 2 });
    }

    #[test]
    fn problem_without_rhs_fails_before_output() {
        let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
        let problem = Problem::new("Abstract", grid, DVector::from_element(2, 0.0)).unwrap();
        let err = solve_problem(&problem).unwrap_err();
        assert_eq!(err, Error::Unimplemented { name: "Abstract".into() });
    }

    #[test]
    fn problem_with_rhs_matches_trait_solve() {
        let grid = TimeGrid::linspace(0.0, 1.0, 101).unwrap();
        let decay = ExponentialDecay::new(grid.clone(), 1.0, 2.0).unwrap();
        let problem = Problem::new("Decay", grid, DVector::from_element(1, 1.0))
            .unwrap()
            .with_rhs(|_, u| u * -2.0);
        assert_eq!(solve(&decay).unwrap(), solve_problem(&problem).unwrap());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let grid = TimeGrid::linspace(0.0, 5.0, 2001).unwrap();
        let sys = LorenzSystem::new(grid);
        let a = solve(&sys).unwrap();
        let b = solve(&sys).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn error_is_first_order() {
        let coarse = ExponentialDecay::new(TimeGrid::linspace(0.0, 1.0, 101).unwrap(), 1.0, 1.0).unwrap();
        let fine = ExponentialDecay::new(TimeGrid::linspace(0.0, 1.0, 201).unwrap(), 1.0, 1.0).unwrap();
        let e_coarse = solve(&coarse).unwrap().max_error(&coarse).unwrap();
        let e_fine = solve(&fine).unwrap().max_error(&fine).unwrap();
        let ratio = e_coarse / e_fine;
        assert!(ratio > 1.8 && ratio < 2.2, "error ratio {:.3}", ratio);
    }
}
