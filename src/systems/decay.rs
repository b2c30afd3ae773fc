use nalgebra::DVector;

use crate::error::{Error, Result};
use crate::ivp::{Ivp, TimeGrid};

/// Scalar exponential decay `u' = -lambda * u`.
///
/// Has the closed form `u(t) = u0 * exp(-lambda * (t - t0))`, which makes it
/// the reference problem for checking integrator error.
#[derive(Debug, Clone)]
pub struct ExponentialDecay {
    grid: TimeGrid,
    u0: DVector<f64>,
    pub lambda: f64,
}

impl ExponentialDecay {
    pub fn new(grid: TimeGrid, u0: f64, lambda: f64) -> Result<Self> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(Error::InvalidParameter { name: "lambda", value: lambda });
        }
        Ok(Self {
            grid,
            u0: DVector::from_element(1, u0),
            lambda,
        })
    }
}

impl Ivp for ExponentialDecay {
    fn name(&self) -> &str {
        "Exponential Decay"
    }

    fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    fn initial_state(&self) -> &DVector<f64> {
        &self.u0
    }

    fn rhs(&self, _t: f64, u: &DVector<f64>) -> DVector<f64> {
        u * -self.lambda
    }

    fn has_exact_solution(&self) -> bool {
        true
    }

    fn exact_solution(&self, t: f64) -> Result<DVector<f64>> {
        let elapsed = t - self.grid.start();
        Ok(&self.u0 * (-self.lambda * elapsed).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_solution_available() {
        let grid = TimeGrid::linspace(0.0, 1.0, 11).unwrap();
        let sys = ExponentialDecay::new(grid, 2.0, 0.5).unwrap();
        assert!(sys.has_exact_solution());
        let u = sys.exact_solution(2.0).unwrap();
        assert!((u[0] - 2.0 * (-1.0_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn rhs_is_linear() {
        let grid = TimeGrid::linspace(0.0, 1.0, 11).unwrap();
        let sys = ExponentialDecay::new(grid, 4.0, 0.25).unwrap();
        assert_eq!(sys.rhs(0.0, sys.initial_state())[0], -1.0);
    }

    #[test]
    fn rejects_non_positive_rate() {
        let grid = TimeGrid::linspace(0.0, 1.0, 11).unwrap();
        assert!(ExponentialDecay::new(grid, 1.0, 0.0).is_err());
    }
}
