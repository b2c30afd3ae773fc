use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};
use crate::ivp::Ivp;

/// Approximate solution: one state per grid point.
///
/// Row `n` holds the state at `times[n]`. Every row has the dimension of
/// the initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<DVector<f64>>,
    dim: usize,
}

impl Trajectory {
    pub(crate) fn from_parts(times: Vec<f64>, states: Vec<DVector<f64>>, dim: usize) -> Self {
        debug_assert_eq!(times.len(), states.len());
        Self { times, states, dim }
    }

    /// `(N + 1, dim)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.states.len(), self.dim)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn states(&self) -> &[DVector<f64>] {
        &self.states
    }

    pub fn state(&self, n: usize) -> Option<&DVector<f64>> {
        self.states.get(n)
    }

    pub fn last(&self) -> Option<&DVector<f64>> {
        self.states.last()
    }

    /// `(t, u)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &DVector<f64>)> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }

    /// Time series of one state component (e.g. `x` of the Lorenz system).
    pub fn component(&self, i: usize) -> Option<Vec<f64>> {
        if i >= self.dim {
            return None;
        }
        Some(self.states.iter().map(|u| u[i]).collect())
    }

    /// Flat sequence for scalar problems; `None` if `dim != 1`.
    pub fn scalar_values(&self) -> Option<Vec<f64>> {
        if self.dim == 1 {
            self.component(0)
        } else {
            None
        }
    }

    /// Dense `(N + 1) x dim` matrix copy.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.states.len(), self.dim, |r, c| self.states[r][c])
    }

    /// True if every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.states.iter().all(|u| u.iter().all(|v| v.is_finite()))
    }

    /// Per-component `(min, max)` over the whole run.
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        (0..self.dim)
            .map(|i| {
                self.states.iter().map(|u| u[i]).fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), v| (lo.min(v), hi.max(v)),
                )
            })
            .collect()
    }

    /// Largest Euclidean distance to the exact solution over all grid points.
    pub fn max_error<P: Ivp + ?Sized>(&self, ivp: &P) -> Result<f64> {
        let mut worst = 0.0_f64;
        for (t, u) in self.iter() {
            let exact = ivp.exact_solution(t)?;
            if exact.len() != self.dim {
                return Err(Error::DimensionMismatch {
                    expected: self.dim,
                    found: exact.len(),
                });
            }
            worst = worst.max((u - exact).norm());
        }
        Ok(worst)
    }
}
