use nalgebra::DVector;

use crate::error::{Error, Result};
use super::grid::TimeGrid;

// ---------------------------------------------------------------------------
// Initial value problem capability
// ---------------------------------------------------------------------------

/// An initial value problem `u'(t) = f(t, u)`, `u(t0) = u0`.
///
/// Implement this to plug a concrete system into the solver. `rhs` is the
/// only required operation; an exact solution is an optional capability
/// advertised through `has_exact_solution`.
pub trait Ivp {
    /// Descriptive name used for labelling output.
    fn name(&self) -> &str;

    fn grid(&self) -> &TimeGrid;

    fn initial_state(&self) -> &DVector<f64>;

    /// Right-hand side `f(t, u)`. Must return a vector of the same dimension as `u`.
    fn rhs(&self, t: f64, u: &DVector<f64>) -> DVector<f64>;

    fn has_exact_solution(&self) -> bool {
        false
    }

    /// Exact solution at time `t`, for systems where one is known.
    fn exact_solution(&self, _t: f64) -> Result<DVector<f64>> {
        Err(Error::NoExactSolution {
            name: self.name().to_string(),
        })
    }

    fn dim(&self) -> usize {
        self.initial_state().len()
    }

    /// Plot title, e.g. `Solution of Lorenz System, N = 16000`.
    fn title(&self) -> String {
        format!("Solution of {}, N = {}", self.name(), self.grid().n_steps())
    }
}

// ---------------------------------------------------------------------------
// Runtime-assembled problem
// ---------------------------------------------------------------------------

type RhsFn = Box<dyn Fn(f64, &DVector<f64>) -> DVector<f64> + Send + Sync>;
type ExactFn = Box<dyn Fn(f64) -> DVector<f64> + Send + Sync>;

/// An IVP assembled from closures at runtime.
///
/// Unlike a type implementing [`Ivp`], a `Problem` may be built before its
/// right-hand side is known. Evaluating it in that state yields
/// [`Error::Unimplemented`].
pub struct Problem {
    name: String,
    grid: TimeGrid,
    u0: DVector<f64>,
    rhs: Option<RhsFn>,
    exact: Option<ExactFn>,
}

impl Problem {
    pub fn new(name: impl Into<String>, grid: TimeGrid, u0: DVector<f64>) -> Result<Self> {
        if u0.is_empty() {
            return Err(Error::EmptyState);
        }
        Ok(Self {
            name: name.into(),
            grid,
            u0,
            rhs: None,
            exact: None,
        })
    }

    pub fn with_rhs<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, &DVector<f64>) -> DVector<f64> + Send + Sync + 'static,
    {
        self.rhs = Some(Box::new(f));
        self
    }

    pub fn with_exact_solution<F>(mut self, u: F) -> Self
    where
        F: Fn(f64) -> DVector<f64> + Send + Sync + 'static,
    {
        self.exact = Some(Box::new(u));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn initial_state(&self) -> &DVector<f64> {
        &self.u0
    }

    /// Evaluate `f(t, u)`, or fail with `Unimplemented` if no right-hand side was supplied.
    pub fn rhs(&self, t: f64, u: &DVector<f64>) -> Result<DVector<f64>> {
        match &self.rhs {
            Some(f) => Ok(f(t, u)),
            None => Err(Error::Unimplemented {
                name: self.name.clone(),
            }),
        }
    }

    pub fn has_exact_solution(&self) -> bool {
        self.exact.is_some()
    }

    pub fn exact_solution(&self, t: f64) -> Result<DVector<f64>> {
        match &self.exact {
            Some(u) => Ok(u(t)),
            None => Err(Error::NoExactSolution {
                name: self.name.clone(),
            }),
        }
    }
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("name", &self.name)
            .field("grid_len", &self.grid.len())
            .field("u0", &self.u0)
            .field("has_rhs", &self.rhs.is_some())
            .field("has_exact", &self.exact.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TimeGrid {
        TimeGrid::linspace(0.0, 1.0, 11).unwrap()
    }

    #[test]
    fn missing_rhs_is_unimplemented() {
        let p = Problem::new("Blank", grid(), DVector::from_element(2, 1.0)).unwrap();
        let err = p.rhs(0.0, p.initial_state()).unwrap_err();
        assert_eq!(err, Error::Unimplemented { name: "Blank".into() });
    }

    #[test]
    fn supplied_rhs_is_evaluated() {
        let p = Problem::new("Growth", grid(), DVector::from_element(1, 2.0))
            .unwrap()
            .with_rhs(|_, u| u * 3.0);
        let du = p.rhs(0.0, p.initial_state()).unwrap();
        assert_eq!(du[0], 6.0);
    }

    #[test]
    fn exact_solution_capability() {
        let p = Problem::new("Const", grid(), DVector::from_element(1, 1.0)).unwrap();
        assert!(!p.has_exact_solution());
        assert!(matches!(
            p.exact_solution(0.5),
            Err(Error::NoExactSolution { .. })
        ));

        let p = p.with_exact_solution(|_| DVector::from_element(1, 1.0));
        assert!(p.has_exact_solution());
        assert_eq!(p.exact_solution(0.5).unwrap()[0], 1.0);
    }

    #[test]
    fn empty_state_rejected() {
        let err = Problem::new("Empty", grid(), DVector::zeros(0)).unwrap_err();
        assert_eq!(err, Error::EmptyState);
    }
}
