use nalgebra::{DVector, Vector3};

use crate::error::{Error, Result};
use crate::ivp::{Ivp, TimeGrid};

pub const NAME: &str = "Lorenz System";

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Lorenz coefficients. Defaults are the classic chaotic regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParams {
    pub sigma: f64, // convective intensity (Prandtl number)
    pub rho: f64,   // temperature gradient (Rayleigh number)
    pub beta: f64,  // geometric damping
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl LorenzParams {
    /// Every coefficient must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("sigma", self.sigma), ("rho", self.rho), ("beta", self.beta)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Lorenz vector field at `u = [x, y, z]`.
    pub fn derivative(&self, u: &Vector3<f64>) -> Vector3<f64> {
        let (x, y, z) = (u.x, u.y, u.z);
        Vector3::new(
            self.sigma * (y - x),
            x * (self.rho - z) - y,
            x * y - self.beta * z,
        )
    }

    /// Equilibria of the flow: the origin, plus C+ and C- when rho > 1.
    pub fn equilibria(&self) -> Vec<Vector3<f64>> {
        let mut points = vec![Vector3::zeros()];
        if self.rho > 1.0 {
            let r = (self.beta * (self.rho - 1.0)).sqrt();
            points.push(Vector3::new(r, r, self.rho - 1.0));
            points.push(Vector3::new(-r, -r, self.rho - 1.0));
        }
        points
    }
}

// ---------------------------------------------------------------------------
// Lorenz system as an IVP
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LorenzSystem {
    grid: TimeGrid,
    u0: DVector<f64>,
    params: LorenzParams,
}

impl LorenzSystem {
    /// Default initial state.
    pub const DEFAULT_STATE: [f64; 3] = [1.0, 0.0, 0.0];

    /// Classic parameters starting from `[1, 0, 0]`.
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            grid,
            u0: DVector::from_row_slice(&Self::DEFAULT_STATE),
            params: LorenzParams::default(),
        }
    }

    /// Custom initial state and parameters. `u0` must be 3-dimensional.
    pub fn with_state(grid: TimeGrid, u0: DVector<f64>, params: LorenzParams) -> Result<Self> {
        if u0.len() != 3 {
            return Err(Error::DimensionMismatch {
                expected: 3,
                found: u0.len(),
            });
        }
        params.validate()?;
        Ok(Self { grid, u0, params })
    }

    /// Coefficients fixed at construction.
    pub fn params(&self) -> LorenzParams {
        self.params
    }
}

impl Ivp for LorenzSystem {
    fn name(&self) -> &str {
        NAME
    }

    fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    fn initial_state(&self) -> &DVector<f64> {
        &self.u0
    }

    fn rhs(&self, _t: f64, u: &DVector<f64>) -> DVector<f64> {
        let d = self.params.derivative(&Vector3::new(u[0], u[1], u[2]));
        DVector::from_column_slice(d.as_slice())
    }
}

// ---------------------------------------------------------------------------
// Preset ensembles
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Line width used when drawing ensemble members.
    pub const LINE_WIDTH: f32 = 0.7;

    /// One trajectory of an ensemble: a start point plus how to draw it.
    #[derive(Debug, Clone, PartialEq)]
    pub struct EnsembleMember {
        pub label: &'static str,
        pub u0: [f64; 3],
        pub color: [u8; 3], // sRGB
    }

    impl EnsembleMember {
        pub fn system(&self, grid: TimeGrid, params: LorenzParams) -> Result<LorenzSystem> {
            LorenzSystem::with_state(grid, DVector::from_row_slice(&self.u0), params)
        }
    }

    /// Four nearby starts that separate quickly on the attractor.
    pub fn butterfly() -> Vec<EnsembleMember> {
        vec![
            EnsembleMember { label: "brown", u0: [1.0, 0.0, 0.0], color: [165, 42, 42] },
            EnsembleMember { label: "darkgoldenrod", u0: [0.95, 0.05, 0.0], color: [184, 134, 11] },
            EnsembleMember { label: "goldenrod", u0: [1.05, 0.0, 0.05], color: [218, 165, 32] },
            EnsembleMember { label: "chocolate", u0: [1.05, -0.05, 0.05], color: [210, 105, 30] },
        ]
    }
}
