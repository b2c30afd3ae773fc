use crate::error::{GridError, Result};

/// Relative tolerance for the uniform-spacing check, as a fraction of `tau`.
pub const UNIFORMITY_RTOL: f64 = 1e-9;

/// Rounding allowance per point, in units of `f64::EPSILON * |t|`.
const ROUNDING_ULPS: f64 = 8.0;

// ---------------------------------------------------------------------------
// Uniform time grid
// ---------------------------------------------------------------------------

/// Ordered, evenly spaced time points `t[0..=N]` with `N >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    points: Vec<f64>,
    tau: f64,
}

impl TimeGrid {
    /// Validate an explicit list of time points.
    ///
    /// Rejects grids with fewer than 2 points, non-finite entries,
    /// non-increasing entries, or spacing that drifts from `t[1] - t[0]`.
    pub fn new(points: Vec<f64>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GridError::TooShort { len: points.len() }.into());
        }
        if let Some(index) = points.iter().position(|t| !t.is_finite()) {
            return Err(GridError::NonFinite { index }.into());
        }

        let tau = points[1] - points[0];
        let origin = points[0].abs();
        for (i, pair) in points.windows(2).enumerate() {
            let step = pair[1] - pair[0];
            if step <= 0.0 {
                return Err(GridError::NotIncreasing { index: i + 1 }.into());
            }
            let magnitude = origin.max(pair[0].abs()).max(pair[1].abs());
            let tolerance = UNIFORMITY_RTOL * tau.abs() + ROUNDING_ULPS * f64::EPSILON * magnitude;
            if (step - tau).abs() > tolerance {
                return Err(GridError::NonUniform {
                    index: i + 1,
                    expected: tau,
                    found: step,
                }
                .into());
            }
        }

        Ok(Self { points, tau })
    }

    /// `n_points` evenly spaced points from `start` to `end` inclusive.
    pub fn linspace(start: f64, end: f64, n_points: usize) -> Result<Self> {
        if n_points < 2 {
            return Err(GridError::TooShort { len: n_points }.into());
        }
        let step = (end - start) / (n_points - 1) as f64;
        let mut points: Vec<f64> = (0..n_points).map(|i| start + i as f64 * step).collect();
        // Pin the endpoint exactly.
        points[n_points - 1] = end;
        Self::new(points)
    }

    /// Fixed step size `t[1] - t[0]`.
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Number of steps `N = len - 1`.
    pub fn n_steps(&self) -> usize {
        self.points.len() - 1
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a valid grid has at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn start(&self) -> f64 {
        self.points[0]
    }

    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn linspace_matches_demo_grid() {
        let grid = TimeGrid::linspace(0.0, 30.0, 16_001).unwrap();
        assert_eq!(grid.len(), 16_001);
        assert_eq!(grid.n_steps(), 16_000);
        assert!((grid.tau() - 0.001875).abs() < 1e-15);
        assert_eq!(grid.end(), 30.0);
    }

    #[test]
    fn single_point_rejected() {
        let err = TimeGrid::new(vec![0.0]).unwrap_err();
        assert_eq!(err, Error::InvalidGrid(GridError::TooShort { len: 1 }));
        assert!(TimeGrid::linspace(0.0, 1.0, 1).is_err());
    }

    #[test]
    fn non_uniform_rejected() {
        let err = TimeGrid::new(vec![0.0, 0.1, 0.3]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGrid(GridError::NonUniform { index: 2, .. })
        ));
    }

    #[test]
    fn decreasing_and_nan_rejected() {
        assert!(matches!(
            TimeGrid::new(vec![1.0, 0.5, 0.0]).unwrap_err(),
            Error::InvalidGrid(GridError::NotIncreasing { index: 1 })
        ));
        assert!(matches!(
            TimeGrid::new(vec![0.0, f64::NAN]).unwrap_err(),
            Error::InvalidGrid(GridError::NonFinite { index: 1 })
        ));
    }

    #[test]
    fn uneven_grid_far_from_origin_rejected() {
        // steps of 1e-6 then 1.5e-6
        let err = TimeGrid::new(vec![1000.0, 1000.000001, 1000.0000025]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidGrid(GridError::NonUniform { index: 2, .. })
        ));
    }

    #[test]
    fn linspace_far_from_origin_accepted() {
        let grid = TimeGrid::linspace(1.0e6, 1.0e6 + 1.0, 1001).unwrap();
        assert!((grid.tau() - 1e-3).abs() < 1e-9);
        let grid = TimeGrid::linspace(-1000.0, 0.0, 40_001).unwrap();
        assert_eq!(grid.n_steps(), 40_000);
    }

    #[test]
    fn accepts_rounding_noise() {
        // 0.1 steps are not exactly representable
        let points: Vec<f64> = (0..=100).map(|i| i as f64 * 0.1).collect();
        assert!(TimeGrid::new(points).is_ok());
    }
}
