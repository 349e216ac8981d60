use crate::error::{GeometryError, OperationError, Result};
use crate::math::Point2;

/// Returns `n` evenly spaced samples from `start` towards `stop`.
///
/// With `endpoint = true` the last sample is exactly `stop`; otherwise the
/// samples cover the half-open interval `[start, stop)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, stop: f64, n: usize, endpoint: bool) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let divisions = (if endpoint { n - 1 } else { n }) as f64;
            let step = (stop - start) / divisions;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            if endpoint {
                samples[n - 1] = stop;
            }
            samples
        }
    }
}

/// An ordered sequence of samples along a 2D path.
///
/// Always holds at least 2 points. Finiteness and spacing of the samples are
/// checked by the operations that need them, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    points: Vec<Point2>,
}

impl SampledCurve {
    /// Creates a curve from sample points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if fewer than 2 points are given.
    pub fn from_points(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints(points.len()).into());
        }
        Ok(Self { points })
    }

    /// Creates a curve from separate coordinate arrays.
    ///
    /// # Errors
    ///
    /// - `OperationError::LengthMismatch` if `x` and `y` differ in length
    /// - `GeometryError::TooFewPoints` if fewer than 2 samples are given
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(OperationError::LengthMismatch {
                what: "y",
                expected: x.len(),
                actual: y.len(),
            }
            .into());
        }
        Self::from_points(x.iter().zip(y).map(|(&x, &y)| Point2::new(x, y)).collect())
    }

    /// Samples the parametric curve `(fx(t), fy(t))` at every `t` in `ts`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if `ts` has fewer than 2 entries.
    pub fn from_parametric<FX, FY>(ts: &[f64], fx: FX, fy: FY) -> Result<Self>
    where
        FX: Fn(f64) -> f64,
        FY: Fn(f64) -> f64,
    {
        Self::from_points(ts.iter().map(|&t| Point2::new(fx(t), fy(t))).collect())
    }

    /// Samples the polar curve `r(t)`, i.e. `(r(t) cos t, r(t) sin t)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if `ts` has fewer than 2 entries.
    pub fn from_polar<R>(ts: &[f64], r: R) -> Result<Self>
    where
        R: Fn(f64) -> f64,
    {
        Self::from_parametric(ts, |t| r(t) * t.cos(), |t| r(t) * t.sin())
    }

    /// The sample points in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of samples (always ≥ 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a curve holds at least 2 points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X coordinates of every sample.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y coordinates of every sample.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{PI, TAU};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::ErrbandError;
    use crate::math::TOLERANCE;

    #[test]
    fn linspace_with_endpoint() {
        let s = linspace(0.0, 1.0, 5, true);
        assert_eq!(s, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_half_open() {
        let s = linspace(0.0, TAU, 4, false);
        assert_eq!(s.len(), 4);
        assert_abs_diff_eq!(s[1], PI / 2.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(s[3], 3.0 * PI / 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0, true).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1, true), vec![2.0]);
    }

    #[test]
    fn from_xy_builds_points() {
        let c = SampledCurve::from_xy(&[0.0, 1.0, 2.0], &[3.0, 4.0, 5.0]).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c.points()[1], Point2::new(1.0, 4.0));
        assert_eq!(c.xs(), vec![0.0, 1.0, 2.0]);
        assert_eq!(c.ys(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn from_xy_length_mismatch() {
        let err = SampledCurve::from_xy(&[0.0, 1.0, 2.0], &[3.0, 4.0]).unwrap_err();
        assert!(matches!(
            err,
            ErrbandError::Operation(OperationError::LengthMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn single_point_rejected() {
        let err = SampledCurve::from_points(vec![Point2::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            ErrbandError::Geometry(GeometryError::TooFewPoints(1))
        ));
    }

    #[test]
    fn polar_unit_circle() {
        let ts = linspace(0.0, TAU, 16, false);
        let c = SampledCurve::from_polar(&ts, |_| 1.0).unwrap();
        for p in c.points() {
            assert_abs_diff_eq!(p.coords.norm(), 1.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(c.points()[4], Point2::new(0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn parametric_line() {
        let ts = linspace(0.0, 1.0, 3, true);
        let c = SampledCurve::from_parametric(&ts, |t| 2.0 * t, |t| -t).unwrap();
        assert_eq!(c.points()[2], Point2::new(2.0, -1.0));
    }
}
