use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{BandPath, OffsetSides, SampledCurve};
use crate::math::finite_diff::{clockwise_unit_normal, tangents};
use crate::math::TOLERANCE;

/// Half-width of an error band, either constant or one value per sample.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorMagnitude {
    /// The same half-width at every sample.
    Uniform(f64),
    /// One half-width per curve sample.
    PerPoint(Vec<f64>),
}

impl ErrorMagnitude {
    /// Half-width at sample `i`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is `PerPoint` and `i` is out of bounds.
    #[must_use]
    pub(crate) fn at(&self, i: usize) -> f64 {
        match self {
            Self::Uniform(e) => *e,
            Self::PerPoint(es) => es[i],
        }
    }

    /// Checks that the magnitude fits a curve of `n` samples and is a valid
    /// half-width (finite, non-negative) everywhere.
    fn validate(&self, n: usize) -> Result<()> {
        let values = match self {
            Self::Uniform(e) => std::slice::from_ref(e),
            Self::PerPoint(es) => {
                self.check_len(n)?;
                es.as_slice()
            }
        };
        if let Some((i, e)) = values
            .iter()
            .enumerate()
            .find(|(_, e)| !e.is_finite() || **e < 0.0)
        {
            return Err(OperationError::InvalidInput(format!(
                "error magnitude must be finite and non-negative, got {e} at index {i}"
            ))
            .into());
        }
        Ok(())
    }

    fn check_len(&self, n: usize) -> Result<()> {
        if let Self::PerPoint(es) = self {
            if es.len() != n {
                return Err(OperationError::LengthMismatch {
                    what: "err",
                    expected: n,
                    actual: es.len(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl From<f64> for ErrorMagnitude {
    fn from(e: f64) -> Self {
        Self::Uniform(e)
    }
}

impl From<Vec<f64>> for ErrorMagnitude {
    fn from(es: Vec<f64>) -> Self {
        Self::PerPoint(es)
    }
}

impl From<&[f64]> for ErrorMagnitude {
    fn from(es: &[f64]) -> Self {
        Self::PerPoint(es.to_vec())
    }
}

/// Parameters controlling input validation in [`ErrorBand::execute`].
#[derive(Debug, Clone, Copy)]
pub struct ErrorBandParams {
    /// Tangents (and consecutive sample gaps) at or below this length are
    /// rejected as degenerate.
    pub min_tangent_length: f64,
}

impl Default for ErrorBandParams {
    fn default() -> Self {
        Self {
            min_tangent_length: TOLERANCE,
        }
    }
}

/// Builds the error band around a sampled curve.
///
/// # Algorithm
///
/// 1. Estimate the tangent at each sample by finite differences (forward at
///    the first sample, backward at the last, centered elsewhere)
/// 2. Rotate each tangent 90° clockwise and normalize it: `n = (dy, -dx) / l`
/// 3. Offset each sample by `±n * err_i`
/// 4. Traverse the positive side forward and the negative side backward
///
/// The band is not corrected for self-intersection, which appears where the
/// half-width exceeds the local radius of curvature.
#[derive(Debug)]
pub struct ErrorBand {
    curve: SampledCurve,
    err: ErrorMagnitude,
    params: ErrorBandParams,
}

impl ErrorBand {
    /// Creates a new error band operation with default parameters.
    #[must_use]
    pub fn new(curve: SampledCurve, err: impl Into<ErrorMagnitude>) -> Self {
        Self {
            curve,
            err: err.into(),
            params: ErrorBandParams::default(),
        }
    }

    /// Replaces the validation parameters.
    #[must_use]
    pub fn with_params(mut self, params: ErrorBandParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the closed band outline.
    ///
    /// # Errors
    ///
    /// - `OperationError::LengthMismatch` if a per-point magnitude does not
    ///   have one entry per sample
    /// - `OperationError::InvalidInput` if a magnitude is negative or non-finite
    /// - `GeometryError::NonFinitePoint` if a sample is not finite
    /// - `GeometryError::CoincidentPoints` if two consecutive samples coincide
    /// - `GeometryError::DegenerateTangent` if a finite-difference tangent is
    ///   too short to normalize
    pub fn execute(&self) -> Result<BandPath> {
        Ok(BandPath::from_sides(&self.sides()?))
    }

    /// Computes the two offset curves after full validation.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`].
    pub fn sides(&self) -> Result<OffsetSides> {
        self.validate()?;
        Ok(self.offset())
    }

    /// Executes the operation checking only the shape of the inputs.
    ///
    /// Coincident samples are not rejected: a zero-length tangent leaves
    /// non-finite coordinates at that index of both halves.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::LengthMismatch` if a per-point magnitude does
    /// not have one entry per sample.
    pub fn execute_unchecked(&self) -> Result<BandPath> {
        self.err.check_len(self.curve.len())?;
        Ok(BandPath::from_sides(&self.offset()))
    }

    fn validate(&self) -> Result<()> {
        let points = self.curve.points();
        self.err.validate(points.len())?;

        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFinitePoint {
                index,
                x: p.x,
                y: p.y,
            }
            .into());
        }

        let min = self.params.min_tangent_length;
        if let Some(index) = points
            .windows(2)
            .position(|w| (w[1] - w[0]).norm() <= min)
        {
            return Err(GeometryError::CoincidentPoints { index }.into());
        }

        if let Some((index, t)) = tangents(points)
            .iter()
            .enumerate()
            .find(|(_, t)| t.norm() <= min)
        {
            return Err(GeometryError::DegenerateTangent {
                index,
                length: t.norm(),
            }
            .into());
        }
        Ok(())
    }

    fn offset(&self) -> OffsetSides {
        let points = self.curve.points();
        debug!(samples = points.len(), err = self.err_kind(), "computing error band");

        let mut positive = Vec::with_capacity(points.len());
        let mut negative = Vec::with_capacity(points.len());
        for (i, (p, t)) in points.iter().zip(tangents(points)).enumerate() {
            let off = clockwise_unit_normal(t) * self.err.at(i);
            positive.push(p + off);
            negative.push(p - off);
        }
        OffsetSides { positive, negative }
    }

    fn err_kind(&self) -> &'static str {
        match self.err {
            ErrorMagnitude::Uniform(_) => "uniform",
            ErrorMagnitude::PerPoint(_) => "per-point",
        }
    }
}

/// Builds the error band outline from coordinate arrays.
///
/// Shorthand for `ErrorBand::new(SampledCurve::from_xy(x, y)?, err).execute()`.
///
/// # Errors
///
/// Returns the errors of [`SampledCurve::from_xy`] and [`ErrorBand::execute`].
pub fn error_band(x: &[f64], y: &[f64], err: impl Into<ErrorMagnitude>) -> Result<BandPath> {
    ErrorBand::new(SampledCurve::from_xy(x, y)?, err).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::ErrbandError;
    use crate::geometry::PathCommand;
    use crate::math::Point2;

    fn line(n: u32) -> SampledCurve {
        let points = (0..n).map(|i| Point2::new(f64::from(i), 0.0)).collect();
        SampledCurve::from_points(points).unwrap()
    }

    #[test]
    fn straight_line_band_is_rectangle() {
        let path = ErrorBand::new(line(3), 0.5).execute().unwrap();
        let pts = path.points();
        assert_eq!(pts.len(), 6);
        // Clockwise normal of +X is -Y.
        assert_abs_diff_eq!(pts[0], Point2::new(0.0, -0.5), epsilon = TOLERANCE);
        assert_abs_diff_eq!(pts[2], Point2::new(2.0, -0.5), epsilon = TOLERANCE);
        assert_abs_diff_eq!(pts[3], Point2::new(2.0, 0.5), epsilon = TOLERANCE);
        assert_abs_diff_eq!(pts[5], Point2::new(0.0, 0.5), epsilon = TOLERANCE);
    }

    #[test]
    fn path_commands() {
        let path = ErrorBand::new(line(4), 1.0).execute().unwrap();
        assert_eq!(path.move_to_indices(), vec![0, 4]);
        assert_eq!(path.vertices()[1].command, PathCommand::LineTo);
    }

    #[test]
    fn per_point_magnitude() {
        let path = ErrorBand::new(line(3), vec![0.0, 1.0, 2.0])
            .execute()
            .unwrap();
        let pts = path.points();
        assert_abs_diff_eq!(pts[0], Point2::new(0.0, 0.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(pts[1], Point2::new(1.0, -1.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(pts[3], Point2::new(2.0, 2.0), epsilon = TOLERANCE);
    }

    #[test]
    fn per_point_length_mismatch() {
        let err = ErrorBand::new(line(3), vec![0.1, 0.2]).execute().unwrap_err();
        assert!(matches!(
            err,
            ErrbandError::Operation(OperationError::LengthMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
        assert!(ErrorBand::new(line(3), vec![0.1, 0.2])
            .execute_unchecked()
            .is_err());
    }

    #[test]
    fn negative_magnitude_rejected() {
        let err = ErrorBand::new(line(3), -0.1).execute().unwrap_err();
        assert!(matches!(
            err,
            ErrbandError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn nan_magnitude_rejected() {
        let result = ErrorBand::new(line(3), vec![0.1, f64::NAN, 0.1]).execute();
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_point_rejected() {
        let curve =
            SampledCurve::from_xy(&[0.0, f64::INFINITY, 2.0], &[0.0, 0.0, 0.0]).unwrap();
        let err = ErrorBand::new(curve, 0.1).execute().unwrap_err();
        assert!(matches!(
            err,
            ErrbandError::Geometry(GeometryError::NonFinitePoint { index: 1, .. })
        ));
    }

    #[test]
    fn coincident_points_rejected() {
        let curve =
            SampledCurve::from_xy(&[0.0, 1.0, 1.0, 2.0], &[0.0, 0.0, 0.0, 0.0]).unwrap();
        let err = ErrorBand::new(curve, 0.1).execute().unwrap_err();
        assert!(matches!(
            err,
            ErrbandError::Geometry(GeometryError::CoincidentPoints { index: 1 })
        ));
    }

    #[test]
    fn folded_back_tangent_rejected() {
        // Centered difference at index 1 is zero: p[2] == p[0].
        let curve = SampledCurve::from_xy(&[0.0, 1.0, 0.0], &[0.0, 0.0, 0.0]).unwrap();
        let err = ErrorBand::new(curve, 0.1).execute().unwrap_err();
        assert!(matches!(
            err,
            ErrbandError::Geometry(GeometryError::DegenerateTangent { index: 1, .. })
        ));
    }

    #[test]
    fn unchecked_leaves_non_finite_vertices() {
        let curve = SampledCurve::from_xy(&[0.0, 0.0, 1.0], &[0.0, 0.0, 1.0]).unwrap();
        let path = ErrorBand::new(curve, 0.1).execute_unchecked().unwrap();
        let pts = path.points();
        assert_eq!(pts.len(), 6);
        assert!(!pts[0].x.is_finite());
        assert!(!pts[5].x.is_finite());
        assert!(pts[1].x.is_finite());
    }

    #[test]
    fn params_tighten_validation() {
        let curve = SampledCurve::from_xy(&[0.0, 0.001, 0.002], &[0.0, 0.0, 0.0]).unwrap();
        let op = ErrorBand::new(curve, 0.1).with_params(ErrorBandParams {
            min_tangent_length: 0.01,
        });
        assert!(op.execute().is_err());
    }

    #[test]
    fn free_function_matches_operation() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 0.0, 1.0];
        let a = error_band(&x, &y, 0.2).unwrap();
        let b = ErrorBand::new(SampledCurve::from_xy(&x, &y).unwrap(), 0.2)
            .execute()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn magnitude_conversions() {
        assert_eq!(ErrorMagnitude::from(0.5), ErrorMagnitude::Uniform(0.5));
        let slice: &[f64] = &[1.0, 2.0];
        assert_eq!(
            ErrorMagnitude::from(slice),
            ErrorMagnitude::PerPoint(vec![1.0, 2.0])
        );
        assert!((ErrorMagnitude::Uniform(0.3).at(99) - 0.3).abs() < f64::EPSILON);
    }
}
