use crate::geometry::BandPath;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// Computes the area enclosed by an error band outline.
///
/// Sums the signed areas of the path's [rings](BandPath::rings), which is the
/// area a `nonzero` fill covers. An open curve's band is one ring through all
/// vertices. A closed curve's band is the annulus between its two sides.
#[derive(Debug)]
pub struct BandArea<'a> {
    path: &'a BandPath,
}

impl<'a> BandArea<'a> {
    /// Creates a new `BandArea` query.
    #[must_use]
    pub fn new(path: &'a BandPath) -> Self {
        Self { path }
    }

    /// Executes the query, returning the unsigned area.
    ///
    /// A self-intersecting outline counts overlapping lobes with opposite
    /// signs, so the result is only meaningful for simple outlines.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.path
            .rings()
            .into_iter()
            .map(|ring| {
                let points: Vec<Point2> = ring.iter().map(|v| v.point).collect();
                signed_area_2d(&points)
            })
            .sum::<f64>()
            .abs()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{PI, TAU};

    use super::*;
    use crate::geometry::{linspace, SampledCurve};
    use crate::operations::offset::{error_band, ErrorBand};

    #[test]
    fn straight_band_area() {
        let path = error_band(&[0.0, 2.0, 4.0], &[0.0, 0.0, 0.0], 0.5).unwrap();
        let area = BandArea::new(&path).execute();
        assert!((area - 4.0).abs() < 1e-10, "expected 4.0, got {area}");
    }

    #[test]
    fn zero_width_band_has_no_area() {
        let path = error_band(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], 0.0).unwrap();
        assert!(BandArea::new(&path).execute() < 1e-12);
    }

    #[test]
    fn open_circle_band_is_nearly_annulus() {
        let ts = linspace(0.0, TAU, 400, false);
        let curve = SampledCurve::from_polar(&ts, |_| 1.0).unwrap();
        let path = ErrorBand::new(curve, 0.05).execute().unwrap();
        let area = BandArea::new(&path).execute();
        let expected = PI * (1.05_f64.powi(2) - 0.95_f64.powi(2));
        assert!(
            (area - expected).abs() < expected * 0.01,
            "expected ~{expected}, got {area}"
        );
    }

    #[test]
    fn closed_circle_band_is_annulus() {
        let ts = linspace(0.0, TAU, 400, true);
        let curve = SampledCurve::from_polar(&ts, |_| 1.0).unwrap();
        let path = ErrorBand::new(curve, 0.05).execute().unwrap();
        assert!(path.is_closed_curve());
        let area = BandArea::new(&path).execute();
        let expected = PI * (1.05_f64.powi(2) - 0.95_f64.powi(2));
        assert!(
            (area - expected).abs() < expected * 1e-3,
            "expected ~{expected}, got {area}"
        );
    }
}
