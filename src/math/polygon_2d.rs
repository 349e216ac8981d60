use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the `(min, max)` corners of the axis-aligned box around `points`.
///
/// Non-finite points are skipped. Returns `None` when no finite point remains.
#[must_use]
pub fn bounds_2d<'a, I>(points: I) -> Option<(Point2, Point2)>
where
    I: IntoIterator<Item = &'a Point2>,
{
    let mut bounds: Option<(Point2, Point2)> = None;
    for p in points {
        if !(p.x.is_finite() && p.y.is_finite()) {
            continue;
        }
        bounds = Some(match bounds {
            None => (*p, *p),
            Some((lo, hi)) => (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            ),
        });
    }
    bounds
}
