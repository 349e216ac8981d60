use super::{Point2, Vector2};

/// Estimates the tangent direction at every sample by finite differences.
///
/// - first sample: forward difference `p[1] - p[0]`
/// - last sample: backward difference `p[n-1] - p[n-2]`
/// - interior samples: centered difference `p[i+1] - p[i-1]`
///
/// The returned vectors are not normalized. Fewer than 2 points yields an
/// empty vector.
#[must_use]
pub fn tangents(points: &[Point2]) -> Vec<Vector2> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let prev = if i == 0 { 0 } else { i - 1 };
            let next = if i == n - 1 { n - 1 } else { i + 1 };
            points[next] - points[prev]
        })
        .collect()
}

/// Rotates a tangent 90° clockwise and scales it to unit length.
///
/// A zero-length tangent produces non-finite components (`NaN`), which is
/// left to the caller to detect.
#[must_use]
pub fn clockwise_unit_normal(tangent: Vector2) -> Vector2 {
    let l = (tangent.x * tangent.x + tangent.y * tangent.y).sqrt();
    Vector2::new(tangent.y / l, -tangent.x / l)
}

/// Unit normals for every sample, one per point.
///
/// Where the differenced samples coincide the tangent has zero length and the
/// normal at that index is non-finite.
#[must_use]
pub fn unit_normals(points: &[Point2]) -> Vec<Vector2> {
    tangents(points)
        .into_iter()
        .map(clockwise_unit_normal)
        .collect()
}
