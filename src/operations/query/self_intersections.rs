use crate::geometry::BandPath;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{Point2, TOLERANCE};

/// A crossing between two non-adjacent edges of a band outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Index of the first edge (edge `i` starts at vertex `i` and ends at the
    /// next vertex of its ring).
    pub edge_a: usize,
    /// Index of the second edge (always > `edge_a`).
    pub edge_b: usize,
    /// Parameter on edge a (0..1).
    pub t_a: f64,
    /// Parameter on edge b (0..1).
    pub t_b: f64,
    /// Crossing point.
    pub point: Point2,
}

/// Finds where an error band outline crosses itself.
///
/// The outline is made of the path's [rings](BandPath::rings). Each ring is
/// closed, so its last edge wraps back to the ring's first vertex, and edge
/// indices count vertices across the whole path. Crossings between two rings
/// are reported too. Detection only: the band is never corrected. Touches at
/// a shared vertex are skipped, as are edges with non-finite endpoints.
#[derive(Debug)]
pub struct SelfIntersections<'a> {
    path: &'a BandPath,
}

impl<'a> SelfIntersections<'a> {
    /// Creates a new `SelfIntersections` query.
    #[must_use]
    pub fn new(path: &'a BandPath) -> Self {
        Self { path }
    }

    /// Executes the query. Returns an empty list for a simple outline.
    #[must_use]
    pub fn execute(&self) -> Vec<Crossing> {
        let edges = ring_edges(self.path);
        let eps = TOLERANCE * 100.0;
        let at_end = |t: f64| t < eps || t > 1.0 - eps;
        let mut results = Vec::new();

        for (k, a) in edges.iter().enumerate() {
            for b in &edges[k + 1..] {
                if a.is_adjacent(b) {
                    continue;
                }
                if let Some((point, t_a, t_b)) =
                    segment_segment_intersect_2d(&a.start, &a.end, &b.start, &b.end)
                {
                    if at_end(t_a) && at_end(t_b) {
                        continue;
                    }
                    results.push(Crossing {
                        edge_a: a.index,
                        edge_b: b.index,
                        t_a,
                        t_b,
                        point,
                    });
                }
            }
        }

        results
    }
}

struct RingEdge {
    index: usize,
    ring: usize,
    local: usize,
    ring_len: usize,
    start: Point2,
    end: Point2,
}

impl RingEdge {
    fn is_adjacent(&self, other: &Self) -> bool {
        if self.ring != other.ring {
            return false;
        }
        let (lo, hi) = (self.local.min(other.local), self.local.max(other.local));
        hi == lo + 1 || (lo == 0 && hi == self.ring_len - 1)
    }
}

/// Every finite edge of every ring. Rings with fewer than 3 vertices have no
/// area and contribute nothing.
fn ring_edges(path: &BandPath) -> Vec<RingEdge> {
    let finite = |p: &Point2| p.x.is_finite() && p.y.is_finite();
    let mut edges = Vec::new();
    let mut base = 0;
    for (ring, vertices) in path.rings().into_iter().enumerate() {
        let m = vertices.len();
        if m >= 3 {
            for (local, v) in vertices.iter().enumerate() {
                let (start, end) = (v.point, vertices[(local + 1) % m].point);
                if finite(&start) && finite(&end) {
                    edges.push(RingEdge {
                        index: base + local,
                        ring,
                        local,
                        ring_len: m,
                        start,
                        end,
                    });
                }
            }
        }
        base += m;
    }
    edges
}
