use std::fmt::Write as _;

use crate::error::{RenderError, Result};
use crate::math::{Point2, TOLERANCE};

/// How a path vertex connects to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    /// Starts a new sub-path at this vertex.
    MoveTo,
    /// Straight segment from the previous vertex.
    LineTo,
}

/// A point tagged with its path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathVertex {
    pub point: Point2,
    pub command: PathCommand,
}

impl PathVertex {
    /// Creates a sub-path start vertex.
    #[must_use]
    pub fn move_to(point: Point2) -> Self {
        Self {
            point,
            command: PathCommand::MoveTo,
        }
    }

    /// Creates a straight-line vertex.
    #[must_use]
    pub fn line_to(point: Point2) -> Self {
        Self {
            point,
            command: PathCommand::LineTo,
        }
    }
}

/// The two offset curves of an error band, both in the original sample order.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetSides {
    /// Samples displaced along `+normal * err`.
    pub positive: Vec<Point2>,
    /// Samples displaced along `-normal * err`.
    pub negative: Vec<Point2>,
}

/// Closed outline of an error band.
///
/// The positive side is traversed forward and the negative side backward, so
/// for an N-sample curve the path holds 2N vertices with `MoveTo` at index 0
/// and index N and `LineTo` everywhere else.
///
/// How the vertices form fillable rings depends on the sampled curve. An open
/// curve gives one ring through all 2N vertices, joined at vertex N. A closed
/// curve (first sample equal to the last) gives two rings, one per side,
/// running in opposite directions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandPath {
    vertices: Vec<PathVertex>,
    closed: bool,
}

impl BandPath {
    /// Assembles the band outline from its two sides.
    #[must_use]
    pub fn from_sides(sides: &OffsetSides) -> Self {
        let mut vertices = Vec::with_capacity(sides.positive.len() + sides.negative.len());
        push_subpath(&mut vertices, sides.positive.iter());
        push_subpath(&mut vertices, sides.negative.iter().rev());
        Self {
            vertices,
            closed: is_closed_curve(sides),
        }
    }

    /// All vertices in drawing order.
    #[must_use]
    pub fn vertices(&self) -> &[PathVertex] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the path has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions without their commands.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.vertices.iter().map(|v| v.point).collect()
    }

    /// Indices of every `MoveTo` vertex.
    #[must_use]
    pub fn move_to_indices(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.command == PathCommand::MoveTo)
            .map(|(i, _)| i)
            .collect()
    }

    /// Splits the path into sub-paths, each starting at a `MoveTo` vertex.
    pub fn subpaths(&self) -> impl Iterator<Item = &[PathVertex]> {
        SubpathIter {
            rest: &self.vertices,
        }
    }

    /// Returns `true` if the sampled curve behind this band ends where it
    /// starts.
    #[must_use]
    pub fn is_closed_curve(&self) -> bool {
        self.closed
    }

    /// The closed rings that make up the band area, in vertex order.
    ///
    /// One ring through every vertex for an open curve, one ring per
    /// sub-path for a closed curve. Each ring implicitly closes back to its
    /// first vertex.
    #[must_use]
    pub fn rings(&self) -> Vec<&[PathVertex]> {
        if self.vertices.is_empty() {
            Vec::new()
        } else if self.closed {
            self.subpaths().collect()
        } else {
            vec![self.vertices.as_slice()]
        }
    }

    /// Serialises the path as SVG path data (`M x y L x y ... Z`).
    ///
    /// Every ring from [`Self::rings`] is written as its own `M ... Z`, so an
    /// open curve's band comes out as a single ring and a closed curve's as
    /// two.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Format` if writing to the string fails.
    pub fn to_svg_path_data(&self) -> Result<String> {
        self.to_svg_path_data_with(|p| p)
    }

    /// Like [`Self::to_svg_path_data`], mapping every point through `map` first.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Format` if writing to the string fails.
    pub fn to_svg_path_data_with<F>(&self, map: F) -> Result<String>
    where
        F: Fn(Point2) -> Point2,
    {
        let mut out = String::new();
        for (r, ring) in self.rings().into_iter().enumerate() {
            if r > 0 {
                out.push(' ');
            }
            for (i, v) in ring.iter().enumerate() {
                let p = map(v.point);
                let cmd = if i == 0 { "M" } else { " L" };
                write!(out, "{cmd}{} {}", p.x, p.y).map_err(RenderError::from)?;
            }
            out.push('Z');
        }
        Ok(out)
    }
}

/// The curve closes when the midpoints of the first and last offset pairs,
/// which are the first and last samples, coincide.
fn is_closed_curve(sides: &OffsetSides) -> bool {
    let (pos, neg) = (&sides.positive, &sides.negative);
    let n = pos.len();
    if n < 3 || neg.len() != n {
        return false;
    }
    let first = nalgebra::center(&pos[0], &neg[0]);
    let last = nalgebra::center(&pos[n - 1], &neg[n - 1]);
    nalgebra::distance(&first, &last) <= TOLERANCE
}

fn push_subpath<'a, I>(out: &mut Vec<PathVertex>, points: I)
where
    I: Iterator<Item = &'a Point2>,
{
    for (i, p) in points.enumerate() {
        out.push(if i == 0 {
            PathVertex::move_to(*p)
        } else {
            PathVertex::line_to(*p)
        });
    }
}

struct SubpathIter<'a> {
    rest: &'a [PathVertex],
}

impl<'a> Iterator for SubpathIter<'a> {
    type Item = &'a [PathVertex];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self.rest[1..]
            .iter()
            .position(|v| v.command == PathCommand::MoveTo)
            .map_or(self.rest.len(), |pos| pos + 1);
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(head)
    }
}
