mod style;
mod svg;

pub use style::{Color, LineStyle, PatchStyle};
pub use svg::SvgCanvas;

use crate::error::Result;
use crate::geometry::BandPath;
use crate::math::Point2;

/// A drawing surface that error bands are handed to.
///
/// Styles pass through unchanged; implementors own every decision about
/// fill rules, coordinate mapping and output.
pub trait RenderTarget {
    /// Strokes an open polyline, typically the sampled curve itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot record the polyline.
    fn stroke_polyline(&mut self, points: &[Point2], style: &LineStyle) -> Result<()>;

    /// Fills (and optionally strokes) a band outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot record the path.
    fn fill_path(&mut self, path: &BandPath, style: &PatchStyle) -> Result<()>;
}
