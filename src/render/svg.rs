use std::fmt::Write as _;

use tracing::debug;

use super::{LineStyle, PatchStyle, RenderTarget};
use crate::error::{RenderError, Result};
use crate::geometry::BandPath;
use crate::math::polygon_2d::bounds_2d;
use crate::math::{Point2, TOLERANCE};

enum Element {
    Polyline(Vec<Point2>, LineStyle),
    Path(BandPath, PatchStyle),
}

/// A [`RenderTarget`] that collects drawing calls into an SVG document.
///
/// Data coordinates are y-up; on [`finish`](Self::finish) everything drawn is
/// fitted into the canvas (keeping aspect ratio) and flipped into SVG screen
/// space. Elements are emitted in drawing order, so later calls paint over
/// earlier ones. Sub-paths are filled with the `nonzero` rule.
pub struct SvgCanvas {
    width: f64,
    height: f64,
    margin: f64,
    elements: Vec<Element>,
}

impl SvgCanvas {
    /// Creates an empty canvas of `width` x `height` pixels with a 10 pixel margin.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidStyle` if either dimension is not positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
            return Err(RenderError::InvalidStyle(format!(
                "canvas size must be positive, got {width}x{height}"
            ))
            .into());
        }
        Ok(Self {
            width,
            height,
            margin: 10.0,
            elements: Vec::new(),
        })
    }

    /// Sets the margin in pixels kept free around the drawing.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Number of elements drawn so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Renders the collected elements into a standalone SVG document.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Format` if writing to the output fails.
    pub fn finish(&self) -> Result<String> {
        let mut out = String::new();
        write_header(&mut out, self.width, self.height)?;
        self.write_elements(&mut out, "  ")?;
        out.push_str("</svg>\n");
        debug!(elements = self.elements.len(), bytes = out.len(), "svg document written");
        Ok(out)
    }

    /// Renders several canvases left to right into one SVG document.
    ///
    /// Each canvas keeps its own fit and is shifted right by the widths of the
    /// ones before it. The document is as wide as all canvases together and as
    /// tall as the tallest.
    ///
    /// # Errors
    ///
    /// - `RenderError::InvalidStyle` if `panels` is empty
    /// - `RenderError::Format` if writing to the output fails
    pub fn side_by_side(panels: &[SvgCanvas]) -> Result<String> {
        if panels.is_empty() {
            return Err(RenderError::InvalidStyle("no canvases to compose".to_owned()).into());
        }
        let width: f64 = panels.iter().map(|c| c.width).sum();
        let height = panels.iter().map(|c| c.height).fold(0.0, f64::max);

        let mut out = String::new();
        write_header(&mut out, width, height)?;
        let mut x = 0.0;
        for panel in panels {
            writeln!(out, r#"  <g transform="translate({x} 0)">"#).map_err(RenderError::from)?;
            panel.write_elements(&mut out, "    ")?;
            out.push_str("  </g>\n");
            x += panel.width;
        }
        out.push_str("</svg>\n");
        debug!(panels = panels.len(), bytes = out.len(), "svg document written");
        Ok(out)
    }

    fn write_elements(&self, out: &mut String, indent: &str) -> Result<()> {
        let map = self.screen_mapping();
        for element in &self.elements {
            match element {
                Element::Polyline(points, style) => {
                    let coords: Vec<String> = points
                        .iter()
                        .map(|p| map(*p))
                        .map(|p| format!("{},{}", p.x, p.y))
                        .collect();
                    writeln!(
                        out,
                        r#"{indent}<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                        coords.join(" "),
                        style.color(),
                        style.width()
                    )
                    .map_err(RenderError::from)?;
                }
                Element::Path(path, style) => {
                    let d = path.to_svg_path_data_with(&map)?;
                    let stroke = style
                        .edge()
                        .map_or_else(|| "none".to_owned(), |c| c.to_string());
                    writeln!(
                        out,
                        r#"{indent}<path d="{d}" fill="{}" fill-opacity="{}" fill-rule="nonzero" stroke="{stroke}"/>"#,
                        style.face(),
                        style.alpha()
                    )
                    .map_err(RenderError::from)?;
                }
            }
        }
        Ok(())
    }

    /// Builds the data → screen transform from the bounds of all elements.
    fn screen_mapping(&self) -> impl Fn(Point2) -> Point2 {
        let points = self.elements.iter().flat_map(|e| match e {
            Element::Polyline(points, _) => points.clone(),
            Element::Path(path, _) => path.points(),
        });
        let all: Vec<Point2> = points.collect();
        let (lo, hi) = bounds_2d(&all).unwrap_or((Point2::origin(), Point2::origin()));

        let span_x = (hi.x - lo.x).max(TOLERANCE);
        let span_y = (hi.y - lo.y).max(TOLERANCE);
        let avail_x = (self.width - 2.0 * self.margin).max(TOLERANCE);
        let avail_y = (self.height - 2.0 * self.margin).max(TOLERANCE);
        let scale = (avail_x / span_x).min(avail_y / span_y);

        // Center the drawing in whichever axis has slack.
        let off_x = (self.width - span_x * scale) * 0.5;
        let off_y = (self.height - span_y * scale) * 0.5;
        let height = self.height;

        move |p: Point2| {
            Point2::new(
                off_x + (p.x - lo.x) * scale,
                height - (off_y + (p.y - lo.y) * scale),
            )
        }
    }
}

fn write_header(out: &mut String, width: f64, height: f64) -> Result<()> {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )
    .map_err(RenderError::from)?;
    Ok(())
}

impl RenderTarget for SvgCanvas {
    fn stroke_polyline(&mut self, points: &[Point2], style: &LineStyle) -> Result<()> {
        self.elements.push(Element::Polyline(points.to_vec(), *style));
        Ok(())
    }

    fn fill_path(&mut self, path: &BandPath, style: &PatchStyle) -> Result<()> {
        self.elements.push(Element::Path(path.clone(), *style));
        Ok(())
    }
}

impl std::fmt::Debug for SvgCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("margin", &self.margin)
            .field("elements", &self.elements.len())
            .finish()
    }
}
