use std::fmt;
use std::str::FromStr;

use crate::error::{ErrbandError, RenderError, Result};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ErrbandError;

    /// Parses `#rrggbb`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RenderError::InvalidStyle(format!("expected #rrggbb color, got {s:?}"));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid().into());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Fill and edge attributes for a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchStyle {
    face: Color,
    edge: Option<Color>,
    alpha: f64,
}

impl PatchStyle {
    /// Creates a patch style with no edge stroke.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidStyle` if `alpha` is outside `[0, 1]`.
    pub fn new(face: Color, alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(
                RenderError::InvalidStyle(format!("alpha must be in [0, 1], got {alpha}")).into(),
            );
        }
        Ok(Self {
            face,
            edge: None,
            alpha,
        })
    }

    /// Adds an edge stroke.
    #[must_use]
    pub fn with_edge(mut self, edge: Color) -> Self {
        self.edge = Some(edge);
        self
    }

    #[must_use]
    pub fn face(&self) -> Color {
        self.face
    }

    #[must_use]
    pub fn edge(&self) -> Option<Color> {
        self.edge
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// Stroke attributes for a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    color: Color,
    width: f64,
}

impl LineStyle {
    /// Creates a new line style.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidStyle` if `width` is not positive.
    pub fn new(color: Color, width: f64) -> Result<Self> {
        if width.is_nan() || width <= 0.0 {
            return Err(RenderError::InvalidStyle("line width must be positive".to_owned()).into());
        }
        Ok(Self { color, width })
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the line width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }
}
