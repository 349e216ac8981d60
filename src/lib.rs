//! Error bands around sampled 2D curves.
//!
//! A curve is offset along its finite-difference normals by a constant or
//! per-sample half-width. The two offset sides are joined into one closed
//! outline ([`geometry::BandPath`]) that a [`render::RenderTarget`] can fill.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;

pub use error::{ErrbandError, Result};
pub use geometry::{BandPath, SampledCurve};
pub use operations::offset::{error_band, ErrorBand, ErrorMagnitude};
