pub mod band_path;
pub mod sampled_curve;

pub use band_path::{BandPath, OffsetSides, PathCommand, PathVertex};
pub use sampled_curve::{linspace, SampledCurve};
