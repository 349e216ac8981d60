mod band_area;
mod self_intersections;

pub use band_area::BandArea;
pub use self_intersections::{Crossing, SelfIntersections};
