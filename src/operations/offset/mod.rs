mod error_band;

pub use error_band::{error_band, ErrorBand, ErrorBandParams, ErrorMagnitude};
