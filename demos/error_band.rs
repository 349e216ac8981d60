//! Error band demo: a limaçon with a constant and a variable error band.
//!
//! Both bands are drawn side by side in one SVG document on stdout.
//!
//! Usage:
//! ```text
//! cargo run --example error_band > bands.svg
//! RUST_LOG=errband=debug cargo run --example error_band > bands.svg
//! ```

use std::f64::consts::TAU;

use errband::geometry::linspace;
use errband::operations::query::{BandArea, SelfIntersections};
use errband::render::{Color, LineStyle, PatchStyle, RenderTarget, SvgCanvas};
use errband::{ErrorBand, Result, SampledCurve};
use tracing::{info, warn};

const SAMPLES: usize = 400;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for errband and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=errband=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("error_band=info".parse().unwrap_or_default())
        .add_directive("errband=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let ts = linspace(0.0, TAU, SAMPLES, true);
    let curve = SampledCurve::from_polar(&ts, |t| 0.5 + t.cos())?;

    let constant = ErrorBand::new(curve.clone(), 0.05).execute()?;
    let variable_err: Vec<f64> = ts
        .iter()
        .map(|t| 0.05 * (2.0 * t).sin().powi(2) + 0.04)
        .collect();
    let variable = ErrorBand::new(curve.clone(), variable_err).execute()?;

    let line = LineStyle::new(Color::BLACK, 1.0)?;
    let bands = [
        ("constant", constant, "#1f77b4".parse::<Color>()?),
        ("variable", variable, "#ff7f0e".parse::<Color>()?),
    ];

    let mut panels = Vec::with_capacity(bands.len());
    for (name, band, face) in &bands {
        let crossings = SelfIntersections::new(band).execute();
        if !crossings.is_empty() {
            warn!(band = name, count = crossings.len(), "band outline self-intersects");
        }
        info!(band = name, area = BandArea::new(band).execute(), "band built");

        let mut canvas = SvgCanvas::new(400.0, 400.0)?.with_margin(20.0);
        canvas.fill_path(band, &PatchStyle::new(*face, 0.3)?)?;
        canvas.stroke_polyline(curve.points(), &line)?;
        panels.push(canvas);
    }

    print!("{}", SvgCanvas::side_by_side(&panels)?);
    Ok(())
}
