//! Plus Texture - synthetic calibration textures for corner detectors
//!
//! This library lays out randomly placed, rotated and sized plus markers on a
//! gray page and streams the result as an SVG document, ready to print as a
//! test pattern for a FAST corner detector.
//!
//! # Example
//!
//! ```rust
//! use plus_texture::{generate, SvgConfig, TextureConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = TextureConfig::new().with_page_size(100.0, 100.0).with_density(300.0);
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut svg = Vec::new();
//!
//! let summary = generate(&config, &SvgConfig::default(), &mut rng, &mut svg).unwrap();
//!
//! assert_eq!(summary.marker_count, 3);
//! assert!(String::from_utf8(svg).unwrap().ends_with("</svg>"));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod renderer;

pub use config::{ConfigError, TextureConfig};
pub use error::TextureError;
pub use layout::{plan, MarkerDescriptor, Planner};
pub use renderer::{SvgConfig, SvgWriter};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome of a successful generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of plus markers written
    pub marker_count: usize,
}

/// Generate a texture into any writable sink
///
/// Markers are planned lazily and written one at a time; the sink is flushed
/// before returning. On error the sink keeps whatever was already written.
pub fn generate<R, W>(
    config: &TextureConfig,
    svg: &SvgConfig,
    rng: &mut R,
    sink: W,
) -> Result<GenerationSummary, TextureError>
where
    R: Rng + ?Sized,
    W: Write,
{
    let planner = Planner::new(config);
    let mut writer = SvgWriter::new(sink, svg.clone());

    writer.write_header(config.width, config.height, config.background_lightness)?;
    for marker in planner.markers(rng) {
        writer.write_marker(&marker)?;
    }
    writer.write_footer()?;

    let marker_count = writer.markers_written();
    writer.finish()?;

    tracing::info!(markers = marker_count, "texture written");

    Ok(GenerationSummary { marker_count })
}

/// Generate a texture into a file, creating or truncating it
///
/// Fails with [`TextureError::OutputUnavailable`] when the file cannot be
/// opened. A file that fails mid-write is left in place.
pub fn generate_to_file<R>(
    config: &TextureConfig,
    svg: &SvgConfig,
    rng: &mut R,
    path: &Path,
) -> Result<GenerationSummary, TextureError>
where
    R: Rng + ?Sized,
{
    let file = File::create(path).map_err(|e| TextureError::output_unavailable(path, e))?;
    tracing::debug!(path = %path.display(), "opened output");
    generate(config, svg, rng, BufWriter::new(file))
}

/// Seed derived from the system clock
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Random generator for a run, seeded explicitly
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
