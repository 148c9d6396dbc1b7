//! SVG renderer for plus textures
//!
//! Streams a document to any [`std::io::Write`] sink: header with the
//! background, one path per marker, footer.

pub mod config;
pub mod plus;
pub mod svg;

pub use config::SvgConfig;
pub use plus::{plus_outline, MarkerTransform, PLUS_VERTICES};
pub use svg::{gray_hex, SvgWriter};
