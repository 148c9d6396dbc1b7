//! Marker layout planning
//!
//! The planner decides how many markers a page receives and where each one
//! goes. Marker sizes are not drawn at random: they are interpolated in the
//! inverse-square ("relative density") domain, from a marker covering most of
//! the page down to the configured minimum size. Interpolating `1/size²`
//! rather than `size` yields many more small markers than large ones, which
//! keeps the local marker density even across scales.
//!
//! Position, rotation and lightness are drawn from a caller-supplied random
//! generator, so a fixed seed reproduces a texture exactly.

use rand::Rng;

use crate::config::TextureConfig;

use super::types::MarkerDescriptor;

/// Minimum lightness separation between markers and the background
pub const LIGHTNESS_GAP: u8 = 40;

/// Largest marker edge as a fraction of the shorter page side
pub const MAXIMUM_SIZE_RATIO: f64 = 0.8;

/// Rotation is drawn from [-MAX_ROTATION, MAX_ROTATION] turns
pub const MAX_ROTATION: f64 = 0.25;

/// Exclusive upper bound of the raw lightness draw
const LIGHTNESS_RANGE: u8 = u8::MAX - LIGHTNESS_GAP;

/// Number of markers for a configuration
///
/// `density` is in markers per square meter and the page is in millimeters.
/// Zero, negative and non-finite products give an empty page.
pub fn marker_count(config: &TextureConfig) -> usize {
    let count = (config.density * (config.width / 1000.0) * (config.height / 1000.0)).round();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

/// Push a raw lightness draw out of the band around the background
///
/// Draws above `background - GAP/2` are shifted up by the full gap, so no
/// marker lands in `(background - GAP/2, background + GAP/2]`.
pub fn separate_lightness(raw: u8, background: u8) -> u8 {
    let threshold = i16::from(background) - i16::from(LIGHTNESS_GAP / 2);
    if i16::from(raw) > threshold {
        raw.saturating_add(LIGHTNESS_GAP)
    } else {
        raw
    }
}

/// Uniform sample between two bounds
///
/// Inverted bounds are allowed and sample the same interval backwards, which
/// happens when a marker is wider than the page.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lower: f64, upper: f64) -> f64 {
    lower + rng.gen::<f64>() * (upper - lower)
}

/// Precomputed layout parameters for one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planner {
    width: f64,
    height: f64,
    background_lightness: u8,
    count: usize,
    maximum_size: f64,
    density_min: f64,
    density_max: f64,
}

impl Planner {
    /// Derive layout parameters from a configuration
    pub fn new(config: &TextureConfig) -> Self {
        let maximum_size = MAXIMUM_SIZE_RATIO * config.width.min(config.height);
        let planner = Self {
            width: config.width,
            height: config.height,
            background_lightness: config.background_lightness,
            count: marker_count(config),
            maximum_size,
            density_min: 1.0 / (config.minimum_size * config.minimum_size),
            density_max: 1.0 / (maximum_size * maximum_size),
        };

        tracing::debug!(
            count = planner.count,
            maximum_size = planner.maximum_size,
            minimum_size = config.minimum_size,
            "planned marker layout"
        );

        planner
    }

    /// Total number of markers on the page
    pub fn count(&self) -> usize {
        self.count
    }

    /// Edge of the largest marker
    pub fn maximum_size(&self) -> f64 {
        self.maximum_size
    }

    /// Size of the marker at `index`
    ///
    /// A page with a single marker places it at the start of the interpolation
    /// and gives it the maximum size.
    pub fn size_at(&self, index: usize) -> f64 {
        let t = if self.count > 1 {
            index as f64 / (self.count - 1) as f64
        } else {
            0.0
        };
        let relative_density = t * (self.density_min - self.density_max) + self.density_max;
        (1.0 / relative_density).sqrt()
    }

    /// Place the marker at `index`, drawing x, y, rotation and lightness in that order
    pub fn place<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> MarkerDescriptor {
        let size = self.size_at(index);
        let half_size = size / 2.0;

        let x = uniform(rng, half_size, self.width - half_size);
        let y = uniform(rng, half_size, self.height - half_size);
        let rotation = uniform(rng, -MAX_ROTATION, MAX_ROTATION);
        let raw = rng.gen_range(0..LIGHTNESS_RANGE);

        MarkerDescriptor {
            x,
            y,
            rotation,
            size,
            lightness: separate_lightness(raw, self.background_lightness),
        }
    }

    /// Lazily place every marker, largest first
    pub fn markers<'r, R: Rng + ?Sized>(&self, rng: &'r mut R) -> Markers<'r, R> {
        Markers {
            planner: *self,
            rng,
            index: 0,
        }
    }
}

/// Plan a page: the lazy marker sequence for `config`
pub fn plan<'r, R: Rng + ?Sized>(config: &TextureConfig, rng: &'r mut R) -> Markers<'r, R> {
    Planner::new(config).markers(rng)
}

/// Iterator over the markers of a planned page
pub struct Markers<'r, R: ?Sized> {
    planner: Planner,
    rng: &'r mut R,
    index: usize,
}

impl<R: Rng + ?Sized> Iterator for Markers<'_, R> {
    type Item = MarkerDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.planner.count {
            return None;
        }
        let marker = self.planner.place(self.index, &mut *self.rng);
        self.index += 1;
        Some(marker)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.planner.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for Markers<'_, R> {}
