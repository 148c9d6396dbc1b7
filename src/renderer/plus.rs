//! Plus marker geometry
//!
//! A plus is a 12-vertex cross inscribed in the unit square centered at the
//! origin, with arms one third of the square wide. Markers are drawn by
//! rotating, scaling and translating that outline.

use crate::layout::{MarkerDescriptor, Point};

const HALF: f64 = 0.5;
const ARM: f64 = 0.5 / 3.0;

/// Unit plus outline, counter-clockwise on screen starting at the left arm
///
/// The order defines the polygon; reordering distorts the cross.
pub const PLUS_VERTICES: [Point; 12] = [
    Point::new(-HALF, ARM),
    Point::new(-ARM, ARM),
    Point::new(-ARM, HALF),
    Point::new(ARM, HALF),
    Point::new(ARM, ARM),
    Point::new(HALF, ARM),
    Point::new(HALF, -ARM),
    Point::new(ARM, -ARM),
    Point::new(ARM, -HALF),
    Point::new(-ARM, -HALF),
    Point::new(-ARM, -ARM),
    Point::new(-HALF, -ARM),
];

/// Similarity transform taking the unit plus onto a marker
#[derive(Debug, Clone, Copy)]
pub struct MarkerTransform {
    cos_a: f64,
    sin_a: f64,
    scale: f64,
    origin: Point,
}

impl MarkerTransform {
    /// Build the transform for a marker descriptor
    pub fn for_marker(marker: &MarkerDescriptor) -> Self {
        let radians = marker.rotation_radians();
        Self {
            cos_a: radians.cos(),
            sin_a: radians.sin(),
            scale: marker.size,
            origin: marker.center(),
        }
    }

    /// Rotate, then scale, then translate a unit-space point
    ///
    /// ```text
    /// x' = (x * cos(θ) - y * sin(θ)) * s + ox
    /// y' = (x * sin(θ) + y * cos(θ)) * s + oy
    /// ```
    pub fn transform_point(&self, point: Point) -> Point {
        Point {
            x: (point.x * self.cos_a - point.y * self.sin_a) * self.scale + self.origin.x,
            y: (point.x * self.sin_a + point.y * self.cos_a) * self.scale + self.origin.y,
        }
    }
}

/// Page-space outline of a marker, in [`PLUS_VERTICES`] order
pub fn plus_outline(marker: &MarkerDescriptor) -> [Point; 12] {
    let transform = MarkerTransform::for_marker(marker);
    PLUS_VERTICES.map(|p| transform.transform_point(p))
}
