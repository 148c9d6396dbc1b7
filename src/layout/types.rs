//! Core types for the layout planner

/// A 2D point in page coordinates (millimeters, y pointing down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Placement of a single plus marker on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDescriptor {
    /// Center x-coordinate in millimeters
    pub x: f64,
    /// Center y-coordinate in millimeters
    pub y: f64,
    /// Rotation in turns, within [-0.25, 0.25]
    pub rotation: f64,
    /// Edge of the marker's bounding square in millimeters
    pub size: f64,
    /// Gray level used for all three color channels
    pub lightness: u8,
}

impl MarkerDescriptor {
    /// Center of the marker
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rotation in radians (`rotation * π`)
    ///
    /// The ±0.25 range therefore spans ±45°, which already reaches every
    /// distinct orientation of a plus.
    pub fn rotation_radians(&self) -> f64 {
        self.rotation * std::f64::consts::PI
    }
}
