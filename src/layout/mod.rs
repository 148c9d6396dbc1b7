//! Layout planner for texture markers
//!
//! Turns a [`TextureConfig`](crate::TextureConfig) into a lazy sequence of
//! [`MarkerDescriptor`]s. Nothing here performs I/O.

pub mod planner;
pub mod types;

pub use planner::{
    marker_count, plan, separate_lightness, Markers, Planner, LIGHTNESS_GAP, MAXIMUM_SIZE_RATIO,
    MAX_ROTATION,
};
pub use types::{MarkerDescriptor, Point};
