pub mod geometry;
pub mod mercator;

pub use geometry::{distance_to_polyline, distance_to_segment};
