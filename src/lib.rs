
pub mod constants;
pub mod kalman;
pub mod tracker;

pub use tracker::{BoundingBox, ObjectTracker};
