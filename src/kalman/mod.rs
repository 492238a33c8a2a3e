// Kalman filter module
// Provides per-axis state estimation for object tracking

pub mod matrix;
pub mod model;
pub mod axis;

pub use matrix::{ObsMatrix, Scalar, StateMatrix, StateVector};
pub use model::TrackingModel;
pub use axis::AxisFilter;
