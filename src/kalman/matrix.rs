// Fixed-size matrix shapes used by the filter
//
// Every matrix in the model has a shape known at compile time (1x1, 1x2,
// 2x1 or 2x2), so the aliases below are stack-allocated nalgebra types and
// a shape mismatch is a compile error rather than a runtime condition.

use nalgebra::{SMatrix, SVector};

/// 2-element state vector: [position, velocity/input].
pub type StateVector = SVector<f64, 2>;

/// 2x2 matrix over the state (transition, covariance).
pub type StateMatrix = SMatrix<f64, 2, 2>;

/// 1x2 observation row mapping state to measurement.
pub type ObsMatrix = SMatrix<f64, 1, 2>;

/// 1x1 matrix (innovation covariance, feed-through term).
pub type Scalar = SMatrix<f64, 1, 1>;
