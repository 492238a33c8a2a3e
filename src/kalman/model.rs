// Discretized linear model for the per-axis filter
//
// The continuous-time model is a damped position/velocity observer in
// canonical form, with unity input gain and direct position observation:
//
//   A_c = [-gamma, 1]    B_c = [0]    C_c = [1, 0]    D_c = [0]
//         [     0, 0]          [1]

use crate::constants::{GAMMA, MEASUREMENT_NOISE, PROCESS_NOISE, SAMPLE_TIME};
use super::matrix::{ObsMatrix, Scalar, StateMatrix, StateVector};

/// Discrete-time model and noise covariances shared by every axis filter.
///
/// Built once via [`TrackingModel::standard`] and handed read-only to each
/// filter; the matrices are never mutated after construction.
#[derive(Debug, Clone, Copy)]
pub struct TrackingModel {
    /// Discrete state transition matrix A_d (2x2).
    pub a: StateMatrix,
    /// Discrete input matrix B_d (2x1).
    pub b: StateVector,
    /// Observation matrix C_d (1x2), passed through from the continuous model.
    pub c: ObsMatrix,
    /// Feed-through matrix D_d (1x1), carried for completeness but unused.
    pub d: Scalar,
    /// Process noise covariance Q (2x2).
    pub q: StateMatrix,
    /// Measurement noise covariance R (1x1).
    pub r: Scalar,
}

impl TrackingModel {
    /// The standard model: gamma = 0.01, sample time 0.1 s, Q = diag(1, 0.1),
    /// R = [1].
    pub fn standard() -> Self {
        let q = StateMatrix::new(
            PROCESS_NOISE[0], 0.0,
            0.0, PROCESS_NOISE[1],
        );
        let r = Scalar::new(MEASUREMENT_NOISE);
        Self::discretize(GAMMA, SAMPLE_TIME, q, r)
    }

    /// Discretize the continuous model at sample interval `dt`.
    ///
    /// Uses a second-order truncated series in place of the exact matrix
    /// exponential:
    ///
    ///   Psi = I + A_c*(dt/2) + A_c^2*(dt^2/6)
    ///   A_d = I + A_c*Psi*dt
    ///   B_d = Psi*B_c*dt
    ///
    /// The truncation error grows with dt*||A_c||; it is negligible for the
    /// standard constants but this is not an exact discretization.
    pub fn discretize(gamma: f64, dt: f64, q: StateMatrix, r: Scalar) -> Self {
        let a_c = StateMatrix::new(
            -gamma, 1.0,
            0.0, 0.0,
        );
        let b_c = StateVector::new(0.0, 1.0);
        let c_c = ObsMatrix::new(1.0, 0.0);

        let identity = StateMatrix::identity();
        let psi = identity + a_c * (dt / 2.0) + a_c * a_c * (dt * dt / 6.0);

        Self {
            a: identity + a_c * psi * dt,
            b: psi * b_c * dt,
            c: c_c,
            d: Scalar::zeros(),
            q,
            r,
        }
    }
}
