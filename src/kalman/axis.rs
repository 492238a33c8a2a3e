// Single-axis Kalman filter core
//
// One filter instance estimates position and velocity/input along one
// coordinate axis from scalar position measurements. The 2-D tracker runs
// two of these side by side with no cross terms.

use tracing::warn;

use crate::constants::SINGULAR_THRESHOLD;
use super::matrix::{StateMatrix, StateVector};
use super::model::TrackingModel;

/// Kalman filter for a single coordinate axis.
///
/// Holds the current state estimate and its covariance, plus a staging slot
/// for the predicted (prior) values between a `predict` call and the
/// matching `update`.
#[derive(Debug, Clone)]
pub struct AxisFilter {
    /// Shared discrete model and noise covariances.
    pub(crate) model: TrackingModel,
    /// State estimate: [position, velocity/input].
    pub(crate) state: StateVector,
    /// Covariance of the state estimate.
    pub(crate) covariance: StateMatrix,
    /// Predicted state, staged by `predict` for the next `update`.
    pub(crate) prior_state: StateVector,
    /// Predicted covariance, staged by `predict` for the next `update`.
    pub(crate) prior_covariance: StateMatrix,
}

impl AxisFilter {
    /// Create a filter seeded at `position` with initial velocity/input `u`.
    ///
    /// Covariance starts at zero, asserting full confidence in the seed.
    pub fn new(model: TrackingModel, position: f64, u: f64) -> Self {
        AxisFilter {
            model,
            state: StateVector::new(position, u),
            covariance: StateMatrix::zeros(),
            prior_state: StateVector::zeros(),
            prior_covariance: StateMatrix::zeros(),
        }
    }

    /// Propagate the state one sample interval forward with input `u`.
    ///
    /// Writes the predicted state and covariance into the staging slot;
    /// the committed estimate is untouched until `update` incorporates a
    /// measurement. Always succeeds.
    pub fn predict(&mut self, u: f64) {
        let (prior_state, prior_covariance) =
            propagate(&self.model, &self.state, &self.covariance, u);
        self.prior_state = prior_state;
        self.prior_covariance = prior_covariance;
    }

    /// Incorporate the measurement `z` into the staged prediction.
    ///
    /// Returns false and leaves the estimate unchanged if the innovation
    /// covariance is too close to singular to invert; the measurement is
    /// discarded and the filter can continue predicting.
    pub fn update(&mut self, z: f64) -> bool {
        match correct(&self.model, &self.prior_state, &self.prior_covariance, z) {
            Some((state, covariance)) => {
                self.state = state;
                self.covariance = covariance;
                true
            }
            None => false,
        }
    }

    /// Fused predict + update for callers that do not separate the phases.
    ///
    /// On success the estimate is mutated directly; on a rejected
    /// measurement nothing changes, as with `update`.
    pub fn estimate(&mut self, z: f64, u: f64) -> bool {
        let (prior_state, prior_covariance) =
            propagate(&self.model, &self.state, &self.covariance, u);

        match correct(&self.model, &prior_state, &prior_covariance, z) {
            Some((state, covariance)) => {
                self.state = state;
                self.covariance = covariance;
                true
            }
            None => false,
        }
    }

    /// Current position estimate.
    pub fn position(&self) -> f64 {
        self.state[0]
    }

    /// Current velocity/input estimate.
    pub fn velocity(&self) -> f64 {
        self.state[1]
    }
}

/// Prediction stage: x_prior = A*x + B*u, P_prior = A*P*A' + Q.
fn propagate(
    model: &TrackingModel,
    state: &StateVector,
    covariance: &StateMatrix,
    u: f64,
) -> (StateVector, StateMatrix) {
    let prior_state = model.a * state + model.b * u;
    let prior_covariance = model.a * covariance * model.a.transpose() + model.q;
    (prior_state, prior_covariance)
}

/// Update stage: returns the posterior (state, covariance), or None if the
/// innovation covariance S = C*P_prior*C' + R is singular.
///
/// The observation is scalar, so inverting S is a scalar reciprocal; the
/// guard below protects that division.
fn correct(
    model: &TrackingModel,
    prior_state: &StateVector,
    prior_covariance: &StateMatrix,
    z: f64,
) -> Option<(StateVector, StateMatrix)> {
    let s = (model.c * prior_covariance * model.c.transpose() + model.r)[(0, 0)];
    if s.abs() < SINGULAR_THRESHOLD {
        warn!("innovation covariance {} is singular, rejecting measurement", s);
        return None;
    }

    let gain = prior_covariance * model.c.transpose() * (1.0 / s);
    let innovation = z - (model.c * prior_state)[(0, 0)];

    let state = prior_state + gain * innovation;
    let covariance = (StateMatrix::identity() - gain * model.c) * prior_covariance;
    Some((state, covariance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kalman::matrix::Scalar;

    /// Model whose noise terms are all zero, so a zero-covariance filter
    /// produces a singular innovation covariance.
    fn degenerate_model() -> TrackingModel {
        TrackingModel::discretize(0.01, 0.1, StateMatrix::zeros(), Scalar::zeros())
    }

    #[test]
    fn test_zero_innovation_leaves_prior_unchanged() {
        let model = TrackingModel::standard();
        let mut filter = AxisFilter::new(model, 7.0, 0.5);
        filter.covariance = StateMatrix::new(2.0, 0.3, 0.3, 1.0);

        filter.predict(0.0);
        let prior = filter.prior_state;

        // A measurement exactly at the predicted observation carries zero
        // innovation, so the posterior state equals the prior state.
        let z = (model.c * prior)[(0, 0)];
        assert!(filter.update(z));

        assert!((filter.state[0] - prior[0]).abs() < 1e-12);
        assert!((filter.state[1] - prior[1]).abs() < 1e-12);
    }

    #[test]
    fn test_singular_innovation_rejects_measurement() {
        let mut filter = AxisFilter::new(degenerate_model(), 3.0, 0.0);

        filter.predict(0.0);
        let state_before = filter.state;
        let covariance_before = filter.covariance;

        assert!(!filter.update(3.5));

        for i in 0..2 {
            assert!((filter.state[i] - state_before[i]).abs() < 1e-15);
            for j in 0..2 {
                assert!(
                    (filter.covariance[(i, j)] - covariance_before[(i, j)]).abs() < 1e-15
                );
            }
        }
    }

    #[test]
    fn test_singular_innovation_rejects_fused_estimate() {
        let mut filter = AxisFilter::new(degenerate_model(), 3.0, 0.0);
        let state_before = filter.state;

        assert!(!filter.estimate(4.0, 0.0));
        assert!((filter.state[0] - state_before[0]).abs() < 1e-15);
        assert!((filter.state[1] - state_before[1]).abs() < 1e-15);
    }

    #[test]
    fn test_repeated_prediction_decays_position() {
        // With gamma > 0 and no input, propagating the state without
        // measurements decays the position toward zero.
        let mut filter = AxisFilter::new(TrackingModel::standard(), 10.0, 0.0);

        let mut previous = filter.position();
        for _ in 0..100 {
            filter.predict(0.0);
            filter.state = filter.prior_state;
            filter.covariance = filter.prior_covariance;

            let current = filter.position();
            assert!(current > 0.0);
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn test_estimate_matches_separate_predict_update() {
        let model = TrackingModel::standard();
        let mut fused = AxisFilter::new(model, 5.0, 0.0);
        let mut staged = AxisFilter::new(model, 5.0, 0.0);

        for step in 0..10 {
            let z = 5.0 + 0.1 * step as f64;
            assert!(fused.estimate(z, 0.0));
            staged.predict(0.0);
            assert!(staged.update(z));

            assert!((fused.state[0] - staged.state[0]).abs() < 1e-12);
            assert!((fused.state[1] - staged.state[1]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_input_drives_prediction() {
        let model = TrackingModel::standard();
        let mut filter = AxisFilter::new(model, 0.0, 0.0);

        filter.predict(2.0);
        // B_d = [Psi*B_c*dt]: the input feeds both states.
        assert!((filter.prior_state[0] - model.b[0] * 2.0).abs() < 1e-12);
        assert!((filter.prior_state[1] - model.b[1] * 2.0).abs() < 1e-12);
    }
}
