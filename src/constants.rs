// Shared constants for the tracking model (observer canonical form)

/// Damping coefficient of the continuous-time model.
pub const GAMMA: f64 = 0.01;

/// Sample interval between filter steps (seconds).
pub const SAMPLE_TIME: f64 = 0.1;

/// Process noise covariance diagonal: position, velocity/input.
pub const PROCESS_NOISE: [f64; 2] = [1.0, 0.1];

/// Measurement noise variance (scalar observation).
pub const MEASUREMENT_NOISE: f64 = 1.0;

/// Innovation covariance magnitudes below this are treated as singular
/// and the measurement is rejected rather than divided by.
pub const SINGULAR_THRESHOLD: f64 = 1e-5;
