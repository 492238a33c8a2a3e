// Two-axis object tracking
//
// Wraps two independent single-axis Kalman filters (x, y) behind one
// facade. The axes share the discrete model but nothing else; there are no
// cross terms, so "2-D" tracking is two parallel 1-D filters.

use crate::kalman::{AxisFilter, TrackingModel};

/// Axis-aligned bounding box, as produced by an upstream detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_top: f64,
    pub y_top: f64,
    pub x_bot: f64,
    pub y_bot: f64,
}

impl BoundingBox {
    pub fn new(x_top: f64, y_top: f64, x_bot: f64, y_bot: f64) -> Self {
        BoundingBox { x_top, y_top, x_bot, y_bot }
    }

    /// Box midpoint along the x axis.
    pub fn x_center(&self) -> f64 {
        (self.x_top + self.x_bot) / 2.0
    }

    /// Box midpoint along the y axis.
    pub fn y_center(&self) -> f64 {
        (self.y_top + self.y_bot) / 2.0
    }

    /// Box midpoint, the position measurement the tracker consumes.
    pub fn center(&self) -> (f64, f64) {
        (self.x_center(), self.y_center())
    }
}

/// Position tracker for a single object.
///
/// Measurement-to-object association is assumed already resolved by the
/// caller; the tracker only estimates where its one object is.
#[derive(Debug, Clone)]
pub struct ObjectTracker {
    x: AxisFilter,
    y: AxisFilter,
}

impl ObjectTracker {
    /// Create a tracker seeded at the midpoint of the initial bounding box,
    /// with zero initial velocity/input on both axes.
    pub fn new(initial: BoundingBox) -> Self {
        Self::with_velocity(initial, 0.0, 0.0)
    }

    /// Create a tracker seeded at the box midpoint with the given initial
    /// velocity/input per axis.
    pub fn with_velocity(initial: BoundingBox, u_x: f64, u_y: f64) -> Self {
        let model = TrackingModel::standard();
        ObjectTracker {
            x: AxisFilter::new(model, initial.x_center(), u_x),
            y: AxisFilter::new(model, initial.y_center(), u_y),
        }
    }

    /// Run one fused predict+update step per axis with zero input.
    ///
    /// Returns true only if both axes incorporated their measurement. On a
    /// rejected x measurement the y axis is not stepped; on a rejected y
    /// measurement the x axis keeps its successful update. Nothing is
    /// rolled back.
    pub fn estimate(&mut self, x_measure: f64, y_measure: f64) -> bool {
        self.estimate_with_input(x_measure, y_measure, 0.0, 0.0)
    }

    /// As `estimate`, with explicit process inputs per axis.
    pub fn estimate_with_input(
        &mut self,
        x_measure: f64,
        y_measure: f64,
        u_x: f64,
        u_y: f64,
    ) -> bool {
        self.x.estimate(x_measure, u_x) && self.y.estimate(y_measure, u_y)
    }

    /// Propagate both axes one sample interval with zero input, staging the
    /// predictions for a later `update`. Useful for coasting through steps
    /// with no detection.
    pub fn predict(&mut self) {
        self.predict_with_input(0.0, 0.0);
    }

    /// As `predict`, with explicit process inputs per axis.
    pub fn predict_with_input(&mut self, u_x: f64, u_y: f64) {
        self.x.predict(u_x);
        self.y.predict(u_y);
    }

    /// Incorporate a measurement pair into the staged predictions.
    ///
    /// Same success and partial-failure semantics as `estimate`.
    pub fn update(&mut self, x_measure: f64, y_measure: f64) -> bool {
        self.x.update(x_measure) && self.y.update(y_measure)
    }

    /// Current position estimate. Pure read, always succeeds.
    pub fn position(&self) -> (f64, f64) {
        (self.x.position(), self.y.position())
    }

    /// Current velocity/input estimate per axis.
    pub fn velocity(&self) -> (f64, f64) {
        (self.x.velocity(), self.y.velocity())
    }
}
