//! Interactive view state: rotation and scale steps driven by a host
//! event loop.

use spruce_kernel::Transformation;

/// Degrees added per rotation step.
pub const ROTATION_STEP: f64 = 1.0;
/// Scale delta per wheel step.
pub const SCALE_STEP: f64 = 0.05;

/// Owns the scene transformation and applies interaction deltas to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    transformation: Transformation,
}

impl ViewState {
    pub fn new(transformation: Transformation) -> Self {
        Self { transformation }
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    pub fn rotate_x(&mut self, rotation_in_degrees: f64) {
        self.transformation.increase_x_rotation(rotation_in_degrees);
    }

    pub fn rotate_y(&mut self, rotation_in_degrees: f64) {
        self.transformation.increase_y_rotation(rotation_in_degrees);
    }

    /// Apply a scale delta, ignoring any delta that would drive the scale
    /// to zero or below.
    pub fn scale_on(&mut self, scale_increase: f64) {
        let next = self.transformation.scale() + scale_increase;
        if next > 0.0 {
            self.transformation.set_scale(next);
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Transformation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_guard_ignores_nonpositive_result() {
        let mut view = ViewState::new(Transformation::new(0.0, 0.0, 0.05));
        view.scale_on(-SCALE_STEP);
        assert!((view.transformation().scale() - 0.05).abs() < 1e-12);

        view.scale_on(SCALE_STEP);
        assert!((view.transformation().scale() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_steps_wrap() {
        let mut view = ViewState::new(Transformation::new(359.5, 0.0, 1.0));
        view.rotate_x(ROTATION_STEP);
        assert!((view.transformation().x_rotation() - 0.5).abs() < 1e-12);
    }
}
