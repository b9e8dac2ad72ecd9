//! Mutable view transformation state: rotation around X and Y plus a
//! uniform scale.

use serde::{Deserialize, Serialize};

use crate::geometry::affine;
use crate::geometry::axis::Axis;
use crate::geometry::matrix::Mat4;

/// Add `increase_in_degrees` to `angle`, wrapping the result back into
/// range.
///
/// The wrap is deliberately asymmetric: values above +360 reduce modulo
/// 360 (landing in [0, 360)), values below -360 reduce modulo -360
/// (landing in (-360, 0]). Angles inside (-360, 360] pass through
/// unchanged, so the sign of an accumulated rotation is preserved.
pub fn increase_angle(angle: f64, increase_in_degrees: f64) -> f64 {
    let mut angle = angle + increase_in_degrees;

    if angle > 360.0 {
        angle %= 360.0;
    } else if angle < -360.0 {
        angle %= -360.0;
    }

    angle
}

/// Rotation/scale state composed into a single affine matrix on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    x_rotation: f64,
    y_rotation: f64,
    scale: f64,
}

impl Transformation {
    pub fn new(x_rotation: f64, y_rotation: f64, scale: f64) -> Self {
        Self {
            x_rotation,
            y_rotation,
            scale,
        }
    }

    pub fn x_rotation(&self) -> f64 {
        self.x_rotation
    }

    pub fn y_rotation(&self) -> f64 {
        self.y_rotation
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the uniform scale factor. The type itself places no lower bound
    /// on the value; interactive callers reject deltas that would drive the
    /// scale to zero or below.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn increase_x_rotation(&mut self, rotation_in_degrees: f64) {
        self.x_rotation = increase_angle(self.x_rotation, rotation_in_degrees);
    }

    pub fn increase_y_rotation(&mut self, rotation_in_degrees: f64) {
        self.y_rotation = increase_angle(self.y_rotation, rotation_in_degrees);
    }

    /// Compose the state into `rotate_x * rotate_y * scale`, in that fixed
    /// order (the scale applies to a point first, the X rotation last).
    pub fn to_affine_matrix(&self) -> Mat4 {
        affine::rotation(self.x_rotation, Axis::X)
            * affine::rotation(self.y_rotation, Axis::Y)
            * affine::uniform_scaling(self.scale)
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}
