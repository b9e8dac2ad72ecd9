use serde::{Deserialize, Serialize};
use std::ops::Mul;

use super::point::Point3d;
use crate::error::GeometryError;

/// A 4x4 homogeneous-coordinate matrix stored in row-major order.
///
/// Composition is associative but not commutative: each factor pre-multiplies
/// the accumulated matrix, so in a product `a * b` the transformation `b`
/// applies to a point first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    pub m: [[f64; 4]; 4],
}

impl Mat4 {
    pub fn identity() -> Self {
        #[rustfmt::skip]
        let m = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        Self { m }
    }

    pub fn from_rows(m: [[f64; 4]; 4]) -> Self {
        Self { m }
    }

    /// Apply this matrix to a point via homogeneous coordinates.
    ///
    /// The point is promoted to `(x, y, z, 1)`, multiplied, and collapsed
    /// back by dividing through the resulting `w`. Fails with
    /// `DivisionByZero` when `w` is exactly zero, which is reachable under
    /// a central projection when a point lands on the vanishing plane.
    pub fn apply(&self, p: &Point3d) -> Result<Point3d, GeometryError> {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0f64; 4];
        for (i, row) in self.m.iter().enumerate() {
            let mut sum = 0.0;
            for (j, entry) in row.iter().enumerate() {
                sum += entry * v[j];
            }
            out[i] = sum;
        }

        let w = out[3];
        if w == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Point3d::new(out[0] / w, out[1] / w, out[2] / w))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut result = [[0.0f64; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.m[i][k] * rhs.m[k][j];
                }
                result[i][j] = sum;
            }
        }
        Mat4 { m: result }
    }
}
