//! Orthographic and central projection onto the screen plane.

use serde::{Deserialize, Serialize};

use super::axis::Axis;
use super::matrix::Mat4;
use super::point::{Point2d, Point3d};
use crate::error::GeometryError;

/// Matrix that drops the coordinate on `axis`.
pub fn orthographic_matrix(axis: Axis) -> Mat4 {
    let mut m = Mat4::identity();
    let i = axis.index();
    m.m[i][i] = 0.0;
    m
}

/// Orthographic matrix plus a perspective-divide term scaled by the
/// distance between the eye and the screen plane. `distance_from_screen`
/// must be nonzero; callers validate before building.
pub fn central_matrix(axis: Axis, distance_from_screen: f64) -> Mat4 {
    let mut m = orthographic_matrix(axis);
    m.m[3][axis.index()] = 1.0 / distance_from_screen;
    m
}

/// Parallel projection along `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orthographic {
    axis: Axis,
    matrix: Mat4,
}

impl Orthographic {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            matrix: orthographic_matrix(axis),
        }
    }
}

/// Perspective-style projection along `axis`, with a configurable distance
/// between the eye and the screen plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Central {
    axis: Axis,
    distance_from_screen: f64,
    matrix: Mat4,
}

impl Central {
    pub fn new(axis: Axis, distance_from_screen: f64) -> Result<Self, GeometryError> {
        if distance_from_screen == 0.0 {
            return Err(GeometryError::InvalidDimension {
                parameter: "distance_from_screen",
                value: distance_from_screen,
            });
        }
        Ok(Self {
            axis,
            distance_from_screen,
            matrix: central_matrix(axis, distance_from_screen),
        })
    }

    pub fn distance_from_screen(&self) -> f64 {
        self.distance_from_screen
    }

    /// Change the screen distance, regenerating the cached matrix.
    pub fn set_distance(&mut self, distance_from_screen: f64) -> Result<(), GeometryError> {
        if distance_from_screen == 0.0 {
            return Err(GeometryError::InvalidDimension {
                parameter: "distance_from_screen",
                value: distance_from_screen,
            });
        }
        self.distance_from_screen = distance_from_screen;
        self.matrix = central_matrix(self.axis, distance_from_screen);
        Ok(())
    }
}

/// A projection onto the screen plane perpendicular to one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    Orthographic(Orthographic),
    Central(Central),
}

impl Projection {
    pub fn orthographic(axis: Axis) -> Self {
        Self::Orthographic(Orthographic::new(axis))
    }

    pub fn central(axis: Axis, distance_from_screen: f64) -> Result<Self, GeometryError> {
        Ok(Self::Central(Central::new(axis, distance_from_screen)?))
    }

    pub fn axis(&self) -> Axis {
        match self {
            Self::Orthographic(o) => o.axis,
            Self::Central(c) => c.axis,
        }
    }

    pub fn matrix(&self) -> &Mat4 {
        match self {
            Self::Orthographic(o) => &o.matrix,
            Self::Central(c) => &c.matrix,
        }
    }

    /// Project an (already transformed) 3D point onto the screen plane.
    ///
    /// The two surviving coordinates map to the screen with y growing
    /// downward, matching the drawing surface convention.
    pub fn project(&self, point: &Point3d) -> Result<Point2d, GeometryError> {
        let q = self.matrix().apply(point)?;
        Ok(match self.axis() {
            Axis::X => Point2d::new(q.z, -q.y),
            Axis::Y => Point2d::new(q.x, -q.z),
            Axis::Z => Point2d::new(q.x, -q.y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthographic_drops_axis() {
        let p = Point3d::new(3.0, 5.0, 7.0);
        let q = orthographic_matrix(Axis::Z).apply(&p).unwrap();
        assert!((q.x - 3.0).abs() < 1e-12);
        assert!((q.y - 5.0).abs() < 1e-12);
        assert!(q.z.abs() < 1e-12);
    }

    #[test]
    fn test_central_divides_by_depth_term() {
        // w = 1 + z/d, so x shrinks as the point recedes along z.
        let proj = Projection::central(Axis::Z, 100.0).unwrap();
        let near = proj.project(&Point3d::new(10.0, 0.0, 0.0)).unwrap();
        let far = proj.project(&Point3d::new(10.0, 0.0, 100.0)).unwrap();
        assert!((near.x - 10.0).abs() < 1e-12);
        assert!((far.x - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_central_rejects_zero_distance() {
        let result = Projection::central(Axis::Z, 0.0);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidDimension {
                parameter: "distance_from_screen",
                ..
            })
        ));
    }

    #[test]
    fn test_central_vanishing_plane_is_division_by_zero() {
        let proj = Projection::central(Axis::Z, 100.0).unwrap();
        let result = proj.project(&Point3d::new(1.0, 1.0, -100.0));
        assert_eq!(result, Err(GeometryError::DivisionByZero));
    }

    #[test]
    fn test_set_distance_regenerates_matrix() {
        let mut central = Central::new(Axis::Z, 100.0).unwrap();
        central.set_distance(200.0).unwrap();
        assert!((central.matrix.m[3][2] - 1.0 / 200.0).abs() < 1e-15);
        assert!(central.set_distance(0.0).is_err());
    }

    #[test]
    fn test_screen_mapping_per_axis() {
        let p = Point3d::new(1.0, 2.0, 3.0);

        let on_x = Projection::orthographic(Axis::X).project(&p).unwrap();
        assert!((on_x.x - 3.0).abs() < 1e-12);
        assert!((on_x.y + 2.0).abs() < 1e-12);

        let on_y = Projection::orthographic(Axis::Y).project(&p).unwrap();
        assert!((on_y.x - 1.0).abs() < 1e-12);
        assert!((on_y.y + 3.0).abs() < 1e-12);

        let on_z = Projection::orthographic(Axis::Z).project(&p).unwrap();
        assert!((on_z.x - 1.0).abs() < 1e-12);
        assert!((on_z.y + 2.0).abs() < 1e-12);
    }
}
