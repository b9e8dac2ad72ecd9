//! Factories for the affine transformation matrices.

use super::axis::Axis;
use super::matrix::Mat4;

/// Translation by `(dx, dy, dz)`.
pub fn translation(dx: f64, dy: f64, dz: f64) -> Mat4 {
    #[rustfmt::skip]
    let m = [
        [1.0, 0.0, 0.0, dx],
        [0.0, 1.0, 0.0, dy],
        [0.0, 0.0, 1.0, dz],
        [0.0, 0.0, 0.0, 1.0],
    ];
    Mat4::from_rows(m)
}

/// Scaling by independent per-axis factors.
pub fn scaling(kx: f64, ky: f64, kz: f64) -> Mat4 {
    #[rustfmt::skip]
    let m = [
        [kx,  0.0, 0.0, 0.0],
        [0.0, ky,  0.0, 0.0],
        [0.0, 0.0, kz,  0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    Mat4::from_rows(m)
}

pub fn uniform_scaling(s: f64) -> Mat4 {
    scaling(s, s, s)
}

/// Reflection across the listed axes (each listed axis gets -1 on the
/// diagonal). Duplicates in `axes` are harmless.
pub fn reflection(axes: &[Axis]) -> Mat4 {
    let mut m = Mat4::identity();
    for axis in axes {
        let i = axis.index();
        m.m[i][i] = -1.0;
    }
    m
}

/// Rotation by `angle_in_degrees` around `axis`.
///
/// Builds the 2D rotation block for the plane perpendicular to `axis` and
/// embeds it into the identity at the two other coordinate rows/columns,
/// leaving the axis's own row and column untouched.
pub fn rotation(angle_in_degrees: f64, axis: Axis) -> Mat4 {
    let (sin, cos) = angle_in_degrees.to_radians().sin_cos();
    let (a, b) = axis.others();
    let (a, b) = (a.index(), b.index());

    let mut m = Mat4::identity();
    m.m[a][a] = cos;
    m.m[a][b] = -sin;
    m.m[b][a] = sin;
    m.m[b][b] = cos;
    m
}
