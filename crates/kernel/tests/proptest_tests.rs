//! Property-based tests for the geometry pipeline using the `proptest` crate.

use proptest::prelude::*;

use spruce_kernel::figures::{SIDES_COUNT, build_cone};
use spruce_kernel::geometry::affine;
use spruce_kernel::geometry::point::Point3d;
use spruce_kernel::mesh::MeshStore;
use spruce_kernel::transformation::increase_angle;
use spruce_kernel::{Axis, Mat4};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary 3D coordinate tuple in a reasonable floating-point range.
fn arb_point() -> impl Strategy<Value = (f64, f64, f64)> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0, -1000.0f64..1000.0)
}

/// Arbitrary rotation angle in degrees, spanning several full turns.
fn arb_angle() -> impl Strategy<Value = f64> {
    -720.0f64..720.0
}

/// Arbitrary coordinate axis.
fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

/// Arbitrary affine matrix composed from a rotation, a scaling and a
/// translation.
fn arb_affine() -> impl Strategy<Value = Mat4> {
    (arb_angle(), arb_axis(), 0.1f64..10.0, arb_point()).prop_map(
        |(angle, axis, scale, (dx, dy, dz))| {
            affine::rotation(angle, axis)
                * affine::uniform_scaling(scale)
                * affine::translation(dx, dy, dz)
        },
    )
}

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// 1. Rotation composition additivity: R(a) * R(b) == R(a + b)
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn rotation_composition_is_additive(
        a in arb_angle(),
        b in arb_angle(),
        axis in arb_axis(),
        (px, py, pz) in arb_point(),
    ) {
        let p = Point3d::new(px, py, pz);
        let composed = (affine::rotation(a, axis) * affine::rotation(b, axis))
            .apply(&p)
            .unwrap();
        let direct = affine::rotation(a + b, axis).apply(&p).unwrap();
        prop_assert!(composed.distance_to(&direct) < TOL,
            "composed={composed:?} direct={direct:?}");
    }
}

// ---------------------------------------------------------------------------
// 2. Application respects composition: (A*B)(p) == A(B(p))
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn application_respects_composition(
        a in arb_affine(),
        b in arb_affine(),
        (px, py, pz) in arb_point(),
    ) {
        let p = Point3d::new(px, py, pz);
        let composed = (a * b).apply(&p).unwrap();
        let stepwise = a.apply(&b.apply(&p).unwrap()).unwrap();
        // Coordinates reach ~1e4 after scaling, so compare relative.
        let scale = 1.0 + composed.distance_to(&Point3d::ORIGIN);
        prop_assert!(composed.distance_to(&stepwise) / scale < TOL,
            "composed={composed:?} stepwise={stepwise:?}");
    }
}

// ---------------------------------------------------------------------------
// 3. Uniform scaling scales distance from the origin by |k|
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn uniform_scaling_scales_origin_distance(
        k in -10.0f64..10.0,
        (px, py, pz) in arb_point(),
    ) {
        prop_assume!(k.abs() > 1e-3);
        let p = Point3d::new(px, py, pz);
        let scaled = affine::uniform_scaling(k).apply(&p).unwrap();
        let before = p.distance_to(&Point3d::ORIGIN);
        let after = scaled.distance_to(&Point3d::ORIGIN);
        prop_assert!((after - k.abs() * before).abs() < TOL * (1.0 + before));
    }
}

// ---------------------------------------------------------------------------
// 4. Angle wrapping keeps accumulated rotations within (-360, 360]
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn increase_angle_stays_in_range(
        start in -360.0f64..=360.0,
        delta in -360.0f64..360.0,
    ) {
        let wrapped = increase_angle(start, delta);
        prop_assert!(wrapped > -360.0 - TOL && wrapped <= 360.0 + TOL,
            "wrapped={wrapped}");
    }
}

// ---------------------------------------------------------------------------
// 5. Cone polygon count: 2 fans plus one quad ring per level
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    fn cone_polygon_count_matches_levels(
        levels in 0usize..6,
        radius in 1.0f64..100.0,
        height in 1.0f64..100.0,
    ) {
        let mut store = MeshStore::new();
        let cone = build_cone(&mut store, Point3d::ORIGIN, radius, height, levels).unwrap();
        prop_assert_eq!(cone.polygons.len(), (2 + levels) * SIDES_COUNT);
    }
}
