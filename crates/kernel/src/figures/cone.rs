use tracing::{info, instrument};

use crate::error::GeometryError;
use crate::geometry::point::Point3d;
use crate::mesh::cyclic::cyclic_pairs;
use crate::mesh::figure::Figure;
use crate::mesh::polygon::{Polygon, Ring, Triangle};
use crate::mesh::store::{MeshStore, VertexId};

/// Number of sides of every cone ring. Fixed by design, not a parameter.
pub const SIDES_COUNT: usize = 10;

/// Fan-triangulate a ring around a hub vertex: each cyclically adjacent
/// vertex pair forms a triangle with the hub.
fn fan_triangles(ring: &Ring, hub: VertexId) -> Result<Vec<Polygon>, GeometryError> {
    let mut polygons = Vec::with_capacity(ring.0.len());
    for (a, b) in cyclic_pairs(&ring.0)? {
        polygons.push(Polygon::from(Triangle::new(*a, *b, hub)));
    }
    Ok(polygons)
}

/// Build a faceted cone: a 10-sided base ring fan-triangulated around the
/// base center, `levels_count` shrinking intermediate rings stitched into
/// quads, and a final fan up to the apex.
///
/// Each intermediate ring rises by `height / (levels_count + 1)` and
/// halves the radius of the previous one. With `levels_count = 0` the cone
/// degenerates to the two fans and no quads.
#[instrument(skip(store))]
pub fn build_cone(
    store: &mut MeshStore,
    base_center: Point3d,
    radius: f64,
    height: f64,
    levels_count: usize,
) -> Result<Figure, GeometryError> {
    info!(radius, height, levels_count, "building cone figure");

    let base = Ring::regular(store, base_center, radius, SIDES_COUNT);
    let base_hub = store.insert(base_center);
    let mut polygons = fan_triangles(&base, base_hub)?;

    // The stitching chain starts from an independent copy of the base ring;
    // the base fan keeps its own vertices.
    let mut current_ring = base.duplicated(store);
    let mut current_center = base_center;
    let mut current_radius = radius;
    let height_increment = height / (levels_count as f64 + 1.0);

    for _ in 0..levels_count {
        current_center.y += height_increment;
        current_radius /= 2.0;
        let next_ring = Ring::regular(store, current_center, current_radius, SIDES_COUNT);

        for i in 0..SIDES_COUNT {
            let j = (i + 1) % SIDES_COUNT;
            polygons.push(Polygon::from(Ring(vec![
                current_ring.0[i],
                next_ring.0[i],
                next_ring.0[j],
                current_ring.0[j],
            ])));
        }

        current_ring = next_ring;
    }

    let apex = store.insert(Point3d::new(
        base_center.x,
        base_center.y + height,
        base_center.z,
    ));
    polygons.extend(fan_triangles(&current_ring, apex)?);

    let mut figure = Figure::new(polygons, base_center);
    figure.center = store.centroid(&figure.distinct_vertex_ids());
    Ok(figure)
}
