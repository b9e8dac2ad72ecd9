use std::collections::HashSet;

use slotmap::Key;

use crate::error::GeometryError;
use crate::geometry::matrix::Mat4;
use crate::geometry::point::Point3d;

use super::polygon::Polygon;
use super::store::{MeshStore, VertexId};

/// A named collection of polygons with a designated center point.
///
/// Polygons may share vertices; `apply_affine` visits each distinct vertex
/// exactly once, so stitched faces move together.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub polygons: Vec<Polygon>,
    pub center: Point3d,
}

impl Figure {
    pub fn new(polygons: Vec<Polygon>, center: Point3d) -> Self {
        Self { polygons, center }
    }

    /// All vertex ids referenced by this figure, each exactly once, in
    /// first-seen order.
    pub fn distinct_vertex_ids(&self) -> Vec<VertexId> {
        let mut seen: HashSet<u64> = HashSet::new();
        let mut ids = Vec::new();
        for polygon in &self.polygons {
            for id in polygon.vertex_ids() {
                if seen.insert(id.data().as_ffi()) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    /// Transform every distinct vertex of the figure in place.
    ///
    /// The figure's designated center is not touched; it describes the
    /// model-space anchor, not a derived quantity.
    pub fn apply_affine(&self, store: &mut MeshStore, matrix: &Mat4) -> Result<(), GeometryError> {
        for id in self.distinct_vertex_ids() {
            let transformed = matrix.apply(&store.point(id))?;
            store.set_point(id, transformed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::affine;
    use crate::mesh::polygon::Triangle;

    #[test]
    fn test_distinct_ids_deduplicate_shared_vertices() {
        let mut store = MeshStore::new();
        let a = store.insert(Point3d::new(0.0, 0.0, 0.0));
        let b = store.insert(Point3d::new(1.0, 0.0, 0.0));
        let c = store.insert(Point3d::new(0.0, 1.0, 0.0));
        let d = store.insert(Point3d::new(1.0, 1.0, 0.0));

        // Two triangles sharing the b-c edge.
        let figure = Figure::new(
            vec![
                Polygon::from(Triangle::new(a, b, c)),
                Polygon::from(Triangle::new(b, d, c)),
            ],
            Point3d::ORIGIN,
        );

        assert_eq!(figure.distinct_vertex_ids().len(), 4);
    }

    #[test]
    fn test_apply_affine_moves_shared_vertices_once() {
        let mut store = MeshStore::new();
        let a = store.insert(Point3d::new(1.0, 0.0, 0.0));
        let b = store.insert(Point3d::new(0.0, 1.0, 0.0));
        let c = store.insert(Point3d::new(0.0, 0.0, 1.0));
        let d = store.insert(Point3d::new(1.0, 1.0, 1.0));

        let figure = Figure::new(
            vec![
                Polygon::from(Triangle::new(a, b, c)),
                Polygon::from(Triangle::new(b, c, d)),
            ],
            Point3d::ORIGIN,
        );

        figure
            .apply_affine(&mut store, &affine::translation(10.0, 0.0, 0.0))
            .unwrap();

        // b is shared by both triangles but must have moved exactly once.
        let p = store.point(b);
        assert!((p.x - 10.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }
}
