use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

use crate::geometry::point::{self, Point3d};

new_key_type! {
    pub struct VertexId;
}

/// Arena-based storage for mesh vertices.
///
/// Polygons reference vertices by id, which makes sharing auditable:
/// intentional aliasing at a stitch point is a shared `VertexId`, and an
/// intentional copy is a fresh insertion. Transforming a figure therefore
/// moves every face that references a shared vertex together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshStore {
    pub vertices: SlotMap<VertexId, Point3d>,
}

impl MeshStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, point: Point3d) -> VertexId {
        self.vertices.insert(point)
    }

    pub fn point(&self, id: VertexId) -> Point3d {
        self.vertices[id]
    }

    pub fn set_point(&mut self, id: VertexId, point: Point3d) {
        self.vertices[id] = point;
    }

    /// Allocate an independent copy of an existing vertex.
    pub fn clone_vertex(&mut self, id: VertexId) -> VertexId {
        let p = self.vertices[id];
        self.vertices.insert(p)
    }

    /// Arithmetic-mean center of the referenced vertices.
    pub fn centroid(&self, ids: &[VertexId]) -> Point3d {
        let points: Vec<Point3d> = ids.iter().map(|&id| self.vertices[id]).collect();
        point::centroid(&points)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
