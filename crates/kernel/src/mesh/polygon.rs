//! The polygon family: generic vertex rings, triangles with centroid
//! splitting, and validated rectangles with edge-wise subdivision.

use std::f64::consts::TAU;

use crate::error::GeometryError;
use crate::geometry::point::Point3d;

use super::store::{MeshStore, VertexId};

/// A generic ordered vertex ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(pub Vec<VertexId>);

impl Ring {
    /// Generate a regular polygon: `sides_count` vertices evenly spaced on
    /// a circle of `radius` in the XZ plane at the center's height.
    pub fn regular(
        store: &mut MeshStore,
        center: Point3d,
        radius: f64,
        sides_count: usize,
    ) -> Self {
        let step = TAU / sides_count as f64;
        let ids = (0..sides_count)
            .map(|i| {
                let angle = step * i as f64;
                store.insert(Point3d::new(
                    center.x + radius * angle.cos(),
                    center.y,
                    center.z + radius * angle.sin(),
                ))
            })
            .collect();
        Self(ids)
    }

    /// Allocate an independent copy of every vertex in the ring.
    pub fn duplicated(&self, store: &mut MeshStore) -> Self {
        Self(self.0.iter().map(|&id| store.clone_vertex(id)).collect())
    }
}

/// A triangle over three arena vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: VertexId,
    pub b: VertexId,
    pub c: VertexId,
}

impl Triangle {
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        Self { a, b, c }
    }

    /// Split about the centroid into three sub-triangles.
    ///
    /// The corner vertices are shared with the original; only the centroid
    /// vertex is newly allocated.
    pub fn split(&self, store: &mut MeshStore) -> [Triangle; 3] {
        let center = store.centroid(&[self.a, self.b, self.c]);
        let center_id = store.insert(center);
        [
            Triangle::new(self.a, self.b, center_id),
            Triangle::new(self.b, self.c, center_id),
            Triangle::new(self.c, self.a, center_id),
        ]
    }
}

/// A rectangle over four arena vertices, validated at construction.
///
/// The corner names describe the face as seen from outside; the drawing
/// order of the corners is top-left, bottom-left, bottom-right, top-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub top_left: VertexId,
    pub top_right: VertexId,
    pub bottom_left: VertexId,
    pub bottom_right: VertexId,
}

impl Rectangle {
    /// Build a rectangle, checking that opposite sides have equal length
    /// and that both diagonals have equal length.
    pub fn new(
        store: &MeshStore,
        top_left: VertexId,
        top_right: VertexId,
        bottom_left: VertexId,
        bottom_right: VertexId,
    ) -> Result<Self, GeometryError> {
        let tl = store.point(top_left);
        let tr = store.point(top_right);
        let bl = store.point(bottom_left);
        let br = store.point(bottom_right);

        let tol = crate::default_tolerance();
        let is_rectangle = tol.lengths_equal(tl.distance_to(&tr), bl.distance_to(&br))
            && tol.lengths_equal(tl.distance_to(&bl), tr.distance_to(&br))
            && tol.lengths_equal(tl.distance_to(&br), tr.distance_to(&bl));
        if !is_rectangle {
            return Err(GeometryError::InvalidRectangle);
        }

        Ok(Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        })
    }

    /// Split into `sub_rects_count` equal rectangles by linear
    /// interpolation along the top/bottom edge pair.
    ///
    /// The outer corners are shared with the original rectangle; the
    /// interior column vertices are newly allocated and shared between
    /// neighboring sub-rectangles.
    pub fn split(
        &self,
        store: &mut MeshStore,
        sub_rects_count: usize,
    ) -> Result<Vec<Rectangle>, GeometryError> {
        if sub_rects_count == 0 {
            return Err(GeometryError::InvalidDimension {
                parameter: "sub_rects_count",
                value: 0.0,
            });
        }

        let step =
            (store.point(self.top_right) - store.point(self.top_left)) / sub_rects_count as f64;

        let mut result = Vec::with_capacity(sub_rects_count);
        let mut prev_top = self.top_left;
        let mut prev_bottom = self.bottom_left;

        for i in 0..sub_rects_count {
            let (cur_top, cur_bottom) = if i == sub_rects_count - 1 {
                (self.top_right, self.bottom_right)
            } else {
                let top = store.insert(store.point(prev_top) + step);
                let bottom = store.insert(store.point(prev_bottom) + step);
                (top, bottom)
            };

            result.push(Rectangle {
                top_left: prev_top,
                top_right: cur_top,
                bottom_left: prev_bottom,
                bottom_right: cur_bottom,
            });

            prev_top = cur_top;
            prev_bottom = cur_bottom;
        }

        Ok(result)
    }

    pub fn width(&self, store: &MeshStore) -> f64 {
        store
            .point(self.top_left)
            .distance_to(&store.point(self.top_right))
    }
}

/// Closed set of polygon variants sharing the capability interface:
/// vertex ids in drawing order, resolved points, and centroid.
#[derive(Debug, Clone, PartialEq)]
pub enum Polygon {
    Ring(Ring),
    Triangle(Triangle),
    Rectangle(Rectangle),
}

impl Polygon {
    /// Vertex ids in drawing order (the closed outline order).
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        match self {
            Self::Ring(ring) => ring.0.clone(),
            Self::Triangle(t) => vec![t.a, t.b, t.c],
            Self::Rectangle(r) => {
                vec![r.top_left, r.bottom_left, r.bottom_right, r.top_right]
            }
        }
    }

    pub fn points(&self, store: &MeshStore) -> Vec<Point3d> {
        self.vertex_ids()
            .iter()
            .map(|&id| store.point(id))
            .collect()
    }

    /// Arithmetic mean of the polygon's vertices.
    pub fn center(&self, store: &MeshStore) -> Point3d {
        store.centroid(&self.vertex_ids())
    }
}

impl From<Ring> for Polygon {
    fn from(ring: Ring) -> Self {
        Self::Ring(ring)
    }
}

impl From<Triangle> for Polygon {
    fn from(t: Triangle) -> Self {
        Self::Triangle(t)
    }
}

impl From<Rectangle> for Polygon {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}
