use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::GeometryError;
use crate::geometry::point::Point3d;
use crate::mesh::figure::Figure;
use crate::mesh::polygon::{Polygon, Rectangle, Triangle};
use crate::mesh::store::{MeshStore, VertexId};

/// Upper bound on the ground-face pinwheel recursion.
const MAX_GROUND_DEPTH: usize = 3;

/// An axis-aligned rectangular box defined by its bottom-face center, the
/// half-extents along X and Z, and its height along Y.
///
/// Exposes the top and bottom faces plus the four side faces built from
/// cyclically paired corners, all validated as true rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Parallelepiped {
    bottom_ring: [VertexId; 4],
    top_ring: [VertexId; 4],
    bottom: Rectangle,
    top: Rectangle,
    sides: [Rectangle; 4],
}

impl Parallelepiped {
    pub fn new(
        store: &mut MeshStore,
        center: Point3d,
        dx: f64,
        dz: f64,
        height: f64,
    ) -> Result<Self, GeometryError> {
        let offsets = [(dx, dz), (-dx, dz), (-dx, -dz), (dx, -dz)];
        let bottom_ring =
            offsets.map(|(ox, oz)| store.insert(Point3d::new(center.x + ox, center.y, center.z + oz)));
        let top_ring = offsets.map(|(ox, oz)| {
            store.insert(Point3d::new(center.x + ox, center.y + height, center.z + oz))
        });

        let bottom = Self::face(store, &bottom_ring)?;
        let top = Self::face(store, &top_ring)?;
        let sides = [
            Self::side(store, &top_ring, &bottom_ring, 0)?,
            Self::side(store, &top_ring, &bottom_ring, 1)?,
            Self::side(store, &top_ring, &bottom_ring, 2)?,
            Self::side(store, &top_ring, &bottom_ring, 3)?,
        ];

        Ok(Self {
            bottom_ring,
            top_ring,
            bottom,
            top,
            sides,
        })
    }

    /// Horizontal face over a 4-vertex ring, corner-mapped so the drawing
    /// order equals the ring order.
    fn face(store: &MeshStore, ring: &[VertexId; 4]) -> Result<Rectangle, GeometryError> {
        Rectangle::new(store, ring[0], ring[3], ring[1], ring[2])
    }

    /// Side face between the top and bottom rings at corner `i`.
    fn side(
        store: &MeshStore,
        top: &[VertexId; 4],
        bottom: &[VertexId; 4],
        i: usize,
    ) -> Result<Rectangle, GeometryError> {
        let j = (i + 1) % 4;
        Rectangle::new(store, top[i], top[j], bottom[i], bottom[j])
    }

    pub fn bottom(&self) -> Rectangle {
        self.bottom
    }

    pub fn top(&self) -> Rectangle {
        self.top
    }

    pub fn sides(&self) -> [Rectangle; 4] {
        self.sides
    }

    pub fn bottom_ring(&self) -> &[VertexId; 4] {
        &self.bottom_ring
    }

    pub fn top_ring(&self) -> &[VertexId; 4] {
        &self.top_ring
    }

    pub fn polygons(&self) -> Vec<Polygon> {
        let mut polygons = vec![Polygon::from(self.bottom), Polygon::from(self.top)];
        polygons.extend(self.sides.iter().map(|&side| Polygon::from(side)));
        polygons
    }

    pub fn center(&self, store: &MeshStore) -> Point3d {
        let mut ids = Vec::with_capacity(8);
        ids.extend_from_slice(&self.bottom_ring);
        ids.extend_from_slice(&self.top_ring);
        store.centroid(&ids)
    }
}

/// Rendering granularity of the trunk mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrunkParams {
    /// Each prism side face is split into this many equal sub-rectangles.
    pub side_subdivisions: usize,
    /// Pinwheel recursion depth of the ground face, clamped to 3.
    pub ground_subdivision_depth: usize,
}

impl Default for TrunkParams {
    fn default() -> Self {
        Self {
            side_subdivisions: 2,
            ground_subdivision_depth: 1,
        }
    }
}

/// Build the trunk: three stacked prisms of sharply decreasing width,
/// joined by triangulated collars, with subdivided side and ground faces.
///
/// The prism half-widths are `height`, `height/3` and `height/12`, their
/// heights `height/6`, `height/2` and `height/3`. Prism tops are never
/// emitted as faces; each collar (or the cone above) covers them.
#[instrument(skip(store))]
pub fn build_trunk(
    store: &mut MeshStore,
    center: Point3d,
    height: f64,
    params: TrunkParams,
) -> Result<Figure, GeometryError> {
    info!(height, ?params, "building trunk figure");

    let h6 = height / 6.0;
    let h3 = height / 3.0;
    let h12 = height / 12.0;

    let prisms = [
        Parallelepiped::new(store, center, height, height, h6)?,
        Parallelepiped::new(
            store,
            Point3d::new(center.x, center.y + h6, center.z),
            h3,
            h3,
            height / 2.0,
        )?,
        Parallelepiped::new(
            store,
            Point3d::new(center.x, center.y + 2.0 * height / 3.0, center.z),
            h12,
            h12,
            h3,
        )?,
    ];

    let depth = params.ground_subdivision_depth.min(MAX_GROUND_DEPTH);
    let mut polygons = pinwheel_subdivide(store, prisms[0].bottom(), depth)?;

    for (i, prism) in prisms.iter().enumerate() {
        if i > 0 {
            polygons.push(prism.bottom().into());
        }

        for side in prism.sides() {
            for part in side.split(store, params.side_subdivisions)? {
                polygons.push(part.into());
            }
        }

        if i + 1 < prisms.len() {
            polygons.extend(collar(store, prism.top_ring(), prisms[i + 1].bottom_ring()));
        }
    }

    Ok(Figure::new(polygons, center))
}

/// Bridge the wider prism's top ring to the narrower prism's bottom ring.
///
/// Per side: a midpoint on the wide top edge and three triangles spanning
/// the top endpoints, the midpoint and the bottom endpoints, each split
/// once to smooth the joint.
fn collar(store: &mut MeshStore, top: &[VertexId; 4], bottom: &[VertexId; 4]) -> Vec<Polygon> {
    let mut polygons = Vec::with_capacity(4 * 9);

    for i in 0..4 {
        let j = (i + 1) % 4;
        let (t0, t1) = (top[i], top[j]);
        let (b0, b1) = (bottom[i], bottom[j]);

        let mid = store.point(t0).midpoint(&store.point(t1));
        let mid_id = store.insert(mid);

        let bridge = [
            Triangle::new(t0, mid_id, b0),
            Triangle::new(mid_id, b1, b0),
            Triangle::new(mid_id, t1, b1),
        ];
        for triangle in bridge {
            for sub in triangle.split(store) {
                polygons.push(sub.into());
            }
        }
    }

    polygons
}

/// Recursively subdivide a rectangle into 8-way pinwheel sub-quads about
/// its center: the center and edge midpoints carve four quadrants, each
/// halved, and every sub-quad recurses until `depth` runs out.
fn pinwheel_subdivide(
    store: &mut MeshStore,
    rect: Rectangle,
    depth: usize,
) -> Result<Vec<Polygon>, GeometryError> {
    if depth == 0 {
        return Ok(vec![rect.into()]);
    }

    let tl = store.point(rect.top_left);
    let tr = store.point(rect.top_right);
    let bl = store.point(rect.bottom_left);
    let br = store.point(rect.bottom_right);

    let center = store.insert(crate::geometry::point::centroid(&[tl, tr, bl, br]));
    let top_mid = store.insert(tl.midpoint(&tr));
    let bottom_mid = store.insert(bl.midpoint(&br));
    let left_mid = store.insert(tl.midpoint(&bl));
    let right_mid = store.insert(tr.midpoint(&br));

    let quadrants = [
        Rectangle::new(store, rect.top_left, top_mid, left_mid, center)?,
        Rectangle::new(store, top_mid, rect.top_right, center, right_mid)?,
        Rectangle::new(store, left_mid, center, rect.bottom_left, bottom_mid)?,
        Rectangle::new(store, center, right_mid, bottom_mid, rect.bottom_right)?,
    ];

    let mut result = Vec::new();
    for quadrant in quadrants {
        for half in quadrant.split(store, 2)? {
            result.extend(pinwheel_subdivide(store, half, depth - 1)?);
        }
    }
    Ok(result)
}
