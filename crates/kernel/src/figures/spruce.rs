use tracing::{info, instrument};

use crate::error::GeometryError;
use crate::geometry::matrix::Mat4;
use crate::geometry::point::Point3d;
use crate::mesh::figure::Figure;
use crate::mesh::store::MeshStore;

use super::cone::build_cone;
use super::trunk::{TrunkParams, build_trunk};

/// A stylized spruce tree: a cone crown above a prism-stack trunk.
///
/// Crown and trunk stay separately addressable so a renderer can style
/// them independently. The topology is fixed after construction; only
/// vertex positions change under affine application.
#[derive(Debug, Clone, PartialEq)]
pub struct Spruce {
    pub crown: Figure,
    pub trunk: Figure,
    pub center: Point3d,
}

impl Spruce {
    pub fn figures(&self) -> [&Figure; 2] {
        [&self.crown, &self.trunk]
    }

    pub fn apply_affine(&self, store: &mut MeshStore, matrix: &Mat4) -> Result<(), GeometryError> {
        self.crown.apply_affine(store, matrix)?;
        self.trunk.apply_affine(store, matrix)
    }
}

/// Build a spruce: a cone of the given radius/height/level count at
/// `center`, with a trunk of height `height / 4` directly below it.
#[instrument(skip(store))]
pub fn build_spruce(
    store: &mut MeshStore,
    center: Point3d,
    height: f64,
    radius: f64,
    levels_count: usize,
) -> Result<Spruce, GeometryError> {
    info!(height, radius, levels_count, "building spruce figure");

    let crown = build_cone(store, center, radius, height, levels_count)?;

    let trunk_height = height / 4.0;
    let trunk_center = Point3d::new(center.x, center.y - trunk_height, center.z);
    let trunk = build_trunk(store, trunk_center, trunk_height, TrunkParams::default())?;

    Ok(Spruce {
        crown,
        trunk,
        center,
    })
}
