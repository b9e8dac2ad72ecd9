//! Transformation, projection and painter's-algorithm depth sorting.

use std::collections::HashMap;

use tracing::{debug, instrument};

use spruce_kernel::geometry::point;
use spruce_kernel::mesh::{Figure, MeshStore, VertexId};
use spruce_kernel::{GeometryError, Point2d, Point3d, Projection, Transformation};

use crate::surface::{DrawSurface, Fill, Stroke};

/// One styled figure in the scene.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub figure: &'a Figure,
    pub stroke: Stroke,
    pub fill: Option<Fill>,
}

impl<'a> Layer<'a> {
    pub fn wireframe(figure: &'a Figure, stroke: Stroke) -> Self {
        Self {
            figure,
            stroke,
            fill: None,
        }
    }

    pub fn filled(figure: &'a Figure, stroke: Stroke, fill: Fill) -> Self {
        Self {
            figure,
            stroke,
            fill: Some(fill),
        }
    }
}

struct PaintItem {
    points: Vec<Point2d>,
    depth: f64,
    stroke: Stroke,
    fill: Option<Fill>,
}

/// Render the scene onto `surface`.
///
/// Every distinct vertex is affine-transformed once into a per-call
/// scratch table; the mesh itself is never mutated. Each polygon's depth
/// is the coordinate of its transformed centroid on the projection axis,
/// and the whole scene is painted back-to-front (descending depth) so
/// nearer polygons occlude farther ones.
#[instrument(skip_all, fields(layers = layers.len()))]
pub fn render_scene(
    store: &MeshStore,
    layers: &[Layer<'_>],
    transformation: &Transformation,
    projection: &Projection,
    surface: &mut dyn DrawSurface,
) -> Result<(), GeometryError> {
    let affine = transformation.to_affine_matrix();
    let mut transformed: HashMap<VertexId, Point3d> = HashMap::new();
    let mut items: Vec<PaintItem> = Vec::new();

    for layer in layers {
        for polygon in &layer.figure.polygons {
            let ids = polygon.vertex_ids();

            let mut points3 = Vec::with_capacity(ids.len());
            for id in ids {
                let p = match transformed.get(&id) {
                    Some(p) => *p,
                    None => {
                        let p = affine.apply(&store.point(id))?;
                        transformed.insert(id, p);
                        p
                    }
                };
                points3.push(p);
            }

            let depth = point::centroid(&points3).coord(projection.axis());
            let points = points3
                .iter()
                .map(|p| projection.project(p))
                .collect::<Result<Vec<_>, _>>()?;

            items.push(PaintItem {
                points,
                depth,
                stroke: layer.stroke,
                fill: layer.fill,
            });
        }
    }

    items.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    debug!(polygons = items.len(), "painting depth-sorted polygons");

    for item in &items {
        surface.draw_closed_polyline(&item.points, &item.stroke, item.fill.as_ref());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spruce_kernel::Axis;
    use spruce_kernel::mesh::{Polygon, Triangle};

    /// Records each painted polygon's first point and fill presence.
    #[derive(Default)]
    struct RecordingSurface {
        painted: Vec<(Vec<Point2d>, bool)>,
    }

    impl DrawSurface for RecordingSurface {
        fn draw_closed_polyline(
            &mut self,
            points: &[Point2d],
            _stroke: &Stroke,
            fill: Option<&Fill>,
        ) {
            self.painted.push((points.to_vec(), fill.is_some()));
        }
    }

    fn triangle_at_depth(store: &mut MeshStore, z: f64) -> Polygon {
        let a = store.insert(Point3d::new(0.0, 0.0, z));
        let b = store.insert(Point3d::new(1.0, 0.0, z));
        let c = store.insert(Point3d::new(0.0, 1.0, z));
        Polygon::from(Triangle::new(a, b, c))
    }

    #[test]
    fn test_depth_sort_is_back_to_front() {
        let mut store = MeshStore::new();
        let figure = Figure::new(
            vec![
                triangle_at_depth(&mut store, 5.0),
                triangle_at_depth(&mut store, 1.0),
                triangle_at_depth(&mut store, 9.0),
            ],
            Point3d::ORIGIN,
        );

        let mut surface = RecordingSurface::default();
        render_scene(
            &store,
            &[Layer::wireframe(&figure, Stroke::default())],
            &Transformation::default(),
            &Projection::central(Axis::Z, 1000.0).unwrap(),
            &mut surface,
        )
        .unwrap();

        assert_eq!(surface.painted.len(), 3);

        // Depth 9 paints first, then 5, then 1. The x coordinates shrink
        // with depth under the central projection, so identify each
        // triangle by its second vertex's projected x.
        let xs: Vec<f64> = surface
            .painted
            .iter()
            .map(|(points, _)| points[1].x)
            .collect();
        assert!((xs[0] - 1.0 / (1.0 + 9.0 / 1000.0)).abs() < 1e-9);
        assert!((xs[1] - 1.0 / (1.0 + 5.0 / 1000.0)).abs() < 1e-9);
        assert!((xs[2] - 1.0 / (1.0 + 1.0 / 1000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_rendering_does_not_mutate_mesh() {
        let mut store = MeshStore::new();
        let polygon = triangle_at_depth(&mut store, 2.0);
        let before = polygon.points(&store);
        let figure = Figure::new(vec![polygon.clone()], Point3d::ORIGIN);

        let mut surface = RecordingSurface::default();
        render_scene(
            &store,
            &[Layer::wireframe(&figure, Stroke::default())],
            &Transformation::new(30.0, 60.0, 2.0),
            &Projection::orthographic(Axis::Z),
            &mut surface,
        )
        .unwrap();

        assert_eq!(polygon.points(&store), before);
    }

    #[test]
    fn test_fill_styles_flow_per_layer() {
        let mut store = MeshStore::new();
        let filled = Figure::new(vec![triangle_at_depth(&mut store, 0.0)], Point3d::ORIGIN);
        let bare = Figure::new(vec![triangle_at_depth(&mut store, 1.0)], Point3d::ORIGIN);

        let mut surface = RecordingSurface::default();
        render_scene(
            &store,
            &[
                Layer::filled(
                    &filled,
                    Stroke::default(),
                    Fill::new(crate::surface::Color::SPRUCE_GREEN),
                ),
                Layer::wireframe(&bare, Stroke::default()),
            ],
            &Transformation::default(),
            &Projection::orthographic(Axis::Z),
            &mut surface,
        )
        .unwrap();

        // The bare figure is farther away, so it paints first.
        assert_eq!(surface.painted.len(), 2);
        assert!(!surface.painted[0].1);
        assert!(surface.painted[1].1);
    }
}
