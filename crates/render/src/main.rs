//! Generate SVG views of the spruce scene: three fixed orthographic
//! projections plus the main configurable view.

use std::fs;
use std::path::Path;

use spruce_kernel::figures::build_spruce;
use spruce_kernel::mesh::MeshStore;
use spruce_kernel::{Axis, Projection, Transformation};

use spruce_render::config::{SceneConfig, load_config};
use spruce_render::pipeline::{Layer, render_scene};
use spruce_render::surface::{Color, Fill, Stroke};
use spruce_render::svg::SvgSurface;

const VIEW_SIZE: f64 = 400.0;

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path)).expect("load scene config"),
        None => SceneConfig::default(),
    };

    let mut store = MeshStore::new();
    let spruce = build_spruce(
        &mut store,
        config.center(),
        config.spruce.height,
        config.spruce.radius,
        config.spruce.levels,
    )
    .expect("build spruce");

    fs::create_dir_all("docs/renders").expect("create docs/renders dir");

    let outline = Stroke::default();
    let wireframe = [
        Layer::wireframe(&spruce.crown, outline),
        Layer::wireframe(&spruce.trunk, outline),
    ];
    let painted = [
        Layer::filled(&spruce.crown, outline, Fill::new(Color::SPRUCE_GREEN)),
        Layer::filled(&spruce.trunk, outline, Fill::new(Color::BARK_BROWN)),
    ];

    // Side views: fixed orthographic projections, untransformed scene.
    let identity = Transformation::default();
    for (axis, name) in [(Axis::Z, "front"), (Axis::X, "side"), (Axis::Y, "top")] {
        let projection = Projection::orthographic(axis);
        let mut surface = SvgSurface::new(VIEW_SIZE, VIEW_SIZE).with_axes();
        render_scene(&store, &wireframe, &identity, &projection, &mut surface)
            .expect("render orthographic view");

        let path = format!("docs/renders/spruce_{name}.svg");
        fs::write(&path, surface.finish(&format!("Orthographic ({name})"))).expect("write svg");
        println!("  {path}");
    }

    // Main view: configured projection and transformation, filled.
    {
        let projection = config.projection().expect("projection config");
        let transformation = config.transformation();
        let mut surface = SvgSurface::new(2.0 * VIEW_SIZE, 2.0 * VIEW_SIZE);
        render_scene(&store, &painted, &transformation, &projection, &mut surface)
            .expect("render main view");

        let path = "docs/renders/spruce_main.svg";
        let title = format!(
            "Spruce (h={}, r={}, levels={})",
            config.spruce.height, config.spruce.radius, config.spruce.levels
        );
        fs::write(path, surface.finish(&title)).expect("write svg");
        println!("  {path}");
    }

    let polygon_count = spruce.crown.polygons.len() + spruce.trunk.polygons.len();
    println!("{polygon_count} polygons, {} vertices", store.len());
    println!("SVGs written to docs/renders/");
}
