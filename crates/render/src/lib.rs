pub mod config;
pub mod pipeline;
pub mod surface;
pub mod svg;
pub mod view;

pub use pipeline::{Layer, render_scene};
pub use surface::{Color, DrawSurface, Fill, Stroke};
pub use svg::SvgSurface;
pub use view::ViewState;
