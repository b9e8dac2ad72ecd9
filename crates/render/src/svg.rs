//! SVG implementation of the drawing contract.

use spruce_kernel::Point2d;

use crate::surface::{DrawSurface, Fill, Stroke};

/// A fixed-size SVG canvas with the origin at its center and y growing
/// downward, matching the pipeline's screen convention.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    show_axes: bool,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            show_axes: false,
            body: String::new(),
        }
    }

    /// Draw a dashed horizontal/vertical cross-hair through the origin.
    pub fn with_axes(mut self) -> Self {
        self.show_axes = true;
        self
    }

    fn tx(&self, x: f64) -> f64 {
        x + self.width / 2.0
    }

    fn ty(&self, y: f64) -> f64 {
        y + self.height / 2.0
    }

    pub fn polygon_count(&self) -> usize {
        self.body.matches("<polygon").count()
    }

    /// Consume the surface and produce the SVG document.
    pub fn finish(self, title: &str) -> String {
        let width = self.width;
        let height = self.height;

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" style=\"background:#ffffff\">\n\
             <text x=\"{}\" y=\"20\" font-family=\"monospace\" font-size=\"13\" fill=\"#555\" text-anchor=\"middle\">{title}</text>\n",
            width / 2.0
        );

        if self.show_axes {
            let (cx, cy) = (width / 2.0, height / 2.0);
            let axis_color = crate::surface::Color::CYAN.to_css();
            svg.push_str(&format!(
                "  <line x1=\"0\" y1=\"{cy}\" x2=\"{width}\" y2=\"{cy}\" stroke=\"{axis_color}\" stroke-width=\"1\" stroke-dasharray=\"8 4\"/>\n\
                 \x20 <line x1=\"{cx}\" y1=\"0\" x2=\"{cx}\" y2=\"{height}\" stroke=\"{axis_color}\" stroke-width=\"1\" stroke-dasharray=\"8 4\"/>\n"
            ));
        }

        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawSurface for SvgSurface {
    fn draw_closed_polyline(&mut self, points: &[Point2d], stroke: &Stroke, fill: Option<&Fill>) {
        if points.is_empty() {
            return;
        }

        let coords: Vec<String> = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", self.tx(p.x), self.ty(p.y)))
            .collect();

        let fill_attr = match fill {
            Some(f) => f.color.to_css(),
            None => "none".to_string(),
        };

        self.body.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            coords.join(" "),
            fill_attr,
            stroke.color.to_css(),
            stroke.width
        ));
    }
}
