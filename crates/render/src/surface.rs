//! The drawing contract consumed by the render pipeline.

use serde::{Deserialize, Serialize};
use spruce_kernel::Point2d;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const SPRUCE_GREEN: Self = Self { r: 34, g: 102, b: 51 };
    pub const BARK_BROWN: Self = Self { r: 121, g: 85, b: 61 };
    pub const CYAN: Self = Self { r: 0, g: 255, b: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Outline style for a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Color::BLACK, 2.0)
    }
}

/// Interior fill style for a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

/// A 2D surface that can paint closed polygon outlines.
///
/// `points` arrive in drawing order; the surface connects consecutive
/// points with straight segments and closes the loop from the last point
/// back to the first. When a fill is given, the enclosed region is painted
/// with it as well.
pub trait DrawSurface {
    fn draw_closed_polyline(&mut self, points: &[Point2d], stroke: &Stroke, fill: Option<&Fill>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_css() {
        assert_eq!(Color::new(10, 20, 30).to_css(), "rgb(10,20,30)");
    }
}
