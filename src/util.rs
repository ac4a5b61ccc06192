//! Geometry helpers shared by the drawing surface and layouts.

/// Axis-aligned rectangle in canvas pixels (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from two corners (inclusive min, exclusive max).
    ///
    /// Corners may be given in any order.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Option<Self> {
        Self::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs())
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Corner radius clamped so opposite arcs never overlap.
    pub fn clamp_radius(&self, radius: f64) -> f64 {
        radius.max(0.0).min(self.width / 2.0).min(self.height / 2.0)
    }
}
