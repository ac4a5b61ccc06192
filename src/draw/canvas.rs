//! Raster drawing surface for card composition (Cairo-based).
//!
//! A [`Canvas`] owns one Cairo image surface and the context painting it.
//! Renderers thread a canvas through the pipeline by `&mut` and never share
//! it between calls. Translucent panels are built on separate layer canvases
//! and alpha-blended onto the card with [`Canvas::composite`].

use super::color::Color;
use super::font::FontHandle;
use crate::util::Rect;
use cairo::{Context, Format, ImageSurface};
use std::f64::consts::PI;
use thiserror::Error;

/// Failures that prevent a card from being produced at all.
///
/// Everything recoverable (missing assets, fonts, unknown themes) is handled
/// where it happens and never reaches this type.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Surface pixel data unavailable: {0}")]
    PixelAccess(#[from] cairo::BorrowError),
}

/// Mutable raster addressed by (x, y), origin top-left.
pub struct Canvas {
    surface: ImageSurface,
    ctx: Context,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("format", &self.surface.format())
            .finish()
    }
}

impl Canvas {
    /// Opaque RGB canvas, initially black.
    pub fn new(width: i32, height: i32) -> Result<Self, RenderError> {
        Self::from_surface(ImageSurface::create(Format::Rgb24, width, height)?)
    }

    /// Transparent RGBA layer for compositing.
    pub fn layer(width: i32, height: i32) -> Result<Self, RenderError> {
        Self::from_surface(ImageSurface::create(Format::ARgb32, width, height)?)
    }

    /// Wraps an existing surface.
    pub fn from_surface(surface: ImageSurface) -> Result<Self, RenderError> {
        let ctx = Context::new(&surface)?;
        ctx.set_antialias(cairo::Antialias::Best);
        Ok(Self { surface, ctx })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Fills the whole surface, replacing whatever was there.
    pub fn fill(&mut self, color: Color) {
        let _ = self.ctx.save();
        self.ctx.set_operator(cairo::Operator::Source);
        color.apply(&self.ctx);
        let _ = self.ctx.paint();
        let _ = self.ctx.restore();
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        color.apply(&self.ctx);
        self.ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
        let _ = self.ctx.fill();
    }

    /// Fills a rectangle with rounded corners.
    ///
    /// The radius is clamped to half the shorter side.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        let r = rect.clamp_radius(radius);
        if r <= 0.0 {
            self.fill_rect(rect, color);
            return;
        }

        let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
        self.ctx.new_sub_path();
        self.ctx.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
        self.ctx.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
        self.ctx.arc(x + r, y + h - r, r, PI / 2.0, PI);
        self.ctx.arc(x + r, y + r, r, PI, 1.5 * PI);
        self.ctx.close_path();

        color.apply(&self.ctx);
        let _ = self.ctx.fill();
    }

    /// Fills an ellipse using Cairo's arc with scaling.
    pub fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        let _ = self.ctx.save();
        self.ctx.translate(cx, cy);
        self.ctx.scale(rx, ry);
        self.ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
        let _ = self.ctx.restore();

        color.apply(&self.ctx);
        let _ = self.ctx.fill();
    }

    /// Fills a closed polygon through the ordered vertices.
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
        if points.len() < 3 {
            return;
        }

        let (x0, y0) = points[0];
        self.ctx.move_to(x0, y0);
        for &(x, y) in &points[1..] {
            self.ctx.line_to(x, y);
        }
        self.ctx.close_path();

        color.apply(&self.ctx);
        let _ = self.ctx.fill();
    }

    /// Strokes a circular arc; angles in radians, clockwise from +x.
    #[allow(clippy::too_many_arguments)]
    pub fn stroke_arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        line_width: f64,
        color: Color,
    ) {
        if radius <= 0.0 || line_width <= 0.0 {
            return;
        }

        let _ = self.ctx.save();
        self.ctx.new_sub_path();
        self.ctx.arc(cx, cy, radius, start, end);
        self.ctx.set_line_width(line_width);
        self.ctx.set_line_cap(cairo::LineCap::Round);
        color.apply(&self.ctx);
        let _ = self.ctx.stroke();
        let _ = self.ctx.restore();
    }

    /// Draws a single line of text with its baseline at `baseline`.
    pub fn draw_text(&mut self, x: f64, baseline: f64, text: &str, font: &FontHandle, color: Color) {
        if text.is_empty() {
            return;
        }

        let _ = self.ctx.save();

        let layout = pangocairo::functions::create_layout(&self.ctx);
        layout.set_font_description(Some(&font.description));
        layout.set_text(text);

        // Pango positions from the top-left of the line box
        let layout_baseline = layout.baseline() as f64 / pango::SCALE as f64;
        self.ctx.move_to(x, baseline - layout_baseline);
        color.apply(&self.ctx);
        pangocairo::functions::show_layout(&self.ctx, &layout);

        let _ = self.ctx.restore();
    }

    /// Draws text whose line box starts at `top`.
    pub fn draw_text_top(&mut self, x: f64, top: f64, text: &str, font: &FontHandle, color: Color) {
        self.draw_text(x, top + font.ascent, text, font, color);
    }

    /// Alpha-blends `layer` onto this canvas with its top-left at (x, y).
    ///
    /// Uses the OVER operator: `src * src_alpha + dst * (1 - src_alpha)`.
    pub fn composite(&mut self, layer: &Canvas, x: f64, y: f64) -> Result<(), RenderError> {
        layer.surface.flush();
        let _ = self.ctx.save();
        self.ctx.set_operator(cairo::Operator::Over);
        self.ctx.set_source_surface(&layer.surface, x, y)?;
        let _ = self.ctx.paint();
        let _ = self.ctx.restore();
        Ok(())
    }

    /// Reads back one pixel, un-premultiplied. Opaque canvases report alpha 255.
    pub fn pixel(&self, x: i32, y: i32) -> Result<Option<Color>, RenderError> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Ok(None);
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let opaque = self.surface.format() == Format::Rgb24;
        let mut out = None;
        self.surface.with_data(|data| {
            let offset = y as usize * stride + x as usize * 4;
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&data[offset..offset + 4]);
            let value = u32::from_ne_bytes(bytes);
            let a = if opaque { 255 } else { (value >> 24) as u8 };
            let unpremultiply = |c: u32| -> u8 {
                if a == 0 {
                    0
                } else if a == 255 {
                    c as u8
                } else {
                    ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8
                }
            };
            out = Some(Color::rgba(
                unpremultiply((value >> 16) & 0xff),
                unpremultiply((value >> 8) & 0xff),
                unpremultiply(value & 0xff),
                a,
            ));
        })?;
        Ok(out)
    }

    /// Encodes the finished canvas as PNG, consuming it.
    pub fn encode_png(self) -> Result<Vec<u8>, RenderError> {
        let Canvas { surface, ctx } = self;
        drop(ctx);
        surface.flush();

        let mut buf = Vec::new();
        surface.write_to_png(&mut buf)?;
        Ok(buf)
    }
}
