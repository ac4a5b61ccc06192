//! RGBA color type and the palette shared by the card themes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Represents an RGBA color with 8-bit components.
///
/// Alpha 255 is fully opaque, 0 fully transparent.
///
/// # Examples
///
/// ```
/// use sharecard::draw::Color;
/// let mint = Color::rgb(110, 220, 170);
/// let veil = Color::rgba(255, 255, 255, 22);
/// assert_eq!(mint.a, 255);
/// assert!(veil.a < 255);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors, `t` clamped to 0.0..=1.0.
    ///
    /// Each channel is rounded to the nearest integer.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Perceived brightness in 0.0..=1.0 (Rec. 601 luma weights).
    pub fn brightness(&self) -> f64 {
        (self.r as f64 * 0.299 + self.g as f64 * 0.587 + self.b as f64 * 0.114) / 255.0
    }

    /// Picks dark or light text for legibility on top of this fill.
    pub fn contrasting_text(&self) -> Color {
        if self.brightness() > 0.5 {
            INK_DARK
        } else {
            INK_LIGHT
        }
    }

    /// Components as Cairo floats `(r, g, b, a)` in 0.0..=1.0.
    pub fn to_cairo(self) -> (f64, f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        )
    }

    /// Sets this color as the source of a Cairo context.
    pub fn apply(self, ctx: &cairo::Context) {
        let (r, g, b, a) = self.to_cairo();
        ctx.set_source_rgba(r, g, b, a);
    }
}

// ============================================================================
// Shared palette
// ============================================================================

/// Near-black text for light fills
pub const INK_DARK: Color = Color::rgb(14, 16, 22);

/// Near-white text for dark fills
pub const INK_LIGHT: Color = Color::rgb(235, 235, 240);

/// Positive movement / score accents
pub const POSITIVE: Color = Color::rgb(110, 220, 170);

/// Negative movement
pub const NEGATIVE: Color = Color::rgb(240, 120, 120);

/// Muted secondary text
pub const MUTED: Color = Color::rgb(150, 160, 173);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_endpoints() {
        let a = Color::rgb(0, 100, 200);
        let b = Color::rgb(255, 0, 100);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(128, 50, 150));
    }

    #[test]
    fn lerp_clamps_out_of_range_t() {
        let a = Color::rgb(10, 10, 10);
        let b = Color::rgb(20, 20, 20);
        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn contrasting_text_flips_on_brightness() {
        assert_eq!(Color::rgb(250, 250, 250).contrasting_text(), INK_DARK);
        assert_eq!(Color::rgb(20, 24, 40).contrasting_text(), INK_LIGHT);
        assert_eq!(Color::rgb(247, 147, 26).contrasting_text(), INK_DARK);
    }

    #[test]
    fn cairo_components_are_normalized() {
        let (r, g, b, a) = Color::rgba(255, 0, 51, 0).to_cairo();
        assert_eq!((r, g, b, a), (1.0, 0.0, 0.2, 0.0));
    }
}
