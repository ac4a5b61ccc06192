//! Reusable micro-layouts: key/value rows, shrink-to-fit text, the
//! right-aligned score/APY badge pair and the circular ticker badge.
//!
//! Position math lives in plain functions over [`TextMeasure`] so it can be
//! checked without rasterizing; the `draw_*` functions paint the result.

use super::canvas::Canvas;
use super::color::Color;
use super::font::{FontBook, FontSpec, TextMeasure};
use crate::util::Rect;
use std::f64::consts::PI;

// ============================================================================
// Shrink-to-fit
// ============================================================================

/// Largest size, stepping down from `start.size` by `step`, whose measured
/// width fits `max_width`.
///
/// Sizes tried are `start, start - step, start - 2*step, ...` while they stay
/// at or above `min_size`; the first one with `width <= max_width` wins. When
/// none fits, `min_size` is returned and the text may overflow. A `min_size`
/// above `start.size` is lowered to `start.size`, and a zero step counts as 1.
pub fn shrink_to_fit<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    max_width: f64,
    start: FontSpec,
    min_size: u32,
    step: u32,
) -> FontSpec {
    let floor = min_size.min(start.size);
    let step = step.max(1);

    let mut size = start.size;
    loop {
        let candidate = start.with_size(size);
        if measure.measure_width(text, candidate) <= max_width {
            return candidate;
        }
        match size.checked_sub(step) {
            Some(next) if next >= floor => size = next,
            _ => return start.with_size(floor),
        }
    }
}

// ============================================================================
// Key/value rows
// ============================================================================

/// Styling for one label/value metric row.
#[derive(Debug, Clone, Copy)]
pub struct KeyValueStyle {
    pub key_font: FontSpec,
    pub value_font: FontSpec,
    pub key_color: Color,
    pub value_color: Color,
    /// Gap between the value's right edge and the canvas edge
    pub right_margin: f64,
    /// Canvas width the value is aligned against
    pub total_width: f64,
    /// Vertical offset applied to the value relative to the label
    pub value_dy: f64,
}

impl Default for KeyValueStyle {
    fn default() -> Self {
        Self {
            key_font: FontSpec::regular(28),
            value_font: FontSpec::regular(32),
            key_color: Color::rgb(160, 170, 185),
            value_color: Color::rgb(230, 230, 235),
            right_margin: 80.0,
            total_width: 1200.0,
            value_dy: -4.0,
        }
    }
}

/// Left edge of a right-aligned value: `total_width - right_margin - width`.
pub fn value_x<M: TextMeasure + ?Sized>(measure: &M, value: &str, style: &KeyValueStyle) -> f64 {
    style.total_width - style.right_margin - measure.measure_width(value, style.value_font)
}

/// Label at `(x, top)`, value flush right on the same row.
pub fn draw_key_value(
    canvas: &mut Canvas,
    fonts: &FontBook,
    x: f64,
    top: f64,
    key: &str,
    value: &str,
    style: &KeyValueStyle,
) {
    let key_font = fonts.resolve(style.key_font);
    canvas.draw_text_top(x, top, key, &key_font, style.key_color);

    let value_font = fonts.resolve(style.value_font);
    let vx = value_x(fonts, value, style);
    canvas.draw_text_top(vx, top + style.value_dy, value, &value_font, style.value_color);
}

// ============================================================================
// Badge pair
// ============================================================================

/// Styling for the score/APY pair at the right of a leaderboard row.
#[derive(Debug, Clone, Copy)]
pub struct BadgePairStyle {
    pub font: FontSpec,
    pub score_color: Color,
    pub apy_color: Color,
    /// Horizontal gap between the two badges
    pub gap: f64,
    pub right_margin: f64,
    pub total_width: f64,
    /// Optional pill drawn behind each badge
    pub pill: Option<Color>,
}

impl Default for BadgePairStyle {
    fn default() -> Self {
        Self {
            font: FontSpec::regular(24),
            score_color: Color::rgb(110, 220, 170),
            apy_color: Color::rgb(110, 220, 170),
            gap: 28.0,
            right_margin: 80.0,
            total_width: 1200.0,
            pill: None,
        }
    }
}

/// Horizontal placement of both badges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgePairLayout {
    pub score_x: f64,
    pub score_width: f64,
    pub apy_x: f64,
    pub apy_width: f64,
}

/// Lays the pair out flush right; the score badge always sits left of APY.
pub fn badge_pair_layout<M: TextMeasure + ?Sized>(
    measure: &M,
    score: &str,
    apy: &str,
    style: &BadgePairStyle,
) -> BadgePairLayout {
    let score_width = measure.measure_width(score, style.font);
    let apy_width = measure.measure_width(apy, style.font);
    let right = style.total_width - style.right_margin;
    BadgePairLayout {
        score_x: right - score_width - apy_width - style.gap,
        score_width,
        apy_x: right - apy_width,
        apy_width,
    }
}

/// Padding between a badge's text and its pill.
const PILL_PAD_X: f64 = 10.0;
const PILL_PAD_Y: f64 = 5.0;

/// Draws `score` and `apy` flush right with their text tops at `top`.
pub fn draw_badge_pair(
    canvas: &mut Canvas,
    fonts: &FontBook,
    top: f64,
    score: &str,
    apy: &str,
    style: &BadgePairStyle,
) {
    let layout = badge_pair_layout(fonts, score, apy, style);
    let font = fonts.resolve(style.font);

    if let Some(pill) = style.pill {
        for (x, width) in [
            (layout.score_x, layout.score_width),
            (layout.apy_x, layout.apy_width),
        ] {
            if let Some(rect) = Rect::new(
                x - PILL_PAD_X,
                top - PILL_PAD_Y,
                width + PILL_PAD_X * 2.0,
                font.line_height() + PILL_PAD_Y * 2.0,
            ) {
                let radius = rect.height / 2.0;
                canvas.fill_rounded_rect(rect, radius, pill);
            }
        }
    }

    canvas.draw_text_top(layout.score_x, top, score, &font, style.score_color);
    canvas.draw_text_top(layout.apy_x, top, apy, &font, style.apy_color);
}

// ============================================================================
// Ticker badge
// ============================================================================

/// Maximum characters shown inside a ticker badge.
pub const BADGE_MAX_CHARS: usize = 4;

/// Circular coin badge geometry and colors.
#[derive(Debug, Clone, Copy)]
pub struct TickerBadge {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub glow: Color,
}

/// Badge text: the first four characters of the ticker, uppercased.
pub fn badge_label(symbol: &str) -> String {
    symbol
        .trim()
        .chars()
        .take(BADGE_MAX_CHARS)
        .collect::<String>()
        .to_uppercase()
}

/// Left edge of text centered on `cx`: half the text width left of center.
pub fn centered_text_x(cx: f64, text_width: f64) -> f64 {
    cx - text_width / 2.0
}

/// Starting font size for a badge label, smaller for longer tickers.
pub fn badge_font_size(radius: f64, chars: usize) -> u32 {
    let factor = match chars {
        0..=2 => 0.8,
        3 => 0.62,
        _ => 0.5,
    };
    ((radius * factor).round() as u32).max(8)
}

/// Draws glow ring, disk, highlight arc and the centered label.
pub fn draw_ticker_badge(canvas: &mut Canvas, fonts: &FontBook, badge: &TickerBadge, symbol: &str) {
    let TickerBadge {
        cx,
        cy,
        radius,
        fill,
        glow,
    } = *badge;
    if radius <= 0.0 {
        return;
    }

    // Glow ring: soft outer band, tighter inner band
    let ring = (radius * 0.18).max(2.0);
    canvas.stroke_arc(cx, cy, radius + ring * 1.6, 0.0, 2.0 * PI, ring, glow.with_alpha(glow.a / 3));
    canvas.stroke_arc(cx, cy, radius + ring * 0.6, 0.0, 2.0 * PI, ring, glow);

    canvas.fill_ellipse(cx, cy, radius, radius, fill);

    // Highlight along the upper-left rim
    canvas.stroke_arc(
        cx,
        cy,
        radius * 0.72,
        PI * 1.05,
        PI * 1.45,
        (radius * 0.12).max(1.5),
        Color::rgba(255, 255, 255, 110),
    );

    let label = badge_label(symbol);
    if label.is_empty() {
        return;
    }

    let start = FontSpec::bold(badge_font_size(radius, label.chars().count()));
    let spec = shrink_to_fit(fonts, &label, radius * 1.6, start, 8, 1);
    let font = fonts.resolve(spec);
    let width = fonts.measure_width(&label, spec);
    let x = centered_text_x(cx, width);
    let top = cy - font.line_height() / 2.0;
    canvas.draw_text_top(x, top, &label, &font, fill.contrasting_text());
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character advances `size * 0.5` pixels.
    struct HalfEm;

    impl TextMeasure for HalfEm {
        fn measure_width(&self, text: &str, font: FontSpec) -> f64 {
            text.chars().count() as f64 * font.size as f64 * 0.5
        }
    }

    #[test]
    fn shrink_keeps_start_size_when_it_fits() {
        let spec = shrink_to_fit(&HalfEm, "abcd", 100.0, FontSpec::bold(44), 28, 2);
        assert_eq!(spec, FontSpec::bold(44));
    }

    #[test]
    fn shrink_returns_first_fitting_size_stepping_down() {
        // 10 chars: width = 5 * size, so size 40 -> 200, 38 -> 190
        let spec = shrink_to_fit(&HalfEm, "abcdefghij", 195.0, FontSpec::regular(44), 20, 2);
        assert_eq!(spec.size, 38);
        assert!(HalfEm.measure_width("abcdefghij", spec) <= 195.0);
        assert!(!spec.bold);
    }

    #[test]
    fn shrink_only_tries_sizes_on_the_step_grid() {
        // grid from 44 by 5: 44 -> 220, 39 -> 195, 34 -> 170
        let spec = shrink_to_fit(&HalfEm, "abcdefghij", 196.0, FontSpec::regular(44), 20, 5);
        assert_eq!(spec.size, 39);
        let spec = shrink_to_fit(&HalfEm, "abcdefghij", 194.0, FontSpec::regular(44), 20, 5);
        assert_eq!(spec.size, 34);
    }

    #[test]
    fn shrink_floors_at_minimum_when_nothing_fits() {
        let spec = shrink_to_fit(&HalfEm, "an extremely long title", 10.0, FontSpec::regular(44), 28, 3);
        assert_eq!(spec.size, 28);
    }

    #[test]
    fn shrink_with_installed_fonts_fits_or_reaches_floor() {
        let fonts = FontBook::new("Sans");
        let start = FontSpec::bold(46);
        for text in [
            "Best Performing Overall Tokens This Week",
            "Extraordinarily Long Wrapped Staked Ethereum Liquidity Token (WSTETH)",
        ] {
            assert!(fonts.measure_width(text, start) > 860.0, "{text}");
            let spec = shrink_to_fit(&fonts, text, 860.0, start, 28, 2);
            assert!(spec.bold);
            assert!(spec.size < 46 && spec.size >= 28, "{text}: {}", spec.size);
            assert_eq!((46 - spec.size) % 2, 0);
            assert!(fonts.measure_width(text, spec) <= 860.0 || spec.size == 28);
            // the size one step up was rejected
            assert!(fonts.measure_width(text, spec.with_size(spec.size + 2)) > 860.0);
        }
    }

    #[test]
    fn shrink_handles_degenerate_parameters() {
        assert_eq!(
            shrink_to_fit(&HalfEm, "abc", 1.0, FontSpec::regular(12), 30, 2).size,
            12
        );
        assert_eq!(
            shrink_to_fit(&HalfEm, "ab", 20.0, FontSpec::regular(24), 8, 0).size,
            20
        );
    }

    #[test]
    fn value_is_right_aligned_against_margin() {
        let style = KeyValueStyle::default();
        // "Yes" at 32px: 3 * 16 = 48
        assert_eq!(value_x(&HalfEm, "Yes", &style), 1200.0 - 80.0 - 48.0);
    }

    #[test]
    fn badge_pair_keeps_score_left_of_apy_with_gap() {
        let style = BadgePairStyle::default();
        let layout = badge_pair_layout(&HalfEm, "87% Score", "167% APY", &style);
        // 24px font: 12px per char
        assert_eq!(layout.apy_width, 96.0);
        assert_eq!(layout.score_width, 108.0);
        assert_eq!(layout.apy_x, 1120.0 - 96.0);
        assert_eq!(layout.score_x, 1120.0 - 108.0 - 96.0 - 28.0);
        assert_eq!(layout.score_x + layout.score_width + style.gap, layout.apy_x);
    }

    #[test]
    fn badge_label_truncates_to_four_uppercase_chars() {
        assert_eq!(badge_label("doge"), "DOGE");
        assert_eq!(badge_label("shibainu"), "SHIB");
        assert_eq!(badge_label(" btc "), "BTC");
        assert_eq!(badge_label(""), "");
    }

    #[test]
    fn centered_text_subtracts_half_width() {
        assert_eq!(centered_text_x(100.0, 40.0), 80.0);
        assert_eq!(centered_text_x(100.0, 0.0), 100.0);
    }

    #[test]
    fn badge_font_shrinks_with_label_length() {
        assert!(badge_font_size(40.0, 3) > badge_font_size(40.0, 4));
        assert_eq!(badge_font_size(2.0, 4), 8);
    }

    #[test]
    fn ticker_badge_paints_disk_color_at_rim() {
        let mut canvas = Canvas::new(120, 120).unwrap();
        let fonts = FontBook::new("Sans");
        let badge = TickerBadge {
            cx: 60.0,
            cy: 60.0,
            radius: 40.0,
            fill: Color::rgb(247, 147, 26),
            glow: Color::rgba(247, 147, 26, 150),
        };
        draw_ticker_badge(&mut canvas, &fonts, &badge, "BTC");
        // inside the disk but away from the label and the highlight arc
        assert_eq!(canvas.pixel(60, 95).unwrap(), Some(Color::rgb(247, 147, 26)));
        assert_eq!(canvas.pixel(0, 0).unwrap(), Some(Color::rgb(0, 0, 0)));
    }
}
