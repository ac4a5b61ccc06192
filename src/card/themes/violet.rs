//! Violet theme: purple glass panel over artwork, with a rocket in the corner.

use super::{
    CardContext, PairStyle, RowStyle, TOP_TITLE, card_rect, draw_pair_body, draw_pair_header,
    draw_rows, draw_title, overlay_panel,
};
use crate::card::rows::RowGeometry;
use crate::card::types::{AssetDetail, CARD_HEIGHT, CARD_WIDTH, MarketSummaryRow};
use crate::draw::layout::{BadgePairStyle, KeyValueStyle};
use crate::draw::{Canvas, Color, FontSpec, RenderError, asset_background};
use crate::util::Rect;
use std::f64::consts::PI;

const PANEL: Color = Color::rgba(46, 20, 84, 185);
const PANEL_RADIUS: f64 = 32.0;
const ACCENT: Color = Color::rgba(196, 160, 255, 220);

const TITLE: Color = Color::rgb(243, 236, 255);
const LAVENDER: Color = Color::rgb(190, 170, 230);
const SOFT: Color = Color::rgb(186, 170, 220);
const ORCHID: Color = Color::rgb(196, 160, 255);

/// Header width leaving room for the rocket.
const HEADER_MAX_WIDTH: f64 = 860.0;

const ROCKET_HULL: Color = Color::rgb(236, 228, 255);
const ROCKET_TRIM: Color = Color::rgb(150, 90, 255);
const ROCKET_WINDOW: Color = Color::rgb(90, 200, 255);
const ROCKET_WINDOW_RING: Color = Color::rgb(70, 40, 130);
const FLAME_OUTER: Color = Color::rgba(255, 150, 60, 230);
const FLAME_INNER: Color = Color::rgba(255, 230, 120, 240);

const ROWS: RowStyle = RowStyle {
    geometry: RowGeometry {
        start_y: 150.0,
        row_height: 74.0,
        gap: 10.0,
        cutoff_y: 530.0,
    },
    chip: Color::rgba(255, 255, 255, 20),
    chip_radius: 18.0,
    chip_left: 80.0,
    chip_right: 1120.0,
    rank_x: 104.0,
    rank_dy: 20.0,
    rank_font: FontSpec::bold(28),
    rank_color: LAVENDER,
    text_x: 160.0,
    symbol_dy: 10.0,
    symbol_font: FontSpec::bold(30),
    symbol_color: TITLE,
    name_dy: 42.0,
    name_font: FontSpec::regular(22),
    name_color: SOFT,
    badge_dy: 24.0,
    badges: BadgePairStyle {
        font: FontSpec::bold(24),
        score_color: ORCHID,
        apy_color: Color::rgb(120, 230, 190),
        gap: 28.0,
        right_margin: 104.0,
        total_width: CARD_WIDTH as f64,
        pill: Some(Color::rgba(255, 255, 255, 16)),
    },
};

const PAIR: PairStyle = PairStyle {
    left: 80.0,
    header_top: 66.0,
    header_font: FontSpec::bold(46),
    header_color: TITLE,
    header_max_width: HEADER_MAX_WIDTH,
    score_top: 122.0,
    score_font: FontSpec::regular(26),
    score_color: ORCHID,
    price_top: 176.0,
    price_font: FontSpec::bold(58),
    price_color: TITLE,
    indicator_gap: 20.0,
    indicator_dy: 12.0,
    indicator_font: FontSpec::bold(28),
    metrics_top: 272.0,
    metrics_pitch: 50.0,
    metrics: KeyValueStyle {
        key_font: FontSpec::regular(28),
        value_font: FontSpec::bold(30),
        key_color: LAVENDER,
        value_color: Color::rgb(245, 240, 255),
        right_margin: 80.0,
        total_width: CARD_WIDTH as f64,
        value_dy: -2.0,
    },
};

fn base(cx: &CardContext<'_>) -> Result<Canvas, RenderError> {
    let path = cx.asset_path(&cx.config.assets.violet_background);
    let mut canvas = asset_background(cx.assets, &path, CARD_WIDTH, CARD_HEIGHT)?;
    overlay_panel(&mut canvas, card_rect(), PANEL_RADIUS, PANEL)?;
    Ok(canvas)
}

/// Underline below the header.
fn draw_accent(canvas: &mut Canvas) {
    if let Some(bar) = Rect::new(80.0, 132.0, 180.0, 4.0) {
        canvas.fill_rounded_rect(bar, 2.0, ACCENT);
    }
}

/// Rocket pointing up and to the right, centered on `(cx, cy)`.
fn draw_rocket(canvas: &mut Canvas, cx: f64, cy: f64, scale: f64) {
    let (sin, cos) = (PI / 4.0).sin_cos();
    let place = |(x, y): (f64, f64)| -> (f64, f64) {
        let (x, y) = (x * scale, y * scale);
        (cx + x * cos - y * sin, cy + x * sin + y * cos)
    };
    let shape = |points: &[(f64, f64)]| -> Vec<(f64, f64)> {
        points.iter().copied().map(place).collect()
    };

    // Sparkles trailing behind
    for &(x, y, r) in &[(-46.0, 30.0, 3.0), (-30.0, 70.0, 2.0), (40.0, 52.0, 2.5)] {
        let (sx, sy) = place((x, y));
        canvas.fill_ellipse(sx, sy, r * scale, r * scale, Color::rgba(255, 255, 255, 150));
    }

    canvas.fill_polygon(&shape(&[(-11.0, 38.0), (11.0, 38.0), (0.0, 80.0)]), FLAME_OUTER);
    canvas.fill_polygon(&shape(&[(-6.0, 38.0), (6.0, 38.0), (0.0, 62.0)]), FLAME_INNER);

    canvas.fill_polygon(&shape(&[(-15.0, 8.0), (-34.0, 44.0), (-11.0, 36.0)]), ROCKET_TRIM);
    canvas.fill_polygon(&shape(&[(15.0, 8.0), (34.0, 44.0), (11.0, 36.0)]), ROCKET_TRIM);

    let hull: Vec<(f64, f64)> = (0..48)
        .map(|i| {
            let t = i as f64 / 48.0 * 2.0 * PI;
            (18.0 * t.cos(), 44.0 * t.sin())
        })
        .collect();
    canvas.fill_polygon(&shape(&hull), ROCKET_HULL);

    let nose: Vec<(f64, f64)> = hull.iter().copied().filter(|&(_, y)| y < -28.0).collect();
    canvas.fill_polygon(&shape(&nose), ROCKET_TRIM);

    let (wx, wy) = place((0.0, -6.0));
    canvas.fill_ellipse(wx, wy, 10.0 * scale, 10.0 * scale, ROCKET_WINDOW_RING);
    canvas.fill_ellipse(wx, wy, 7.0 * scale, 7.0 * scale, ROCKET_WINDOW);
}

pub fn render_top(cx: &CardContext<'_>, rows: &[MarketSummaryRow]) -> Result<Canvas, RenderError> {
    let mut canvas = base(cx)?;
    draw_title(
        &mut canvas,
        cx,
        80.0,
        66.0,
        TOP_TITLE,
        HEADER_MAX_WIDTH,
        FontSpec::bold(46),
        TITLE,
    );
    draw_accent(&mut canvas);
    draw_rocket(&mut canvas, 1056.0, 104.0, 1.0);
    draw_rows(&mut canvas, cx, rows, &ROWS)?;
    Ok(canvas)
}

pub fn render_pair(cx: &CardContext<'_>, detail: &AssetDetail) -> Result<Canvas, RenderError> {
    let mut canvas = base(cx)?;
    draw_pair_header(&mut canvas, cx, detail, &PAIR);
    draw_accent(&mut canvas);
    draw_rocket(&mut canvas, 1040.0, 150.0, 1.6);
    draw_pair_body(&mut canvas, cx, detail, &PAIR);
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rocket_paints_hull_at_its_center() {
        let mut canvas = Canvas::new(200, 200).unwrap();
        draw_rocket(&mut canvas, 100.0, 100.0, 1.0);
        // (0, 20) in rocket space is on the hull, below the window
        let (sin, cos) = (PI / 4.0).sin_cos();
        let x = 100.0 - 20.0 * sin;
        let y = 100.0 + 20.0 * cos;
        assert_eq!(
            canvas.pixel(x.round() as i32, y.round() as i32).unwrap(),
            Some(ROCKET_HULL)
        );
        assert_eq!(canvas.pixel(0, 0).unwrap(), Some(Color::rgb(0, 0, 0)));
    }
}
