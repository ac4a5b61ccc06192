//! Classic theme: flat slate panel on a near-black gradient.

use super::{
    CardContext, PairStyle, RowStyle, TOP_TITLE, card_rect, draw_pair_body, draw_pair_header,
    draw_rows, draw_title, overlay_panel,
};
use crate::card::rows::RowGeometry;
use crate::card::types::{AssetDetail, CARD_HEIGHT, CARD_WIDTH, MarketSummaryRow};
use crate::draw::color::{INK_LIGHT, MUTED, POSITIVE};
use crate::draw::layout::{BadgePairStyle, KeyValueStyle};
use crate::draw::{Canvas, Color, FontSpec, RenderError, gradient_background};

const BG_TOP: Color = Color::rgb(17, 26, 33);
const BG_BOTTOM: Color = Color::rgb(12, 18, 24);
const PANEL: Color = Color::rgba(31, 36, 48, 250);
const PANEL_RADIUS: f64 = 24.0;

const ROWS: RowStyle = RowStyle {
    geometry: RowGeometry {
        start_y: 140.0,
        row_height: 80.0,
        gap: 12.0,
        cutoff_y: 520.0,
    },
    chip: Color::rgb(39, 48, 64),
    chip_radius: 14.0,
    chip_left: 80.0,
    chip_right: 1120.0,
    rank_x: 100.0,
    rank_dy: 22.0,
    rank_font: FontSpec::regular(28),
    rank_color: MUTED,
    text_x: 160.0,
    symbol_dy: 14.0,
    symbol_font: FontSpec::bold(30),
    symbol_color: INK_LIGHT,
    name_dy: 44.0,
    name_font: FontSpec::regular(22),
    name_color: MUTED,
    badge_dy: 26.0,
    badges: BadgePairStyle {
        font: FontSpec::regular(24),
        score_color: POSITIVE,
        apy_color: POSITIVE,
        gap: 28.0,
        right_margin: 80.0,
        total_width: CARD_WIDTH as f64,
        pill: None,
    },
};

const PAIR: PairStyle = PairStyle {
    left: 80.0,
    header_top: 70.0,
    header_font: FontSpec::bold(44),
    header_color: INK_LIGHT,
    header_max_width: 1040.0,
    score_top: 120.0,
    score_font: FontSpec::regular(26),
    score_color: POSITIVE,
    price_top: 180.0,
    price_font: FontSpec::bold(56),
    price_color: INK_LIGHT,
    indicator_gap: 20.0,
    indicator_dy: 10.0,
    indicator_font: FontSpec::regular(28),
    metrics_top: 270.0,
    metrics_pitch: 50.0,
    metrics: KeyValueStyle {
        key_font: FontSpec::regular(28),
        value_font: FontSpec::regular(32),
        key_color: Color::rgb(160, 170, 185),
        value_color: Color::rgb(230, 230, 235),
        right_margin: 80.0,
        total_width: CARD_WIDTH as f64,
        value_dy: -4.0,
    },
};

fn base() -> Result<Canvas, RenderError> {
    let mut canvas = gradient_background(CARD_WIDTH, CARD_HEIGHT, BG_TOP, BG_BOTTOM)?;
    overlay_panel(&mut canvas, card_rect(), PANEL_RADIUS, PANEL)?;
    Ok(canvas)
}

pub fn render_top(cx: &CardContext<'_>, rows: &[MarketSummaryRow]) -> Result<Canvas, RenderError> {
    let mut canvas = base()?;
    draw_title(
        &mut canvas,
        cx,
        80.0,
        70.0,
        TOP_TITLE,
        1040.0,
        FontSpec::bold(44),
        INK_LIGHT,
    );
    draw_rows(&mut canvas, cx, rows, &ROWS)?;
    Ok(canvas)
}

pub fn render_pair(cx: &CardContext<'_>, detail: &AssetDetail) -> Result<Canvas, RenderError> {
    let mut canvas = base()?;
    draw_pair_header(&mut canvas, cx, detail, &PAIR);
    draw_pair_body(&mut canvas, cx, detail, &PAIR);
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dataset;
    use crate::draw::{AssetCache, FontBook};

    const BLACK: Color = Color::rgb(0, 0, 0);

    fn header_band_is_blank(canvas: &Canvas) -> bool {
        let top = PAIR.header_top as i32;
        let bottom = PAIR.score_top as i32 - 6;
        (80..700)
            .step_by(3)
            .all(|x| (top..bottom).all(|y| canvas.pixel(x, y).unwrap() == Some(BLACK)))
    }

    #[test]
    fn header_and_body_passes_split_at_the_score_line() {
        let config = Config::default();
        let assets = AssetCache::new();
        let cx = CardContext::new(FontBook::new("Sans"), &assets, &config);
        let btc = dataset::lookup_detail("BTC").unwrap();

        let mut body = Canvas::new(CARD_WIDTH as i32, CARD_HEIGHT as i32).unwrap();
        body.fill(BLACK);
        draw_pair_body(&mut body, &cx, &btc, &PAIR);
        assert!(header_band_is_blank(&body));

        let mut header = Canvas::new(CARD_WIDTH as i32, CARD_HEIGHT as i32).unwrap();
        header.fill(BLACK);
        draw_pair_header(&mut header, &cx, &btc, &PAIR);
        assert!(!header_band_is_blank(&header));
        // nothing below the header line
        let below = PAIR.price_top as i32 + 30;
        assert_eq!(header.pixel(100, below).unwrap(), Some(BLACK));
    }
}
