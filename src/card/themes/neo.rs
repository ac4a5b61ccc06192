//! Neo theme: dark neon panel with glowing coin badges.

use super::{
    CardContext, PairStyle, RowStyle, TOP_TITLE, card_rect, draw_pair_body, draw_pair_header,
    draw_rows, draw_title, overlay_panel,
};
use crate::card::rows::RowGeometry;
use crate::card::types::{AssetDetail, CARD_HEIGHT, CARD_WIDTH, MarketSummaryRow};
use crate::draw::layout::{BadgePairStyle, KeyValueStyle, TickerBadge, draw_ticker_badge};
use crate::draw::{Canvas, Color, FontSpec, RenderError, asset_background};
use crate::util::Rect;

const PANEL: Color = Color::rgba(8, 12, 20, 205);
const PANEL_RADIUS: f64 = 18.0;

const CYAN: Color = Color::rgb(0, 229, 255);
const LIME: Color = Color::rgb(57, 255, 160);
const ICE: Color = Color::rgb(230, 250, 255);
const STEEL: Color = Color::rgb(120, 150, 170);

const HEADER_MAX_WIDTH: f64 = 860.0;

/// Coins without a brand color cycle through these.
const PALETTE: [Color; 5] = [
    Color::rgb(0, 229, 255),
    Color::rgb(255, 64, 160),
    Color::rgb(57, 255, 160),
    Color::rgb(255, 196, 0),
    Color::rgb(140, 110, 255),
];

/// Row badge center relative to the row, and its radius.
const ROW_BADGE_X: f64 = 196.0;
const ROW_BADGE_RADIUS: f64 = 22.0;

const ROWS: RowStyle = RowStyle {
    geometry: RowGeometry {
        start_y: 150.0,
        row_height: 76.0,
        gap: 8.0,
        cutoff_y: 530.0,
    },
    chip: Color::rgba(255, 255, 255, 14),
    chip_radius: 12.0,
    chip_left: 80.0,
    chip_right: 1120.0,
    rank_x: 100.0,
    rank_dy: 22.0,
    rank_font: FontSpec::bold(28),
    rank_color: CYAN,
    text_x: 236.0,
    symbol_dy: 10.0,
    symbol_font: FontSpec::bold(30),
    symbol_color: ICE,
    name_dy: 44.0,
    name_font: FontSpec::regular(22),
    name_color: STEEL,
    badge_dy: 24.0,
    badges: BadgePairStyle {
        font: FontSpec::bold(24),
        score_color: CYAN,
        apy_color: LIME,
        gap: 32.0,
        right_margin: 104.0,
        total_width: CARD_WIDTH as f64,
        pill: Some(Color::rgba(0, 229, 255, 28)),
    },
};

const PAIR: PairStyle = PairStyle {
    left: 80.0,
    header_top: 68.0,
    header_font: FontSpec::bold(44),
    header_color: ICE,
    header_max_width: HEADER_MAX_WIDTH,
    score_top: 122.0,
    score_font: FontSpec::bold(26),
    score_color: LIME,
    price_top: 178.0,
    price_font: FontSpec::bold(56),
    price_color: ICE,
    indicator_gap: 20.0,
    indicator_dy: 10.0,
    indicator_font: FontSpec::bold(28),
    metrics_top: 270.0,
    metrics_pitch: 50.0,
    metrics: KeyValueStyle {
        key_font: FontSpec::regular(28),
        value_font: FontSpec::bold(30),
        key_color: STEEL,
        value_color: ICE,
        right_margin: 80.0,
        total_width: CARD_WIDTH as f64,
        value_dy: -2.0,
    },
};

/// Brand color for well-known coins, otherwise a stable palette pick.
pub fn coin_color(symbol: &str) -> Color {
    match symbol.trim().to_ascii_uppercase().as_str() {
        "BTC" => Color::rgb(247, 147, 26),
        "ETH" => Color::rgb(98, 126, 234),
        "SOL" => Color::rgb(153, 69, 255),
        "XRP" => Color::rgb(0, 170, 228),
        "DOGE" => Color::rgb(194, 166, 51),
        other => {
            let sum: usize = other.bytes().map(usize::from).sum();
            PALETTE[sum % PALETTE.len()]
        }
    }
}

fn badge(cx: f64, cy: f64, radius: f64, symbol: &str) -> TickerBadge {
    let fill = coin_color(symbol);
    TickerBadge {
        cx,
        cy,
        radius,
        fill,
        glow: fill.with_alpha(150),
    }
}

fn base(cx: &CardContext<'_>) -> Result<Canvas, RenderError> {
    let path = cx.asset_path(&cx.config.assets.neo_background);
    let mut canvas = asset_background(cx.assets, &path, CARD_WIDTH, CARD_HEIGHT)?;
    overlay_panel(&mut canvas, card_rect(), PANEL_RADIUS, PANEL)?;
    Ok(canvas)
}

/// Neon underline with a soft halo.
fn draw_accent(canvas: &mut Canvas) -> Result<(), RenderError> {
    if let Some(halo) = Rect::new(76.0, 128.0, 128.0, 11.0) {
        overlay_panel(canvas, halo, 5.5, CYAN.with_alpha(60))?;
    }
    if let Some(line) = Rect::new(80.0, 132.0, 120.0, 3.0) {
        canvas.fill_rect(line, CYAN);
    }
    Ok(())
}

pub fn render_top(cx: &CardContext<'_>, rows: &[MarketSummaryRow]) -> Result<Canvas, RenderError> {
    let mut canvas = base(cx)?;
    draw_title(
        &mut canvas,
        cx,
        80.0,
        68.0,
        TOP_TITLE,
        HEADER_MAX_WIDTH,
        FontSpec::bold(44),
        ICE,
    );
    draw_accent(&mut canvas)?;

    // Overlapping stack of the leaders, first one on top
    for (i, row) in rows.iter().take(3).enumerate().rev() {
        let coin = badge(1080.0 - i as f64 * 52.0, 96.0, 30.0, &row.symbol);
        draw_ticker_badge(&mut canvas, &cx.fonts, &coin, &row.symbol);
    }

    let slots = draw_rows(&mut canvas, cx, rows, &ROWS)?;
    for slot in &slots {
        let coin = badge(
            ROW_BADGE_X,
            slot.top + ROWS.geometry.row_height / 2.0,
            ROW_BADGE_RADIUS,
            &slot.row.symbol,
        );
        draw_ticker_badge(&mut canvas, &cx.fonts, &coin, &slot.row.symbol);
    }

    Ok(canvas)
}

pub fn render_pair(cx: &CardContext<'_>, detail: &AssetDetail) -> Result<Canvas, RenderError> {
    let mut canvas = base(cx)?;
    draw_pair_header(&mut canvas, cx, detail, &PAIR);
    draw_accent(&mut canvas)?;
    let coin = badge(1050.0, 124.0, 52.0, &detail.symbol);
    draw_ticker_badge(&mut canvas, &cx.fonts, &coin, &detail.symbol);
    draw_pair_body(&mut canvas, cx, detail, &PAIR);
    Ok(canvas)
}
