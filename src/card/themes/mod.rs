//! Theme renderers and the pieces they share.
//!
//! Every renderer runs the same sequence: background, translucent card
//! panel, header, theme decoration, body. The per-theme modules supply
//! colors, geometry and decoration; the row and detail bodies are drawn here.

pub mod classic;
pub mod neo;
pub mod violet;

use super::format::{Direction, change_label, format_percent, format_usd, format_usd_whole};
use super::rows::{RowGeometry, RowSlot, row_slots};
use super::types::{AssetDetail, CARD_HEIGHT, CARD_WIDTH, MarketSummaryRow};
use crate::config::Config;
use crate::draw::layout::{
    BadgePairStyle, KeyValueStyle, draw_badge_pair, draw_key_value, shrink_to_fit,
};
use crate::draw::{AssetCache, Canvas, Color, FontBook, FontSpec, RenderError, TextMeasure};
use crate::util::Rect;
use std::path::PathBuf;

/// Leaderboard card title.
pub const TOP_TITLE: &str = "Best Performing Overall";

/// Per-render working set handed to every theme renderer.
pub struct CardContext<'a> {
    pub fonts: FontBook,
    pub assets: &'a AssetCache,
    pub config: &'a Config,
}

impl<'a> CardContext<'a> {
    pub fn new(fonts: FontBook, assets: &'a AssetCache, config: &'a Config) -> Self {
        Self {
            fonts,
            assets,
            config,
        }
    }

    /// Location of a themed background file inside the asset directory.
    pub fn asset_path(&self, file: &str) -> PathBuf {
        self.config.assets.directory.join(file)
    }

    /// Shrinks a header to `max_width` using the configured floor and step.
    pub fn fit_title(&self, text: &str, max_width: f64, start: FontSpec) -> FontSpec {
        shrink_to_fit(
            &self.fonts,
            text,
            max_width,
            start,
            self.config.fonts.title_min_size,
            self.config.fonts.title_step,
        )
    }
}

/// Card panel inset 40px from every canvas edge.
pub(crate) fn card_rect() -> Rect {
    Rect {
        x: 40.0,
        y: 40.0,
        width: CARD_WIDTH as f64 - 80.0,
        height: CARD_HEIGHT as f64 - 80.0,
    }
}

/// Alpha-blends a rounded panel onto the canvas via a separate layer.
pub(crate) fn overlay_panel(
    canvas: &mut Canvas,
    rect: Rect,
    radius: f64,
    fill: Color,
) -> Result<(), RenderError> {
    let width = rect.width.ceil() as i32;
    let height = rect.height.ceil() as i32;
    if width <= 0 || height <= 0 {
        return Ok(());
    }

    let mut layer = Canvas::layer(width, height)?;
    let local = Rect {
        x: 0.0,
        y: 0.0,
        ..rect
    };
    layer.fill_rounded_rect(local, radius, fill);
    canvas.composite(&layer, rect.x, rect.y)
}

/// Header text at `(x, top)`, shrunk to `max_width`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_title(
    canvas: &mut Canvas,
    cx: &CardContext<'_>,
    x: f64,
    top: f64,
    text: &str,
    max_width: f64,
    start: FontSpec,
    color: Color,
) {
    let spec = cx.fit_title(text, max_width, start);
    let font = cx.fonts.resolve(spec);
    canvas.draw_text_top(x, top, text, &font, color);
}

// ============================================================================
// Leaderboard rows
// ============================================================================

/// Colors, fonts and offsets for one leaderboard theme.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowStyle {
    pub geometry: RowGeometry,
    pub chip: Color,
    pub chip_radius: f64,
    pub chip_left: f64,
    pub chip_right: f64,
    pub rank_x: f64,
    pub rank_dy: f64,
    pub rank_font: FontSpec,
    pub rank_color: Color,
    /// Left edge of the symbol and name column
    pub text_x: f64,
    pub symbol_dy: f64,
    pub symbol_font: FontSpec,
    pub symbol_color: Color,
    pub name_dy: f64,
    pub name_font: FontSpec,
    pub name_color: Color,
    pub badge_dy: f64,
    pub badges: BadgePairStyle,
}

/// Score badge text, e.g. `87% Score`.
pub fn score_badge(row: &MarketSummaryRow) -> String {
    format!("{}% Score", row.score)
}

/// APY badge text, e.g. `167% APY`.
pub fn apy_badge(row: &MarketSummaryRow) -> String {
    format!("{}% APY", row.apy)
}

/// Draws chip, rank, symbol, name and badge pair for every slot.
///
/// Returns the slots so themes can add per-row decoration.
pub(crate) fn draw_rows<'r>(
    canvas: &mut Canvas,
    cx: &CardContext<'_>,
    rows: &'r [MarketSummaryRow],
    style: &RowStyle,
) -> Result<Vec<RowSlot<'r>>, RenderError> {
    let slots = row_slots(rows, &style.geometry);

    let rank_font = cx.fonts.resolve(style.rank_font);
    let symbol_font = cx.fonts.resolve(style.symbol_font);
    let name_font = cx.fonts.resolve(style.name_font);

    for slot in &slots {
        let top = slot.top;
        if let Some(chip) = Rect::from_corners(
            style.chip_left,
            top,
            style.chip_right,
            top + style.geometry.row_height,
        ) {
            if style.chip.a == 255 {
                canvas.fill_rounded_rect(chip, style.chip_radius, style.chip);
            } else {
                overlay_panel(canvas, chip, style.chip_radius, style.chip)?;
            }
        }

        let row = slot.row;
        canvas.draw_text_top(
            style.rank_x,
            top + style.rank_dy,
            &row.rank.to_string(),
            &rank_font,
            style.rank_color,
        );
        canvas.draw_text_top(
            style.text_x,
            top + style.symbol_dy,
            &row.symbol,
            &symbol_font,
            style.symbol_color,
        );
        canvas.draw_text_top(
            style.text_x,
            top + style.name_dy,
            &row.name,
            &name_font,
            style.name_color,
        );
        draw_badge_pair(
            canvas,
            &cx.fonts,
            top + style.badge_dy,
            &score_badge(row),
            &apy_badge(row),
            &style.badges,
        );
    }

    Ok(slots)
}

// ============================================================================
// Asset detail body
// ============================================================================

/// Colors, fonts and anchors for one detail theme.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PairStyle {
    pub left: f64,
    pub header_top: f64,
    pub header_font: FontSpec,
    pub header_color: Color,
    /// Width the header is shrunk into
    pub header_max_width: f64,
    pub score_top: f64,
    pub score_font: FontSpec,
    pub score_color: Color,
    pub price_top: f64,
    pub price_font: FontSpec,
    pub price_color: Color,
    /// Gap between the price's right edge and the change indicator
    pub indicator_gap: f64,
    pub indicator_dy: f64,
    pub indicator_font: FontSpec,
    pub metrics_top: f64,
    pub metrics_pitch: f64,
    pub metrics: KeyValueStyle,
}

/// Header line: `Bitcoin (BTC)`.
pub fn pair_header(detail: &AssetDetail) -> String {
    format!("{} ({})", detail.name, detail.symbol)
}

/// Score line: `Trading Score 94%`.
pub fn score_line(detail: &AssetDetail) -> String {
    format!("Trading Score {}%", detail.score)
}

/// Label/value pairs of the metric stack, top to bottom.
pub fn metric_rows(detail: &AssetDetail) -> [(String, String); 5] {
    [
        (
            format!("{} Volume (24h)", detail.exchange),
            format_usd_whole(detail.volume_24h),
        ),
        ("Cap".to_string(), format_usd_whole(detail.cap)),
        ("Volatility".to_string(), format_percent(detail.volatility)),
        ("Trend".to_string(), format_percent(detail.trend_pct)),
        (
            "In Channel".to_string(),
            if detail.in_channel { "Yes" } else { "No" }.to_string(),
        ),
    ]
}

/// Left edge of the change indicator: immediately after the price text.
pub fn indicator_x<M: TextMeasure + ?Sized>(
    measure: &M,
    price_text: &str,
    left: f64,
    price_font: FontSpec,
    gap: f64,
) -> f64 {
    left + measure.measure_width(price_text, price_font) + gap
}

/// `Name (SYMBOL)` header, shrunk to `header_max_width`.
pub(crate) fn draw_pair_header(
    canvas: &mut Canvas,
    cx: &CardContext<'_>,
    detail: &AssetDetail,
    style: &PairStyle,
) {
    draw_title(
        canvas,
        cx,
        style.left,
        style.header_top,
        &pair_header(detail),
        style.header_max_width,
        style.header_font,
        style.header_color,
    );
}

/// Score line, price with change indicator, then the metric stack.
pub(crate) fn draw_pair_body(
    canvas: &mut Canvas,
    cx: &CardContext<'_>,
    detail: &AssetDetail,
    style: &PairStyle,
) {
    let score_font = cx.fonts.resolve(style.score_font);
    canvas.draw_text_top(
        style.left,
        style.score_top,
        &score_line(detail),
        &score_font,
        style.score_color,
    );

    let price = format_usd(detail.price);
    let price_font = cx.fonts.resolve(style.price_font);
    canvas.draw_text_top(style.left, style.price_top, &price, &price_font, style.price_color);

    let direction = Direction::of(detail.change_pct);
    let ix = indicator_x(
        &cx.fonts,
        &price,
        style.left,
        style.price_font,
        style.indicator_gap,
    );
    let indicator_font = cx.fonts.resolve(style.indicator_font);
    canvas.draw_text_top(
        ix,
        style.price_top + style.indicator_dy,
        &change_label(detail.change_pct),
        &indicator_font,
        direction.color(),
    );

    for (i, (key, value)) in metric_rows(detail).iter().enumerate() {
        draw_key_value(
            canvas,
            &cx.fonts,
            style.left,
            style.metrics_top + style.metrics_pitch * i as f64,
            key,
            value,
            &style.metrics,
        );
    }
}
