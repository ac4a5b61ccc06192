//! Renderer dispatch over (card kind, theme).
//!
//! Every combination maps to exactly one theme renderer. Free-form style
//! strings are matched case-insensitively; anything unknown falls back to the
//! configured default theme, so selection never fails.

use super::themes::{CardContext, classic, neo, violet};
use super::types::{AssetDetail, CardKind, MarketSummaryRow, RenderRequest, ThemeName};
use crate::draw::{Canvas, RenderError};
use std::fmt;

/// Leaderboard renderer of one theme.
pub type TopRenderer = fn(&CardContext<'_>, &[MarketSummaryRow]) -> Result<Canvas, RenderError>;

/// Detail renderer of one theme.
pub type PairRenderer = fn(&CardContext<'_>, &AssetDetail) -> Result<Canvas, RenderError>;

/// A renderer function tagged with the kind of data it accepts.
#[derive(Clone, Copy)]
pub enum CardRenderer {
    Top(TopRenderer),
    Pair(PairRenderer),
}

impl CardRenderer {
    pub fn kind(&self) -> CardKind {
        match self {
            CardRenderer::Top(_) => CardKind::Top,
            CardRenderer::Pair(_) => CardKind::Pair,
        }
    }
}

/// Borrowed card body handed to a renderer.
#[derive(Debug, Clone, Copy)]
pub enum CardInput<'a> {
    Rows(&'a [MarketSummaryRow]),
    Detail(&'a AssetDetail),
}

impl CardInput<'_> {
    pub fn kind(&self) -> CardKind {
        match self {
            CardInput::Rows(_) => CardKind::Top,
            CardInput::Detail(_) => CardKind::Pair,
        }
    }
}

impl RenderRequest {
    /// The request body without its theme.
    pub fn input(&self) -> CardInput<'_> {
        match self {
            RenderRequest::Top { rows, .. } => CardInput::Rows(rows),
            RenderRequest::Pair { detail, .. } => CardInput::Detail(detail),
        }
    }
}

/// Dispatch table entry: the theme it belongs to and its function.
#[derive(Clone, Copy)]
pub struct Renderer {
    pub theme: ThemeName,
    pub render: CardRenderer,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("kind", &self.kind())
            .field("theme", &self.theme)
            .finish()
    }
}

impl Renderer {
    pub fn kind(&self) -> CardKind {
        self.render.kind()
    }

    /// Paints `input` onto a fresh canvas.
    ///
    /// Input of the other kind is routed to the same theme's matching renderer.
    pub fn draw(&self, cx: &CardContext<'_>, input: CardInput<'_>) -> Result<Canvas, RenderError> {
        match (self.render, input) {
            (CardRenderer::Top(render), CardInput::Rows(rows)) => render(cx, rows),
            (CardRenderer::Pair(render), CardInput::Detail(detail)) => render(cx, detail),
            (_, input) => {
                log::warn!(
                    "{} renderer given {} data, switching to the {} renderer",
                    self.kind(),
                    input.kind(),
                    input.kind()
                );
                renderer_for(input.kind(), self.theme).draw(cx, input)
            }
        }
    }
}

pub fn top_renderer(theme: ThemeName) -> TopRenderer {
    match theme {
        ThemeName::Classic => classic::render_top,
        ThemeName::Violet => violet::render_top,
        ThemeName::Neo => neo::render_top,
    }
}

pub fn pair_renderer(theme: ThemeName) -> PairRenderer {
    match theme {
        ThemeName::Classic => classic::render_pair,
        ThemeName::Violet => violet::render_pair,
        ThemeName::Neo => neo::render_pair,
    }
}

/// Table lookup for an already parsed theme.
pub fn renderer_for(kind: CardKind, theme: ThemeName) -> Renderer {
    let render = match kind {
        CardKind::Top => CardRenderer::Top(top_renderer(theme)),
        CardKind::Pair => CardRenderer::Pair(pair_renderer(theme)),
    };
    Renderer { theme, render }
}

/// Picks the renderer for a free-form style string.
///
/// Matching ignores case and surrounding whitespace; unknown or empty styles
/// resolve to `default`.
pub fn select_renderer(kind: CardKind, style: &str, default: ThemeName) -> Renderer {
    renderer_for(kind, ThemeName::resolve(style, default))
}
