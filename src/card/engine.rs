//! Card rendering entry point.

use super::dispatch::{CardInput, Renderer, renderer_for, select_renderer};
use super::themes::CardContext;
use super::types::{
    AssetDetail, CardKind, MarketSummaryRow, RenderRequest, RenderedImage, ThemeName,
};
use crate::config::Config;
use crate::draw::font::resolve_family;
use crate::draw::{AssetCache, FontBook, RenderError};
use log::debug;
use std::sync::{Arc, OnceLock};

/// Renders share cards.
///
/// An engine is immutable after construction apart from its caches, so one
/// instance can serve any number of threads. Every call paints its own
/// canvas; only decoded background assets and the resolved font family are
/// shared between calls.
#[derive(Debug)]
pub struct CardEngine {
    config: Config,
    assets: Arc<AssetCache>,
    family: OnceLock<String>,
}

impl CardEngine {
    pub fn new(config: Config) -> Self {
        Self::with_assets(config, Arc::new(AssetCache::new()))
    }

    /// Builds an engine sharing an existing asset cache.
    pub fn with_assets(config: Config, assets: Arc<AssetCache>) -> Self {
        Self {
            config,
            assets,
            family: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn assets(&self) -> &Arc<AssetCache> {
        &self.assets
    }

    /// Theme used for unknown or empty style strings.
    pub fn default_theme(&self) -> ThemeName {
        self.config.render.default_theme
    }

    /// Font family in use, resolved against the installed fonts on first call.
    pub fn font_family(&self) -> &str {
        self.family.get_or_init(|| {
            resolve_family(&self.config.fonts.family, &self.config.fonts.fallback_family)
        })
    }

    /// Renders a typed request.
    pub fn render(&self, request: &RenderRequest) -> Result<RenderedImage, RenderError> {
        self.draw(renderer_for(request.kind(), request.theme()), request.input())
    }

    /// Renders the leaderboard card for a free-form style string.
    ///
    /// Only the first five rows are drawn, in the order given.
    pub fn render_top(
        &self,
        style: &str,
        rows: &[MarketSummaryRow],
    ) -> Result<RenderedImage, RenderError> {
        let renderer = select_renderer(CardKind::Top, style, self.default_theme());
        self.draw(renderer, CardInput::Rows(rows))
    }

    /// Renders the detail card of one asset for a free-form style string.
    pub fn render_pair(
        &self,
        style: &str,
        detail: &AssetDetail,
    ) -> Result<RenderedImage, RenderError> {
        let renderer = select_renderer(CardKind::Pair, style, self.default_theme());
        self.draw(renderer, CardInput::Detail(detail))
    }

    fn draw(&self, renderer: Renderer, input: CardInput<'_>) -> Result<RenderedImage, RenderError> {
        debug!(
            "Rendering {} card with the {} theme",
            renderer.kind(),
            renderer.theme
        );

        let cx = CardContext::new(
            FontBook::new(self.font_family()),
            &self.assets,
            &self.config,
        );
        let canvas = renderer.draw(&cx, input)?;
        let (width, height) = (canvas.width() as u32, canvas.height() as u32);
        let bytes = canvas.encode_png()?;

        debug!("Encoded {}x{} card ({} bytes)", width, height, bytes.len());
        Ok(RenderedImage::new(bytes, width, height))
    }
}
