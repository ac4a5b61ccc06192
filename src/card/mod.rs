//! Share card composition: data model, formatting, themes and dispatch.

pub mod dispatch;
pub mod engine;
pub mod format;
pub mod rows;
pub mod themes;
pub mod types;

pub use dispatch::{CardInput, CardRenderer, Renderer, select_renderer};
pub use engine::CardEngine;
pub use types::{
    AssetDetail, CARD_HEIGHT, CARD_WIDTH, CardKind, MAX_TOP_ROWS, MarketSummaryRow,
    RenderRequest, RenderedImage, ThemeName,
};
