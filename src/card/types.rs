//! Data model for card rendering requests and results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card width in pixels, identical for every theme and kind.
pub const CARD_WIDTH: u32 = 1200;

/// Card height in pixels, identical for every theme and kind.
pub const CARD_HEIGHT: u32 = 630;

/// The leaderboard card never shows more rows than this.
pub const MAX_TOP_ROWS: usize = 5;

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSummaryRow {
    /// 1-based position, unique within a request
    pub rank: u32,
    /// Short uppercase ticker, e.g. "BTC"
    pub symbol: String,
    pub name: String,
    /// Trading score percentage, 0-100
    pub score: u8,
    /// APY percentage
    pub apy: u32,
}

/// Full market record for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDetail {
    pub symbol: String,
    pub name: String,
    pub score: u8,
    pub price: f64,
    /// Signed 24h change in percent
    pub change_pct: f64,
    pub volume_24h: u64,
    pub cap: u64,
    /// Volatility in percent
    pub volatility: f64,
    pub trend_pct: f64,
    pub in_channel: bool,
    /// Exchange the volume figure comes from
    pub exchange: String,
}

/// Which card layout to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// Leaderboard of the top assets
    Top,
    /// Detail card for a single asset
    Pair,
}

impl CardKind {
    pub const ALL: [CardKind; 2] = [CardKind::Top, CardKind::Pair];

    pub fn as_str(self) -> &'static str {
        match self {
            CardKind::Top => "top",
            CardKind::Pair => "pair",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named visual style applied to background, colors and decoration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Flat dark slate card
    #[default]
    Classic,
    /// Purple glass panel over an artwork background, with a rocket
    Violet,
    /// Neon panel with glowing coin badges
    Neo,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Classic, ThemeName::Violet, ThemeName::Neo];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Classic => "classic",
            ThemeName::Violet => "violet",
            ThemeName::Neo => "neo",
        }
    }

    /// Case-insensitive match of a free-form style string.
    pub fn parse(value: &str) -> Option<ThemeName> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(value))
    }

    /// Like [`ThemeName::parse`], but unmatched input resolves to `default`.
    pub fn resolve(value: &str, default: ThemeName) -> ThemeName {
        Self::parse(value).unwrap_or_else(|| {
            log::warn!(
                "Unknown theme '{}', using default '{}'",
                value,
                default.as_str()
            );
            default
        })
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to render one card.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderRequest {
    Top {
        theme: ThemeName,
        /// Ordered by rank ascending; only the first [`MAX_TOP_ROWS`] are drawn
        rows: Vec<MarketSummaryRow>,
    },
    Pair {
        theme: ThemeName,
        detail: AssetDetail,
    },
}

impl RenderRequest {
    pub fn kind(&self) -> CardKind {
        match self {
            RenderRequest::Top { .. } => CardKind::Top,
            RenderRequest::Pair { .. } => CardKind::Pair,
        }
    }

    pub fn theme(&self) -> ThemeName {
        match self {
            RenderRequest::Top { theme, .. } | RenderRequest::Pair { theme, .. } => *theme,
        }
    }
}

/// An encoded PNG card, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl RenderedImage {
    pub(crate) fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }

    /// Encoded PNG data.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// MIME type of the encoded data.
    pub fn content_type(&self) -> &'static str {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_is_case_insensitive() {
        for input in ["violet", "VIOLET", "Violet", "  vIoLeT "] {
            assert_eq!(ThemeName::parse(input), Some(ThemeName::Violet));
        }
        assert_eq!(ThemeName::parse("neo"), Some(ThemeName::Neo));
        assert_eq!(ThemeName::parse("sepia"), None);
        assert_eq!(ThemeName::parse(""), None);
    }

    #[test]
    fn theme_resolve_defaults_unknown_values() {
        assert_eq!(ThemeName::resolve("sepia", ThemeName::Neo), ThemeName::Neo);
        assert_eq!(ThemeName::resolve("CLASSIC", ThemeName::Neo), ThemeName::Classic);
    }

    #[test]
    fn theme_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeName::Violet).unwrap();
        assert_eq!(json, "\"violet\"");
        let parsed: ThemeName = serde_json::from_str("\"neo\"").unwrap();
        assert_eq!(parsed, ThemeName::Neo);
    }

    #[test]
    fn request_reports_kind_and_theme() {
        let request = RenderRequest::Top {
            theme: ThemeName::Neo,
            rows: Vec::new(),
        };
        assert_eq!(request.kind(), CardKind::Top);
        assert_eq!(request.theme(), ThemeName::Neo);
    }

    #[test]
    fn detail_deserializes_from_api_json() {
        let json = r#"{
            "symbol": "XRP", "name": "Ripple", "score": 85, "price": 0.68,
            "change_pct": -0.6, "volume_24h": 5123980, "cap": 35200111,
            "volatility": 7.8, "trend_pct": 41.2, "in_channel": false, "exchange": "Binance"
        }"#;
        let detail: AssetDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.symbol, "XRP");
        assert!(!detail.in_channel);
        assert_eq!(detail.change_pct, -0.6);
    }
}
