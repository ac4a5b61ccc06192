//! Configuration type definitions.

use crate::card::ThemeName;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rendering defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Theme used when a request names no theme or an unknown one
    #[serde(default)]
    pub default_theme: ThemeName,
}

/// Font selection and header sizing.
///
/// Headers start at the theme's size and shrink in `title_step` pixel steps
/// until they fit, never going below `title_min_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontConfig {
    /// Preferred font family (e.g., "DejaVu Sans", "Inter")
    #[serde(default = "default_family")]
    pub family: String,

    /// Family used when the preferred one is not installed
    #[serde(default = "default_fallback_family")]
    pub fallback_family: String,

    /// Smallest header size in pixels (valid range: 8 - 72)
    #[serde(default = "default_title_min_size")]
    pub title_min_size: u32,

    /// Pixels removed per shrink step (valid range: 1 - 8)
    #[serde(default = "default_title_step")]
    pub title_step: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: default_family(),
            fallback_family: default_fallback_family(),
            title_min_size: default_title_min_size(),
            title_step: default_title_step(),
        }
    }
}

/// Background artwork locations.
///
/// Files are looked up only at `directory/<file>`; a missing file makes the
/// theme fall back to a generated gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssetConfig {
    /// Directory holding background images
    #[serde(default = "default_asset_directory")]
    pub directory: PathBuf,

    /// Background for the violet theme
    #[serde(default = "default_violet_background")]
    pub violet_background: String,

    /// Background for the neo theme
    #[serde(default = "default_neo_background")]
    pub neo_background: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            directory: default_asset_directory(),
            violet_background: default_violet_background(),
            neo_background: default_neo_background(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

pub(super) fn default_family() -> String {
    "DejaVu Sans".to_string()
}

pub(super) fn default_fallback_family() -> String {
    "Sans".to_string()
}

fn default_title_min_size() -> u32 {
    28
}

fn default_title_step() -> u32 {
    2
}

fn default_asset_directory() -> PathBuf {
    PathBuf::from("assets")
}

pub(super) fn default_violet_background() -> String {
    "violet.png".to_string()
}

pub(super) fn default_neo_background() -> String {
    "neo.png".to_string()
}
