//! Configuration file support for sharecard.
//!
//! Settings are read from `~/.config/sharecard/config.toml` (or an explicit
//! path) and cover the default theme, font selection and header sizing, and
//! the location of background artwork.
//!
//! If no config file exists, defaults are used.

pub mod types;

pub use types::{AssetConfig, FontConfig, RenderConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration.
///
/// # Example TOML
/// ```toml
/// [render]
/// default_theme = "violet"
///
/// [fonts]
/// family = "Inter"
/// title_min_size = 28
///
/// [assets]
/// directory = "/usr/share/sharecard/assets"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Rendering defaults
    #[serde(default)]
    pub render: RenderConfig,

    /// Font family and header sizing
    #[serde(default)]
    pub fonts: FontConfig,

    /// Background artwork
    #[serde(default)]
    pub assets: AssetConfig,
}

impl Config {
    /// Clamps out-of-range values and replaces blank strings with defaults.
    ///
    /// Validated ranges:
    /// - `fonts.title_min_size`: 8 - 72
    /// - `fonts.title_step`: 1 - 8
    fn validate_and_clamp(&mut self) {
        if !(8..=72).contains(&self.fonts.title_min_size) {
            warn!(
                "Invalid title_min_size {}, clamping to 8-72 range",
                self.fonts.title_min_size
            );
            self.fonts.title_min_size = self.fonts.title_min_size.clamp(8, 72);
        }

        if !(1..=8).contains(&self.fonts.title_step) {
            warn!(
                "Invalid title_step {}, clamping to 1-8 range",
                self.fonts.title_step
            );
            self.fonts.title_step = self.fonts.title_step.clamp(1, 8);
        }

        if self.fonts.family.trim().is_empty() {
            warn!("Empty font family, falling back to '{}'", types::default_family());
            self.fonts.family = types::default_family();
        }

        if self.fonts.fallback_family.trim().is_empty() {
            warn!(
                "Empty fallback font family, falling back to '{}'",
                types::default_fallback_family()
            );
            self.fonts.fallback_family = types::default_fallback_family();
        }

        if self.assets.violet_background.trim().is_empty() {
            warn!("Empty violet_background, using default");
            self.assets.violet_background = types::default_violet_background();
        }

        if self.assets.neo_background.trim().is_empty() {
            warn!("Empty neo_background, using default");
            self.assets.neo_background = types::default_neo_background();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sharecard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the default config file, or returns defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads an explicitly named config file.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses TOML text and validates the result.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or the file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::write_default_file(&config_path)?;
        Ok(config_path)
    }

    fn write_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema of the config file, for editor integration.
    pub fn json_schema() -> Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ThemeName;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.default_theme, ThemeName::Classic);
        assert_eq!(config.fonts.family, "DejaVu Sans");
        assert_eq!(config.assets.directory, PathBuf::from("assets"));
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml(
            r#"
            [render]
            default_theme = "neo"

            [fonts]
            family = "Inter"
            "#,
        )
        .unwrap();
        assert_eq!(config.render.default_theme, ThemeName::Neo);
        assert_eq!(config.fonts.family, "Inter");
        assert_eq!(config.fonts.fallback_family, "Sans");
        assert_eq!(config.fonts.title_step, 2);
        assert_eq!(config.assets.neo_background, "neo.png");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [fonts]
            title_min_size = 200
            title_step = 0
            family = "   "
            "#,
        )
        .unwrap();
        assert_eq!(config.fonts.title_min_size, 72);
        assert_eq!(config.fonts.title_step, 1);
        assert_eq!(config.fonts.family, "DejaVu Sans");
    }

    #[test]
    fn unknown_theme_in_file_is_a_parse_error() {
        assert!(Config::from_toml("[render]\ndefault_theme = \"sepia\"").is_err());
    }

    #[test]
    fn example_file_parses_to_defaults() {
        let config = Config::from_toml(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_reads_file_and_rejects_missing_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(Config::load_from(&path).is_err());

        fs::write(&path, "[assets]\ndirectory = \"/srv/art\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.assets.directory, PathBuf::from("/srv/art"));
    }

    #[test]
    fn default_file_is_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::write_default_file(&path).unwrap();
        assert!(path.exists());
        assert!(Config::write_default_file(&path).is_err());
    }

    #[test]
    fn schema_names_every_section() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["render", "fonts", "assets"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
