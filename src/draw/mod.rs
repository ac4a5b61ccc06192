//! Rendering primitives (Cairo/Pango-based).
//!
//! This module provides the building blocks the card themes are painted with:
//! - [`Color`]: 8-bit RGBA color with brightness and contrast helpers
//! - [`Canvas`]: an owned raster surface with shape, text and compositing operations
//! - [`FontBook`]: per-render font resolution and text measurement
//! - Background providers (generated gradient, cached artwork)
//! - [`layout`]: key/value rows, shrink-to-fit text and badges

pub mod background;
pub mod canvas;
pub mod color;
pub mod font;
pub mod layout;

// Re-export commonly used types at module level
pub use background::{AssetCache, asset_background, gradient_background};
pub use canvas::{Canvas, RenderError};
pub use color::Color;
pub use font::{FontBook, FontHandle, FontSpec, TextMeasure};
