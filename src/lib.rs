//! Library exports for the sharecard renderer.
//!
//! Exposes the card engine together with the configuration, drawing
//! primitives and demo data it is built from, so other front ends (e.g. an
//! HTTP service) can render the same cards as the command-line tool.

pub mod card;
pub mod config;
pub mod dataset;
pub mod draw;
pub mod util;

pub use card::{CardEngine, RenderRequest, RenderedImage, ThemeName};
pub use config::Config;
