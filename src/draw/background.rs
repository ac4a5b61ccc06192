//! Full-canvas backgrounds: procedural gradients and loaded image assets.

use super::canvas::{Canvas, RenderError};
use super::color::Color;
use crate::util::Rect;
use cairo::{Format, ImageSurface};
use image::RgbaImage;
use image::imageops::FilterType;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Top color used when a themed asset cannot be loaded.
pub const FALLBACK_TOP: Color = Color::rgb(20, 22, 34);

/// Bottom color used when a themed asset cannot be loaded.
pub const FALLBACK_BOTTOM: Color = Color::rgb(8, 9, 14);

/// Vertical linear gradient: row `y` gets `lerp(top, bottom, y / (height - 1))`.
pub fn gradient_background(
    width: u32,
    height: u32,
    top: Color,
    bottom: Color,
) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(width as i32, height as i32)?;
    let span = height.saturating_sub(1).max(1) as f64;

    for y in 0..height {
        let color = top.with_alpha(255).lerp(bottom.with_alpha(255), y as f64 / span);
        if let Some(row) = Rect::new(0.0, y as f64, width as f64, 1.0) {
            canvas.fill_rect(row, color);
        }
    }

    Ok(canvas)
}

/// Loads `path` resized to exactly `width`x`height`.
///
/// A missing or undecodable asset falls back to a dark gradient; this never
/// fails for asset reasons.
pub fn asset_background(
    cache: &AssetCache,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<Canvas, RenderError> {
    match cache.get_or_load(path, width, height) {
        Some(pixels) => Canvas::from_surface(surface_from_rgba(&pixels)?),
        None => gradient_background(width, height, FALLBACK_TOP, FALLBACK_BOTTOM),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AssetKey {
    path: PathBuf,
    width: u32,
    height: u32,
}

type AssetSlot = Arc<OnceLock<Option<Arc<RgbaImage>>>>;

/// Process-wide cache of decoded, resized background assets.
///
/// Each (path, size) key is loaded at most once, even under concurrent
/// requests: callers racing on the same key block on a shared slot. A key
/// whose file was missing stays missing for the cache's lifetime.
#[derive(Default)]
pub struct AssetCache {
    slots: Mutex<HashMap<AssetKey, AssetSlot>>,
}

impl std::fmt::Debug for AssetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache").field("entries", &self.len()).finish()
    }
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the resized pixels for `path`, loading them on first use.
    pub fn get_or_load(&self, path: &Path, width: u32, height: u32) -> Option<Arc<RgbaImage>> {
        let key = AssetKey {
            path: path.to_path_buf(),
            width,
            height,
        };

        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            slots.entry(key).or_default().clone()
        };

        slot.get_or_init(|| load_resized(path, width, height)).clone()
    }

    /// Number of keys seen (loaded or known missing).
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn load_resized(path: &Path, width: u32, height: u32) -> Option<Arc<RgbaImage>> {
    if !path.is_file() {
        warn!(
            "Background asset {} not found, using gradient fallback",
            path.display()
        );
        return None;
    }

    match image::open(path) {
        Ok(img) => {
            debug!(
                "Loaded background asset {} ({}x{}), resizing to {}x{}",
                path.display(),
                img.width(),
                img.height(),
                width,
                height
            );
            let resized = img.resize_exact(width, height, FilterType::Lanczos3);
            Some(Arc::new(resized.to_rgba8()))
        }
        Err(e) => {
            warn!(
                "Failed to decode background asset {}: {}, using gradient fallback",
                path.display(),
                e
            );
            None
        }
    }
}

/// Copies RGBA pixels into an opaque Cairo surface, flattening alpha onto black.
fn surface_from_rgba(pixels: &RgbaImage) -> Result<ImageSurface, RenderError> {
    let (width, height) = pixels.dimensions();
    let stride = Format::Rgb24.stride_for_width(width)?;
    let mut data = vec![0u8; stride as usize * height as usize];

    for (y, row) in pixels.rows().enumerate() {
        let line = &mut data[y * stride as usize..];
        for (x, px) in row.enumerate() {
            let [r, g, b, a] = px.0;
            let flatten = |c: u8| (c as u32 * a as u32 + 127) / 255;
            let value = (flatten(r) << 16) | (flatten(g) << 8) | flatten(b);
            line[x * 4..x * 4 + 4].copy_from_slice(&value.to_ne_bytes());
        }
    }

    Ok(ImageSurface::create_for_data(
        data,
        Format::Rgb24,
        width as i32,
        height as i32,
        stride,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn gradient_rows_interpolate_top_to_bottom() {
        let top = Color::rgb(0, 0, 0);
        let bottom = Color::rgb(100, 200, 50);
        let canvas = gradient_background(4, 11, top, bottom).unwrap();
        assert_eq!(canvas.pixel(0, 0).unwrap(), Some(top));
        assert_eq!(canvas.pixel(3, 10).unwrap(), Some(bottom));
        assert_eq!(canvas.pixel(2, 5).unwrap(), Some(Color::rgb(50, 100, 25)));
    }

    #[test]
    fn single_row_gradient_uses_top_color() {
        let canvas = gradient_background(3, 1, Color::rgb(9, 9, 9), Color::rgb(200, 0, 0)).unwrap();
        assert_eq!(canvas.pixel(1, 0).unwrap(), Some(Color::rgb(9, 9, 9)));
    }

    #[test]
    fn missing_asset_falls_back_to_dark_gradient() {
        let cache = AssetCache::new();
        let canvas =
            asset_background(&cache, Path::new("/nonexistent/violet.png"), 40, 20).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (40, 20));
        assert_eq!(canvas.pixel(0, 0).unwrap(), Some(FALLBACK_TOP));
        assert_eq!(canvas.pixel(0, 19).unwrap(), Some(FALLBACK_BOTTOM));
    }

    #[test]
    fn asset_is_resized_to_exact_dimensions_and_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        RgbaImage::from_pixel(7, 3, Rgba([30, 60, 90, 255]))
            .save(&path)
            .unwrap();

        let cache = AssetCache::new();
        let canvas = asset_background(&cache, &path, 50, 25).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (50, 25));
        assert_eq!(canvas.pixel(25, 12).unwrap(), Some(Color::rgb(30, 60, 90)));

        let first = cache.get_or_load(&path, 50, 25).unwrap();
        let second = cache.get_or_load(&path, 50, 25).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn concurrent_loads_share_one_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let cache = AssetCache::new();
        let loaded: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| cache.get_or_load(&path, 8, 8).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(loaded.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(cache.len(), 1);
    }
}
