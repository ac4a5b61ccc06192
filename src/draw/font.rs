//! Font resolution and text measurement (Pango-based).

use log::{debug, warn};
use pango::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// Font request: pixel size plus weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontSpec {
    /// Absolute size in pixels
    pub size: u32,
    pub bold: bool,
}

impl FontSpec {
    pub const fn regular(size: u32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: u32) -> Self {
        Self { size, bold: true }
    }

    /// Same weight at a different size.
    pub const fn with_size(self, size: u32) -> Self {
        Self { size, ..self }
    }

    /// Converts this request to a Pango font description string.
    ///
    /// Format: "Family, [Bold] SIZEpx"
    /// Example: "DejaVu Sans, Bold 44px" or "Sans, 28px"
    pub fn to_pango_string(&self, family: &str) -> String {
        if self.bold {
            format!("{family}, Bold {}px", self.size)
        } else {
            format!("{family}, {}px", self.size)
        }
    }
}

/// Width measurement used for layout decisions.
///
/// Implemented by [`FontBook`] against real fonts; tests substitute
/// deterministic measurers.
pub trait TextMeasure {
    /// Advance width of `text` in pixels when set in `font`.
    fn measure_width(&self, text: &str, font: FontSpec) -> f64;
}

/// A font resolved at a concrete size, ready for drawing.
#[derive(Debug, Clone)]
pub struct FontHandle {
    pub spec: FontSpec,
    pub description: pango::FontDescription,
    /// Distance from the top of the line box to the baseline, in pixels
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the line box, in pixels
    pub descent: f64,
}

impl FontHandle {
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Picks the family to use for the lifetime of an engine.
///
/// Returns `preferred` when the default font map lists it, otherwise
/// `fallback`. Pango always maps the generic fallback family to some
/// installed face, so this never fails.
pub fn resolve_family(preferred: &str, fallback: &str) -> String {
    let context = pangocairo::FontMap::default().create_context();
    let available = context
        .list_families()
        .iter()
        .any(|family| family.name().eq_ignore_ascii_case(preferred));

    if available {
        debug!("Using font family '{}'", preferred);
        preferred.to_string()
    } else {
        warn!(
            "Font family '{}' unavailable, falling back to '{}'",
            preferred, fallback
        );
        fallback.to_string()
    }
}

/// Per-render font cache and measurement service.
///
/// Handles are resolved once per [`FontSpec`] and reused for every row and
/// glyph run in the same render call.
pub struct FontBook {
    family: String,
    context: pango::Context,
    handles: RefCell<HashMap<FontSpec, FontHandle>>,
}

impl FontBook {
    /// Creates a font book drawing from an already resolved family.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            context: pangocairo::FontMap::default().create_context(),
            handles: RefCell::new(HashMap::new()),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns a usable font for `spec`, loading it on first request.
    pub fn resolve(&self, spec: FontSpec) -> FontHandle {
        if let Some(handle) = self.handles.borrow().get(&spec) {
            return handle.clone();
        }

        let description = pango::FontDescription::from_string(&spec.to_pango_string(&self.family));
        let metrics = self.context.metrics(Some(&description), None);
        let scale = pango::SCALE as f64;
        let handle = FontHandle {
            spec,
            description,
            ascent: metrics.ascent() as f64 / scale,
            descent: metrics.descent() as f64 / scale,
        };

        self.handles.borrow_mut().insert(spec, handle.clone());
        handle
    }

    /// Number of distinct fonts resolved so far.
    pub fn cached_len(&self) -> usize {
        self.handles.borrow().len()
    }

    /// Builds a layout for `text` against this book's measurement context.
    fn layout(&self, text: &str, font: &FontHandle) -> pango::Layout {
        let layout = pango::Layout::new(&self.context);
        layout.set_font_description(Some(&font.description));
        layout.set_text(text);
        layout
    }
}

impl TextMeasure for FontBook {
    fn measure_width(&self, text: &str, font: FontSpec) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let handle = self.resolve(font);
        let (width, _height) = self.layout(text, &handle).size();
        width as f64 / pango::SCALE as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_regular() {
        assert_eq!(
            FontSpec::regular(28).to_pango_string("DejaVu Sans"),
            "DejaVu Sans, 28px"
        );
    }

    #[test]
    fn test_pango_string_bold() {
        assert_eq!(FontSpec::bold(44).to_pango_string("Sans"), "Sans, Bold 44px");
    }

    #[test]
    fn with_size_keeps_weight() {
        assert_eq!(FontSpec::bold(44).with_size(30), FontSpec::bold(30));
    }

    #[test]
    fn measurement_is_deterministic_and_monotonic_in_size() {
        let book = FontBook::new("Sans");
        let a = book.measure_width("Best Performing Overall", FontSpec::regular(24));
        let b = book.measure_width("Best Performing Overall", FontSpec::regular(24));
        let c = book.measure_width("Best Performing Overall", FontSpec::regular(48));
        assert_eq!(a, b);
        assert!(a > 0.0);
        assert!(c > a);
        assert_eq!(book.measure_width("", FontSpec::regular(24)), 0.0);
    }

    #[test]
    fn handles_are_cached_per_spec() {
        let book = FontBook::new("Sans");
        book.measure_width("BTC", FontSpec::regular(30));
        book.measure_width("ETH", FontSpec::regular(30));
        book.measure_width("SOL", FontSpec::bold(30));
        assert_eq!(book.cached_len(), 2);
    }

    #[test]
    fn unknown_family_resolves_to_fallback() {
        let family = resolve_family("No Such Typeface 9f3c", "Sans");
        assert_eq!(family, "Sans");
    }
}
