use image::{Rgba, RgbaImage};
use sharecard::card::{CARD_HEIGHT, CARD_WIDTH, CardEngine, MarketSummaryRow, ThemeName};
use sharecard::config::Config;
use sharecard::dataset;
use sharecard::draw::background::FALLBACK_TOP;
use tempfile::TempDir;

fn engine_with_assets(dir: &TempDir) -> CardEngine {
    let mut config = Config::default();
    config.assets.directory = dir.path().to_path_buf();
    CardEngine::new(config)
}

fn decode(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory(bytes).unwrap().to_rgba8()
}

fn close_to(pixel: &Rgba<u8>, rgb: [u8; 3], tolerance: u8) -> bool {
    pixel.0[..3]
        .iter()
        .zip(rgb)
        .all(|(&got, want)| got.abs_diff(want) <= tolerance)
}

fn many_rows(n: u32) -> Vec<MarketSummaryRow> {
    (1..=n)
        .map(|rank| MarketSummaryRow {
            rank,
            symbol: format!("T{rank}"),
            name: format!("Token {rank}"),
            score: (100 - rank) as u8,
            apy: 300 - rank * 10,
        })
        .collect()
}

#[test]
fn every_theme_and_kind_renders_at_card_size() {
    let dir = TempDir::new().unwrap();
    let engine = engine_with_assets(&dir);
    let rows = dataset::top_rows();

    for theme in ThemeName::ALL {
        let top = engine.render_top(theme.as_str(), &rows).unwrap();
        let decoded = decode(top.as_bytes());
        assert_eq!(decoded.dimensions(), (CARD_WIDTH, CARD_HEIGHT), "top/{theme}");

        for detail in dataset::details() {
            let pair = engine.render_pair(theme.as_str(), &detail).unwrap();
            let decoded = decode(pair.as_bytes());
            assert_eq!(
                decoded.dimensions(),
                (CARD_WIDTH, CARD_HEIGHT),
                "pair/{theme}/{}",
                detail.symbol
            );
        }
    }
}

#[test]
fn missing_background_falls_back_to_gradient() {
    let dir = TempDir::new().unwrap();
    let engine = engine_with_assets(&dir);

    let image = engine.render_top("violet", &dataset::top_rows()).unwrap();
    let decoded = decode(image.as_bytes());
    assert_eq!(decoded.dimensions(), (CARD_WIDTH, CARD_HEIGHT));

    let [r, g, b] = [FALLBACK_TOP.r, FALLBACK_TOP.g, FALLBACK_TOP.b];
    assert!(close_to(decoded.get_pixel(2, 0), [r, g, b], 1));
}

#[test]
fn present_background_is_scaled_to_fill_the_card() {
    let dir = TempDir::new().unwrap();
    RgbaImage::from_pixel(64, 40, Rgba([200, 40, 30, 255]))
        .save(dir.path().join("neo.png"))
        .unwrap();
    let engine = engine_with_assets(&dir);

    let image = engine.render_pair("neo", &dataset::details()[0]).unwrap();
    let decoded = decode(image.as_bytes());
    assert_eq!(decoded.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
    // corners sit outside the card panel
    assert!(close_to(decoded.get_pixel(3, 3), [200, 40, 30], 2));
    assert!(close_to(decoded.get_pixel(1196, 626), [200, 40, 30], 2));
}

#[test]
fn theme_names_ignore_case() {
    let dir = TempDir::new().unwrap();
    let engine = engine_with_assets(&dir);
    let sol = dataset::lookup_detail("sol").unwrap();

    let expected = engine.render_pair("violet", &sol).unwrap();
    for style in ["VIOLET", "Violet", " violet"] {
        assert_eq!(engine.render_pair(style, &sol).unwrap(), expected, "{style}");
    }
}

#[test]
fn unknown_theme_uses_configured_default() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.assets.directory = dir.path().to_path_buf();
    config.render.default_theme = ThemeName::Neo;
    let engine = CardEngine::new(config);
    let rows = dataset::top_rows();

    let expected = engine.render_top("neo", &rows).unwrap();
    assert_eq!(engine.render_top("sepia", &rows).unwrap(), expected);
    assert_eq!(engine.render_top("", &rows).unwrap(), expected);
}

#[test]
fn rows_beyond_five_are_not_drawn() {
    let dir = TempDir::new().unwrap();
    let engine = engine_with_assets(&dir);
    let rows = many_rows(9);

    for theme in ThemeName::ALL {
        let capped = engine.render_top(theme.as_str(), &rows[..5]).unwrap();
        let all = engine.render_top(theme.as_str(), &rows).unwrap();
        assert_eq!(all, capped, "{theme}");
    }
}

#[test]
fn fewer_rows_leave_lower_slots_empty() {
    let dir = TempDir::new().unwrap();
    let engine = engine_with_assets(&dir);
    let rows = dataset::top_rows();

    let three = engine.render_top("classic", &rows[..3]).unwrap();
    let five = engine.render_top("classic", &rows).unwrap();
    assert_ne!(three, five);

    let empty = engine.render_top("classic", &[]).unwrap();
    assert_eq!(decode(empty.as_bytes()).dimensions(), (CARD_WIDTH, CARD_HEIGHT));
}

#[test]
fn very_long_names_still_render() {
    let dir = TempDir::new().unwrap();
    let engine = engine_with_assets(&dir);
    let mut detail = dataset::lookup_detail("eth").unwrap();
    detail.name = "Extraordinarily Long Wrapped Staked Ethereum Liquidity Token".repeat(3);
    detail.change_pct = 0.0;

    for theme in ThemeName::ALL {
        let image = engine.render_pair(theme.as_str(), &detail).unwrap();
        assert_eq!(decode(image.as_bytes()).dimensions(), (CARD_WIDTH, CARD_HEIGHT));
    }
}
