use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sharecard::card::{CardEngine, MarketSummaryRow, RenderedImage, ThemeName};
use sharecard::{Config, dataset};
use std::fs;
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SHARECARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sharecard")]
#[command(version = VERSION, about = "Themed social-share preview cards for a crypto dashboard")]
struct Cli {
    /// Config file to use instead of ~/.config/sharecard/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the "top coins" leaderboard card
    Top {
        /// Theme name (classic, violet, neo); unknown names use the configured default
        #[arg(long, short = 's', value_name = "STYLE")]
        style: Option<String>,

        /// JSON file with leaderboard rows instead of the built-in table
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Where to write the PNG
        #[arg(long, short = 'o', value_name = "FILE")]
        output: PathBuf,
    },

    /// Render the detail card for one asset
    Pair {
        /// Ticker symbol, case-insensitive (e.g. BTC)
        symbol: String,

        /// Theme name (classic, violet, neo); unknown names use the configured default
        #[arg(long, short = 's', value_name = "STYLE")]
        style: Option<String>,

        /// JSON file with one or more detail records instead of the built-in table
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Where to write the PNG
        #[arg(long, short = 'o', value_name = "FILE")]
        output: PathBuf,
    },

    /// List available themes
    Themes,

    /// Write a documented default config file
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Top {
            style,
            data,
            output,
        } => {
            let rows = match data {
                Some(path) => read_rows(&path)?,
                None => dataset::top_rows(),
            };
            let engine = CardEngine::new(config);
            let style = style_or_default(style, &engine);
            let image = engine.render_top(&style, &rows)?;
            save(&image, &output, "top")?;
        }
        Command::Pair {
            symbol,
            style,
            data,
            output,
        } => {
            // Reject unknown symbols before the renderer is reached
            let detail = match data {
                Some(path) => dataset::find_detail(&read_details(&path)?, &symbol)?,
                None => dataset::lookup_detail(&symbol)?,
            };
            let engine = CardEngine::new(config);
            let style = style_or_default(style, &engine);
            let image = engine.render_pair(&style, &detail)?;
            save(&image, &output, &detail.symbol)?;
        }
        Command::Themes => {
            let default = config.render.default_theme;
            for theme in ThemeName::ALL {
                if theme == default {
                    println!("{theme} (default)");
                } else {
                    println!("{theme}");
                }
            }
        }
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Created {}", path.display());
        }
    }

    Ok(())
}

fn style_or_default(style: Option<String>, engine: &CardEngine) -> String {
    style.unwrap_or_else(|| engine.default_theme().as_str().to_string())
}

fn read_rows(path: &Path) -> Result<Vec<MarketSummaryRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rows from {}", path.display()))?;
    dataset::load_rows_json(&text)
        .with_context(|| format!("Failed to parse rows from {}", path.display()))
}

fn read_details(path: &Path) -> Result<Vec<sharecard::card::AssetDetail>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read details from {}", path.display()))?;
    dataset::load_detail_json(&text)
        .with_context(|| format!("Failed to parse details from {}", path.display()))
}

fn save(image: &RenderedImage, output: &Path, label: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, image.as_bytes())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!(
        "Rendered {} card ({}x{}, {} bytes)",
        label,
        image.width(),
        image.height(),
        image.as_bytes().len()
    );
    println!("Saved {} card to {}", label, output.display());
    Ok(())
}
