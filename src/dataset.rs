//! Demo market data and the symbol lookup layer.
//!
//! The built-in tables hold five assets. Callers with their own data can read
//! records from JSON in the same shape the dashboard API serves.

use crate::card::{AssetDetail, MarketSummaryRow};
use serde::Deserialize;
use thiserror::Error;

/// Failures of the lookup layer, raised before any rendering starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Not found: {0}")]
    UnknownSymbol(String),
}

fn row(rank: u32, symbol: &str, name: &str, score: u8, apy: u32) -> MarketSummaryRow {
    MarketSummaryRow {
        rank,
        symbol: symbol.to_string(),
        name: name.to_string(),
        score,
        apy,
    }
}

/// Leaderboard rows, rank ascending.
pub fn top_rows() -> Vec<MarketSummaryRow> {
    vec![
        row(1, "BTC", "Bitcoin", 94, 245),
        row(2, "ETH", "Ethereum", 89, 189),
        row(3, "SOL", "Solana", 87, 167),
        row(4, "XRP", "Ripple", 85, 158),
        row(5, "DOGE", "Dogecoin", 82, 143),
    ]
}

#[allow(clippy::too_many_arguments)]
fn detail(
    symbol: &str,
    name: &str,
    score: u8,
    price: f64,
    change_pct: f64,
    volume_24h: u64,
    cap: u64,
    volatility: f64,
    trend_pct: f64,
    in_channel: bool,
) -> AssetDetail {
    AssetDetail {
        symbol: symbol.to_string(),
        name: name.to_string(),
        score,
        price,
        change_pct,
        volume_24h,
        cap,
        volatility,
        trend_pct,
        in_channel,
        exchange: "Binance".to_string(),
    }
}

/// Detail records for every leaderboard asset.
pub fn details() -> Vec<AssetDetail> {
    vec![
        detail("BTC", "Bitcoin", 94, 43285.12, 2.3, 28_943_150, 847_392_847, 8.5, 52.1, true),
        detail("ETH", "Ethereum", 89, 3125.40, 1.7, 14_211_320, 402_392_111, 9.2, 48.0, true),
        detail("SOL", "Solana", 87, 112.75, 3.1, 8_123_411, 50_011_222, 11.0, 55.4, true),
        detail("XRP", "Ripple", 85, 0.68, -0.6, 5_123_980, 35_200_111, 7.8, 41.2, false),
        detail("DOGE", "Dogecoin", 82, 0.19, 0.9, 3_894_112, 26_221_111, 10.2, 39.7, true),
    ]
}

/// Finds `symbol` in `records`, ignoring case and surrounding whitespace.
pub fn find_detail(records: &[AssetDetail], symbol: &str) -> Result<AssetDetail, LookupError> {
    let wanted = symbol.trim();
    records
        .iter()
        .find(|d| d.symbol.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| LookupError::UnknownSymbol(wanted.to_ascii_uppercase()))
}

/// Looks up a built-in detail record.
pub fn lookup_detail(symbol: &str) -> Result<AssetDetail, LookupError> {
    find_detail(&details(), symbol)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RowsDocument {
    Wrapped { items: Vec<MarketSummaryRow> },
    Bare(Vec<MarketSummaryRow>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DetailDocument {
    Many(Vec<AssetDetail>),
    One(AssetDetail),
}

/// Parses leaderboard rows from `{"items": [...]}` or a bare array.
pub fn load_rows_json(text: &str) -> Result<Vec<MarketSummaryRow>, serde_json::Error> {
    let rows = match serde_json::from_str(text)? {
        RowsDocument::Wrapped { items } => items,
        RowsDocument::Bare(rows) => rows,
    };
    Ok(rows)
}

/// Parses one detail object or an array of them.
pub fn load_detail_json(text: &str) -> Result<Vec<AssetDetail>, serde_json::Error> {
    let records = match serde_json::from_str(text)? {
        DetailDocument::Many(records) => records,
        DetailDocument::One(record) => vec![record],
    };
    Ok(records)
}
