#![allow(dead_code)]

use chrono::NaiveDate;
use pricestats::domain::sector::SectorMap;
use pricestats::domain::table::{DateTable, PriceTable};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route library logs to the test harness. `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Consecutive daily dates starting at `start` (YYYY-MM-DD).
pub fn daily_dates(start: &str, count: usize) -> Vec<NaiveDate> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    (0..count)
        .map(|i| start + chrono::Duration::days(i as i64))
        .collect()
}

pub fn make_prices(tickers: &[&str], rows: Vec<Vec<f64>>) -> PriceTable {
    DateTable::new(
        daily_dates("2024-01-01", rows.len()),
        tickers.iter().map(|t| t.to_string()).collect(),
        rows,
    )
    .unwrap()
}

/// Four ASX tickers over five trading days.
pub fn asx_prices() -> PriceTable {
    make_prices(
        &["BHP", "CBA", "RIO", "WBC"],
        vec![
            vec![45.10, 110.20, 120.50, 26.30],
            vec![45.90, 109.80, 118.70, 26.80],
            vec![44.70, 111.50, 121.10, 27.10],
            vec![46.20, 112.30, 119.90, 26.90],
            vec![46.80, 111.00, 122.40, 27.40],
        ],
    )
}

pub fn asx_sectors() -> SectorMap {
    SectorMap::from_pairs([
        ("BHP", "Materials"),
        ("CBA", "Financials"),
        ("RIO", "Materials"),
        ("WBC", "Financials"),
    ])
    .unwrap()
}
