//! Sectors of the highest-priced tickers on a date.

use crate::domain::error::PriceStatsError;
use crate::domain::sector::SectorMap;
use crate::domain::table::PriceTable;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

const SECTION: &str = "industries";

/// The `top_n` largest prices on `date`, highest first.
///
/// Equal prices keep column order. NaN prices are never selected, and a
/// `top_n` above the number of priced tickers returns all of them.
pub fn top_performers(
    prices: &PriceTable,
    date: NaiveDate,
    top_n: usize,
) -> Result<Vec<(String, f64)>, PriceStatsError> {
    let row = prices
        .row(date)
        .ok_or(PriceStatsError::DateNotFound { date })?;

    let mut ranked: Vec<(usize, f64)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, price)| !price.is_nan())
        .collect();
    // stable sort: ties stay in column order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(top_n);

    Ok(ranked
        .into_iter()
        .map(|(col, price)| (prices.tickers()[col].clone(), price))
        .collect())
}

/// Distinct sectors among the `top_n` highest-priced tickers on `date`.
pub fn date_top_industries(
    prices: &PriceTable,
    sectors: &SectorMap,
    date: NaiveDate,
    top_n: usize,
) -> Result<BTreeSet<String>, PriceStatsError> {
    let performers = top_performers(prices, date, top_n)?;
    debug!(%date, top_n, selected = performers.len(), "resolving top industries");

    performers
        .iter()
        .map(|(ticker, _)| {
            sectors
                .sector_of(ticker)
                .map(str::to_string)
                .ok_or_else(|| PriceStatsError::SectorNotFound {
                    ticker: ticker.clone(),
                })
        })
        .collect()
}

/// Read `[industries] top_n`, falling back to `default` when absent.
pub fn top_n_from_config(
    config: &dyn ConfigPort,
    default: usize,
) -> Result<usize, PriceStatsError> {
    match config.get_int(SECTION, "top_n") {
        Ok(None) => Ok(default),
        Ok(Some(value)) => usize::try_from(value).map_err(|_| {
            PriceStatsError::config_invalid(
                SECTION,
                "top_n",
                format!("top_n must be non-negative, got {value}"),
            )
        }),
        Err(reason) => Err(PriceStatsError::config_invalid(SECTION, "top_n", reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;
    use crate::domain::table::DateTable;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample_prices() -> PriceTable {
        DateTable::new(
            vec![day(1), day(2)],
            ["BHP", "CBA", "RIO", "WBC"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            vec![
                vec![40.0, 100.0, 120.0, 25.0],
                vec![45.0, 30.0, 110.0, 90.0],
            ],
        )
        .unwrap()
    }

    fn sample_sectors() -> SectorMap {
        SectorMap::from_pairs([
            ("BHP", "Materials"),
            ("CBA", "Financials"),
            ("RIO", "Materials"),
            ("WBC", "Financials"),
        ])
        .unwrap()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn top_performers_ranks_highest_first() {
        let top = top_performers(&sample_prices(), day(1), 2).unwrap();
        assert_eq!(top, vec![("RIO".to_string(), 120.0), ("CBA".to_string(), 100.0)]);
    }

    #[test]
    fn top_industries_deduplicates_sectors() {
        // RIO and WBC on day 2 -> Materials, Financials
        let industries =
            date_top_industries(&sample_prices(), &sample_sectors(), day(2), 2).unwrap();
        assert_eq!(industries, set(&["Financials", "Materials"]));

        // BHP joins at top_n = 3 but brings no new sector
        let industries =
            date_top_industries(&sample_prices(), &sample_sectors(), day(2), 3).unwrap();
        assert_eq!(industries, set(&["Financials", "Materials"]));
    }

    #[test]
    fn same_sector_pair_gives_single_industry() {
        let prices = DateTable::new(
            vec![day(1)],
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            vec![vec![50.0, 60.0, 10.0]],
        )
        .unwrap();
        let sectors =
            SectorMap::from_pairs([("A", "Energy"), ("B", "Energy"), ("C", "Utilities")]).unwrap();

        let industries = date_top_industries(&prices, &sectors, day(1), 2).unwrap();
        assert_eq!(industries, set(&["Energy"]));
    }

    #[test]
    fn ties_keep_column_order() {
        let prices = DateTable::new(
            vec![day(1)],
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            vec![vec![10.0, 10.0, 10.0]],
        )
        .unwrap();
        let top = top_performers(&prices, day(1), 2).unwrap();
        let names: Vec<&str> = top.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn nan_prices_are_skipped() {
        let prices = DateTable::new(
            vec![day(1)],
            vec!["A".to_string(), "B".to_string()],
            vec![vec![f64::NAN, 3.0]],
        )
        .unwrap();
        let top = top_performers(&prices, day(1), 2).unwrap();
        assert_eq!(top, vec![("B".to_string(), 3.0)]);
    }

    #[test]
    fn top_n_larger_than_universe_selects_all() {
        let industries =
            date_top_industries(&sample_prices(), &sample_sectors(), day(1), 10).unwrap();
        assert_eq!(industries, set(&["Financials", "Materials"]));
    }

    #[test]
    fn top_n_zero_is_empty() {
        let industries =
            date_top_industries(&sample_prices(), &sample_sectors(), day(1), 0).unwrap();
        assert!(industries.is_empty());
    }

    #[test]
    fn missing_date_is_an_error() {
        let result = date_top_industries(&sample_prices(), &sample_sectors(), day(9), 2);
        match result {
            Err(PriceStatsError::DateNotFound { date }) => assert_eq!(date, day(9)),
            other => panic!("expected DateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn missing_sector_is_an_error() {
        let sectors = SectorMap::from_pairs([("CBA", "Financials")]).unwrap();
        let result = date_top_industries(&sample_prices(), &sectors, day(1), 2);
        match result {
            Err(PriceStatsError::SectorNotFound { ticker }) => assert_eq!(ticker, "RIO"),
            other => panic!("expected SectorNotFound, got {other:?}"),
        }
    }

    #[test]
    fn unselected_tickers_need_no_sector() {
        let sectors = SectorMap::from_pairs([("RIO", "Materials")]).unwrap();
        let industries = date_top_industries(&sample_prices(), &sectors, day(1), 1).unwrap();
        assert_eq!(industries, set(&["Materials"]));
    }

    #[test]
    fn top_n_config() {
        let config = FileConfigAdapter::from_string("[industries]\ntop_n = 4\n").unwrap();
        assert_eq!(top_n_from_config(&config, 2).unwrap(), 4);

        let config = FileConfigAdapter::from_string("[industries]\n").unwrap();
        assert_eq!(top_n_from_config(&config, 2).unwrap(), 2);

        let config = FileConfigAdapter::from_string("[industries]\ntop_n = -1\n").unwrap();
        assert!(matches!(
            top_n_from_config(&config, 2),
            Err(PriceStatsError::ConfigInvalid { .. })
        ));
    }
}
