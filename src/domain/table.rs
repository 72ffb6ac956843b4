//! Date x ticker tables.
//!
//! Rows are indexed by a strictly increasing date index, columns by unique
//! ticker symbols. Cells are stored row-major.

use crate::domain::error::PriceStatsError;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Closing prices per date and ticker.
pub type PriceTable = DateTable<f64>;

/// Period returns. `None` marks an undefined cell (no prior price).
pub type ReturnTable = DateTable<Option<f64>>;

/// Signed share counts per date and ticker.
pub type PositionTable = DateTable<i64>;

#[derive(Debug, Clone, PartialEq)]
pub struct DateTable<T> {
    dates: Vec<NaiveDate>,
    tickers: Vec<String>,
    cells: Vec<T>,
    date_index: HashMap<NaiveDate, usize>,
    ticker_index: HashMap<String, usize>,
}

impl<T> DateTable<T> {
    /// Build a table from its date index, ticker columns and one row per date.
    pub fn new(
        dates: Vec<NaiveDate>,
        tickers: Vec<String>,
        rows: Vec<Vec<T>>,
    ) -> Result<Self, PriceStatsError> {
        if rows.len() != dates.len() {
            return Err(PriceStatsError::RowCountMismatch {
                dates: dates.len(),
                rows: rows.len(),
            });
        }

        for pair in dates.windows(2) {
            if pair[1] <= pair[0] {
                return Err(PriceStatsError::UnsortedDates {
                    previous: pair[0],
                    date: pair[1],
                });
            }
        }

        let mut ticker_index = HashMap::with_capacity(tickers.len());
        for (i, ticker) in tickers.iter().enumerate() {
            if ticker_index.insert(ticker.clone(), i).is_some() {
                return Err(PriceStatsError::DuplicateTicker {
                    ticker: ticker.clone(),
                });
            }
        }

        let mut cells = Vec::with_capacity(dates.len() * tickers.len());
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != tickers.len() {
                return Err(PriceStatsError::ShapeMismatch {
                    row,
                    expected: tickers.len(),
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        let date_index = dates.iter().enumerate().map(|(i, &d)| (d, i)).collect();

        Ok(Self {
            dates,
            tickers,
            cells,
            date_index,
            ticker_index,
        })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    pub fn n_dates(&self) -> usize {
        self.dates.len()
    }

    pub fn n_tickers(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn date_position(&self, date: NaiveDate) -> Option<usize> {
        self.date_index.get(&date).copied()
    }

    pub fn ticker_position(&self, ticker: &str) -> Option<usize> {
        self.ticker_index.get(ticker).copied()
    }

    /// Row at position `i` in the date index.
    ///
    /// Panics if `i` is out of bounds, like slice indexing.
    pub fn row_at(&self, i: usize) -> &[T] {
        let width = self.tickers.len();
        &self.cells[i * width..(i + 1) * width]
    }

    pub fn row(&self, date: NaiveDate) -> Option<&[T]> {
        self.date_position(date).map(|i| self.row_at(i))
    }

    pub fn get(&self, date: NaiveDate, ticker: &str) -> Option<&T> {
        let row = self.date_position(date)?;
        let col = self.ticker_position(ticker)?;
        self.cells.get(row * self.tickers.len() + col)
    }

    pub fn rows(&self) -> impl Iterator<Item = (NaiveDate, &[T])> {
        self.dates
            .iter()
            .enumerate()
            .map(move |(i, &date)| (date, self.row_at(i)))
    }

    /// All cells of one ticker in date order.
    pub fn column(&self, ticker: &str) -> Option<Vec<(NaiveDate, &T)>> {
        let col = self.ticker_position(ticker)?;
        Some(
            self.rows()
                .map(|(date, row)| (date, &row[col]))
                .collect(),
        )
    }

    /// Apply `f` to every cell, keeping the date index and tickers.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> DateTable<U> {
        let cells = self.cells.iter().map(f).collect();
        self.with_cells(cells)
    }

    /// Build a table of the same shape from row-major `cells`.
    pub(crate) fn with_cells<U>(&self, cells: Vec<U>) -> DateTable<U> {
        debug_assert_eq!(cells.len(), self.cells.len());
        DateTable {
            dates: self.dates.clone(),
            tickers: self.tickers.clone(),
            cells,
            date_index: self.date_index.clone(),
            ticker_index: self.ticker_index.clone(),
        }
    }
}
