//! Ticker to sector mapping.

use crate::domain::error::PriceStatsError;
use std::collections::HashMap;

/// One sector name per ticker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorMap {
    sectors: HashMap<String, String>,
}

impl SectorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(ticker, sector)` pairs. A ticker listed twice is an error.
    pub fn from_pairs<I, T, S>(pairs: I) -> Result<Self, PriceStatsError>
    where
        I: IntoIterator<Item = (T, S)>,
        T: Into<String>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for (ticker, sector) in pairs {
            map.insert(ticker, sector)?;
        }
        Ok(map)
    }

    pub fn insert(
        &mut self,
        ticker: impl Into<String>,
        sector: impl Into<String>,
    ) -> Result<(), PriceStatsError> {
        let ticker = ticker.into();
        if self.sectors.contains_key(&ticker) {
            return Err(PriceStatsError::DuplicateSector { ticker });
        }
        self.sectors.insert(ticker, sector.into());
        Ok(())
    }

    pub fn sector_of(&self, ticker: &str) -> Option<&str> {
        self.sectors.get(ticker).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}
