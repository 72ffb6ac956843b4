//! Threshold-rule position generator.
//!
//! Each cell starts flat. A price above `long_trigger` adds `long_shares`,
//! a price below `short_trigger` subtracts `short_shares`. The two rules are
//! evaluated independently, so a price inside a straddled band (long trigger
//! below short trigger) receives both.

use crate::domain::error::PriceStatsError;
use crate::domain::table::{PositionTable, PriceTable};
use crate::ports::config_port::ConfigPort;
use tracing::{debug, warn};

const SECTION: &str = "positions";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRule {
    pub long_shares: u32,
    pub long_trigger: f64,
    pub short_shares: u32,
    pub short_trigger: f64,
}

impl PositionRule {
    pub fn new(long_shares: u32, long_trigger: f64, short_shares: u32, short_trigger: f64) -> Self {
        Self {
            long_shares,
            long_trigger,
            short_shares,
            short_trigger,
        }
    }

    /// Read the rule from the `[positions]` config section.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, PriceStatsError> {
        Ok(Self {
            long_shares: read_shares(config, "long_shares")?,
            long_trigger: read_trigger(config, "long_trigger")?,
            short_shares: read_shares(config, "short_shares")?,
            short_trigger: read_trigger(config, "short_trigger")?,
        })
    }

    /// Signed position for a single price.
    pub fn position_for(&self, price: f64) -> i64 {
        let mut position = 0i64;
        if price > self.long_trigger {
            position += i64::from(self.long_shares);
        }
        if price < self.short_trigger {
            position -= i64::from(self.short_shares);
        }
        position
    }

    /// True when some price is both above the long trigger and below the
    /// short trigger.
    pub fn is_straddled(&self) -> bool {
        self.long_trigger < self.short_trigger
    }
}

pub fn generate_positions(prices: &PriceTable, rule: &PositionRule) -> PositionTable {
    debug!(
        dates = prices.n_dates(),
        tickers = prices.n_tickers(),
        long_shares = rule.long_shares,
        long_trigger = rule.long_trigger,
        short_shares = rule.short_shares,
        short_trigger = rule.short_trigger,
        "generating positions"
    );
    if rule.is_straddled() {
        warn!(
            long_trigger = rule.long_trigger,
            short_trigger = rule.short_trigger,
            "long trigger is below short trigger; prices in between get both legs"
        );
    }

    prices.map(|&price| rule.position_for(price))
}

fn read_shares(config: &dyn ConfigPort, key: &str) -> Result<u32, PriceStatsError> {
    let value = config
        .get_int(SECTION, key)
        .map_err(|reason| PriceStatsError::config_invalid(SECTION, key, reason))?
        .ok_or_else(|| PriceStatsError::config_missing(SECTION, key))?;

    match u32::try_from(value) {
        Ok(shares) if shares > 0 => Ok(shares),
        _ => Err(PriceStatsError::config_invalid(
            SECTION,
            key,
            format!("share count must be a positive integer, got {value}"),
        )),
    }
}

fn read_trigger(config: &dyn ConfigPort, key: &str) -> Result<f64, PriceStatsError> {
    let value = config
        .get_double(SECTION, key)
        .map_err(|reason| PriceStatsError::config_invalid(SECTION, key, reason))?
        .ok_or_else(|| PriceStatsError::config_missing(SECTION, key))?;

    if !value.is_finite() {
        return Err(PriceStatsError::config_invalid(
            SECTION,
            key,
            "trigger must be a finite number",
        ));
    }
    Ok(value)
}
