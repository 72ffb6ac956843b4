//! Mean-return significance test.
//!
//! One-sample t-test of H0: mean = 0.
//!
//! t  = mean / (s / sqrt(n)),  s = sample standard deviation (n - 1)
//! df = n - 1
//!
//! The reported p-value is the two-tailed Student-t p-value halved. Halving
//! is only meaningful when the sign of t matches the direction of the
//! alternative being tested; that is left to the caller.

use crate::domain::error::PriceStatsError;
use crate::domain::table::ReturnTable;
use chrono::NaiveDate;
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

pub const MIN_OBSERVATIONS: usize = 2;

/// Realized returns of a strategy, indexed by date.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    pub name: String,
    points: Vec<(NaiveDate, f64)>,
}

impl ReturnSeries {
    pub fn new(
        name: impl Into<String>,
        points: Vec<(NaiveDate, f64)>,
    ) -> Result<Self, PriceStatsError> {
        for pair in points.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(PriceStatsError::UnsortedDates {
                    previous: pair[0].0,
                    date: pair[1].0,
                });
            }
        }
        Ok(Self {
            name: name.into(),
            points,
        })
    }

    /// One ticker's column of a return table, skipping undefined cells.
    pub fn from_column(returns: &ReturnTable, ticker: &str) -> Result<Self, PriceStatsError> {
        let column = returns
            .column(ticker)
            .ok_or_else(|| PriceStatsError::TickerNotFound {
                ticker: ticker.to_string(),
            })?;
        let points = column
            .into_iter()
            .filter_map(|(date, value)| value.map(|v| (date, v)))
            .collect();
        Ok(Self {
            name: ticker.to_string(),
            points,
        })
    }

    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestResult {
    pub t_statistic: f64,
    /// Two-tailed p-value divided by two.
    pub p_value: f64,
    pub two_tailed_p_value: f64,
    pub degrees_of_freedom: f64,
    pub observations: usize,
}

impl TTestResult {
    /// `(t-statistic, one-tailed p-value)`.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.t_statistic, self.p_value)
    }
}

pub fn analyze_returns(returns: &ReturnSeries) -> Result<TTestResult, PriceStatsError> {
    let values: Vec<f64> = returns.values().collect();
    let n = values.len();

    if n < MIN_OBSERVATIONS {
        return Err(PriceStatsError::InsufficientData {
            observations: n,
            minimum: MIN_OBSERVATIONS,
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(PriceStatsError::NonFiniteObservation { index });
    }
    if values.iter().all(|&v| v == values[0]) {
        return Err(PriceStatsError::ZeroVariance);
    }

    let count = n as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1.0);
    let std_err = (variance / count).sqrt();
    if std_err == 0.0 {
        return Err(PriceStatsError::ZeroVariance);
    }

    let t_statistic = mean / std_err;
    let degrees_of_freedom = count - 1.0;

    let dist = StudentsT::new(0.0, 1.0, degrees_of_freedom).map_err(|e| {
        PriceStatsError::Distribution {
            reason: e.to_string(),
        }
    })?;
    let two_tailed_p_value = (2.0 * dist.sf(t_statistic.abs())).clamp(0.0, 1.0);

    debug!(
        series = %returns.name,
        observations = n,
        mean,
        t_statistic,
        p_value = two_tailed_p_value / 2.0,
        "t-test on returns"
    );

    Ok(TTestResult {
        t_statistic,
        p_value: two_tailed_p_value / 2.0,
        two_tailed_p_value,
        degrees_of_freedom,
        observations: n,
    })
}
