//! Period returns per ticker.
//!
//! simple[t] = (P[t] - P[t-1]) / P[t-1]
//! log[t]    = ln(P[t] / P[t-1])
//! The first row has no prior price and is undefined (`None`). Zero or
//! negative prices are not rejected: the resulting inf/NaN is kept.

use crate::domain::table::{PriceTable, ReturnTable};
use tracing::{debug, warn};

pub fn simple_return(prices: &PriceTable) -> ReturnTable {
    period_returns(prices, "simple", |prev, curr| (curr - prev) / prev)
}

pub fn log_return(prices: &PriceTable) -> ReturnTable {
    period_returns(prices, "log", |prev, curr| (curr / prev).ln())
}

fn period_returns(
    prices: &PriceTable,
    kind: &'static str,
    f: impl Fn(f64, f64) -> f64,
) -> ReturnTable {
    debug!(
        kind,
        dates = prices.n_dates(),
        tickers = prices.n_tickers(),
        "computing returns"
    );

    let mut cells = Vec::with_capacity(prices.n_dates() * prices.n_tickers());
    let mut non_finite = 0usize;

    for i in 0..prices.n_dates() {
        if i == 0 {
            cells.extend(std::iter::repeat_n(None, prices.n_tickers()));
            continue;
        }

        let prev = prices.row_at(i - 1);
        let curr = prices.row_at(i);
        for (&p0, &p1) in prev.iter().zip(curr) {
            let r = f(p0, p1);
            if !r.is_finite() {
                non_finite += 1;
            }
            cells.push(Some(r));
        }
    }

    if non_finite > 0 {
        warn!(kind, count = non_finite, "non-finite returns from zero or negative prices");
    }

    prices.with_cells(cells)
}
