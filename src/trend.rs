//! Least-squares trend over a dated price series.

use chrono::{Datelike, NaiveDate};

use crate::config::Locale;
use crate::model::{PricePoint, PriceTrend, Trend, TrendAdvice};

pub const DEFAULT_TREND_THRESHOLD: f64 = 0.002;

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

fn day_number(date: &str) -> Option<i64> {
    parse_date(date).map(|d| i64::from(d.num_days_from_ce()))
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    // halves round toward +inf
    let rounded = (value * factor + 0.5).floor() / factor;
    // avoid emitting -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

struct Stats {
    min: f64,
    max: f64,
    avg: f64,
    stddev: f64,
}

fn summarize(values: &[f64]) -> Stats {
    let n = values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n;
    Stats {
        min,
        max,
        avg,
        stddev: variance.sqrt(),
    }
}

fn regression_slope(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    if xs.len() < 2 {
        return 0.0;
    }
    let x_avg = xs.iter().sum::<f64>() / n;
    let y_avg = ys.iter().sum::<f64>() / n;

    let mut num = 0.0;
    let mut den = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - x_avg;
        num += dx * (y - y_avg);
        den += dx * dx;
    }
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

pub fn classify(slope_pct_per_day: f64, threshold: f64) -> Trend {
    if slope_pct_per_day > threshold {
        Trend::Rising
    } else if slope_pct_per_day < -threshold {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

/// Mean, population stddev and OLS slope of price against calendar day.
///
/// Points with unparseable dates or non-finite prices are dropped. Returns `None`
/// when nothing usable remains. `date_start`/`date_end` are the earliest and latest
/// usable dates, whatever order the points arrive in.
pub fn compute_price_trend(points: &[PricePoint], threshold: f64) -> Option<PriceTrend> {
    let mut rows: Vec<(i64, &str, f64)> = points
        .iter()
        .filter(|p| p.price.is_finite())
        .filter_map(|p| day_number(&p.date).map(|day| (day, p.date.as_str(), p.price)))
        .collect();
    if rows.is_empty() {
        return None;
    }
    rows.sort_by_key(|r| r.0);

    let days: Vec<f64> = rows.iter().map(|r| r.0 as f64).collect();
    let prices: Vec<f64> = rows.iter().map(|r| r.2).collect();
    let stats = summarize(&prices);

    let slope_per_day = regression_slope(&days, &prices);
    let (slope_pct_per_day, volatility) = if stats.avg == 0.0 {
        (0.0, 0.0)
    } else {
        (slope_per_day / stats.avg, stats.stddev / stats.avg)
    };

    Some(PriceTrend {
        count: rows.len(),
        date_start: rows[0].1.to_string(),
        date_end: rows[rows.len() - 1].1.to_string(),
        min: round_to(stats.min, 2),
        max: round_to(stats.max, 2),
        avg: round_to(stats.avg, 2),
        stddev: round_to(stats.stddev, 2),
        volatility: round_to(volatility, 4),
        slope_per_day: round_to(slope_per_day, 2),
        slope_pct_per_day: round_to(slope_pct_per_day, 4),
        trend: classify(slope_pct_per_day, threshold),
    })
}

pub fn explain_price_trend(trend: PriceTrend, locale: Locale) -> TrendAdvice {
    let summary = match locale {
        Locale::En => {
            "Trend is based on linear regression over daily prices; volatility is stddev/avg."
        }
        Locale::Zh => "趋势基于每日价格的线性回归；波动系数为标准差/均值。",
    };
    TrendAdvice {
        summary: summary.to_string(),
        trend,
    }
}
