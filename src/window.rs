use crate::config::WindowMode;
use crate::model::{DailyPrice, TravelWindow};
use crate::series;
use crate::trend::parse_date;

pub const POSITIONAL_METHOD: &str = "min-sum-of-daily-min-prices";
pub const CALENDAR_METHOD: &str = "min-sum-of-contiguous-daily-min-prices";

fn is_calendar_contiguous(window: &[(&str, f64)]) -> bool {
    window.windows(2).all(|pair| {
        match (parse_date(pair[0].0), parse_date(pair[1].0)) {
            (Some(a), Some(b)) => (b - a).num_days() == 1,
            _ => false,
        }
    })
}

/// Cheapest run of `trip_length_days` entries in the per-date minimum series.
///
/// Duplicate dates are reduced to their minimum first. In `Positional` mode the
/// run is over sorted positions, so it may straddle dates missing from the input;
/// `Calendar` mode only considers runs of consecutive days. The first of several
/// equal sums wins.
pub fn compute_travel_window(
    prices: &[DailyPrice],
    trip_length_days: usize,
    mode: WindowMode,
) -> Option<TravelWindow> {
    if prices.is_empty() || trip_length_days == 0 {
        return None;
    }
    let daily: Vec<(&str, f64)> =
        series::min_by_date(prices.iter().map(|d| (d.date.as_str(), d.price)))
            .into_iter()
            .collect();
    if daily.len() < trip_length_days {
        return None;
    }

    let mut best: Option<(f64, &[(&str, f64)])> = None;
    for window in daily.windows(trip_length_days) {
        if mode == WindowMode::Calendar && !is_calendar_contiguous(window) {
            continue;
        }
        let sum: f64 = window.iter().map(|(_, price)| price).sum();
        if best.is_none_or(|(best_sum, _)| sum < best_sum) {
            best = Some((sum, window));
        }
    }

    let (sum, window) = best?;
    let method = match mode {
        WindowMode::Positional => POSITIONAL_METHOD,
        WindowMode::Calendar => CALENDAR_METHOD,
    };
    Some(TravelWindow {
        start_date: window[0].0.to_string(),
        end_date: window[window.len() - 1].0.to_string(),
        estimated_flight_cost: sum,
        method: method.to_string(),
    })
}
