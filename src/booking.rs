use crate::config::Locale;
use crate::model::{BookingAdvice, BookingWindow, PricePoint};

/// Percentile band of historical prices. `None` for an empty series.
pub fn compute_booking_window(points: &[PricePoint]) -> Option<BookingWindow> {
    let mut prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    if prices.is_empty() {
        return None;
    }
    prices.sort_by(f64::total_cmp);

    let n = prices.len();
    Some(BookingWindow {
        p10: prices[n / 10],
        p50: prices[n / 2],
        min: prices[0],
    })
}

pub fn explain_booking_window(window: BookingWindow, locale: Locale) -> BookingAdvice {
    let summary = match locale {
        Locale::En => {
            "Lower percentiles indicate lower historical prices; book when price approaches the P10-P50 range."
        }
        Locale::Zh => "较低分位数代表历史低价；价格接近 P10-P50 区间时适合下单。",
    };
    BookingAdvice {
        summary: summary.to_string(),
        window,
    }
}
