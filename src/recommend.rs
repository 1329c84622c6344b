use tracing::debug;

use crate::booking;
use crate::config::{AdvisorConfig, Locale};
use crate::input::RecommendInput;
use crate::model::{
    BookingWindow, Plan, PriceTrend, Recommendation, TravelWindow, TripCostSummary, WindowBasis,
};
use crate::scoring;
use crate::series;
use crate::trend;
use crate::window;

struct Findings<'a> {
    comfort: Option<&'a Plan>,
    booking: Option<&'a BookingWindow>,
    window: Option<&'a TravelWindow>,
    basis: WindowBasis,
    trip_days: usize,
    trend: Option<&'a PriceTrend>,
    trip_cost: Option<&'a TripCostSummary>,
}

fn explain(findings: &Findings<'_>, locale: Locale) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(max) = findings.comfort.and_then(|p| p.constraints).map(|c| c.max_layovers) {
        out.push(match locale {
            Locale::En => format!(
                "The comfort plan allows at most {max} layover(s); this limit was applied when picking its flight."
            ),
            Locale::Zh => format!("体验方案限制最多 {max} 次转机，已在航班筛选中应用。"),
        });
    }

    if findings.booking.is_some() {
        out.push(match locale {
            Locale::En => "The booking window uses historical price percentiles (P10-P50); \
                 prices near that band are the better deals."
                .to_string(),
            Locale::Zh => "订购窗口参考历史价格分位数（P10-P50），价格接近该区间时更划算。".to_string(),
        });
    }

    if let Some(w) = findings.window {
        let days = findings.trip_days;
        out.push(match (locale, findings.basis) {
            (Locale::En, WindowBasis::FlightPlusHotel) => format!(
                "The suggested travel window has the lowest summed flight+hotel cost over {days} consecutive days ({} to {}).",
                w.start_date, w.end_date
            ),
            (Locale::En, WindowBasis::FlightOnly) => format!(
                "The suggested travel window has the lowest summed flight cost over {days} consecutive days ({} to {}).",
                w.start_date, w.end_date
            ),
            (Locale::Zh, WindowBasis::FlightPlusHotel) => format!(
                "推荐出行窗口通过连续 {days} 天的最低机票+酒店成本求和得到（{} 到 {}）。",
                w.start_date, w.end_date
            ),
            (Locale::Zh, WindowBasis::FlightOnly) => format!(
                "推荐出行窗口通过连续 {days} 天的最低机票成本求和得到（{} 到 {}）。",
                w.start_date, w.end_date
            ),
        });
    }

    if let Some(t) = findings.trend {
        out.push(match locale {
            Locale::En => format!("Prices are {}, with volatility {}.", t.trend, t.volatility),
            Locale::Zh => format!("价格趋势为 {}，波动系数 {}。", t.trend, t.volatility),
        });
    }

    if let Some(c) = findings.trip_cost {
        out.push(match locale {
            Locale::En => format!(
                "The cheapest combined flight+hotel date is {} ({}).",
                c.best_date, c.min_total_price
            ),
            Locale::Zh => format!("机票+酒店合计最低的日期为 {}。", c.best_date),
        });
    }

    out
}

/// Assembles every sub-result into one record. Pure: identical inputs give
/// identical output. Input is assumed already validated.
pub fn build_recommendation(input: &RecommendInput, config: &AdvisorConfig) -> Recommendation {
    let RecommendInput {
        flights,
        hotels,
        price_series,
        ..
    } = input;

    let lowest = scoring::lowest_plan(flights, hotels, config);
    let comfort = scoring::comfort_plan(flights, hotels, config);
    let comfort = scoring::attach_delta(lowest.as_ref(), comfort);
    debug!(
        lowest = ?lowest.as_ref().map(|p| p.total_price),
        comfort = ?comfort.as_ref().map(|p| p.total_price),
        "scored plans"
    );

    let booking_window = booking::compute_booking_window(price_series);
    let trip_days = scoring::infer_trip_length_days(input.requested_trip_length(), hotels, config);
    let price_trend = trend::compute_price_trend(price_series, config.trend_threshold_pct);
    debug!(trip_days, trend = ?price_trend.as_ref().map(|t| t.trend), "analyzed price series");

    let comfort_hotels = scoring::comfort_hotels(hotels, config);
    let trip_cost = scoring::trip_cost_summary(price_series, &comfort_hotels);
    let summary = series::summarize_daily_mins(price_series, comfort_hotels.iter().copied());

    let (travel_series, basis) = if summary.total_daily_min.is_empty() {
        (&summary.flight_daily_min, WindowBasis::FlightOnly)
    } else {
        (&summary.total_daily_min, WindowBasis::FlightPlusHotel)
    };
    let travel_window = window::compute_travel_window(travel_series, trip_days, config.window_mode);
    debug!(
        ?basis,
        start = ?travel_window.as_ref().map(|w| w.start_date.as_str()),
        "optimized travel window"
    );

    let explanations = explain(
        &Findings {
            comfort: comfort.as_ref(),
            booking: booking_window.as_ref(),
            window: travel_window.as_ref(),
            basis,
            trip_days,
            trend: price_trend.as_ref(),
            trip_cost: trip_cost.as_ref(),
        },
        config.locale,
    );

    Recommendation {
        lowest_plan: lowest,
        comfort_plan: comfort,
        booking_window: booking_window.map(|w| booking::explain_booking_window(w, config.locale)),
        travel_window,
        travel_window_basis: basis,
        trip_length_days: trip_days,
        price_trend: price_trend.map(|t| trend::explain_price_trend(t, config.locale)),
        hotel_price_range: scoring::hotel_price_range(&comfort_hotels),
        comfort_hotels: scoring::top_comfort_hotels(&comfort_hotels, config.top_hotels),
        trip_cost_summary: trip_cost,
        price_series_summary: summary,
        explanations,
    }
}
