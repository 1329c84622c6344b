//! Per-date minimums over flight points and hotel offers.
//!
//! Dates are opaque ISO `YYYY-MM-DD` tokens; ordering is lexicographic.

use std::collections::BTreeMap;

use crate::model::{DailyPrice, HotelOffer, PricePoint, PriceSeriesSummary};

/// Lowest price per date. Entries with an empty date or a non-finite price are skipped.
pub fn min_by_date<'a, I>(entries: I) -> BTreeMap<&'a str, f64>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut mins: BTreeMap<&'a str, f64> = BTreeMap::new();
    for (date, price) in entries {
        if date.is_empty() || !price.is_finite() {
            continue;
        }
        mins.entry(date)
            .and_modify(|cur| {
                if price < *cur {
                    *cur = price;
                }
            })
            .or_insert(price);
    }
    mins
}

pub fn flight_min_map(points: &[PricePoint]) -> BTreeMap<&str, f64> {
    min_by_date(points.iter().map(|p| (p.date.as_str(), p.price)))
}

pub fn hotel_min_map<'a, I>(hotels: I) -> BTreeMap<&'a str, f64>
where
    I: IntoIterator<Item = &'a HotelOffer>,
{
    min_by_date(
        hotels
            .into_iter()
            .filter_map(|h| h.date.as_deref().map(|d| (d, h.total_price))),
    )
}

fn to_daily(map: &BTreeMap<&str, f64>) -> Vec<DailyPrice> {
    map.iter()
        .map(|(date, price)| DailyPrice {
            date: (*date).to_string(),
            price: *price,
        })
        .collect()
}

pub fn flight_daily_min(points: &[PricePoint]) -> Vec<DailyPrice> {
    to_daily(&flight_min_map(points))
}

pub fn hotel_daily_min<'a, I>(hotels: I) -> Vec<DailyPrice>
where
    I: IntoIterator<Item = &'a HotelOffer>,
{
    to_daily(&hotel_min_map(hotels))
}

/// Flight minimum plus hotel minimum, only for dates present in both.
pub fn total_daily_min(flight: &[DailyPrice], hotel: &[DailyPrice]) -> Vec<DailyPrice> {
    let flight_by_date: BTreeMap<&str, f64> =
        flight.iter().map(|d| (d.date.as_str(), d.price)).collect();

    let mut totals: Vec<DailyPrice> = hotel
        .iter()
        .filter_map(|h| {
            flight_by_date.get(h.date.as_str()).map(|f| DailyPrice {
                date: h.date.clone(),
                price: f + h.price,
            })
        })
        .collect();
    totals.sort_by(|a, b| a.date.cmp(&b.date));
    totals
}

pub fn summarize_daily_mins<'a, I>(points: &[PricePoint], hotels: I) -> PriceSeriesSummary
where
    I: IntoIterator<Item = &'a HotelOffer>,
{
    let flight_daily_min = flight_daily_min(points);
    let hotel_daily_min = hotel_daily_min(hotels);
    let total_daily_min = total_daily_min(&flight_daily_min, &hotel_daily_min);
    PriceSeriesSummary {
        flight_daily_min,
        hotel_daily_min,
        total_daily_min,
    }
}
