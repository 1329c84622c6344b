use crate::config::AdvisorConfig;
use crate::model::{
    ComfortHotel, FlightOffer, HotelOffer, HotelPriceRange, Plan, PlanConstraints, PricePoint,
    TripCostSummary,
};
use crate::series;

pub fn is_comfort_hotel(hotel: &HotelOffer, config: &AdvisorConfig) -> bool {
    hotel.star_rating >= config.min_star_rating && hotel.review_score >= config.min_review_score
}

pub fn comfort_hotels<'a>(
    hotels: &'a [HotelOffer],
    config: &AdvisorConfig,
) -> Vec<&'a HotelOffer> {
    hotels.iter().filter(|h| is_comfort_hotel(h, config)).collect()
}

// `min_by` returns the first of several equal minimums.
fn cheapest_flight<'a, I>(flights: I) -> Option<&'a FlightOffer>
where
    I: IntoIterator<Item = &'a FlightOffer>,
{
    flights
        .into_iter()
        .min_by(|a, b| a.price.total_cmp(&b.price))
}

fn cheapest_hotel<'a>(hotels: &[&'a HotelOffer]) -> Option<&'a HotelOffer> {
    hotels
        .iter()
        .copied()
        .min_by(|a, b| a.total_price.total_cmp(&b.total_price))
}

fn pair(flight: &FlightOffer, hotel: &HotelOffer) -> Plan {
    Plan {
        total_price: flight.price + hotel.total_price,
        flight: flight.clone(),
        hotel: hotel.clone(),
        constraints: None,
        delta_vs_lowest: None,
    }
}

/// Cheapest flight of any shape with the cheapest comfort hotel.
pub fn lowest_plan(
    flights: &[FlightOffer],
    hotels: &[HotelOffer],
    config: &AdvisorConfig,
) -> Option<Plan> {
    let comfort = comfort_hotels(hotels, config);
    let flight = cheapest_flight(flights)?;
    let hotel = cheapest_hotel(&comfort)?;
    Some(pair(flight, hotel))
}

/// Like [`lowest_plan`], with flights capped at `comfort_max_layovers` stops.
pub fn comfort_plan(
    flights: &[FlightOffer],
    hotels: &[HotelOffer],
    config: &AdvisorConfig,
) -> Option<Plan> {
    let max_layovers = config.comfort_max_layovers;
    let comfort = comfort_hotels(hotels, config);
    let flight = cheapest_flight(flights.iter().filter(|f| f.layovers() <= max_layovers))?;
    let hotel = cheapest_hotel(&comfort)?;
    let mut plan = pair(flight, hotel);
    plan.constraints = Some(PlanConstraints { max_layovers });
    Some(plan)
}

pub fn attach_delta(lowest: Option<&Plan>, comfort: Option<Plan>) -> Option<Plan> {
    let lowest = lowest?;
    let mut comfort = comfort?;
    comfort.delta_vs_lowest = Some(comfort.total_price - lowest.total_price);
    Some(comfort)
}

/// Caller's trip length if given, else the first plausible stay length implied by
/// `total_price / nightly_price`, else the configured default.
pub fn infer_trip_length_days(
    requested: Option<usize>,
    hotels: &[HotelOffer],
    config: &AdvisorConfig,
) -> usize {
    if let Some(days) = requested {
        return days;
    }

    hotels
        .iter()
        .find_map(|h| {
            let nightly = h.nightly_price.filter(|n| *n > 0.0)?;
            if h.total_price <= 0.0 {
                return None;
            }
            let nights = (h.total_price / nightly).round();
            (nights.is_finite() && nights >= 1.0 && nights <= config.max_inferred_nights as f64)
                .then_some(nights as usize)
        })
        .unwrap_or(config.default_trip_length_days)
}

fn sorted_totals(hotels: &[&HotelOffer]) -> Vec<f64> {
    let mut totals: Vec<f64> = hotels
        .iter()
        .map(|h| h.total_price)
        .filter(|v| v.is_finite())
        .collect();
    totals.sort_by(f64::total_cmp);
    totals
}

pub fn hotel_price_range(hotels: &[&HotelOffer]) -> Option<HotelPriceRange> {
    let totals = sorted_totals(hotels);
    let (first, last) = (totals.first()?, totals.last()?);
    Some(HotelPriceRange {
        count: totals.len(),
        min_total_price: *first,
        median_total_price: totals[totals.len() / 2],
        max_total_price: *last,
    })
}

pub fn top_comfort_hotels(hotels: &[&HotelOffer], limit: usize) -> Vec<ComfortHotel> {
    let mut ranked = hotels.to_vec();
    ranked.sort_by(|a, b| a.total_price.total_cmp(&b.total_price));
    ranked
        .into_iter()
        .take(limit)
        .map(|h| ComfortHotel {
            hotel_id: h.hotel_id.clone(),
            hotel_name: h.hotel_name.clone(),
            total_price: h.total_price,
            nightly_price: h.nightly_price,
            star_rating: h.star_rating,
            review_score: h.review_score,
        })
        .collect()
}

/// Flight-minimum plus hotel-minimum for each date both sides cover.
/// Equal totals resolve to the earliest date.
pub fn trip_cost_summary(
    points: &[PricePoint],
    hotels: &[&HotelOffer],
) -> Option<TripCostSummary> {
    let flight_min = series::flight_min_map(points);
    let hotel_min = series::hotel_min_map(hotels.iter().copied());

    let mut totals: Vec<(&str, f64)> = flight_min
        .iter()
        .filter_map(|(date, flight)| hotel_min.get(date).map(|hotel| (*date, flight + hotel)))
        .collect();
    if totals.is_empty() {
        return None;
    }
    // stable over date order, so equal totals keep the earliest date first
    totals.sort_by(|a, b| a.1.total_cmp(&b.1));

    let (best_date, min_total) = totals[0];
    let median = totals[totals.len() / 2].1;
    let max = totals[totals.len() - 1].1;
    Some(TripCostSummary {
        best_date: best_date.to_string(),
        min_total_price: min_total,
        median_total_price: median,
        max_total_price: max,
        count: totals.len(),
    })
}
