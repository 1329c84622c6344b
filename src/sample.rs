//! Built-in demo dataset.

use crate::input::RecommendInput;
use crate::model::{FlightOffer, HotelOffer, PricePoint};

fn flight(price: f64, layovers: u32, depart: &str, arrive: &str) -> FlightOffer {
    FlightOffer {
        price,
        currency: Some("CNY".into()),
        layovers: Some(layovers),
        depart_time: Some(depart.into()),
        arrive_time: Some(arrive.into()),
        segments: Vec::new(),
    }
}

fn hotel(total: f64, nightly: f64, stars: f64, review: f64, date: &str) -> HotelOffer {
    HotelOffer {
        total_price: total,
        nightly_price: Some(nightly),
        star_rating: stars,
        review_score: review,
        date: Some(date.into()),
        check_in: None,
        check_out: None,
        hotel_id: None,
        hotel_name: None,
    }
}

pub fn sample_input(trip_length_days: Option<f64>) -> RecommendInput {
    RecommendInput {
        flights: vec![
            flight(1200.0, 0, "2026-04-06T10:30", "2026-04-06T15:10"),
            flight(900.0, 2, "2026-04-06T06:10", "2026-04-06T18:40"),
        ],
        hotels: vec![
            hotel(1400.0, 350.0, 4.0, 4.2, "2026-02-01"),
            hotel(1300.0, 325.0, 4.0, 4.1, "2026-02-10"),
            hotel(1500.0, 375.0, 5.0, 4.6, "2026-02-20"),
            hotel(1200.0, 300.0, 4.0, 4.3, "2026-03-01"),
        ],
        price_series: vec![
            PricePoint::new("2026-02-01", 1100.0),
            PricePoint::new("2026-02-10", 1000.0),
            PricePoint::new("2026-02-20", 1200.0),
            PricePoint::new("2026-03-01", 900.0),
        ],
        trip_length_days,
    }
}
