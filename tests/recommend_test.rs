use farecast::config::{AdvisorConfig, Locale};
use farecast::error::AdviseError;
use farecast::input::RecommendInput;
use farecast::model::{FlightOffer, HotelOffer, PricePoint, WindowBasis};
use farecast::recommend::build_recommendation;
use farecast::sample::sample_input;

fn flight(price: f64, layovers: u32) -> FlightOffer {
    FlightOffer {
        price,
        currency: None,
        layovers: Some(layovers),
        depart_time: None,
        arrive_time: None,
        segments: vec![],
    }
}

fn hotel(total: f64, stars: f64, review: f64, date: Option<&str>) -> HotelOffer {
    HotelOffer {
        total_price: total,
        nightly_price: None,
        star_rating: stars,
        review_score: review,
        date: date.map(String::from),
        check_in: None,
        check_out: None,
        hotel_id: None,
        hotel_name: None,
    }
}

fn base_input() -> RecommendInput {
    RecommendInput {
        flights: vec![flight(1000.0, 0), flight(800.0, 2)],
        hotels: vec![
            hotel(1500.0, 4.0, 4.2, None),
            hotel(900.0, 2.0, 3.5, None),
        ],
        price_series: vec![
            PricePoint::new("2026-04-01", 100.0),
            PricePoint::new("2026-04-01", 120.0),
            PricePoint::new("2026-04-02", 200.0),
            PricePoint::new("2026-04-03", 90.0),
            PricePoint::new("2026-04-04", 80.0),
            PricePoint::new("2026-04-05", 300.0),
        ],
        trip_length_days: Some(3.0),
    }
}

#[test]
fn includes_booking_and_travel_windows() {
    let r = farecast::recommend(&base_input(), &AdvisorConfig::default()).unwrap();
    assert!(r.booking_window.is_some());
    assert_eq!(r.trip_length_days, 3);

    let w = r.travel_window.as_ref().unwrap();
    assert_eq!(w.start_date, "2026-04-02");
    assert_eq!(w.end_date, "2026-04-04");
    assert_eq!(w.estimated_flight_cost, 370.0);
    assert_eq!(r.travel_window_basis, WindowBasis::FlightOnly);

    assert!(r.price_trend.is_some());
    assert!(r.hotel_price_range.is_some());
    assert_eq!(r.comfort_hotels.len(), 1);
    assert_eq!(r.price_series_summary.flight_daily_min.len(), 5);
    assert!(r.price_series_summary.total_daily_min.is_empty());
    assert!(r.trip_cost_summary.is_none());
    assert!(!r.explanations.is_empty());
}

#[test]
fn plans_satisfy_invariants() {
    let r = farecast::recommend(&base_input(), &AdvisorConfig::default()).unwrap();
    let lowest = r.lowest_plan.unwrap();
    let comfort = r.comfort_plan.unwrap();

    for plan in [&lowest, &comfort] {
        assert_eq!(plan.total_price, plan.flight.price + plan.hotel.total_price);
        assert!(plan.hotel.star_rating >= 3.0 && plan.hotel.review_score >= 4.0);
    }
    assert!(comfort.flight.layovers() <= 1);
    assert_eq!(comfort.delta_vs_lowest, Some(comfort.total_price - lowest.total_price));
    assert_eq!(comfort.delta_vs_lowest, Some(200.0));
}

#[test]
fn dated_comfort_hotels_switch_basis() {
    let mut input = base_input();
    input.hotels = vec![
        hotel(500.0, 4.0, 4.2, Some("2026-04-01")),
        hotel(300.0, 4.0, 4.2, Some("2026-04-02")),
        hotel(50.0, 1.0, 2.0, Some("2026-04-03")),
    ];
    input.trip_length_days = Some(2.0);
    let r = farecast::recommend(&input, &AdvisorConfig::default()).unwrap();

    assert_eq!(r.travel_window_basis, WindowBasis::FlightPlusHotel);
    assert_eq!(r.price_series_summary.hotel_daily_min.len(), 2);
    assert_eq!(r.price_series_summary.total_daily_min.len(), 2);

    let w = r.travel_window.unwrap();
    assert_eq!(w.start_date, "2026-04-01");
    assert_eq!(w.end_date, "2026-04-02");
    assert_eq!(w.estimated_flight_cost, 600.0 + 500.0);

    let cost = r.trip_cost_summary.unwrap();
    assert_eq!(cost.best_date, "2026-04-02");
    assert!(r.explanations.iter().any(|e| e.contains("2026-04-02")));
}

#[test]
fn identical_input_gives_identical_output() {
    let input = base_input();
    let config = AdvisorConfig::default();
    let a = build_recommendation(&input, &config);
    let b = build_recommendation(&input, &config);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn empty_input_degrades_gracefully() {
    let r = farecast::recommend(&RecommendInput::default(), &AdvisorConfig::default()).unwrap();
    assert!(r.lowest_plan.is_none());
    assert!(r.comfort_plan.is_none());
    assert!(r.booking_window.is_none());
    assert!(r.travel_window.is_none());
    assert!(r.price_trend.is_none());
    assert!(r.hotel_price_range.is_none());
    assert!(r.trip_cost_summary.is_none());
    assert!(r.comfort_hotels.is_empty());
    assert!(r.explanations.is_empty());
    assert_eq!(r.trip_length_days, 5);
    assert_eq!(r.travel_window_basis, WindowBasis::FlightOnly);
}

#[test]
fn comfort_explanation_only_when_plan_exists() {
    let mut input = base_input();
    input.flights = vec![flight(600.0, 3)];
    let r = farecast::recommend(&input, &AdvisorConfig::default()).unwrap();
    assert!(r.lowest_plan.is_some());
    assert!(r.comfort_plan.is_none());
    assert!(!r.explanations.iter().any(|e| e.contains("layover")));
}

#[test]
fn trip_length_inferred_from_sample_hotels() {
    let r = farecast::recommend(&sample_input(None), &AdvisorConfig::default()).unwrap();
    assert_eq!(r.trip_length_days, 4);
    assert_eq!(r.lowest_plan.unwrap().total_price, 2100.0);
    assert_eq!(r.travel_window.unwrap().estimated_flight_cost, 9600.0);
}

#[test]
fn fractional_trip_length_is_rounded() {
    let mut input = base_input();
    input.trip_length_days = Some(2.4);
    let r = farecast::recommend(&input, &AdvisorConfig::default()).unwrap();
    assert_eq!(r.trip_length_days, 2);

    input.trip_length_days = Some(0.3);
    let r = farecast::recommend(&input, &AdvisorConfig::default()).unwrap();
    assert_eq!(r.trip_length_days, 1);
}

#[test]
fn chinese_explanations() {
    let config = AdvisorConfig {
        locale: Locale::Zh,
        ..AdvisorConfig::default()
    };
    let r = farecast::recommend(&base_input(), &config).unwrap();
    assert!(r.explanations.iter().any(|e| e.contains("推荐出行窗口")));
    assert!(r.booking_window.unwrap().summary.contains("P10-P50"));
}

#[test]
fn negative_trip_length_fails_fast() {
    let mut input = base_input();
    input.trip_length_days = Some(-1.0);
    let err = farecast::recommend(&input, &AdvisorConfig::default()).unwrap_err();
    assert!(matches!(err, AdviseError::InvalidTripLength(_)));
}

#[test]
fn serialized_record_uses_wire_names() {
    let r = farecast::recommend(&base_input(), &AdvisorConfig::default()).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["travel_window_basis"], "flight_only");
    assert_eq!(json["comfort_plan"]["constraints"]["max_layovers"], 1);
    assert!(json["lowest_plan"].get("constraints").is_none());
    assert_eq!(json["booking_window"]["p10"], 80.0);
    assert!(json["price_trend"]["trend"].is_string());
    assert_eq!(json["travel_window"]["method"], "min-sum-of-daily-min-prices");
}
