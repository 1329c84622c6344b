use farecast::config::AdvisorConfig;
use farecast::model::{FlightOffer, HotelOffer, Plan, PricePoint, Segment};
use farecast::scoring::{
    attach_delta, comfort_hotels, comfort_plan, is_comfort_hotel, lowest_plan, trip_cost_summary,
};

fn flight(price: f64, layovers: u32) -> FlightOffer {
    FlightOffer {
        price,
        currency: Some("CNY".into()),
        layovers: Some(layovers),
        depart_time: None,
        arrive_time: None,
        segments: vec![],
    }
}

fn hotel(total: f64, stars: f64, review: f64) -> HotelOffer {
    HotelOffer {
        total_price: total,
        nightly_price: None,
        star_rating: stars,
        review_score: review,
        date: None,
        check_in: None,
        check_out: None,
        hotel_id: None,
        hotel_name: None,
    }
}

fn dated(total: f64, date: &str) -> HotelOffer {
    HotelOffer {
        date: Some(date.into()),
        ..hotel(total, 4.0, 4.2)
    }
}

fn fixture() -> (Vec<FlightOffer>, Vec<HotelOffer>) {
    (
        vec![flight(1000.0, 0), flight(800.0, 2)],
        vec![hotel(1500.0, 4.0, 4.2), hotel(900.0, 2.0, 3.5)],
    )
}

fn plan(total: f64) -> Plan {
    Plan {
        total_price: total,
        flight: flight(total, 0),
        hotel: hotel(0.0, 4.0, 4.0),
        constraints: None,
        delta_vs_lowest: None,
    }
}

#[test]
fn lowest_plan_uses_comfort_hotel_filter() {
    let (flights, hotels) = fixture();
    let plan = lowest_plan(&flights, &hotels, &AdvisorConfig::default()).unwrap();
    assert_eq!(plan.hotel.star_rating, 4.0);
    assert_eq!(plan.hotel.total_price, 1500.0);
    assert_eq!(plan.flight.price, 800.0);
    assert_eq!(plan.total_price, 2300.0);
    assert!(plan.constraints.is_none());
}

#[test]
fn comfort_plan_enforces_max_layovers() {
    let (flights, hotels) = fixture();
    let plan = comfort_plan(&flights, &hotels, &AdvisorConfig::default()).unwrap();
    assert_eq!(plan.flight.layovers(), 0);
    assert_eq!(plan.flight.price, 1000.0);
    assert_eq!(plan.total_price, plan.flight.price + plan.hotel.total_price);
    assert_eq!(plan.constraints.unwrap().max_layovers, 1);
}

#[test]
fn comfort_plan_respects_configured_layover_cap() {
    let (flights, hotels) = fixture();
    let config = AdvisorConfig {
        comfort_max_layovers: 2,
        ..AdvisorConfig::default()
    };
    let plan = comfort_plan(&flights, &hotels, &config).unwrap();
    assert_eq!(plan.flight.price, 800.0);
}

#[test]
fn plans_need_both_sides() {
    let config = AdvisorConfig::default();
    let (flights, hotels) = fixture();
    assert!(lowest_plan(&[], &hotels, &config).is_none());
    assert!(lowest_plan(&flights, &[hotel(100.0, 2.0, 5.0)], &config).is_none());
    assert!(comfort_plan(&[flight(500.0, 3)], &hotels, &config).is_none());
}

#[test]
fn layovers_default_to_segment_count() {
    let seg = Segment {
        from: Some("PVG".into()),
        to: Some("XIY".into()),
        depart_at: None,
        arrive_at: None,
        carrier: Some("MU".into()),
    };
    let mut offer = flight(700.0, 0);
    offer.layovers = None;
    offer.segments = vec![seg.clone(), seg.clone(), seg];
    assert_eq!(offer.layovers(), 2);
    offer.segments.clear();
    assert_eq!(offer.layovers(), 0);
}

#[test]
fn ties_keep_first_offer() {
    let mut a = flight(500.0, 1);
    a.currency = Some("first".into());
    let mut b = flight(500.0, 0);
    b.currency = Some("second".into());
    let plan = lowest_plan(&[a, b], &[hotel(100.0, 3.0, 4.0)], &AdvisorConfig::default()).unwrap();
    assert_eq!(plan.flight.currency.as_deref(), Some("first"));
}

#[test]
fn comfort_filter_boundaries_are_inclusive() {
    let config = AdvisorConfig::default();
    assert!(is_comfort_hotel(&hotel(1.0, 3.0, 4.0), &config));
    assert!(!is_comfort_hotel(&hotel(1.0, 2.9, 5.0), &config));
    assert!(!is_comfort_hotel(&hotel(1.0, 5.0, 3.9), &config));
}

#[test]
fn attach_delta_computes_difference() {
    let r = attach_delta(Some(&plan(2000.0)), Some(plan(2300.0))).unwrap();
    assert_eq!(r.delta_vs_lowest, Some(300.0));
    assert_eq!(r.total_price, 2300.0);
}

#[test]
fn attach_delta_requires_both_plans() {
    assert!(attach_delta(None, Some(plan(2300.0))).is_none());
    assert!(attach_delta(Some(&plan(2000.0)), None).is_none());
}

#[test]
fn trip_cost_combines_flight_and_hotel_by_date() {
    let points = vec![
        PricePoint::new("2026-04-01", 100.0),
        PricePoint::new("2026-04-02", 200.0),
        PricePoint::new("2026-04-04", 50.0),
    ];
    let hotels = vec![dated(500.0, "2026-04-01"), dated(300.0, "2026-04-02")];
    let comfort = comfort_hotels(&hotels, &AdvisorConfig::default());
    let summary = trip_cost_summary(&points, &comfort).unwrap();
    assert_eq!(summary.best_date, "2026-04-02");
    assert_eq!(summary.min_total_price, 500.0);
    assert_eq!(summary.median_total_price, 600.0);
    assert_eq!(summary.max_total_price, 600.0);
    assert_eq!(summary.count, 2);
}

#[test]
fn trip_cost_without_overlap_is_none() {
    let points = vec![PricePoint::new("2026-04-01", 100.0)];
    let hotels = vec![dated(500.0, "2026-05-01")];
    let comfort = comfort_hotels(&hotels, &AdvisorConfig::default());
    assert!(trip_cost_summary(&points, &comfort).is_none());
}
