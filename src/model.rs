use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Segment {
    pub from: Option<String>,
    pub to: Option<String>,
    pub depart_at: Option<String>,
    pub arrive_at: Option<String>,
    pub carrier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FlightOffer {
    pub price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub layovers: Option<u32>,
    #[serde(default)]
    pub depart_time: Option<String>,
    #[serde(default)]
    pub arrive_time: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl FlightOffer {
    /// Stop count, derived from the segment list when the offer doesn't carry one.
    pub fn layovers(&self) -> u32 {
        self.layovers
            .unwrap_or_else(|| self.segments.len().saturating_sub(1) as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HotelOffer {
    pub total_price: f64,
    #[serde(default)]
    pub nightly_price: Option<f64>,
    #[serde(default)]
    pub star_rating: f64,
    #[serde(default)]
    pub review_score: f64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub hotel_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanConstraints {
    pub max_layovers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub total_price: f64,
    pub flight: FlightOffer,
    pub hotel: HotelOffer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<PlanConstraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta_vs_lowest: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub p10: f64,
    pub p50: f64,
    pub min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingAdvice {
    pub summary: String,
    #[serde(flatten)]
    pub window: BookingWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rising => write!(f, "rising"),
            Self::Falling => write!(f, "falling"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTrend {
    pub count: usize,
    pub date_start: String,
    pub date_end: String,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub stddev: f64,
    pub volatility: f64,
    pub slope_per_day: f64,
    pub slope_pct_per_day: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAdvice {
    pub summary: String,
    #[serde(flatten)]
    pub trend: PriceTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelWindow {
    pub start_date: String,
    pub end_date: String,
    pub estimated_flight_cost: f64,
    pub method: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowBasis {
    FlightPlusHotel,
    FlightOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrice {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeriesSummary {
    pub flight_daily_min: Vec<DailyPrice>,
    pub hotel_daily_min: Vec<DailyPrice>,
    pub total_daily_min: Vec<DailyPrice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelPriceRange {
    pub count: usize,
    pub min_total_price: f64,
    pub median_total_price: f64,
    pub max_total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortHotel {
    pub hotel_id: Option<String>,
    pub hotel_name: Option<String>,
    pub total_price: f64,
    pub nightly_price: Option<f64>,
    pub star_rating: f64,
    pub review_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripCostSummary {
    pub best_date: String,
    pub min_total_price: f64,
    pub median_total_price: f64,
    pub max_total_price: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub lowest_plan: Option<Plan>,
    pub comfort_plan: Option<Plan>,
    pub booking_window: Option<BookingAdvice>,
    pub travel_window: Option<TravelWindow>,
    pub travel_window_basis: WindowBasis,
    pub trip_length_days: usize,
    pub price_trend: Option<TrendAdvice>,
    pub hotel_price_range: Option<HotelPriceRange>,
    pub comfort_hotels: Vec<ComfortHotel>,
    pub trip_cost_summary: Option<TripCostSummary>,
    pub price_series_summary: PriceSeriesSummary,
    pub explanations: Vec<String>,
}
