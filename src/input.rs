use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AdviseError;
use crate::model::{FlightOffer, HotelOffer, PricePoint};

/// Everything the engine consumes for one recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendInput {
    #[serde(default)]
    pub flights: Vec<FlightOffer>,
    #[serde(default)]
    pub hotels: Vec<HotelOffer>,
    #[serde(default)]
    pub price_series: Vec<PricePoint>,
    #[serde(default)]
    pub trip_length_days: Option<f64>,
}

/// Flight offers observed on one search date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub date: String,
    #[serde(default)]
    pub offers: Vec<FlightOffer>,
}

/// Longest trip the engine will plan, in days.
pub const MAX_TRIP_LENGTH_DAYS: f64 = 366.0;

fn validate_price(kind: &'static str, index: usize, value: f64) -> Result<(), AdviseError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AdviseError::InvalidPrice { kind, index, value });
    }
    Ok(())
}

fn validate_rating(field: &'static str, index: usize, value: f64) -> Result<(), AdviseError> {
    if !value.is_finite() || !(0.0..=5.0).contains(&value) {
        return Err(AdviseError::InvalidRating {
            field,
            index,
            value,
        });
    }
    Ok(())
}

impl RecommendInput {
    pub fn from_json_str(json: &str) -> Result<Self, AdviseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, AdviseError> {
        let json = std::fs::read_to_string(path).map_err(|source| AdviseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Flattens dated snapshots into flights plus one price point per offer.
    pub fn from_snapshots(snapshots: &[FlightSnapshot]) -> Self {
        let mut input = Self::default();
        for snapshot in snapshots {
            for offer in &snapshot.offers {
                input
                    .price_series
                    .push(PricePoint::new(snapshot.date.clone(), offer.price));
                input.flights.push(offer.clone());
            }
        }
        input
    }

    pub fn validate(&self) -> Result<(), AdviseError> {
        if let Some(days) = self.trip_length_days {
            if !days.is_finite() || !(0.0..=MAX_TRIP_LENGTH_DAYS).contains(&days) {
                return Err(AdviseError::InvalidTripLength(days));
            }
        }

        for (i, flight) in self.flights.iter().enumerate() {
            validate_price("flight", i, flight.price)?;
        }

        for (i, hotel) in self.hotels.iter().enumerate() {
            validate_price("hotel total", i, hotel.total_price)?;
            if let Some(nightly) = hotel.nightly_price {
                validate_price("hotel nightly", i, nightly)?;
            }
            validate_rating("star_rating", i, hotel.star_rating)?;
            validate_rating("review_score", i, hotel.review_score)?;
        }

        for (i, point) in self.price_series.iter().enumerate() {
            validate_price("price series", i, point.price)?;
        }

        Ok(())
    }

    /// Caller-supplied trip length, rounded to whole days. `None` and `0` mean "infer".
    pub fn requested_trip_length(&self) -> Option<usize> {
        self.trip_length_days
            .filter(|d| d.is_finite() && *d > 0.0)
            .map(|d| (d.round() as usize).max(1))
    }
}
