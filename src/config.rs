//! Tunable thresholds for the recommendation engine.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock behavior.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AdviseError;

/// How the travel window optimizer treats gaps in the daily series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// Slide over array positions; a window may straddle missing dates.
    #[default]
    Positional,
    /// Only accept windows whose dates are consecutive calendar days.
    Calendar,
}

/// Language of explanation and summary strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn from_str_loose(s: &str) -> Result<Self, AdviseError> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "zh" | "zh-cn" => Ok(Self::Zh),
            _ => Err(AdviseError::InvalidConfig(format!(
                "unsupported language \"{s}\" (expected en or zh)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Minimum star rating for a comfort hotel
    #[serde(default = "default_min_star_rating")]
    pub min_star_rating: f64,
    /// Minimum review score for a comfort hotel
    #[serde(default = "default_min_review_score")]
    pub min_review_score: f64,
    /// Layover cap applied to the comfort plan's flight
    #[serde(default = "default_comfort_max_layovers")]
    pub comfort_max_layovers: u32,
    /// Number of comfort hotels listed in the output
    #[serde(default = "default_top_hotels")]
    pub top_hotels: usize,
    /// Trip length used when neither the caller nor the hotel stays provide one
    #[serde(default = "default_trip_length_days")]
    pub default_trip_length_days: usize,
    /// Longest stay accepted when inferring trip length from hotel prices
    #[serde(default = "default_max_inferred_nights")]
    pub max_inferred_nights: usize,
    /// Daily slope (as a fraction of the average) beyond which a trend is rising/falling
    #[serde(default = "default_trend_threshold_pct")]
    pub trend_threshold_pct: f64,
    #[serde(default)]
    pub window_mode: WindowMode,
    #[serde(default)]
    pub locale: Locale,
}

fn default_min_star_rating() -> f64 {
    3.0
}

fn default_min_review_score() -> f64 {
    4.0
}

fn default_comfort_max_layovers() -> u32 {
    1
}

fn default_top_hotels() -> usize {
    5
}

fn default_trip_length_days() -> usize {
    5
}

fn default_max_inferred_nights() -> usize {
    30
}

fn default_trend_threshold_pct() -> f64 {
    crate::trend::DEFAULT_TREND_THRESHOLD
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            min_star_rating: default_min_star_rating(),
            min_review_score: default_min_review_score(),
            comfort_max_layovers: default_comfort_max_layovers(),
            top_hotels: default_top_hotels(),
            default_trip_length_days: default_trip_length_days(),
            max_inferred_nights: default_max_inferred_nights(),
            trend_threshold_pct: default_trend_threshold_pct(),
            window_mode: WindowMode::default(),
            locale: Locale::default(),
        }
    }
}

impl AdvisorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AdviseError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, AdviseError> {
        let json = std::fs::read_to_string(path).map_err(|source| AdviseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), AdviseError> {
        if !(0.0..=5.0).contains(&self.min_star_rating) {
            return Err(AdviseError::InvalidConfig(format!(
                "min_star_rating {} must be between 0 and 5",
                self.min_star_rating
            )));
        }
        if !(0.0..=5.0).contains(&self.min_review_score) {
            return Err(AdviseError::InvalidConfig(format!(
                "min_review_score {} must be between 0 and 5",
                self.min_review_score
            )));
        }
        if self.default_trip_length_days == 0 {
            return Err(AdviseError::InvalidConfig(
                "default_trip_length_days must be at least 1".into(),
            ));
        }
        if self.max_inferred_nights == 0 {
            return Err(AdviseError::InvalidConfig(
                "max_inferred_nights must be at least 1".into(),
            ));
        }
        if !self.trend_threshold_pct.is_finite() || self.trend_threshold_pct < 0.0 {
            return Err(AdviseError::InvalidConfig(format!(
                "trend_threshold_pct {} must be a non-negative number",
                self.trend_threshold_pct
            )));
        }
        Ok(())
    }
}
