use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdviseError {
    #[error(
        "invalid trip length {0} — must be a positive number of days no greater than 366 \
         (e.g. 3), or omitted to infer it from hotel stays"
    )]
    InvalidTripLength(f64),

    #[error("invalid {kind} price {value} at index {index} — prices must be finite and non-negative")]
    InvalidPrice {
        kind: &'static str,
        index: usize,
        value: f64,
    },

    #[error("invalid hotel {field} {value} at index {index} — must be between 0 and 5")]
    InvalidRating {
        field: &'static str,
        index: usize,
        value: f64,
    },

    #[error("invalid config — {0}")]
    InvalidConfig(String),

    #[error("failed to read {} ({source})", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON input — {0}. Check the file matches the expected shape")]
    Json(#[from] serde_json::Error),
}

impl AdviseError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidTripLength(_) => "invalid_trip_length",
            Self::InvalidPrice { .. } => "invalid_price",
            Self::InvalidRating { .. } => "invalid_rating",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Io { .. } => "io_error",
            Self::Json(_) => "parse_error",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidTripLength(_)
            | Self::InvalidPrice { .. }
            | Self::InvalidRating { .. }
            | Self::InvalidConfig(_) => 2,
            Self::Io { .. } => 3,
            Self::Json(_) => 4,
        }
    }
}
