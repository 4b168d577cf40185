/// Error types for the trend analyzer core
use thiserror::Error;

/// Errors from the trend fetch pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport failed before any response arrived (offline, DNS, timeout, CORS)
    #[error("Network request failed: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Analytics service returned HTTP {0}")]
    Status(u16),

    /// Body was not an array of trend records
    #[error("Unexpected response from analytics service: {0}")]
    MalformedResponse(String),

    /// Request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl FetchError {
    /// Whether the failure is about reaching the service, as opposed to
    /// understanding what it sent back.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Status(_))
    }
}

/// Errors from validating the year inputs of the range form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Start year must be a whole number (got \"{0}\")")]
    StartNotANumber(String),

    #[error("End year must be a whole number (got \"{0}\")")]
    EndNotANumber(String),

    #[error("Start year {start} is after end year {end}")]
    StartAfterEnd { start: i32, end: i32 },

    #[error("Year {year} is outside the supported range {min}-{max}")]
    OutOfBounds { year: i32, min: i32, max: i32 },
}

/// Errors from constructing a coordinate out of untrusted numbers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Latitude {0} is not within -90..=90")]
    Latitude(f64),

    #[error("Longitude {0} is not within -180..=180")]
    Longitude(f64),
}

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
