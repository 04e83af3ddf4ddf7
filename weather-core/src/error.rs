use thiserror::Error;

/// Everything that can go wrong between asking for a reading and showing it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The required `city` parameter was absent or empty.
    #[error("City is required")]
    MissingParameter,

    /// The service answered, but not with a well-formed reading.
    #[error("Invalid weather response: {0}")]
    SchemaMismatch(String),

    /// Transport failure, unexpected status, or a body that is not JSON.
    #[error("Failed to fetch weather: {0}")]
    NetworkFailure(String),
}
