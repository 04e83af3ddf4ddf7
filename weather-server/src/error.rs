use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use weather_core::{ErrorBody, WeatherError};

pub struct ApiError(pub WeatherError);

impl From<WeatherError> for ApiError {
    fn from(source: WeatherError) -> Self {
        Self(source)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            WeatherError::MissingParameter => StatusCode::BAD_REQUEST,
            WeatherError::SchemaMismatch(_) | WeatherError::NetworkFailure(_) => {
                error!("Error encountered while processing request: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
