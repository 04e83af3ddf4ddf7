use axum::{
    Json, Router,
    extract::{Query, rejection::QueryRejection},
    routing::get,
};
use weather_core::{CityList, WeatherReading, mock};

use crate::error::ApiError;

/// Raw query pairs. Repeated keys are kept; the first `city` wins.
type QueryPairs = Vec<(String, String)>;

pub fn routes() -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/cities", get(get_cities))
}

pub async fn get_weather(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<WeatherReading>, ApiError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            log::debug!("unreadable query string: {e}");
            Vec::new()
        }
    };
    let city = pairs
        .into_iter()
        .find(|(key, _)| key == "city")
        .map(|(_, value)| value);

    log::debug!("weather requested for {city:?}");
    let reading = mock::get_weather(city.as_deref())?;
    Ok(Json(reading))
}

pub async fn get_cities() -> Json<CityList> {
    Json(mock::list_cities())
}
