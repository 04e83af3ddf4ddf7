//! Mock weather generator backing the service endpoints.

use chrono::Utc;
use rand::Rng;

use crate::{
    error::WeatherError,
    model::{CityList, KNOWN_CITIES, WEATHER_TABLE, WeatherReading},
};

/// Draw a reading for `city` from the thread-local RNG.
pub fn get_weather(city: Option<&str>) -> Result<WeatherReading, WeatherError> {
    get_weather_with(city, &mut rand::rng())
}

/// Draw a reading for `city` using the supplied randomness source.
///
/// Every table row has probability 1/5 and draws are independent, so two calls
/// for the same city may disagree. The city is echoed back untouched.
pub fn get_weather_with<R: Rng + ?Sized>(
    city: Option<&str>,
    rng: &mut R,
) -> Result<WeatherReading, WeatherError> {
    let city = match city {
        Some(c) if !c.is_empty() => c,
        _ => return Err(WeatherError::MissingParameter),
    };

    let (temperature, condition) = WEATHER_TABLE[rng.random_range(0..WEATHER_TABLE.len())];

    Ok(WeatherReading {
        city: city.to_string(),
        temperature,
        condition: condition.to_string(),
        updated_at: Utc::now(),
    })
}

pub fn list_cities() -> CityList {
    CityList {
        cities: KNOWN_CITIES.iter().map(|c| c.to_string()).collect(),
    }
}
