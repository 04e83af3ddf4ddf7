use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fmt::Debug;

use crate::{error::WeatherError, model::WeatherReading};

pub mod http;

pub use http::HttpBackend;

/// Where the dashboard gets its data from.
#[async_trait]
pub trait WeatherBackend: Send + Sync + Debug {
    async fn cities(&self) -> Result<Vec<String>, WeatherError>;

    async fn weather(&self, city: &str) -> Result<WeatherReading, WeatherError>;
}

/// Accept a fetched body only if all four reading fields are present with the right types.
pub fn validate_reading(value: &Value) -> Result<WeatherReading, WeatherError> {
    let obj = value
        .as_object()
        .ok_or_else(|| mismatch("response must be a JSON object"))?;

    let city = required_str(obj, "city")?;
    let temperature = match obj.get("temperature") {
        None | Some(Value::Null) => return Err(mismatch("temperature is a required field")),
        Some(v) => v
            .as_i64()
            .and_then(|t| i32::try_from(t).ok())
            .ok_or_else(|| mismatch("temperature must be an integer"))?,
    };
    let condition = required_str(obj, "condition")?;
    let updated_at = required_str(obj, "updatedAt")?;
    let updated_at = DateTime::parse_from_rfc3339(updated_at)
        .map_err(|e| mismatch(&format!("updatedAt must be a timestamp ({e})")))?
        .with_timezone(&Utc);

    Ok(WeatherReading {
        city: city.to_string(),
        temperature,
        condition: condition.to_string(),
        updated_at,
    })
}

fn required_str<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a str, WeatherError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(mismatch(&format!("{field} is a required field"))),
        Some(Value::String(s)) if s.is_empty() => {
            Err(mismatch(&format!("{field} is a required field")))
        }
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(mismatch(&format!("{field} must be a string"))),
    }
}

fn mismatch(msg: &str) -> WeatherError {
    WeatherError::SchemaMismatch(msg.to_string())
}
