use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
    error::WeatherError,
    model::{CityList, WeatherReading},
};

use super::{WeatherBackend, validate_reading};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:4000";

/// Talks to the weather service over HTTP. No timeouts and no retries.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, WeatherError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url} {query:?}");

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| WeatherError::NetworkFailure(format!("request to {url} failed: {e}")))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            WeatherError::NetworkFailure(format!("failed to read response body from {url}: {e}"))
        })?;

        if status == StatusCode::BAD_REQUEST {
            return Err(WeatherError::MissingParameter);
        }

        if !status.is_success() {
            return Err(WeatherError::NetworkFailure(format!(
                "service responded with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            WeatherError::NetworkFailure(format!("response from {url} is not valid JSON: {e}"))
        })
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

#[async_trait]
impl WeatherBackend for HttpBackend {
    async fn cities(&self) -> Result<Vec<String>, WeatherError> {
        let value = self.get_json("/cities", &[]).await?;
        let list: CityList = serde_json::from_value(value)
            .map_err(|e| WeatherError::SchemaMismatch(format!("invalid city list: {e}")))?;
        Ok(list.cities)
    }

    async fn weather(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let value = self.get_json("/weather", &[("city", city)]).await?;
        validate_reading(&value)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
