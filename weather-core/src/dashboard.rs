//! Client-side view state for the dashboard.
//!
//! [`Dashboard`] owns everything the front-end renders: the selected city, the
//! last reading, the error line, the loading flag, the unit toggle and the
//! recently viewed cities. It only talks to the service through a
//! [`WeatherBackend`], so tests can drive it with a canned backend.

use std::collections::VecDeque;

use crate::{
    backend::WeatherBackend, error::WeatherError, model::WeatherReading, units::TemperatureUnit,
};

pub const RECENT_CAPACITY: usize = 3;

/// Distinct city names, newest first, capped at [`RECENT_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentCities {
    cities: VecDeque<String>,
}

impl RecentCities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `city` to the front, dropping the oldest entry if over capacity.
    pub fn push(&mut self, city: &str) {
        self.cities.retain(|c| c != city);
        self.cities.push_front(city.to_string());
        self.cities.truncate(RECENT_CAPACITY);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[derive(Debug)]
pub struct Dashboard<B: WeatherBackend> {
    backend: B,
    cities: Vec<String>,
    city: String,
    reading: Option<WeatherReading>,
    error: Option<String>,
    loading: bool,
    unit: TemperatureUnit,
    recent: RecentCities,
}

impl<B: WeatherBackend> Dashboard<B> {
    pub fn new(backend: B) -> Self {
        Self::with_unit(backend, TemperatureUnit::default())
    }

    pub fn with_unit(backend: B, unit: TemperatureUnit) -> Self {
        Self {
            backend,
            cities: Vec::new(),
            city: String::new(),
            reading: None,
            error: None,
            loading: false,
            unit,
            recent: RecentCities::new(),
        }
    }

    /// Fetch the known cities once.
    ///
    /// A failure leaves the list empty and is not shown to the user, unlike
    /// every other fetch failure.
    pub async fn load_cities(&mut self) {
        match self.backend.cities().await {
            Ok(cities) => self.cities = cities,
            Err(e) => {
                log::warn!("could not load city list: {e}");
                self.cities = Vec::new();
            }
        }
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Fetch a reading for the current city and remember it as recently viewed.
    pub async fn submit(&mut self) {
        let city = self.begin_fetch(self.city.clone());
        let result = self.backend.weather(&city).await;
        self.complete_fetch(result);
    }

    /// Re-open a recently viewed city.
    pub async fn select_recent(&mut self, city: &str) {
        let city = self.begin_fetch(city);
        let result = self.backend.weather(&city).await;
        self.complete_fetch(result);
    }

    /// Select `city`, drop the previous reading and error, and show the loading state.
    ///
    /// Returns the city to request. The dashboard stays loading until
    /// [`Dashboard::complete_fetch`] is called, so a front-end can render the
    /// pending state while the request is in flight.
    pub fn begin_fetch(&mut self, city: impl Into<String>) -> String {
        self.city = city.into();
        self.error = None;
        self.reading = None;
        self.loading = true;
        self.city.clone()
    }

    /// Apply the outcome of a fetch. Whatever resolves last wins.
    pub fn complete_fetch(&mut self, result: Result<WeatherReading, WeatherError>) {
        match result {
            Ok(reading) => {
                self.recent.push(&reading.city);
                self.reading = Some(reading);
            }
            Err(e) => self.error = Some(e.to_string()),
        }

        self.loading = false;
    }

    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    /// Reset the selection without touching the network.
    pub fn clear(&mut self) {
        self.city = self.cities.first().cloned().unwrap_or_default();
        self.reading = None;
        self.error = None;
    }

    /// The current reading's temperature in the selected unit.
    pub fn display_temperature(&self) -> Option<String> {
        self.reading
            .as_ref()
            .map(|r| self.unit.display(r.temperature))
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.reading.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn recent(&self) -> &RecentCities {
        &self.recent
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{backend::validate_reading, mock};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Serves the mock generator directly, optionally failing the city list or
    /// replacing weather bodies with canned JSON.
    #[derive(Debug, Default)]
    struct FakeBackend {
        cities_fail: bool,
        bodies: Mutex<Vec<Value>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn with_bodies(bodies: Vec<Value>) -> Self {
            Self {
                bodies: Mutex::new(bodies),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherBackend for FakeBackend {
        async fn cities(&self) -> Result<Vec<String>, WeatherError> {
            if self.cities_fail {
                Err(WeatherError::NetworkFailure("connection refused".into()))
            } else {
                Ok(mock::list_cities().cities)
            }
        }

        async fn weather(&self, city: &str) -> Result<WeatherReading, WeatherError> {
            self.calls.lock().unwrap().push(city.to_string());
            let canned = self.bodies.lock().unwrap().pop();
            match canned {
                Some(body) => validate_reading(&body),
                None => mock::get_weather(Some(city)),
            }
        }
    }

    #[tokio::test]
    async fn recent_list_moves_reselected_city_to_front() {
        let mut dash = Dashboard::new(FakeBackend::default());

        for city in ["A", "B", "C", "A"] {
            dash.set_city(city);
            dash.submit().await;
        }

        let recent: Vec<_> = dash.recent().iter().collect();
        assert_eq!(recent, ["A", "C", "B"]);
    }

    #[tokio::test]
    async fn recent_list_is_capped() {
        let mut dash = Dashboard::new(FakeBackend::default());

        for city in ["London", "Paris", "Tokyo", "Sydney"] {
            dash.set_city(city);
            dash.submit().await;
        }

        let recent: Vec<_> = dash.recent().iter().collect();
        assert_eq!(recent, ["Sydney", "Tokyo", "Paris"]);
    }

    #[tokio::test]
    async fn successful_submit_stores_reading() {
        let mut dash = Dashboard::new(FakeBackend::default());
        dash.set_city("Paris");
        dash.submit().await;

        let reading = dash.reading().expect("reading should be stored");
        assert_eq!(reading.city, "Paris");
        assert_eq!(dash.error(), None);
        assert!(!dash.is_loading());
    }

    #[tokio::test]
    async fn missing_updated_at_surfaces_as_error_without_card() {
        let body = json!({ "city": "Paris", "temperature": 25, "condition": "Sunny" });
        let mut dash = Dashboard::new(FakeBackend::with_bodies(vec![body]));
        dash.set_city("Paris");
        dash.submit().await;

        assert!(dash.reading().is_none());
        assert!(dash.display_temperature().is_none());
        let error = dash.error().expect("error should be shown");
        assert!(error.contains("updatedAt"), "error was: {error}");
        assert!(dash.recent().is_empty());
        assert!(!dash.is_loading());
    }

    #[tokio::test]
    async fn empty_city_reports_missing_parameter() {
        let mut dash = Dashboard::new(FakeBackend::default());
        dash.submit().await;

        assert_eq!(dash.error(), Some("City is required"));
        assert!(dash.reading().is_none());
    }

    #[tokio::test]
    async fn new_fetch_clears_previous_error() {
        let bad = json!({ "error": "boom" });
        let mut dash = Dashboard::new(FakeBackend::with_bodies(vec![bad]));
        dash.set_city("Tokyo");
        dash.submit().await;
        assert!(dash.error().is_some());

        dash.submit().await;
        assert_eq!(dash.error(), None);
        assert!(dash.reading().is_some());
    }

    #[tokio::test]
    async fn loading_is_visible_while_fetch_is_pending() {
        let mut dash = Dashboard::new(FakeBackend::default());
        dash.set_city("Paris");
        dash.submit().await;
        assert!(dash.reading().is_some());

        let city = dash.begin_fetch("Tokyo");
        assert_eq!(city, "Tokyo");
        assert_eq!(dash.city(), "Tokyo");
        assert!(dash.is_loading());
        assert!(dash.reading().is_none());
        assert_eq!(dash.error(), None);

        let pending = dash.backend().weather(&city);
        assert!(dash.is_loading());

        let result = pending.await;
        dash.complete_fetch(result);
        assert!(!dash.is_loading());
        assert_eq!(dash.reading().unwrap().city, "Tokyo");
    }

    #[tokio::test]
    async fn failed_fetch_clears_loading_and_keeps_no_reading() {
        let mut dash = Dashboard::new(FakeBackend::default());
        dash.begin_fetch("Paris");
        assert!(dash.is_loading());

        dash.complete_fetch(Err(WeatherError::NetworkFailure("connection reset".into())));

        assert!(!dash.is_loading());
        assert!(dash.reading().is_none());
        assert_eq!(
            dash.error(),
            Some("Failed to fetch weather: connection reset")
        );
    }

    #[tokio::test]
    async fn later_completion_overwrites_earlier_one() {
        let mut dash = Dashboard::new(FakeBackend::default());
        let first = dash.begin_fetch("Paris");
        let second = dash.begin_fetch("Berlin");

        let second_result = dash.backend().weather(&second).await;
        let first_result = dash.backend().weather(&first).await;
        dash.complete_fetch(second_result);
        dash.complete_fetch(first_result);

        assert_eq!(dash.reading().unwrap().city, "Paris");
        let recent: Vec<_> = dash.recent().iter().collect();
        assert_eq!(recent, ["Paris", "Berlin"]);
    }

    #[tokio::test]
    async fn city_list_failure_is_silent() {
        let backend = FakeBackend {
            cities_fail: true,
            ..Default::default()
        };
        let mut dash = Dashboard::new(backend);
        dash.load_cities().await;

        assert!(dash.cities().is_empty());
        assert_eq!(dash.error(), None);
    }

    #[tokio::test]
    async fn clear_resets_to_first_known_city_without_fetching() {
        let mut dash = Dashboard::new(FakeBackend::default());
        dash.load_cities().await;
        dash.set_city("Mumbai");
        dash.submit().await;
        assert!(dash.reading().is_some());

        dash.clear();

        assert_eq!(dash.city(), "London");
        assert!(dash.reading().is_none());
        assert_eq!(dash.error(), None);
        assert_eq!(dash.backend.calls(), ["Mumbai"]);
        // Recently viewed survives a clear.
        assert_eq!(dash.recent().len(), 1);
    }

    #[tokio::test]
    async fn clear_without_known_cities_empties_selection() {
        let mut dash = Dashboard::new(FakeBackend::default());
        dash.set_city("Mumbai");
        dash.clear();
        assert_eq!(dash.city(), "");
    }

    #[tokio::test]
    async fn unit_toggle_changes_display_only() {
        let body = json!({
            "city": "Paris",
            "temperature": 22,
            "condition": "Windy",
            "updatedAt": "2026-10-19T08:15:00.000Z"
        });
        let mut dash = Dashboard::new(FakeBackend::with_bodies(vec![body]));
        dash.set_city("Paris");
        dash.submit().await;

        let original = dash.display_temperature().unwrap();
        assert_eq!(original, "22°C");

        dash.toggle_unit();
        assert_eq!(dash.display_temperature().unwrap(), "71.6°F");
        assert_eq!(dash.reading().unwrap().temperature, 22);

        dash.toggle_unit();
        assert_eq!(dash.display_temperature().unwrap(), original);
    }

    #[tokio::test]
    async fn select_recent_refetches_and_updates_selection() {
        let mut dash = Dashboard::new(FakeBackend::default());
        for city in ["Berlin", "Sydney"] {
            dash.set_city(city);
            dash.submit().await;
        }

        dash.select_recent("Berlin").await;

        assert_eq!(dash.city(), "Berlin");
        assert_eq!(dash.reading().unwrap().city, "Berlin");
        let recent: Vec<_> = dash.recent().iter().collect();
        assert_eq!(recent, ["Berlin", "Sydney"]);
    }
}
