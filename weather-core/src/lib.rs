//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Shared domain models (readings, city list, error body)
//! - The mock weather generator behind the service endpoints
//! - An HTTP client for the service, with response validation
//! - Dashboard view state and client configuration
//!
//! It is used by `weather-server` and `weather-cli`.

pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod mock;
pub mod model;
pub mod units;

pub use backend::{HttpBackend, WeatherBackend};
pub use config::Config;
pub use dashboard::{Dashboard, RecentCities};
pub use error::WeatherError;
pub use model::{CityList, Condition, ErrorBody, WeatherReading};
pub use units::TemperatureUnit;
