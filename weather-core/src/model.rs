use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cities the service knows about, in the order it reports them.
pub const KNOWN_CITIES: [&str; 7] = [
    "London", "New York", "Paris", "Tokyo", "Sydney", "Berlin", "Mumbai",
];

/// The five possible readings: each temperature is tied to its condition.
pub const WEATHER_TABLE: [(i32, Condition); 5] = [
    (25, Condition::Sunny),
    (18, Condition::Cloudy),
    (30, Condition::Hot),
    (15, Condition::Rainy),
    (22, Condition::Windy),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Sunny,
    Cloudy,
    Hot,
    Rainy,
    Windy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Hot => "Hot",
            Condition::Rainy => "Rainy",
            Condition::Windy => "Windy",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀️",
            Condition::Cloudy => "☁️",
            Condition::Hot => "🔥",
            Condition::Rainy => "🌧️",
            Condition::Windy => "💨",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Sunny,
            Condition::Cloudy,
            Condition::Hot,
            Condition::Rainy,
            Condition::Windy,
        ]
    }

    /// Icon for a condition name as received on the wire. Unknown names get a rainbow.
    pub fn icon_for(name: &str) -> &'static str {
        name.parse::<Condition>().map(|c| c.icon()).unwrap_or("🌈")
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Condition::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| anyhow::anyhow!("Unknown condition '{value}'"))
    }
}

/// A single generated weather data point.
///
/// `condition` stays a plain string so that a client can render names it does not know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub city: String,
    pub temperature: i32,
    pub condition: String,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityList {
    pub cities: Vec<String>,
}

/// Body of every non-2xx response from the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `2026-10-19T08:15:00.123Z`, the same shape a JavaScript `toISOString()` produces.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
