use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    /// Render a stored Celsius value in this unit. Fahrenheit gets one decimal.
    pub fn display(&self, celsius: i32) -> String {
        match self {
            TemperatureUnit::Celsius => format!("{celsius}°C"),
            TemperatureUnit::Fahrenheit => format!("{:.1}°F", c_to_f(celsius)),
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        })
    }
}

impl FromStr for TemperatureUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: c, f."
            )),
        }
    }
}

pub fn c_to_f(celsius: i32) -> f64 {
    f64::from(celsius) * 9.0 / 5.0 + 32.0
}
