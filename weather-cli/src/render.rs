use chrono::Local;
use weather_core::{Condition, Dashboard, TemperatureUnit, WeatherBackend, WeatherReading};

/// The reading card shown for a successful fetch.
pub fn card(reading: &WeatherReading, unit: TemperatureUnit) -> String {
    let updated = reading
        .updated_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S");

    format!(
        "{icon}  {city}\nTemperature: {temp}\nCondition: {condition}\nUpdated at: {updated}",
        icon = Condition::icon_for(&reading.condition),
        city = reading.city,
        temp = unit.display(reading.temperature),
        condition = reading.condition,
    )
}

/// Everything below the prompt: loading line, error line, and the card.
pub fn view<B: WeatherBackend>(dash: &Dashboard<B>) -> String {
    let mut out = Vec::new();

    if dash.is_loading() {
        out.push("⏳ Loading...".to_string());
    }
    if let Some(error) = dash.error() {
        out.push(format!("Error: {error}"));
    }
    if let Some(reading) = dash.reading() {
        out.push(card(reading, dash.unit()));
    }
    if !dash.recent().is_empty() {
        let recent: Vec<_> = dash.recent().iter().collect();
        out.push(format!("Recent: {}", recent.join(", ")));
    }

    out.join("\n\n")
}
