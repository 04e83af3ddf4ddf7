use inquire::{InquireError, Select, Text};
use std::fmt;
use weather_core::{Dashboard, TemperatureUnit, WeatherBackend};

use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    City(String),
    Type,
    Recent(String),
    ToggleUnit(TemperatureUnit),
    Clear,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::City(name) => write!(f, "Weather in {name}"),
            Action::Type => f.write_str("Enter a city..."),
            Action::Recent(name) => write!(f, "Recent: {name}"),
            Action::ToggleUnit(unit) => write!(f, "Show °{}", unit.toggled().symbol()),
            Action::Clear => f.write_str("Clear"),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

/// Recently viewed first, then the known cities, then the controls.
fn menu<'a>(
    cities: &[String],
    recent: impl Iterator<Item = &'a str>,
    has_reading: bool,
    unit: TemperatureUnit,
) -> Vec<Action> {
    let mut actions: Vec<Action> = recent.map(|c| Action::Recent(c.to_string())).collect();
    actions.extend(cities.iter().cloned().map(Action::City));
    actions.push(Action::Type);
    if has_reading {
        actions.push(Action::ToggleUnit(unit));
    }
    actions.push(Action::Clear);
    actions.push(Action::Quit);
    actions
}

/// `None` when the user backed out of the prompt.
fn answered<T>(res: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            log::debug!("prompt cancelled");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Show the pending state, then wait for the service and apply the result.
async fn fetch<B: WeatherBackend>(dash: &mut Dashboard<B>, city: String) {
    let city = dash.begin_fetch(city);
    println!("{}", render::view(dash));

    let result = dash.backend().weather(&city).await;
    dash.complete_fetch(result);
}

pub async fn run<B: WeatherBackend>(backend: B, unit: TemperatureUnit) -> anyhow::Result<()> {
    let mut dash = Dashboard::with_unit(backend, unit);
    dash.load_cities().await;

    println!("Weather Dashboard");

    loop {
        let actions = menu(
            dash.cities(),
            dash.recent().iter(),
            dash.reading().is_some(),
            dash.unit(),
        );

        let Some(action) = answered(Select::new("What next?", actions).prompt())? else {
            break;
        };

        match action {
            Action::City(name) => fetch(&mut dash, name).await,
            Action::Type => {
                let typed = answered(
                    Text::new("City:")
                        .with_initial_value(dash.city())
                        .prompt(),
                )?;
                let Some(city) = typed else {
                    continue;
                };
                fetch(&mut dash, city).await;
            }
            Action::Recent(name) => fetch(&mut dash, name).await,
            Action::ToggleUnit(_) => dash.toggle_unit(),
            Action::Clear => dash.clear(),
            Action::Quit => break,
        }

        let view = render::view(&dash);
        if !view.is_empty() {
            println!("\n{view}\n");
        }
    }

    Ok(())
}
