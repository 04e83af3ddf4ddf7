use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use weather_core::{Config, HttpBackend, TemperatureUnit, WeatherBackend};

use crate::{interactive, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather dashboard CLI")]
pub struct Cli {
    /// Base URL of the weather service; overrides the config file.
    #[arg(long, global = true, env = "WEATHER_SERVER_URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the service URL and default temperature unit.
    Configure,

    /// List the cities the service knows about.
    Cities,

    /// Show the current weather for a city.
    Show {
        /// City name; sent to the service as typed.
        city: String,

        /// Temperature unit: c or f. Defaults to the configured unit.
        #[arg(long, short)]
        unit: Option<TemperatureUnit>,
    },

    /// Interactive dashboard.
    Dashboard,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        let server_url = self
            .server
            .unwrap_or_else(|| config.server_url().to_string());
        log::debug!("using weather service at {server_url}");

        match self.command {
            Command::Configure => configure(&mut config)?,
            Command::Cities => {
                let backend = HttpBackend::new(server_url);
                for city in backend.cities().await? {
                    println!("{city}");
                }
            }
            Command::Show { city, unit } => {
                let backend = HttpBackend::new(server_url);
                let reading = backend.weather(&city).await?;
                println!("{}", render::card(&reading, unit.unwrap_or(config.unit())));
            }
            Command::Dashboard => {
                interactive::run(HttpBackend::new(server_url), config.unit()).await?;
            }
        }

        Ok(())
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let url = Text::new("Weather service URL:")
        .with_default(config.server_url())
        .prompt()
        .context("Failed to read service URL")?;
    config.set_server_url(url);

    let units = vec![TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];
    let start = units.iter().position(|u| *u == config.unit()).unwrap_or(0);
    let unit = Select::new("Default temperature unit:", units)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read temperature unit")?;
    config.set_unit(unit);

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}
