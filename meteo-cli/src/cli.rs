use std::sync::Arc;

use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use meteo_core::state::{AppState, Event, Session, Tab};
use meteo_core::{Config, OpenWeatherClient, SearchQuery, SyntheticOutlook, UnitSystem};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Terminal weather viewer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and search defaults.
    Configure,

    /// Show current conditions for a city and exit.
    Show {
        /// City name.
        city: String,

        /// Unit system: metric or imperial. Defaults to the configured one.
        #[arg(long)]
        units: Option<String>,
    },

    /// Interactive session with search, tabs and a unit toggle (default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city, units } => show(&city, units.as_deref()).await,
            Command::Interactive => interactive().await,
        }
    }
}

/// Prompt for the API key and defaults, then persist them.
fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeatherMap API key:").prompt()?;
    config.api_key = Some(api_key.trim().to_string());

    let city = Text::new("Default city:")
        .with_default(config.starting_city())
        .prompt()?;
    let city = city.trim();
    if !city.is_empty() {
        config.default_city = Some(city.to_string());
    }

    let units = Select::new("Units:", vec!["metric", "imperial"]).prompt()?;
    config.default_units = Some(UnitSystem::try_from(units)?);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: &str, units: Option<&str>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let units = match units {
        Some(raw) => UnitSystem::try_from(raw)?,
        None => config.starting_units(),
    };

    tracing::debug!(city, %units, "one-shot fetch");

    let query = SearchQuery::parse(city)?;
    let client = OpenWeatherClient::from_config(&config)?;
    let mut session = Session::new(Arc::new(client), AppState::new(query, units));

    session.dispatch(Event::SearchSubmitted(city.to_string())).await;

    print!("{}", render::screen(session.state(), &SyntheticOutlook));
    Ok(())
}

const ACTION_SEARCH: &str = "Search city";
const ACTION_UNITS: &str = "Toggle units";
const ACTION_TAB: &str = "Switch tab";
const ACTION_QUIT: &str = "Quit";

async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = OpenWeatherClient::from_config(&config)?;

    let city = config.starting_city().to_string();
    let query = SearchQuery::parse(&city)?;
    let mut session = Session::new(
        Arc::new(client),
        AppState::new(query, config.starting_units()),
    );

    session.dispatch(Event::SearchSubmitted(city)).await;

    loop {
        println!("{}", render::screen(session.state(), &SyntheticOutlook));

        let action = Select::new(
            "Action:",
            vec![ACTION_SEARCH, ACTION_UNITS, ACTION_TAB, ACTION_QUIT],
        )
        .prompt()?;

        match action {
            ACTION_SEARCH => {
                let raw = Text::new("City:").prompt()?;
                session.dispatch(Event::SearchSubmitted(raw)).await;
            }
            ACTION_UNITS => {
                let toggled = session.state().units().toggled();
                session.dispatch(Event::UnitsSelected(toggled)).await;
            }
            ACTION_TAB => {
                let tab = Select::new("Tab:", Tab::all().to_vec()).prompt()?;
                session.dispatch(Event::TabSelected(tab)).await;
            }
            _ => break,
        }
    }

    Ok(())
}
