use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use weather_now_core::{
    Config, RequestState, Session, WeatherProvider, fetch_weather, provider_from_config,
    render::render,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-now", version, about = "Current weather for any city")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search interactively, starting with the default city.
    Search,

    /// Show current weather for a city.
    Show {
        /// City name; the configured default city if absent.
        city: Option<String>,

        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Set the default city and result language.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = self.load_config()?;

        match &self.command {
            Command::Search => search(&config).await,
            Command::Show { city, json } => {
                let city = city.as_deref().unwrap_or(config.default_city.as_str());
                show(&config, city, *json).await
            }
            Command::Configure => self.configure(config),
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    fn configure(&self, mut config: Config) -> anyhow::Result<ExitCode> {
        let city = Text::new("Default city:")
            .with_default(&config.default_city)
            .prompt()
            .context("Failed to read default city")?;
        if !config.set_default_city(&city) {
            println!("Keeping default city: {}", config.default_city);
        }

        let language = Text::new("Result language (ISO 639-1):")
            .with_default(&config.language)
            .prompt()
            .context("Failed to read language")?;
        let language = language.trim();
        if !language.is_empty() {
            config.language = language.to_lowercase();
        }

        let path = match &self.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        println!("Saved configuration to {}", path.display());

        Ok(ExitCode::SUCCESS)
    }
}

async fn show(config: &Config, city: &str, json: bool) -> anyhow::Result<ExitCode> {
    let provider = provider_from_config(config)?;
    let mut session = Session::new();

    if !session.submit(provider.as_ref(), city).await {
        eprintln!("⚠ Please enter a city name.");
        return Ok(ExitCode::FAILURE);
    }

    match session.state() {
        RequestState::Ready(record) if json => {
            println!("{}", serde_json::to_string_pretty(record)?);
            Ok(ExitCode::SUCCESS)
        }
        RequestState::Ready(_) => {
            print_state(session.state(), config);
            Ok(ExitCode::SUCCESS)
        }
        state => {
            eprintln!("{}", render(state, &config.units, today()));
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn search(config: &Config) -> anyhow::Result<ExitCode> {
    let provider = provider_from_config(config)?;
    let mut session = Session::new();
    let mut input = config.default_city.clone();

    loop {
        lookup(&mut session, provider.as_ref(), &input, config).await;

        match Text::new("City:").with_placeholder("Enter city name...").prompt() {
            Ok(line) => input = line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// One fetch cycle; blank input leaves the screen as it is.
async fn lookup(session: &mut Session, provider: &dyn WeatherProvider, input: &str, config: &Config) {
    let Some(ticket) = session.begin(input) else {
        return;
    };
    eprintln!("{}", render(session.state(), &config.units, today()));

    let result = fetch_weather(provider, ticket.city()).await;
    session.complete(ticket, result);

    println!();
    print_state(session.state(), config);
    println!();
}

fn print_state(state: &RequestState, config: &Config) {
    println!("{}", render(state, &config.units, today()));
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
