use anyhow::{Context, bail};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select};
use tempo_core::{Config, Lang, Query, fetch_weather, source_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tempo", version, about = "Weather forecast powered by WeatherAPI.com")]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and preferred language.
    Configure,

    /// Show current weather and forecast for a place or coordinates.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Place name, e.g. "São Paulo".
    #[arg(required_unless_present = "lat", conflicts_with_all = ["lat", "lon"])]
    pub place: Option<String>,

    /// Latitude in decimal degrees.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Number of upcoming hours to list.
    #[arg(long, default_value_t = 8)]
    pub hours: usize,

    /// Override the configured language ("pt" or "en").
    #[arg(long)]
    pub lang: Option<String>,

    /// Print the normalized report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn query(&self) -> anyhow::Result<Query> {
        match (&self.place, self.lat, self.lon) {
            (Some(place), _, _) if !place.trim().is_empty() => Ok(Query::Place(place.clone())),
            (_, Some(lat), Some(lon)) => Ok(Query::Coords { lat, lon }),
            _ => bail!("Provide a place name or both --lat and --lon."),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show(args) => show(args).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let langs = Lang::all().to_vec();
    let cursor = langs.iter().position(|l| *l == config.lang).unwrap_or(0);
    let lang = Select::new("Language:", langs)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read language")?;

    config.set_api_key(api_key.trim().to_string());
    config.lang = lang;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(args: ShowArgs) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(lang) = args.lang.as_deref() {
        config.lang = Lang::try_from(lang)?;
    }

    let query = args.query()?;
    let source = source_from_config(&config)?;
    let now = Local::now();

    let report = match fetch_weather(&source, &query, &config, &now).await {
        Ok(report) => report,
        Err(err) => {
            tracing::debug!(error = %err, %query, "weather lookup failed");
            bail!("{}", err.user_message(config.lang));
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{}", render::report(&report, args.hours, config.lang, &now));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_argument_parses() {
        let cli = Cli::try_parse_from(["tempo", "show", "Porto Alegre"]).unwrap();
        let Command::Show(args) = cli.command else { panic!("expected show") };

        assert_eq!(args.query().unwrap(), Query::Place("Porto Alegre".into()));
        assert_eq!(args.hours, 8);
    }

    #[test]
    fn negative_coordinates_parse() {
        let cli =
            Cli::try_parse_from(["tempo", "show", "--lat", "-30.03", "--lon", "-51.23"]).unwrap();
        let Command::Show(args) = cli.command else { panic!("expected show") };

        assert_eq!(args.query().unwrap(), Query::Coords { lat: -30.03, lon: -51.23 });
    }

    #[test]
    fn lat_requires_lon() {
        assert!(Cli::try_parse_from(["tempo", "show", "--lat", "10"]).is_err());
    }

    #[test]
    fn place_or_coords_required() {
        assert!(Cli::try_parse_from(["tempo", "show"]).is_err());
    }

    #[test]
    fn blank_place_is_rejected() {
        let cli = Cli::try_parse_from(["tempo", "show", "  "]).unwrap();
        let Command::Show(args) = cli.command else { panic!("expected show") };

        assert!(args.query().is_err());
    }
}
