//! City weather CLI
//!
//! Looks up the OpenWeatherMap forecast for a city and prints one card per
//! day bucket.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{
    ApplicationError, CardFormatter, ForecastView, RequestId, SearchService, Transition,
};
use clap::{Parser, Subcommand, ValueEnum};
use domain::{CityQuery, ForecastPayload, GroupBy};
use infrastructure::{AppConfig, ForecastAdapter, init_telemetry};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, info};

/// City weather CLI
#[derive(Parser)]
#[command(name = "city-weather")]
#[command(author, version, about = "5-day weather cards for a city", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// OpenWeatherMap API key, overrides the configured one
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search one city and print its cards
    Search {
        /// City name (default: display.default_city)
        city: Option<String>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,

        /// How samples are grouped into cards
        #[arg(long, value_enum)]
        group_by: Option<GroupByArg>,
    },

    /// Read one city per line from stdin and print cards as responses arrive
    ///
    /// A new line supersedes any search still in flight; late responses for
    /// superseded searches are dropped.
    Interactive {
        /// Print each view as a JSON line
        #[arg(long)]
        json: bool,

        /// How samples are grouped into cards
        #[arg(long, value_enum)]
        group_by: Option<GroupByArg>,
    },
}

/// Command-line spelling of [`GroupBy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GroupByArg {
    Weekday,
    CalendarDate,
}

impl From<GroupByArg> for GroupBy {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::Weekday => Self::Weekday,
            GroupByArg::CalendarDate => Self::CalendarDate,
        }
    }
}

/// Log filter override for the given verbosity count
///
/// Zero keeps the configured filter.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };
    Ok(config.with_api_key(cli.api_key.clone()))
}

fn print_view(view: &ForecastView, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(view)?);
    } else {
        print!("{}", render::render_view(view));
    }
    Ok(())
}

async fn run_search(
    service: &SearchService,
    formatter: &CardFormatter,
    query: CityQuery,
    json: bool,
) -> anyhow::Result<()> {
    eprintln!("{}", render::LOADING_MESSAGE);
    service.search(query).await;
    print_view(&formatter.view(&service.state()), json)
}

async fn run_interactive(
    service: Arc<SearchService>,
    formatter: &CardFormatter,
    json: bool,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight: JoinSet<(RequestId, Result<ForecastPayload, ApplicationError>)> =
        JoinSet::new();
    let mut input_open = true;

    while input_open || !in_flight.is_empty() {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let query = match CityQuery::parse(&line) {
                    Ok(query) => query,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    },
                };

                let Transition::Started(request) = service.begin(query.clone()) else {
                    continue;
                };
                eprintln!("{}", render::LOADING_MESSAGE);
                let service = Arc::clone(&service);
                in_flight.spawn(async move { (request, service.fetch(&query).await) });
            },
            Some(joined) = in_flight.join_next() => {
                let (request, result) = joined.context("Forecast task failed")?;
                match service.complete(request, result) {
                    Transition::Applied(state) => print_view(&formatter.view(&state), json)?,
                    Transition::Discarded { request, latest } => {
                        debug!(%request, ?latest, "Dropped superseded response");
                    },
                    Transition::Started(_) => {},
                }
            },
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli)?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.log.filter = filter.to_string();
    }
    init_telemetry(&config.log)?;
    config.validate()?;

    let adapter = ForecastAdapter::new(config.openweather.to_client_config())?;
    let formatter = CardFormatter::new(config.openweather.icon_base_url.clone());

    match cli.command {
        Commands::Search {
            city,
            json,
            group_by,
        } => {
            let group_by = group_by.map_or(config.display.group_by, GroupBy::from);
            let query = CityQuery::parse(city.as_deref().unwrap_or(&config.display.default_city))?;
            info!(city = %query, ?group_by, "Starting search");

            let service = SearchService::with_grouping(Arc::new(adapter), group_by);
            run_search(&service, &formatter, query, json).await?;
        },

        Commands::Interactive { json, group_by } => {
            let group_by = group_by.map_or(config.display.group_by, GroupBy::from);
            info!(?group_by, "Starting interactive session");

            let service = Arc::new(SearchService::with_grouping(Arc::new(adapter), group_by));
            run_interactive(service, &formatter, json).await?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero_keeps_config() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn group_by_arg_converts() {
        assert_eq!(GroupBy::from(GroupByArg::Weekday), GroupBy::Weekday);
        assert_eq!(GroupBy::from(GroupByArg::CalendarDate), GroupBy::CalendarDate);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn api_key_flag_overrides_config() {
        let cli = Cli::try_parse_from(["city-weather", "--api-key", "cli-key", "search"]).unwrap();
        let config = AppConfig::default().with_api_key(cli.api_key.clone());
        assert!(config.openweather.has_api_key());
    }
}
