use std::{path::PathBuf, time::Duration};

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use inquire::{Select, Text};
use tracing::info;

use weatherterm_core::{
    City, CityDirectory, Config, FALLBACK_REPORT, FileSink, OpenWeatherProvider, ReportSink,
    StdoutSink, Unit, config, scheduler,
};

use crate::service;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherterm", version, about = "A weather application for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the weather reporter until interrupted.
    Run(ReportArgs),

    /// Install the reporter as a launchd user service.
    Install(ReportArgs),

    /// Interactively store an API key and defaults in the config file.
    Configure,
}

/// Flags shared by `run` and `install`. Anything not given here falls back
/// to the config file.
#[derive(Debug, Default, Args)]
pub struct ReportArgs {
    /// A country code, e.g. CA or US.
    #[arg(long)]
    pub country: Option<String>,

    /// A city name.
    #[arg(long)]
    pub city: Option<String>,

    /// openweathermap.org API key.
    #[arg(long)]
    pub key: Option<String>,

    /// Metric or imperial units.
    #[arg(long)]
    pub unit: Option<String>,

    /// Number of seconds to wait before updating the weather.
    #[arg(long)]
    pub sleep: Option<u64>,

    /// File to write the weather report to; defaults to ~/.weatherterm.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Write reports to stdout instead of a file.
    #[arg(long)]
    pub stdout: bool,
}

/// Fully resolved settings for a reporter run.
#[derive(Debug, Clone)]
struct Settings {
    country: String,
    city: String,
    api_key: String,
    unit: Unit,
    interval: Duration,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Run(args) => run_reporter(args).await,
            Command::Install(args) => {
                let config = Config::load()?;
                service::install(&args, &config)
            }
            Command::Configure => configure(),
        }
    }
}

async fn run_reporter(args: ReportArgs) -> Result<()> {
    let config = Config::load()?;
    let mut sink = make_sink(&args, &config)?;

    // Startup failures still surface through the sink, so whatever consumes
    // the report file sees the fallback message instead of a stale report.
    let (settings, city) = match prepare(&args, &config) {
        Ok(prepared) => prepared,
        Err(err) => {
            sink.emit(FALLBACK_REPORT)?;
            return Err(err);
        }
    };

    let provider = OpenWeatherProvider::new(settings.api_key.clone());

    info!(
        country = %city.country,
        city = %city.name,
        unit = %settings.unit,
        "starting weather reporter"
    );

    scheduler::run(
        &provider,
        &city,
        settings.unit,
        settings.interval,
        &mut *sink,
        shutdown_signal(),
    )
    .await?;

    Ok(())
}

/// Validate flags and config into run settings and a resolved city.
fn prepare(args: &ReportArgs, config: &Config) -> Result<(Settings, City)> {
    let settings = resolve_settings(args, config)?;

    let directory = CityDirectory::bundled()?;
    let city = directory.resolve(&settings.country, &settings.city)?.clone();

    Ok((settings, city))
}

/// Merge CLI flags over config-file values; flags always win.
fn resolve_settings(args: &ReportArgs, config: &Config) -> Result<Settings> {
    let country = args
        .country
        .clone()
        .or_else(|| config.country.clone())
        .ok_or_else(|| anyhow!("no country code given; pass --country or run `weatherterm configure`"))?;

    let city = args
        .city
        .clone()
        .or_else(|| config.city.clone())
        .ok_or_else(|| anyhow!("no city name given; pass --city or run `weatherterm configure`"))?;

    let api_key = args
        .key
        .clone()
        .or_else(|| config.api_key.clone())
        .ok_or_else(|| anyhow!("no API key given; pass --key or run `weatherterm configure`"))?;

    let unit = args
        .unit
        .clone()
        .or_else(|| config.unit.clone())
        .unwrap_or_else(|| "metric".to_string())
        .parse::<Unit>()?;

    let interval = Duration::from_secs(args.sleep.or(config.sleep_secs).unwrap_or(300));

    Ok(Settings { country, city, api_key, unit, interval })
}

fn make_sink(args: &ReportArgs, config: &Config) -> Result<Box<dyn ReportSink>> {
    if args.stdout {
        return Ok(Box::new(StdoutSink));
    }

    let path = match args.file.clone().or_else(|| config.file.clone()) {
        Some(path) => path,
        None => config::default_report_path()?,
    };

    Ok(Box::new(FileSink::new(path)))
}

/// Resolves when the process receives an interrupt or termination request.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install interrupt handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

/// Interactive configuration; empty answers keep existing values.
fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("openweathermap.org API key:").prompt()?;
    if !api_key.is_empty() {
        config.api_key = Some(api_key);
    }

    let country = Text::new("Default country code (e.g. CA or US):").prompt()?;
    if !country.is_empty() {
        config.country = Some(country);
    }

    let city = Text::new("Default city name:").prompt()?;
    if !city.is_empty() {
        config.city = Some(city);
    }

    let unit = Select::new("Default unit system:", vec!["metric", "imperial"]).prompt()?;
    config.unit = Some(unit.to_string());

    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_values() {
        let args = ReportArgs {
            country: Some("CA".into()),
            city: Some("Toronto".into()),
            key: Some("FLAG_KEY".into()),
            unit: Some("imperial".into()),
            sleep: Some(60),
            ..ReportArgs::default()
        };
        let config = Config {
            api_key: Some("CONFIG_KEY".into()),
            country: Some("US".into()),
            city: Some("New York".into()),
            unit: Some("metric".into()),
            sleep_secs: Some(600),
            file: None,
        };

        let settings = resolve_settings(&args, &config).expect("settings must resolve");

        assert_eq!(settings.country, "CA");
        assert_eq!(settings.city, "Toronto");
        assert_eq!(settings.api_key, "FLAG_KEY");
        assert_eq!(settings.unit, Unit::Imperial);
        assert_eq!(settings.interval, Duration::from_secs(60));
    }

    #[test]
    fn config_fills_missing_flags() {
        let args = ReportArgs::default();
        let config = Config {
            api_key: Some("CONFIG_KEY".into()),
            country: Some("US".into()),
            city: Some("New York".into()),
            unit: None,
            sleep_secs: None,
            file: None,
        };

        let settings = resolve_settings(&args, &config).expect("settings must resolve");

        assert_eq!(settings.country, "US");
        assert_eq!(settings.api_key, "CONFIG_KEY");
        assert_eq!(settings.unit, Unit::Metric);
        assert_eq!(settings.interval, Duration::from_secs(300));
    }

    #[test]
    fn missing_country_is_an_error() {
        let err = resolve_settings(&ReportArgs::default(), &Config::default()).unwrap_err();

        assert!(err.to_string().contains("no country code given"));
    }

    #[test]
    fn invalid_unit_is_fatal_at_startup() {
        let args = ReportArgs {
            country: Some("US".into()),
            city: Some("New York".into()),
            key: Some("KEY".into()),
            unit: Some("kelvin".into()),
            ..ReportArgs::default()
        };

        let err = resolve_settings(&args, &Config::default()).unwrap_err();

        assert!(err.to_string().contains("invalid unit"));
    }

    #[test]
    fn unknown_city_fails_preparation() {
        let args = ReportArgs {
            country: Some("US".into()),
            city: Some("Unknown City".into()),
            key: Some("KEY".into()),
            ..ReportArgs::default()
        };

        let err = prepare(&args, &Config::default()).unwrap_err();

        assert!(err.to_string().contains("city not found"));
    }
}
