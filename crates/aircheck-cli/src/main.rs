//! aircheck - radio play-history CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use url::Url;

use crate::config::{AppConfig, resolve_config_path};
use aircheck_api::PlayHistoryClient;
use aircheck_views::{
    HourBucket, NavigationGate, load_play_history, load_station_index, load_track_detail,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Service base URL. Falls back to `api.base_url` in config.toml.
    #[arg(long, global = true)]
    base_url: Option<Url>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List all stations.
    Stations,
    /// Show one hour of a station's play history.
    Plays(PlaysArgs),
    /// Show a track with its play history.
    Track(TrackArgs),
}

/// Arguments for the `plays` subcommand.
#[derive(clap::Args)]
struct PlaysArgs {
    /// Station id.
    #[arg(long, required = true)]
    station: String,

    /// Hour bucket id (e.g. "2024-01-01T05Z"). Default: the current hour.
    #[arg(long)]
    hour: Option<String>,
}

/// Arguments for the `track` subcommand.
#[derive(clap::Args)]
struct TrackArgs {
    /// Station id.
    #[arg(long, required = true)]
    station: String,

    /// Track id.
    #[arg(long, required = true)]
    track: String,
}

/// Resolves the service base URL from the CLI flag or config fallback.
///
/// # Errors
///
/// Returns an error if neither the flag nor the config provides a base URL,
/// or if the configured value does not parse.
fn resolve_base_url(flag: Option<Url>, dir: Option<&PathBuf>) -> Result<Url> {
    if let Some(url) = flag {
        return Ok(url);
    }

    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    let raw = config.api.base_url.context(
        "base URL not configured; pass --base-url or set api.base_url in config.toml",
    )?;
    raw.parse()
        .with_context(|| format!("invalid api.base_url in config: {raw}"))
}

/// Builds the API client for the resolved base URL.
///
/// # Errors
///
/// Returns an error if the HTTP client fails to build.
fn build_client(base_url: Url) -> Result<PlayHistoryClient> {
    PlayHistoryClient::builder()
        .base_url(base_url)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build API client")
}

/// Runs the `stations` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build or the fetch fails.
#[instrument(skip_all)]
async fn run_stations(base_url: Url) -> Result<()> {
    let client = build_client(base_url)?;
    let nav = NavigationGate::new().begin();

    let view = load_station_index(&client, &nav)
        .await
        .context("failed to load stations")?;

    tracing::info!("ID\tName\tLocation\tPlays\tTracks");
    for station in &view.stations {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            station.id,
            station.name,
            station.location.as_deref().unwrap_or("-"),
            station.play_count,
            station.track_count,
        );
    }
    tracing::info!("Total: {} stations", view.stations.len());

    Ok(())
}

/// Runs the `plays` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build, the station or hour
/// does not exist, or a fetch fails.
#[instrument(skip_all)]
async fn run_plays(args: &PlaysArgs, base_url: Url) -> Result<()> {
    let client = build_client(base_url)?;
    let gate = NavigationGate::new();

    let index = load_station_index(&client, &gate.begin())
        .await
        .context("failed to load stations")?;

    let hour_id = args
        .hour
        .clone()
        .unwrap_or_else(|| HourBucket::now().to_string());

    let view = load_play_history(&client, &index.directory, &args.station, &hour_id, &gate.begin())
        .await
        .with_context(|| format!("failed to load plays for hour {hour_id}"))?;

    tracing::info!("Station: {} ({})", view.station.name, view.station.id);
    tracing::info!("Hour: {}", view.hour);
    tracing::info!("PlayedAt\tArtist - Title");
    for play in view.plays.items() {
        tracing::info!(
            "{}\t{} - {}",
            play.played_at.format("%H:%M:%S"),
            play.track.artist,
            play.track.title,
        );
    }
    if let Some(token) = view.plays.next_token() {
        tracing::info!("More plays available (next_token: {token})");
    }
    tracing::info!("Total: {} plays", view.plays.len());

    Ok(())
}

/// Runs the `track` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build, the station or track
/// does not exist, or a fetch fails.
#[instrument(skip_all)]
async fn run_track(args: &TrackArgs, base_url: Url) -> Result<()> {
    let client = build_client(base_url)?;
    let gate = NavigationGate::new();

    let index = load_station_index(&client, &gate.begin())
        .await
        .context("failed to load stations")?;

    let view = load_track_detail(&client, &index.directory, &args.station, &args.track, &gate.begin())
        .await
        .context("failed to load track")?;

    tracing::info!("Station: {} ({})", view.station.name, view.station.id);
    tracing::info!(
        "Track: {} - {} (song: {}, plays: {})",
        view.track.artist,
        view.track.title,
        view.track.is_song,
        view.track.play_count,
    );
    tracing::info!("First seen: {}", view.track.created_at);
    tracing::info!("Recent plays:");
    for play in view.plays.items() {
        tracing::info!("  {}", play.played_at);
    }
    if view.plays.has_more() {
        tracing::info!("More plays available");
    }

    Ok(())
}

/// CLI entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let base_url = resolve_base_url(cli.base_url.clone(), cli.dir.as_ref())?;
    match cli.command {
        Commands::Stations => run_stations(base_url).await,
        Commands::Plays(args) => run_plays(&args, base_url).await,
        Commands::Track(args) => run_track(&args, base_url).await,
    }
}
