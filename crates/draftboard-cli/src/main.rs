// Draftboard command-line entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, stdout carries JSON only)
// 2. Load config
// 3. Load the season's ADP catalog
// 4. Read the request document and run the engine
// 5. Print the result

mod cli;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use directories::ProjectDirs;
use draftboard_core::config;
use draftboard_core::draft::pick::Position;
use draftboard_core::valuation::tiers::DEEPEST_TIER;
use draftboard_core::{Catalog, DraftAssistant, DraftRequest, EngineConfig, RequestError, load_catalog};
use serde::Serialize;
use tracing::{error, info, warn};

use cli::{Cli, Command, SourceArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("warning: logging disabled: {e:#}");
    }
    info!("draftboard starting: {:?}", cli.command);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report(&err)),
    }
}

/// The request validation failure somewhere in `err`'s chain, if any.
fn validation_failure(err: &anyhow::Error) -> Option<(&str, &str)> {
    err.chain().find_map(|cause| match cause.downcast_ref::<RequestError>() {
        Some(RequestError::Validation { field, message }) => Some((field.as_str(), message.as_str())),
        _ => None,
    })
}

/// Exit status for a failed run: 2 for a rejected request, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> u8 {
    if validation_failure(err).is_some() {
        2
    } else {
        1
    }
}

fn report(err: &anyhow::Error) -> u8 {
    match validation_failure(err) {
        Some((field, message)) => {
            warn!("rejected request: {field}: {message}");
            eprintln!("invalid request: {field}: {message}");
        }
        None => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
        }
    }
    exit_code(err)
}

fn run(command: Command) -> anyhow::Result<()> {
    let config = config::load_config().context("failed to load configuration")?;

    match command {
        Command::Recommend {
            request,
            source,
            limit,
            all,
            pretty,
        } => {
            let catalog = open_catalog(&config, &source);
            let request = read_request(&request)?;
            let assistant = DraftAssistant::new(&config, &catalog);
            let limit = if all { Some(usize::MAX) } else { limit };
            let response = assistant.recommend(&request, limit)?;
            print_json(&response, pretty)
        }
        Command::Grade {
            request,
            source,
            pretty,
        } => {
            let catalog = open_catalog(&config, &source);
            let request = read_request(&request)?;
            let analysis = DraftAssistant::new(&config, &catalog).grade(&request)?;
            print_json(&analysis, pretty)
        }
        Command::Tiers { source, position } => {
            let catalog = open_catalog(&config, &source);
            print_tiers(&catalog, position);
            Ok(())
        }
    }
}

/// Season and ADP file selected by the flags, falling back to the configured
/// default season and `<adp_dir>/<season>.csv`.
fn catalog_path(config: &EngineConfig, source: &SourceArgs) -> (i32, PathBuf) {
    let season = source.season.unwrap_or(config.data.default_season);
    let path = source
        .adp
        .clone()
        .unwrap_or_else(|| config.data.adp_path(season));
    (season, path)
}

/// Load the ADP table named by the flags. A missing or broken file yields an
/// empty catalog carrying a warning.
fn open_catalog(config: &EngineConfig, source: &SourceArgs) -> Catalog {
    let (season, path) = catalog_path(config, source);
    let catalog = load_catalog(&path, &config.tiers);
    info!(
        "Season {}: {} ADP players from {}",
        season,
        catalog.len(),
        path.display()
    );
    for warning in catalog.warnings() {
        eprintln!("warning: {warning}");
    }
    catalog
}

fn read_request(source: &str) -> anyhow::Result<DraftRequest> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("failed to read request file {source}"))?
    };
    Ok(DraftRequest::from_json(&text)?)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn print_tiers(catalog: &Catalog, position: Option<Position>) {
    for tier in 1..=DEEPEST_TIER {
        let players: Vec<_> = catalog
            .players()
            .iter()
            .filter(|p| p.tier == tier && position.map_or(true, |pos| p.position == pos))
            .collect();
        if players.is_empty() {
            continue;
        }
        println!("Tier {tier}");
        for p in players {
            let bye = p.bye_week.map(|b| format!(", bye {b}")).unwrap_or_default();
            println!(
                "  {:>6.1}  {:<3}  {} ({}{})",
                p.adp_rank,
                p.position.display_str(),
                p.name,
                p.team,
                bye
            );
        }
    }
}

fn log_dir() -> anyhow::Result<PathBuf> {
    match ProjectDirs::from("", "", "draftboard") {
        Some(dirs) => Ok(dirs.data_dir().join("logs")),
        None => Ok(std::env::current_dir()?.join("logs")),
    }
}

/// Initialize tracing to log to a file (stdout is reserved for results).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join("draftboard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draftboard=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
