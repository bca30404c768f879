//! `verdant` -- care sweeps and care actions over a plant snapshot.
//!
//! The binary plays the part of the caller around the care engine: it owns
//! loading and saving plants (a JSON file standing in for the document
//! store), picks the clock, and prints watering reminders.
//!
//! # Startup Sequence
//!
//! 1. Parse arguments
//! 2. Load configuration from `verdant.yaml` (defaults if absent)
//! 3. Initialize structured logging (tracing)
//! 4. Run the requested command

mod error;
mod store;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use verdant_care::{parse_action, perform_action};
use verdant_core::config::{LogFormat, LoggingConfig, VerdantConfig};
use verdant_core::sweep::{check_notices, run_sweep};
use verdant_types::PlantId;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "verdant")]
#[command(about = "Plant care sweeps, care actions, and watering reminders")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    verdant sweep --plants plants.json             # Preview decay and reminders
    verdant sweep --plants plants.json --write     # Apply decay to the snapshot
    verdant care <PLANT_ID> water --plants plants.json
    verdant check --plants plants.json             # Reminders only, no decay
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file
    #[arg(short, long, global = true, default_value = "verdant.yaml")]
    config: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decay water for every plant and print watering reminders
    Sweep {
        /// Plant snapshot (JSON array of plant documents)
        #[arg(short, long)]
        plants: PathBuf,

        /// Evaluate at this RFC 3339 instant instead of the current time
        #[arg(long)]
        now: Option<String>,

        /// Save the decayed plants back to the snapshot
        #[arg(long)]
        write: bool,
    },

    /// Apply a care action to one plant and save it
    Care {
        /// Plant ID (24 hex characters)
        plant_id: PlantId,

        /// Action: water, adjust-sunlight, or fertilize
        action: String,

        /// Plant snapshot (JSON array of plant documents)
        #[arg(short, long)]
        plants: PathBuf,

        /// Record the action at this RFC 3339 instant instead of now
        #[arg(long)]
        now: Option<String>,
    },

    /// Print watering reminders without decaying anything
    Check {
        /// Plant snapshot (JSON array of plant documents)
        #[arg(short, long)]
        plants: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.logging);
    info!(
        config = %cli.config.display(),
        notify_threshold = config.care.notify_threshold,
        "Configuration loaded"
    );

    run(cli.command, &config)?;
    Ok(())
}

/// Execute one command against the snapshot.
fn run(command: Command, config: &VerdantConfig) -> Result<(), CliError> {
    match command {
        Command::Sweep { plants, now, write } => {
            let now = resolve_now(now.as_deref())?;
            let mut records = store::load_plants(&plants)?;
            let summary = run_sweep(&mut records, &config.care, now);

            for failure in &summary.failures {
                eprintln!("skipped {}: {}", failure.plant_id, failure.error);
            }
            for notice in &summary.notices {
                println!("{}", notice.message);
            }

            if write {
                store::save_plants(&plants, &records)?;
                info!(path = %plants.display(), "Snapshot updated");
            }
        }
        Command::Care {
            plant_id,
            action,
            plants,
            now,
        } => {
            let action = parse_action(&action).ok_or(CliError::UnknownAction(action))?;
            let now = resolve_now(now.as_deref())?;
            let mut records = store::load_plants(&plants)?;

            let plant = store::find_plant_mut(&mut records, plant_id)?;
            plant.care = perform_action(&plant.care, action, &config.care, now)?;
            let rendered = serde_json::to_string_pretty(plant).map_err(|source| CliError::Json {
                path: plants.clone(),
                source,
            })?;

            store::save_plants(&plants, &records)?;
            println!("{rendered}");
        }
        Command::Check { plants } => {
            let records = store::load_plants(&plants)?;
            for notice in check_notices(&records, &config.care) {
                println!("{}", notice.message);
            }
        }
    }
    Ok(())
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> Result<VerdantConfig, CliError> {
    if path.exists() {
        Ok(VerdantConfig::from_file(path)?)
    } else {
        Ok(VerdantConfig::parse("")?)
    }
}

/// Install the tracing subscriber. `RUST_LOG` beats the configured level.
///
/// Logs go to stderr; stdout carries command output.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Parse `--now`, or read the clock.
fn resolve_now(value: Option<&str>) -> Result<DateTime<Utc>, CliError> {
    value.map_or_else(
        || Ok(Utc::now()),
        |raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|source| CliError::Timestamp {
                    value: String::from(raw),
                    source,
                })
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_sweep_arguments() {
        let cli = Cli::try_parse_from([
            "verdant",
            "sweep",
            "--plants",
            "plants.json",
            "--now",
            "2026-10-02T08:00:00Z",
            "--write",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("verdant.yaml"));
        assert!(matches!(cli.command, Command::Sweep { write: true, .. }));
    }

    #[test]
    fn care_takes_an_object_id() {
        let cli = Cli::try_parse_from([
            "verdant",
            "care",
            "65f1c2a9e4b0a1b2c3d4e5f6",
            "water",
            "-p",
            "p.json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Care { plant_id, .. } if plant_id.to_string() == "65f1c2a9e4b0a1b2c3d4e5f6"
        ));

        let bad = Cli::try_parse_from(["verdant", "care", "not-an-id", "water", "-p", "p.json"]);
        assert!(bad.is_err());
    }

    #[test]
    fn resolves_explicit_now() {
        let now = resolve_now(Some("2026-10-02T10:30:00+02:00")).unwrap();
        assert_eq!(now.to_rfc3339(), "2026-10-02T08:30:00+00:00");
        assert!(matches!(
            resolve_now(Some("yesterday")),
            Err(CliError::Timestamp { .. })
        ));
    }

    #[test]
    fn care_on_unknown_plant_fails() {
        let mut records = store::parse_plants("[]").unwrap();
        let id: PlantId = "65f1c2a9e4b0a1b2c3d4e5f6".parse().unwrap();
        assert!(matches!(
            store::find_plant_mut(&mut records, id),
            Err(CliError::PlantNotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn snapshot_survives_a_care_action() {
        let snapshot = r#"[{
            "_id": "65f1c2a9e4b0a1b2c3d4e5a1",
            "user": "65f1c29be4b0a1b2c3d4e0f1",
            "plantType": "Fern",
            "nickname": "Fernando",
            "potSize": "small",
            "wateringNeeds": 4,
            "lastWatered": "2026-10-01T08:00:00Z"
        }]"#;
        let mut records = store::parse_plants(snapshot).unwrap();
        let config = VerdantConfig::default();
        let id = records.first().unwrap().id;
        let now = resolve_now(Some("2026-10-01T09:00:00Z")).unwrap();

        let plant = store::find_plant_mut(&mut records, id).unwrap();
        plant.care = perform_action(
            &plant.care,
            verdant_types::CareAction::Fertilize,
            &config.care,
            now,
        )
        .unwrap();

        let rendered = store::render_plants(&records).unwrap();
        let reparsed = store::parse_plants(&rendered).unwrap();
        assert_eq!(reparsed, records);
        assert_eq!(reparsed.first().unwrap().care.care_history.len(), 1);
        assert!(rendered.contains("\"_id\": \"65f1c2a9e4b0a1b2c3d4e5a1\""));
    }
}
