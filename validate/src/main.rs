//! threatline-validate - replay fight files through the threat engine.
//!
//! Usage:
//!   threatline-validate replay <fight.json>... [--edition <edition>] [--top <n>] [--json]
//!   threatline-validate configs
//!
//! Logs go to stderr, or are appended to THREATLINE_LOG_PATH when set.

mod commands;
mod error;
mod report;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use threatline_core::registry;
use threatline_types::Edition;
use tracing_subscriber::filter::EnvFilter;

use crate::error::{Result, ValidateError};
use crate::settings::{Overrides, Settings};

#[derive(Parser)]
#[command(version, about = "Replay fights through the threat engine")]
struct Cli {
    /// TOML settings file
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay fight JSON files and print threat tables
    Replay {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Force a rule set instead of resolving from report metadata
        #[arg(short, long)]
        edition: Option<EditionArg>,
        /// Rows per enemy
        #[arg(short, long)]
        top: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Build every rule set and check resolver exclusivity
    Configs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EditionArg {
    Era,
    Sod,
    Anniversary,
}

impl From<EditionArg> for Edition {
    fn from(arg: EditionArg) -> Self {
        match arg {
            EditionArg::Era => Edition::Era,
            EditionArg::Sod => Edition::SeasonOfDiscovery,
            EditionArg::Anniversary => Edition::Anniversary,
        }
    }
}

/// Initialize logging, writing to THREATLINE_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("THREATLINE_LOG_PATH")
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(file)
            .init();
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let registry = registry().map_err(|err| ValidateError::Config(err.clone()))?;
    let file_settings = Settings::load(cli.settings.as_deref())?;

    match cli.command {
        Commands::Replay {
            files,
            edition,
            top,
            json,
        } => {
            let settings = file_settings.with_overrides(Overrides {
                edition: edition.map(Edition::from),
                top,
                json,
            });
            commands::replay(registry, &files, &settings)
        }
        Commands::Configs => commands::check_configs(registry),
    }
}

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "validation failed");
            ExitCode::FAILURE
        }
    }
}
