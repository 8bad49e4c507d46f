use crate::{config::connection::ConnectionProfile, dump::core::Dump, dump::error::DumpError};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{Level, error, info};

pub mod command;
pub mod config;
pub mod dump;
pub mod exec;

// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "dbdump",
    version = "1.0.0",
    about = "Sequential database schema & data dump orchestrator.",
    long_about = None,
)]
struct Args {
    /// Connection profile file (JSON)
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Directory containing one dump configuration per schema
    #[arg(long = "config-dir", default_value = "config")]
    config_dir: PathBuf,

    /// Directory the dump files are written to
    #[arg(long = "data-dir", default_value = "data")]
    data_dir: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Failed to read the connection profile {file}: {source}")]
    ProfileRead {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse the connection profile {file}: {source}")]
    ProfileParse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read the confirmation answer: {0}")]
    Prompt(#[from] std::io::Error),

    #[error(transparent)]
    Dump(#[from] DumpError),
}

// Main entry point for the program.
#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args = Args::parse();
    let profile = load_profile(&args.config)?;

    if !args.yes && !confirm(&profile)? {
        info!("Aborted");
        return Ok(());
    }

    info!(
        "Starting to dump db schemas & data configured by {} to the data dir {}",
        args.config_dir.display(),
        args.data_dir.display()
    );

    let dump = Dump::new(profile, args.config_dir, args.data_dir);
    if let Err(e) = dump.run().await {
        match e.schema() {
            Some(schema) => error!("Run failed in the {} stage on schema {schema}: {e}", e.stage()),
            None => error!("Run failed in the {} stage: {e}", e.stage()),
        }
        return Err(e.into());
    }

    info!("Thats it!");
    Ok(())
}

fn load_profile(path: &Path) -> Result<ConnectionProfile, CliError> {
    let data = std::fs::read_to_string(path).map_err(|e| CliError::ProfileRead {
        file: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&data).map_err(|e| CliError::ProfileParse {
        file: path.display().to_string(),
        source: e,
    })
}

// Asks for confirmation on stdin. Anything other than y/Y aborts.
fn confirm(profile: &ConnectionProfile) -> Result<bool, std::io::Error> {
    print!(
        "Dumping {} as user {}. Continue [Ny]? ",
        profile.describe(),
        profile.user
    );
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
