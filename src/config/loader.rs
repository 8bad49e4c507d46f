use crate::config::dump_config::{DumpConfig, IndexedConfig};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to enumerate the configuration directory: {0}")]
    Enumeration(#[source] std::io::Error),

    #[error("No dump configurations found")]
    NoConfigurations,

    #[error("Failed to read the configuration file {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse the configuration file {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration file {file} has an empty schema name")]
    EmptySchema { file: String },
}

/// Loads every dump configuration from the given directory and assigns each
/// its ordering index.
///
/// File names are sorted before indexing so the indices do not depend on the
/// order the filesystem happens to return directory entries in. Indices are
/// `(position + 10) * 100`, i.e. 1000, 1100, 1200, ...
///
/// The load is all-or-nothing: the first file that fails to read, parse or
/// validate aborts the whole load.
pub fn load(config_dir: &Path) -> Result<Vec<IndexedConfig>, LoadError> {
    let entries = std::fs::read_dir(config_dir).map_err(LoadError::Enumeration)?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(LoadError::Enumeration)?;
        files.push(entry.path());
    }
    if files.is_empty() {
        return Err(LoadError::NoConfigurations);
    }
    files.sort();

    let mut configurations = Vec::with_capacity(files.len());
    for (position, path) in files.iter().enumerate() {
        let file = path.display().to_string();

        let data = std::fs::read_to_string(path).map_err(|e| LoadError::Read {
            file: file.clone(),
            source: e,
        })?;
        let mut config: DumpConfig = serde_json::from_str(&data).map_err(|e| LoadError::Parse {
            file: file.clone(),
            source: e,
        })?;
        // Padding would otherwise leak into --schema= selectors and filenames.
        config.schema = config.schema.trim().to_string();
        if config.schema.is_empty() {
            return Err(LoadError::EmptySchema { file });
        }

        configurations.push(IndexedConfig {
            index: (position as u32 + 10) * 100,
            config,
        });
    }

    Ok(configurations)
}
