use serde::{Deserialize, Serialize};

// This is a dump configuration structure. One file per schema to back up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpConfig {
    // Schema to dump
    pub schema: String,
    // Tables whose rows are included in the data phase
    #[serde(default)]
    pub data_from: Vec<String>,
    // Extensions that must exist before the schema is restored
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// A dump configuration together with its assigned ordering index.
///
/// The index is the only ordering authority downstream of the loader. Its
/// spacing (1000, 1100, 1200, ...) leaves gaps for manually inserted steps,
/// and the data file for a configuration takes `index + 1` so a lexicographic
/// filename sort restores schema-before-data per configuration.
#[derive(Debug, Clone)]
pub struct IndexedConfig {
    pub index: u32,
    pub config: DumpConfig,
}

impl IndexedConfig {
    /// File name of the structure-only dump.
    pub fn schema_file_name(&self) -> String {
        format!("{}-{}.schema.sql", self.index, self.config.schema)
    }

    /// File name of the row-data dump.
    pub fn data_file_name(&self) -> String {
        format!("{}-{}.data.sql", self.index + 1, self.config.schema)
    }

    /// File name of the generated extension script.
    pub fn extensions_file_name(&self) -> String {
        format!("{}-{}.extensions.sql", self.index, self.config.schema)
    }
}
