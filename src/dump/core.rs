use crate::command::core::CommandBuilder;
use crate::config::connection::ConnectionProfile;
use crate::config::dump_config::IndexedConfig;
use crate::config::loader;
use crate::dump::error::{DumpError, Stage};
use crate::exec::{runner, sequential};
use std::path::PathBuf;
use tracing::{debug, info};

/// Orchestrates one dump run over a directory of per-schema configurations.
///
/// A run discovers the configurations, writes the extension scripts, then
/// executes all schema-structure dumps strictly one at a time followed by
/// all data dumps strictly one at a time. The first error stops the run;
/// files already written stay in place.
pub struct Dump {
    profile: ConnectionProfile,
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl Dump {
    // Create a new Dump instance.
    pub fn new(profile: ConnectionProfile, config_dir: PathBuf, data_dir: PathBuf) -> Self {
        Dump {
            profile,
            config_dir,
            data_dir,
        }
    }

    /// Runs discovery and all dump phases, stopping on the first error.
    pub async fn run(&self) -> Result<(), DumpError> {
        let builder = self.profile.backend.builder();
        self.run_with_builder(builder.as_ref()).await
    }

    async fn run_with_builder(&self, builder: &dyn CommandBuilder) -> Result<(), DumpError> {
        info!(
            "Enumerating dump configurations in {}",
            self.config_dir.display()
        );
        let configurations = loader::load(&self.config_dir)?;
        info!("Found {} configurations", configurations.len());

        self.dump_extensions(&configurations).await?;

        info!("Starting schema dumps");
        let tasks: Vec<_> = configurations
            .iter()
            .map(|configuration| move || self.dump_schema(builder, configuration))
            .collect();
        sequential::run_sequential(tasks).await?;
        info!("Structure for {} schemas dumped", configurations.len());

        info!("Starting data dumps");
        let tasks: Vec<_> = configurations
            .iter()
            .map(|configuration| move || self.dump_data(builder, configuration))
            .collect();
        sequential::run_sequential(tasks).await?;
        info!("Data for {} schemas dumped", configurations.len());

        Ok(())
    }

    /// Writes a `create extension` script for every configuration that lists
    /// extensions. Generated locally, no external process involved.
    async fn dump_extensions(&self, configurations: &[IndexedConfig]) -> Result<(), DumpError> {
        info!("Starting extension dumps");
        for configuration in configurations {
            if configuration.config.extensions.is_empty() {
                continue;
            }
            debug!(
                "Dumping extensions for {}",
                configuration.config.schema
            );

            let script = configuration
                .config
                .extensions
                .iter()
                .map(|e| format!("create extension {e};"))
                .collect::<Vec<_>>()
                .join("\n");

            let file = self.data_dir.join(configuration.extensions_file_name());
            tokio::fs::write(&file, script)
                .await
                .map_err(|e| DumpError::FileWrite {
                    stage: Stage::Extensions,
                    schema: configuration.config.schema.clone(),
                    file: file.display().to_string(),
                    source: e,
                })?;
            info!(
                "Extension dump for {}.{} stored in {}",
                self.profile.database,
                configuration.config.schema,
                file.display()
            );
        }
        Ok(())
    }

    async fn dump_schema(
        &self,
        builder: &dyn CommandBuilder,
        configuration: &IndexedConfig,
    ) -> Result<(), DumpError> {
        debug!("Dumping schema of {}", configuration.config.schema);

        let command = builder.schema_command(&self.profile, &configuration.config);
        let output = runner::run_command(&command)
            .await
            .map_err(|e| DumpError::Execution {
                stage: Stage::Schema,
                schema: configuration.config.schema.clone(),
                source: e,
            })?;

        let file = self.data_dir.join(configuration.schema_file_name());
        tokio::fs::write(&file, output)
            .await
            .map_err(|e| DumpError::FileWrite {
                stage: Stage::Schema,
                schema: configuration.config.schema.clone(),
                file: file.display().to_string(),
                source: e,
            })?;
        info!(
            "Dump for {}.{} stored in {}",
            self.profile.database,
            configuration.config.schema,
            file.display()
        );
        Ok(())
    }

    async fn dump_data(
        &self,
        builder: &dyn CommandBuilder,
        configuration: &IndexedConfig,
    ) -> Result<(), DumpError> {
        let Some(command) = builder.data_command(&self.profile, &configuration.config) else {
            debug!(
                "No tables configured for {}, skipping data dump",
                configuration.config.schema
            );
            return Ok(());
        };
        debug!("Dumping data from {}", configuration.config.schema);

        let output = runner::run_command(&command)
            .await
            .map_err(|e| DumpError::Execution {
                stage: Stage::Data,
                schema: configuration.config.schema.clone(),
                source: e,
            })?;

        let file = self.data_dir.join(configuration.data_file_name());
        tokio::fs::write(&file, output)
            .await
            .map_err(|e| DumpError::FileWrite {
                stage: Stage::Data,
                schema: configuration.config.schema.clone(),
                file: file.display().to_string(),
                source: e,
            })?;
        info!(
            "Data dump for {}.{} stored in {}",
            self.profile.database,
            configuration.config.schema,
            file.display()
        );
        Ok(())
    }
}
