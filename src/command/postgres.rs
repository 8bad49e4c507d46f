use crate::command::core::{CommandBuilder, DumpCommand};
use crate::config::{connection::ConnectionProfile, dump_config::DumpConfig};

/// Command builder backed by the `pg_dump` utility.
pub struct PgDump;

impl PgDump {
    fn connection_args(profile: &ConnectionProfile) -> Vec<String> {
        vec![
            "-U".to_string(),
            profile.user.clone(),
            "-h".to_string(),
            profile.host.clone(),
            "-p".to_string(),
            profile.port.clone(),
        ]
    }

    fn password_env(profile: &ConnectionProfile) -> Vec<(String, String)> {
        vec![("PGPASSWORD".to_string(), profile.password.clone())]
    }
}

impl CommandBuilder for PgDump {
    fn schema_command(&self, profile: &ConnectionProfile, config: &DumpConfig) -> DumpCommand {
        let mut args = vec![
            "-Fc".to_string(),
            format!("--schema={}", config.schema),
            "-s".to_string(),
            "-x".to_string(),
            "--clean".to_string(),
        ];
        args.extend(Self::connection_args(profile));
        args.push("--create".to_string());
        args.push(profile.database.clone());

        DumpCommand {
            program: "pg_dump".to_string(),
            args,
            env: Self::password_env(profile),
        }
    }

    fn data_command(
        &self,
        profile: &ConnectionProfile,
        config: &DumpConfig,
    ) -> Option<DumpCommand> {
        // Without a table list no -t selector can be built.
        if config.data_from.is_empty() {
            return None;
        }

        let mut args = vec![
            "-Fc".to_string(),
            format!("--schema={}", config.schema),
            "-a".to_string(),
        ];
        for table in &config.data_from {
            args.push("-t".to_string());
            // The double quotes are read by pg_dump itself; without them it
            // case-folds the identifiers and a mixed-case table name selects
            // the wrong table.
            args.push(format!("\"{}\".\"{}\"", config.schema, table));
        }
        args.push("-x".to_string());
        args.extend(Self::connection_args(profile));
        args.push(profile.database.clone());

        Some(DumpCommand {
            program: "pg_dump".to_string(),
            args,
            env: Self::password_env(profile),
        })
    }
}
