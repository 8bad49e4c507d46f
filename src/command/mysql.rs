use crate::command::core::{CommandBuilder, DumpCommand};
use crate::config::{connection::ConnectionProfile, dump_config::DumpConfig};

/// Command builder backed by the `mysqldump` utility.
///
/// MySQL has no schema/database distinction, so the configured schema is
/// dumped as the database name and the profile's database field is unused.
pub struct MysqlDump;

impl MysqlDump {
    fn connection_args(profile: &ConnectionProfile) -> Vec<String> {
        vec![
            "-h".to_string(),
            profile.host.clone(),
            "-P".to_string(),
            profile.port.clone(),
            "-u".to_string(),
            profile.user.clone(),
        ]
    }

    fn password_env(profile: &ConnectionProfile) -> Vec<(String, String)> {
        vec![("MYSQL_PWD".to_string(), profile.password.clone())]
    }
}

impl CommandBuilder for MysqlDump {
    fn schema_command(&self, profile: &ConnectionProfile, config: &DumpConfig) -> DumpCommand {
        let mut args = vec!["--no-data".to_string()];
        args.extend(Self::connection_args(profile));
        args.push(config.schema.clone());

        DumpCommand {
            program: "mysqldump".to_string(),
            args,
            env: Self::password_env(profile),
        }
    }

    fn data_command(
        &self,
        profile: &ConnectionProfile,
        config: &DumpConfig,
    ) -> Option<DumpCommand> {
        if config.data_from.is_empty() {
            return None;
        }

        let mut args = vec!["--no-create-info".to_string()];
        args.extend(Self::connection_args(profile));
        args.push(config.schema.clone());
        args.extend(config.data_from.iter().cloned());

        Some(DumpCommand {
            program: "mysqldump".to_string(),
            args,
            env: Self::password_env(profile),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ConnectionProfile {
        ConnectionProfile {
            host: "db.example.com".to_string(),
            port: "3306".to_string(),
            user: "root".to_string(),
            password: "secret".to_string(),
            database: "unused".to_string(),
            ..ConnectionProfile::default()
        }
    }

    fn config(schema: &str, tables: &[&str]) -> DumpConfig {
        DumpConfig {
            schema: schema.to_string(),
            data_from: tables.iter().map(|t| t.to_string()).collect(),
            extensions: Vec::new(),
        }
    }

    #[test]
    fn test_schema_command_requests_structure_only() {
        let command = MysqlDump.schema_command(&profile(), &config("shop", &[]));

        assert_eq!(command.program, "mysqldump");
        assert_eq!(
            command.args,
            vec![
                "--no-data",
                "-h",
                "db.example.com",
                "-P",
                "3306",
                "-u",
                "root",
                "shop",
            ]
        );
    }

    #[test]
    fn test_data_command_restricts_to_listed_tables() {
        let command = MysqlDump
            .data_command(&profile(), &config("shop", &["orders", "customers"]))
            .unwrap();

        assert_eq!(
            command.args,
            vec![
                "--no-create-info",
                "-h",
                "db.example.com",
                "-P",
                "3306",
                "-u",
                "root",
                "shop",
                "orders",
                "customers",
            ]
        );
    }

    #[test]
    fn test_data_command_is_skipped_without_tables() {
        assert!(
            MysqlDump
                .data_command(&profile(), &config("shop", &[]))
                .is_none()
        );
    }

    #[test]
    fn test_password_travels_through_the_environment_only() {
        let command = MysqlDump.schema_command(&profile(), &config("shop", &[]));

        assert!(!command.args.iter().any(|a| a.contains("secret")));
        assert_eq!(
            command.env,
            vec![("MYSQL_PWD".to_string(), "secret".to_string())]
        );
    }
}
