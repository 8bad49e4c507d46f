use serde::{Deserialize, Serialize};

// Database backend kind. Selects which external dump utility is invoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Postgres,
    Mysql,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Postgres => "postgres",
            Backend::Mysql => "mysql",
        }
    }
}

// This is a database connection profile structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionProfile {
    // Backend kind, postgres when omitted
    #[serde(default)]
    pub backend: Backend,
    // Database host
    pub host: String,
    // Database port
    pub port: String,
    // Database user name
    pub user: String,
    // Database user password
    pub password: String,
    // Database name
    pub database: String,
}

impl ConnectionProfile {
    /// Returns a printable description of the target. Never includes the password.
    pub fn describe(&self) -> String {
        format!(
            "{} database {} at {}:{}",
            self.backend.as_str(),
            self.database,
            self.host,
            self.port
        )
    }
}

impl Default for ConnectionProfile {
    fn default() -> Self {
        ConnectionProfile {
            backend: Backend::Postgres,
            host: "localhost".to_string(),
            port: "5432".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "postgres".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults_to_postgres_when_omitted() {
        let profile: ConnectionProfile = serde_json::from_str(
            r#"{
                "host": "localhost",
                "port": "5432",
                "user": "admin",
                "password": "secret",
                "database": "appdb"
            }"#,
        )
        .expect("Failed to deserialize profile");

        assert_eq!(profile.backend, Backend::Postgres);
        assert_eq!(profile.host, "localhost");
        assert_eq!(profile.database, "appdb");
    }

    #[test]
    fn test_backend_parses_lowercase_names() {
        let profile: ConnectionProfile = serde_json::from_str(
            r#"{
                "backend": "mysql",
                "host": "db.local",
                "port": "3306",
                "user": "root",
                "password": "secret",
                "database": "appdb"
            }"#,
        )
        .expect("Failed to deserialize profile");

        assert_eq!(profile.backend, Backend::Mysql);
    }

    #[test]
    fn test_describe_never_contains_the_password() {
        let profile = ConnectionProfile {
            password: "hunter2".to_string(),
            ..ConnectionProfile::default()
        };

        let description = profile.describe();

        assert!(!description.contains("hunter2"));
        assert!(description.contains("localhost"));
        assert!(description.contains("5432"));
    }
}
