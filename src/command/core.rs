use crate::command::{mysql::MysqlDump, postgres::PgDump};
use crate::config::{
    connection::{Backend, ConnectionProfile},
    dump_config::DumpConfig,
};

/// A fully resolved external dump invocation.
///
/// The password travels through `env`, never through `args`, so it does not
/// show up in the process listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpCommand {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

/// Builds the external dump commands for one backend kind.
///
/// Implementations are pure: identical inputs must yield identical commands.
pub trait CommandBuilder {
    /// Structure-only dump of the configured schema.
    fn schema_command(&self, profile: &ConnectionProfile, config: &DumpConfig) -> DumpCommand;

    /// Row-data-only dump. Returns `None` when the configuration lists no
    /// tables, in which case the data phase skips the configuration.
    fn data_command(&self, profile: &ConnectionProfile, config: &DumpConfig)
    -> Option<DumpCommand>;
}

impl Backend {
    /// Selects the command builder for this backend kind.
    pub fn builder(&self) -> Box<dyn CommandBuilder + Send + Sync> {
        match self {
            Backend::Postgres => Box::new(PgDump),
            Backend::Mysql => Box::new(MysqlDump),
        }
    }
}
