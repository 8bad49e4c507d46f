use crate::config::loader::LoadError;
use crate::exec::runner::ExecError;
use std::fmt;
use thiserror::Error;

/// Orchestration stage a run can fail in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Discover,
    Extensions,
    Schema,
    Data,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Discover => "discover",
            Stage::Extensions => "extensions",
            Stage::Schema => "schema",
            Stage::Data => "data",
        };
        write!(f, "{name}")
    }
}

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("Failed to discover dump configurations: {0}")]
    Discover(#[from] LoadError),

    #[error("{stage} dump for schema {schema} failed: {source}")]
    Execution {
        stage: Stage,
        schema: String,
        #[source]
        source: ExecError,
    },

    #[error("Failed to write {file} in the {stage} phase for schema {schema}: {source}")]
    FileWrite {
        stage: Stage,
        schema: String,
        file: String,
        #[source]
        source: std::io::Error,
    },
}

impl DumpError {
    /// Stage the run stopped in.
    pub fn stage(&self) -> Stage {
        match self {
            DumpError::Discover(_) => Stage::Discover,
            DumpError::Execution { stage, .. } => *stage,
            DumpError::FileWrite { stage, .. } => *stage,
        }
    }

    /// Schema the run stopped on, if it got past discovery.
    pub fn schema(&self) -> Option<&str> {
        match self {
            DumpError::Discover(_) => None,
            DumpError::Execution { schema, .. } => Some(schema),
            DumpError::FileWrite { schema, .. } => Some(schema),
        }
    }
}
