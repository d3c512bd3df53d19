use clap::{Parser, ValueEnum};

use crate::model::IdSource;

/// Student roster sidecar. Reads one JSON request per line on stdin and
/// answers with one JSON response per line on stdout.
#[derive(Debug, Clone, Parser)]
#[command(name = "studentd", version)]
pub struct Config {
    /// Log filter directive (e.g. `warn`, `studentd=debug`). Logs go to stderr.
    #[arg(long = "log-level", env = "STUDENTD_LOG", default_value = "warn")]
    pub log_level: String,

    #[arg(long = "log-format", env = "STUDENTD_LOG_FORMAT", value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    /// How ids are minted for records created through the form.
    #[arg(long = "ids", env = "STUDENTD_IDS", value_enum, default_value = "uuid")]
    pub ids: IdMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdMode {
    Uuid,
    /// Sequential ids starting at 1, for reproducible sessions.
    Counter,
}

impl Config {
    pub fn id_source(&self) -> IdSource {
        match self.ids {
            IdMode::Uuid => IdSource::Uuid,
            IdMode::Counter => IdSource::counter(),
        }
    }
}
