use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

/// Snippet file used when the command line does not name one.
pub const DEFAULT_SNIPPET_FILE: &str = "snippets.csv";

const LOG_FILE_VAR: &str = "SNIPPETS_LOG_FILE";
const LOG_FILTER_VAR: &str = "SNIPPETS_LOG";
const DEFAULT_LOG_FILE: &str = "output.log";

/// Process-wide settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let log_file = env::var_os(LOG_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Self { log_file }
    }

    /// Install the process-wide diagnostic sink. The filter comes from
    /// SNIPPETS_LOG (default: debug) and output is appended to the log file.
    /// Diagnostics are not part of the functional contract, so an unopenable
    /// log file falls back to stderr instead of failing the command.
    pub fn init_logging(&self) {
        let mut builder = Builder::from_env(Env::new().filter_or(LOG_FILTER_VAR, "debug"));

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
        {
            Ok(file) => builder.target(Target::Pipe(Box::new(file))),
            Err(_) => builder.target(Target::Stderr),
        };

        builder.init();
    }
}
