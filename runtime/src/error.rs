use roster_common::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving a session
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The roster file could not be read
    #[error("could not read roster file `{}`", path.display())]
    RosterRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The schedule table could not be loaded
    #[error(transparent)]
    Schedules(#[from] ConfigError),
}
