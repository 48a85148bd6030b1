use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a schedule table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read schedule file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to load schedule data: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported schedule version {found} (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("section `{key}` is listed more than once")]
    DuplicateSection { key: String },

    /// Table keys have to be written the way lookups will produce them,
    /// otherwise the entry could never be reached.
    #[error("section key `{key}` is not canonical (expected `{canonical}`)")]
    NonCanonicalKey { key: String, canonical: String },
}
