use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{normalize_section, ConfigError, DayBlock, ScheduleTable};

/// Schedule format version understood by this build.
pub const SCHEDULE_VERSION: u32 = 1;

const EMBEDDED_SCHEDULES: &str = include_str!("../schedules.toml");

/// On-disk shape of a schedule table.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct ScheduleConfig {
    pub version: u32,
    #[serde(default)]
    pub sections: Vec<SectionSchedule>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq)]
pub struct SectionSchedule {
    pub key: String,
    #[serde(default)]
    pub days: Vec<DayBlock>,
}

impl ScheduleConfig {
    pub fn load<T>(path: T) -> Result<ScheduleConfig, ConfigError>
    where
        T: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "read schedule file");
        contents.parse()
    }

    /// The table compiled into the binary.
    pub fn embedded() -> Result<ScheduleConfig, ConfigError> {
        EMBEDDED_SCHEDULES.parse()
    }

    /// Validates keys and builds the lookup table. Section and day order is
    /// preserved from the file.
    pub fn into_table(self) -> Result<ScheduleTable, ConfigError> {
        let mut table = ScheduleTable::new();

        for section in self.sections {
            let canonical = normalize_section(Some(&section.key))
                .filter(|key| key.as_str() == section.key)
                .ok_or_else(|| ConfigError::NonCanonicalKey {
                    canonical: normalize_section(Some(&section.key))
                        .map(|key| key.to_string())
                        .unwrap_or_default(),
                    key: section.key.clone(),
                })?;

            if table.insert(canonical, section.days).is_some() {
                return Err(ConfigError::DuplicateSection { key: section.key });
            }
        }

        Ok(table)
    }
}

impl FromStr for ScheduleConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ScheduleConfig = toml::from_str(s)?;
        if config.version != SCHEDULE_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: SCHEDULE_VERSION,
            });
        }
        Ok(config)
    }
}

/// Loads the schedule table from `path`, or the embedded one when no path is
/// given.
pub fn load_schedules(path: Option<&Path>) -> Result<ScheduleTable, ConfigError> {
    let config = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "using schedule override");
            ScheduleConfig::load(path)?
        }
        None => ScheduleConfig::embedded()?,
    };
    config.into_table()
}
