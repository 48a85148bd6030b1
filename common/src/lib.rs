mod record;
pub use record::*;

mod section;
pub use section::{normalize_section, SectionKey, SectionKeyError};

mod schedule;
pub use schedule::*;

mod config;
pub use config::*;

mod error;
pub use error::ConfigError;

pub mod test_case;
