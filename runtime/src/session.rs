use std::path::Path;

use roster_common::{ScheduleTable, StudentRecord};

use crate::{search, LookupResult, RuntimeError};

/// The state behind one user's lookup screen: the schedule table, the
/// records from the last upload, the last search result and a status line.
///
/// Uploads and searches replace state wholesale; nothing is edited in place.
#[derive(Debug, Default)]
pub struct Session {
    pub schedules: ScheduleTable,
    records: Vec<StudentRecord>,
    result: Option<LookupResult>,
    message: Option<String>,
}

impl Session {
    pub fn new(schedules: ScheduleTable) -> Self {
        Self {
            schedules,
            ..Self::default()
        }
    }

    /// Replaces the roster with the records parsed from `text` and clears the
    /// previous result. Returns the number of records loaded.
    pub fn upload(&mut self, text: &str) -> usize {
        self.records = roster_parser::parse(text);
        self.result = None;
        self.message = Some(format!("Loaded {} rows", self.records.len()));
        tracing::info!(rows = self.records.len(), "roster uploaded");
        self.records.len()
    }

    /// Reads the roster at `path` and uploads it. A UTF-8 byte order mark is
    /// dropped. On a read error the current roster is left untouched.
    pub fn upload_file<P>(&mut self, path: P) -> Result<usize, RuntimeError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RuntimeError::RosterRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read roster file");
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        Ok(self.upload(text))
    }

    /// Looks `query` up in the current roster. An empty query does nothing
    /// and returns `None`, keeping the previous result.
    pub fn search(&mut self, query: &str) -> Option<&LookupResult> {
        if query.is_empty() {
            return None;
        }

        let result = search(&self.records, query, &self.schedules);
        tracing::debug!(query, found = result.is_found(), "search");
        self.result = Some(result);
        self.result.as_ref()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn result(&self) -> Option<&LookupResult> {
        self.result.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
