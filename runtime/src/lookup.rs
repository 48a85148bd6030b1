use roster_common::{
    normalize_id, normalize_section, DayBlock, ScheduleTable, SectionKey, StudentRecord,
};

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    NotFound,
    Found {
        student: StudentRecord,
        /// `None` when the student's section cell is empty
        section_key: Option<SectionKey>,
        /// `None` when the section has no entry in the schedule table
        schedule: Option<Vec<DayBlock>>,
    },
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found { .. })
    }

    pub fn student(&self) -> Option<&StudentRecord> {
        match self {
            LookupResult::Found { student, .. } => Some(student),
            LookupResult::NotFound => None,
        }
    }
}

/// Finds the first record whose id equals `query` ignoring case and the
/// query's surrounding whitespace, and resolves its schedule.
///
/// Callers skip empty queries; see [`crate::Session::search`].
pub fn search(records: &[StudentRecord], query: &str, table: &ScheduleTable) -> LookupResult {
    let needle = normalize_id(query);
    let Some(student) = records.iter().find(|record| record.id_matches(&needle)) else {
        return LookupResult::NotFound;
    };

    let section_key = normalize_section(Some(&student.section));
    let schedule = section_key
        .as_ref()
        .and_then(|key| table.get(key))
        .map(<[DayBlock]>::to_vec);

    LookupResult::Found {
        student: student.clone(),
        section_key,
        schedule,
    }
}
