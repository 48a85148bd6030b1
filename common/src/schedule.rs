use crate::SectionKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single class occurrence. `time` is a display string and is never parsed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ClassSlot {
    pub name: String,
    pub time: String,
}

/// One day of a section's week.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct DayBlock {
    pub day: String,
    #[serde(default)]
    pub items: Vec<ClassSlot>,
}

/// Weekly schedules keyed by canonical section.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ScheduleTable {
    sections: BTreeMap<SectionKey, Vec<DayBlock>>,
}

impl ScheduleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the schedule for `key`, returning the replaced one.
    pub fn insert(&mut self, key: SectionKey, days: Vec<DayBlock>) -> Option<Vec<DayBlock>> {
        self.sections.insert(key, days)
    }

    pub fn get(&self, key: &SectionKey) -> Option<&[DayBlock]> {
        self.sections.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SectionKey, &[DayBlock])> {
        self.sections.iter().map(|(key, days)| (key, days.as_slice()))
    }
}
