use std::fmt::Write;

use roster_runtime::{DayBlock, LookupResult, ScheduleTable};

const PLACEHOLDER: &str = "—";

pub const NOT_FOUND: &str = "Student not found";
pub const NO_SCHEDULE: &str = "No schedule found for this section.";

/// Renders a search result the way the lookup screen shows it.
pub fn render_result(result: &LookupResult) -> String {
    let mut out = String::new();

    match result {
        LookupResult::NotFound => {
            writeln!(out, "{}", NOT_FOUND).ok();
        }
        LookupResult::Found {
            student,
            section_key,
            schedule,
        } => {
            let name = if student.name.is_empty() {
                PLACEHOLDER
            } else {
                student.name.as_str()
            };
            let section = section_key
                .as_ref()
                .map(|key| key.as_str())
                .unwrap_or(PLACEHOLDER);

            writeln!(out, "{}", name).ok();
            writeln!(out, "EELU ID: {} • Section: {}", student.id, section).ok();
            match schedule {
                Some(days) => render_days(&mut out, days, ""),
                None => {
                    writeln!(out, "{}", NO_SCHEDULE).ok();
                }
            }
        }
    }

    out
}

/// Renders every section of the table, one indented block per section.
pub fn render_schedules(table: &ScheduleTable) -> String {
    let mut out = String::new();
    for (key, days) in table.iter() {
        writeln!(out, "{}", key).ok();
        render_days(&mut out, days, "  ");
    }
    out
}

fn render_days(out: &mut String, days: &[DayBlock], indent: &str) {
    for day in days {
        writeln!(out, "{}{}", indent, day.day).ok();
        for slot in &day.items {
            writeln!(out, "{}  {}: {}", indent, slot.name, slot.time).ok();
        }
    }
}
