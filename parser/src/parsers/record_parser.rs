use super::{row_parser::RowParser, FeatureParser, ParserContext};
use roster_common::StudentRecord;

/// One data line keyed by header name.
///
/// Keys keep the order in which they first appear in the header. A repeated
/// header name overwrites the earlier value but keeps the earlier position,
/// so positional lookups address distinct header names, not raw columns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawRow {
    entries: Vec<(String, String)>,
}

impl RawRow {
    /// Zips `cells` with `header`. Missing trailing cells become empty strings
    /// and cells past the end of the header are ignored.
    pub fn from_cells(header: &[String], cells: &[String]) -> Self {
        let mut row = RawRow::default();
        for (index, name) in header.iter().enumerate() {
            let value = cells.get(index).map(|cell| cell.trim()).unwrap_or_default();
            row.insert(name, value);
        }
        row
    }

    fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value under the `index`-th distinct header name.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where a canonical record field is read from: each header name in order,
/// then a positional column as last resort. The first non-empty value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub names: &'static [&'static str],
    pub position: usize,
}

pub const NAME_RULE: FieldRule = FieldRule {
    names: &["name"],
    position: 0,
};

pub const ID_RULE: FieldRule = FieldRule {
    names: &["studentid", "id", "eelu id"],
    position: 1,
};

pub const SECTION_RULE: FieldRule = FieldRule {
    names: &["section", "s"],
    position: 2,
};

impl FieldRule {
    pub fn resolve<'a>(&self, row: &'a RawRow) -> &'a str {
        self.names
            .iter()
            .filter_map(|name| row.get(name))
            .chain(row.value_at(self.position))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }
}

/// Parser for data lines. Needs the header to have been parsed into the
/// context first.
#[derive(Debug, Default)]
pub struct RecordParser {
    rows: RowParser,
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map_row(row: &RawRow) -> StudentRecord {
        StudentRecord {
            name: NAME_RULE.resolve(row).to_string(),
            id: ID_RULE.resolve(row).trim().to_string(),
            section: SECTION_RULE.resolve(row).trim().to_string(),
        }
    }
}

impl FeatureParser for RecordParser {
    type Output = StudentRecord;

    fn parse(&self, input: &str, context: &mut ParserContext) -> Self::Output {
        let split = self.rows.parse(input, context);
        if split.cells.len() > context.header.len() {
            tracing::debug!(
                line = context.current_line,
                dropped = split.cells.len() - context.header.len(),
                "ignoring cells past the last header column"
            );
        }
        let row = RawRow::from_cells(&context.header, &split.cells);
        Self::map_row(&row)
    }
}
