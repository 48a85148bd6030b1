use super::{row_parser::RowParser, FeatureParser, ParserContext};

/// Parser for the first non-blank line of a roster.
///
/// Cells are trimmed and lower-cased and stored in the context. Duplicates
/// are kept as-is.
#[derive(Debug, Default)]
pub struct HeaderParser {
    rows: RowParser,
}

impl HeaderParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeatureParser for HeaderParser {
    type Output = usize;

    /// Returns the number of header columns.
    fn parse(&self, input: &str, context: &mut ParserContext) -> Self::Output {
        let row = self.rows.parse(input, context);
        context.header = row
            .cells
            .iter()
            .map(|cell| cell.trim().to_lowercase())
            .collect();
        tracing::debug!(columns = ?context.header, "parsed roster header");
        context.header.len()
    }
}
