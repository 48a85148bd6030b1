use crate::line_parser;
use crate::parsers::{
    header_parser::HeaderParser, record_parser::RecordParser, FeatureParser, ParserContext,
};
use roster_common::StudentRecord;

/// Turns roster text into student records, one per non-blank data line.
#[derive(Debug, Default)]
pub struct Parser {
    context: ParserContext,
    header_parser: HeaderParser,
    record_parser: RecordParser,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text`. The first non-blank line is the header; text with no
    /// non-blank lines yields no records.
    pub fn parse<A>(&mut self, text: A) -> Vec<StudentRecord>
    where
        A: AsRef<str>,
    {
        self.context = ParserContext::new();
        let mut records = Vec::new();

        for line in line_parser::lines(text.as_ref()) {
            self.context.current_line = line.line_number;

            if !self.context.has_header() {
                self.header_parser.parse(line.raw_text, &mut self.context);
                continue;
            }

            let record = self.record_parser.parse(line.raw_text, &mut self.context);
            records.push(record);
        }

        tracing::debug!(rows = records.len(), "parsed roster");
        records
    }
}
