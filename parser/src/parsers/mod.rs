pub mod header_parser;
pub mod record_parser;
pub mod row_parser;

/// Represents the shared context between different parsers
#[derive(Debug, Default)]
pub struct ParserContext {
    /// The physical line currently being processed
    pub current_line: usize,
    /// Lower-cased header cells, in file order. Empty until the header line
    /// has been parsed.
    pub header: Vec<String>,
}

impl ParserContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }
}

/// The core trait that all roster parsers implement.
///
/// None of them can fail: malformed input degrades to empty or partial
/// values instead.
pub trait FeatureParser {
    /// The type of output this parser produces
    type Output;

    /// Parse one line of input using the given context
    fn parse(&self, input: &str, context: &mut ParserContext) -> Self::Output;
}
