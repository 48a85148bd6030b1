use roster_common::StudentRecord;

mod parser;
pub use parser::Parser;

pub mod parsers;

mod line_parser;


/// Parses roster text into records in file order. Never fails: empty text
/// gives no records and unmapped fields are empty strings.
pub fn parse(text: &str) -> Vec<StudentRecord> {
    let mut parser = Parser::new();
    parser.parse(text)
}
