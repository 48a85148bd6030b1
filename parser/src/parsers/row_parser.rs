use super::{FeatureParser, ParserContext};

/// Quote-aware splitter for one CSV line.
///
/// A `"` toggles quoted mode and is dropped from the output. Commas inside
/// quotes are kept as text. There are no escape sequences: `""` inside a
/// quoted cell simply closes and reopens the quotes. The last cell is always
/// emitted, so a line never yields zero cells.
#[derive(Debug, Default)]
pub struct RowParser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRow {
    /// Untrimmed cell text with quotes removed
    pub cells: Vec<String>,
    /// True when the line ended while still inside quotes
    pub unterminated_quote: bool,
}

impl RowParser {
    pub fn new() -> Self {
        Self
    }

    pub fn split(&self, input: &str) -> SplitRow {
        let mut cells = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for c in input.chars() {
            match c {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        cells.push(current);

        SplitRow {
            cells,
            unterminated_quote: in_quotes,
        }
    }
}

impl FeatureParser for RowParser {
    type Output = SplitRow;

    fn parse(&self, input: &str, context: &mut ParserContext) -> Self::Output {
        let row = self.split(input);
        if row.unterminated_quote {
            tracing::debug!(
                line = context.current_line,
                "unbalanced quote, cell runs to end of line"
            );
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(input: &str) -> Vec<String> {
        RowParser::new().split(input).cells
    }

    #[test]
    fn test_plain_cells() {
        assert_eq!(cells("Ali,1001,S1"), vec!["Ali", "1001", "S1"]);
    }

    #[test]
    fn test_cells_are_not_trimmed() {
        assert_eq!(cells(" Ali , 1001"), vec![" Ali ", " 1001"]);
    }

    #[test]
    fn test_quotes_protect_commas_and_are_stripped() {
        assert_eq!(
            cells("\"Khaled, Jr.\",2002,\"S2\""),
            vec!["Khaled, Jr.", "2002", "S2"]
        );
    }

    #[test]
    fn test_quotes_mid_cell_toggle_mode() {
        assert_eq!(cells("a\"b,c\"d,e"), vec!["ab,cd", "e"]);
    }

    #[test]
    fn test_doubled_quotes_are_not_escapes() {
        assert_eq!(cells("\"say \"\"hi\"\"\",x"), vec!["say hi", "x"]);
    }

    #[test]
    fn test_trailing_separator_emits_empty_cell() {
        assert_eq!(cells("a,b,"), vec!["a", "b", ""]);
        assert_eq!(cells(","), vec!["", ""]);
    }

    #[test]
    fn test_empty_line_is_one_empty_cell() {
        assert_eq!(cells(""), vec![""]);
    }

    #[test]
    fn test_unbalanced_quote_runs_to_end_of_line() {
        let row = RowParser::new().split("a,\"b,c,d");
        assert_eq!(row.cells, vec!["a", "b,c,d"]);
        assert!(row.unterminated_quote);
    }

    #[test]
    fn test_parse_through_trait() {
        let mut context = ParserContext::new();
        let row = RowParser::new().parse("x,\"y\"", &mut context);
        assert_eq!(row.cells, vec!["x", "y"]);
        assert!(!row.unterminated_quote);
    }
}
