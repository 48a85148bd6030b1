/// A non-blank physical line of roster text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub raw_text: &'a str,
    pub line_number: usize,
}

/// Splits `text` on `\n` or `\r\n` and drops lines that are blank after
/// trimming. Line numbers are 1-based and count the dropped lines too.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(index, raw)| Line {
            raw_text: raw.strip_suffix('\r').unwrap_or(raw),
            line_number: index + 1,
        })
        .filter(|line| !line.raw_text.trim().is_empty())
}
